//! Hierarchical section counters.

/// Fixed-size hierarchical counters, one slot per nesting depth.
///
/// `enter(depth)` bumps the counter at `depth` and zeroes every deeper
/// slot, so a subsection count restarts whenever a new parent section
/// begins. The slot count is fixed at construction; depths beyond it clamp
/// to the deepest slot.
#[derive(Debug, Clone)]
pub struct SectionCounters {
    slots: Vec<u32>,
}

impl SectionCounters {
    /// Create counters with the given number of depth slots (at least one).
    pub fn new(max_depth: usize) -> Self {
        Self {
            slots: vec![0; max_depth.max(1)],
        }
    }

    /// Advance to a header at `depth`: increment its counter and reset all
    /// deeper counters to zero. Returns the clamped depth actually used.
    pub fn enter(&mut self, depth: usize) -> usize {
        let depth = depth.min(self.slots.len() - 1);
        self.slots[depth] += 1;
        for slot in &mut self.slots[depth + 1..] {
            *slot = 0;
        }
        depth
    }

    /// Dot-joined label over slots `0..=depth`, skipping zero-valued slots.
    ///
    /// Zero ancestors do not occur in a well-formed traversal; when the
    /// input skips levels (a `###` with no enclosing `##`) the empty slots
    /// are simply omitted from the join.
    pub fn label(&self, depth: usize) -> String {
        let depth = depth.min(self.slots.len() - 1);
        self.slots[..=depth]
            .iter()
            .filter(|&&count| count > 0)
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}
