//! Renumbering options and configuration.

/// Default number of counter slots (maximum tracked nesting depth).
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Options for renumbering document headers.
#[derive(Debug, Clone)]
pub struct RenumberOptions {
    /// Leave the topmost header depth entirely untouched: no numbering,
    /// no label stripping, no counter change
    pub ignore_top_level: bool,

    /// Number of counter slots; headers nested deeper than this clamp to
    /// the deepest slot
    pub max_depth: usize,
}

impl RenumberOptions {
    /// Create new renumber options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip or number the topmost heading level.
    pub fn with_ignore_top_level(mut self, ignore: bool) -> Self {
        self.ignore_top_level = ignore;
        self
    }

    /// Set the number of counter slots (clamped to at least 1).
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }
}

impl Default for RenumberOptions {
    fn default() -> Self {
        Self {
            ignore_top_level: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renumber_options_builder() {
        let options = RenumberOptions::new()
            .with_ignore_top_level(true)
            .with_max_depth(6);

        assert!(options.ignore_top_level);
        assert_eq!(options.max_depth, 6);
    }

    #[test]
    fn test_renumber_options_defaults() {
        let options = RenumberOptions::default();
        assert!(!options.ignore_top_level);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_max_depth_clamps_to_one() {
        let options = RenumberOptions::new().with_max_depth(0);
        assert_eq!(options.max_depth, 1);
    }
}
