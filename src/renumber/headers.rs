//! Line loop over the document: fence tracking, header detection, relabeling.

use crate::model::{Header, NumberMap};
use crate::options::RenumberOptions;
use crate::renumber::counters::SectionCounters;
use crate::result::{RenumberResult, RenumberStats};

/// Renumbers header lines in a document.
///
/// Walks the document line by line, assigns each header a hierarchical
/// number from [`SectionCounters`], strips any stale label, and records
/// every changed label in a [`NumberMap`]. Lines inside fenced code blocks
/// pass through untouched.
pub struct HeaderRenumberer {
    options: RenumberOptions,
}

impl HeaderRenumberer {
    /// Create a renumberer with the given options.
    pub fn new(options: RenumberOptions) -> Self {
        Self { options }
    }

    /// Run the numbering pass over `content`.
    ///
    /// Returns the rewritten document together with the old-to-new label
    /// mapping and pass statistics. Never fails: malformed labels degrade
    /// to plain titles and over-deep headers clamp to the deepest counter.
    pub fn renumber(&self, content: &str) -> RenumberResult {
        let mut counters = SectionCounters::new(self.options.max_depth);
        let mut mapping = NumberMap::new();
        let mut stats = RenumberStats {
            line_count: content.lines().count() as u32,
            ..RenumberStats::default()
        };

        let mut output = String::with_capacity(content.len());
        let mut in_fence = false;

        for (index, line) in content.split('\n').enumerate() {
            if index > 0 {
                output.push('\n');
            }

            if line.trim().starts_with("```") {
                in_fence = !in_fence;
                output.push_str(line);
                continue;
            }
            if in_fence {
                output.push_str(line);
                continue;
            }

            let Some(header) = Header::parse(line) else {
                output.push_str(line);
                continue;
            };

            // Top-level headers stay byte-identical in ignore mode: no
            // stripping, no counter change.
            if self.options.ignore_top_level && header.level == 1 {
                output.push_str(line);
                continue;
            }

            let depth = if self.options.ignore_top_level {
                header.level
            } else {
                header.level - 1
            };
            let depth = counters.enter(depth);
            let number = counters.label(depth);

            stats.header_count += 1;
            if let Some(old) = &header.label {
                if old != &number {
                    log::debug!("Relabeling header '{}' -> '{}'", old, number);
                    mapping.insert(old.clone(), number.clone());
                    stats.relabeled_count += 1;
                }
            }

            output.push_str(&header.to_line(&number));
        }

        log::debug!(
            "Numbered {} headers ({} relabeled) across {} lines",
            stats.header_count,
            stats.relabeled_count,
            stats.line_count
        );

        RenumberResult::new(output, mapping, stats)
    }
}

/// Renumber all headers in `content` with the given options.
pub fn renumber_headers(content: &str, options: &RenumberOptions) -> RenumberResult {
    HeaderRenumberer::new(options.clone()).renumber(content)
}
