//! Header numbering pass.

mod counters;
mod headers;

pub use counters::SectionCounters;
pub use headers::{renumber_headers, HeaderRenumberer};
