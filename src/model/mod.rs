//! Core data types for header renumbering.

mod header;
mod mapping;

pub use header::Header;
pub use mapping::NumberMap;
