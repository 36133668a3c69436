//! # secnum
//!
//! Hierarchical header numbering for Markdown documents.
//!
//! This library renumbers `#`-style headers with hierarchical labels like
//! `1.`, `1.1.`, `1.2.` and rewrites in-text "Section N" references so they
//! keep pointing at the sections they referenced before renumbering.
//!
//! ## Quick Start
//!
//! ```
//! use secnum::renumber_str;
//!
//! let input = "# Intro\n## Background\n## 3 Motivation\n# Methods\n";
//! let result = renumber_str(input);
//!
//! assert_eq!(
//!     result.content,
//!     "# 1. Intro\n## 1.1. Background\n## 1.2. Motivation\n# 2. Methods\n"
//! );
//! assert_eq!(result.mapping.get("3"), Some("1.2"));
//! ```
//!
//! ## Features
//!
//! - **Hierarchical numbering**: labels derived from header nesting depth,
//!   with subsection counters restarting under each new parent
//! - **Stale label cleanup**: pre-existing numbers are stripped and replaced
//! - **Reference rewriting**: "Section N" mentions follow their renumbered
//!   headers, preserving case and emphasis punctuation
//! - **Fence awareness**: lines inside fenced code blocks are never treated
//!   as headers
//! - **JSON reports**: the old-to-new mapping and run statistics serialize
//!   via serde

pub mod error;
pub mod model;
pub mod options;
pub mod refs;
pub mod renumber;
pub mod result;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Header, NumberMap};
pub use options::{RenumberOptions, DEFAULT_MAX_DEPTH};
pub use refs::rewrite_references;
pub use renumber::{renumber_headers, HeaderRenumberer, SectionCounters};
pub use result::{RenumberResult, RenumberStats, ReportFormat};

use std::fs;
use std::path::Path;

/// Renumber headers in a string and rewrite its section references.
///
/// # Arguments
///
/// * `content` - The document text
///
/// # Returns
///
/// A `RenumberResult` with the rewritten text, the old-to-new label
/// mapping, and statistics. This never fails.
///
/// # Example
///
/// ```
/// use secnum::renumber_str;
///
/// let result = renumber_str("# One\nSee Section 2.\n# 2 Two\n");
/// assert_eq!(result.content, "# 1. One\nSee Section 2.\n# 2. Two\n");
/// ```
pub fn renumber_str(content: &str) -> RenumberResult {
    renumber_str_with_options(content, &RenumberOptions::default())
}

/// Renumber headers in a string with custom options.
///
/// Runs the header pass first, then rewrites references using the mapping
/// it produced.
///
/// # Example
///
/// ```
/// use secnum::{renumber_str_with_options, RenumberOptions};
///
/// let options = RenumberOptions::new().with_ignore_top_level(true);
/// let result = renumber_str_with_options("# Title\n## Part\n", &options);
/// assert_eq!(result.content, "# Title\n## 1. Part\n");
/// ```
pub fn renumber_str_with_options(content: &str, options: &RenumberOptions) -> RenumberResult {
    let mut result = renumber::renumber_headers(content, options);
    let (content, reference_count) = refs::rewrite_references(&result.content, &result.mapping);
    result.content = content;
    result.stats.reference_count = reference_count;
    result
}

/// Renumber headers in a UTF-8 text file.
///
/// # Arguments
///
/// * `path` - Path to the file
///
/// # Example
///
/// ```no_run
/// use secnum::renumber_file;
///
/// let result = renumber_file("notes.md").unwrap();
/// println!("{}", result.content);
/// ```
pub fn renumber_file<P: AsRef<Path>>(path: P) -> Result<RenumberResult> {
    renumber_file_with_options(path, &RenumberOptions::default())
}

/// Renumber headers in a UTF-8 text file with custom options.
pub fn renumber_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenumberOptions,
) -> Result<RenumberResult> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes)
        .map_err(|e| Error::Encoding(format!("{}: {}", path.display(), e)))?;
    Ok(renumber_str_with_options(&content, options))
}
