//! Error types for the secnum library.

use std::io;
use thiserror::Error;

/// Result type alias for secnum operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading documents or writing reports.
///
/// The renumbering passes themselves never fail: a malformed header label
/// degrades to "no label" and an unknown reference passes through untouched.
/// Only the I/O boundary and report serialization can produce errors.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error serializing the renumbering report.
    #[error("Report serialization error: {0}")]
    Report(String),
}
