//! Error type for the record stream executor.

use std::io;

use thiserror::Error;

/// Errors surfaced by the filter.
///
/// Stream exhaustion and malformed numeric input are not errors; both end
/// the run cleanly. Non-positive flux is handled by the magnitude fallback
/// and never reaches this type.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The process was invoked with command-line arguments; the filter
    /// takes none.
    #[error("unexpected command-line arguments: this filter takes none")]
    UnexpectedArguments,

    /// Reading or writing the record stream failed.
    #[error("record stream i/o: {0}")]
    Io(#[from] io::Error),
}
