//! # add-mag
//!
//! A stream filter that appends an instrumental magnitude column to
//! photometry detection records.
//!
//! Source extraction emits one six-field record per detection: position
//! (`x`, `y`), integrated `flux`, pixel `area`, peak `flux_max`, and
//! `elongation`. Downstream pipeline steps want the same record with the
//! instrumental magnitude `-2.5 * log10(flux)` appended. This crate is
//! that step: a single forward pass over standard input, one fixed-width
//! line per record on standard output.
//!
//! Fields are separated by arbitrary whitespace, so records may span or
//! share lines. The stream ends at the first point where six values can
//! no longer be scanned; a trailing partial record is dropped silently.
//! A non-positive flux has no logarithm and takes a fixed fallback
//! magnitude instead (see [`record::FLUX_MIN`]).
//!
//! ## Example
//!
//! ```
//! let input = b"1.0 2.0 100.0 5.0 50.0 1.5\n";
//! let mut output = Vec::new();
//!
//! let count = add_mag::run(&input[..], &mut output).unwrap();
//!
//! assert_eq!(count, 1);
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "    1.00    2.00       100.00      5.0     50.00  1.50     -5.00\n"
//! );
//! ```

pub mod error;
pub mod executor;
pub mod record;
pub mod scanner;

pub use error::StreamError;
pub use executor::{RunConfig, SKIP_LINES, check_invocation, run, run_with};
pub use record::{Detection, FLUX_MIN};
pub use scanner::ValueScanner;
