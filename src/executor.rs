//! Record-at-a-time run loop.
//!
//! Drives the whole filter: an optional header-skip phase, then a single
//! forward pass that scans one detection at a time, derives its magnitude,
//! and writes the fixed-width line before scanning the next. No record is
//! retained across iterations and the input is never re-read.

use std::io::{BufRead, Write};

use crate::error::StreamError;
use crate::scanner::ValueScanner;

/// Number of leading input lines discarded before scanning begins.
///
/// A build-time constant, not a runtime flag; this build skips nothing.
/// Adjust via [`RunConfig`] when a stream carries a header.
pub const SKIP_LINES: usize = 0;

/// Build-time configuration for a run.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Leading lines to discard before the record scan starts.
    pub skip_lines: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            skip_lines: SKIP_LINES,
        }
    }
}

/// Reject any command-line arguments.
///
/// `arg_count` is the full `env::args` count including the program name.
pub fn check_invocation(arg_count: usize) -> Result<(), StreamError> {
    if arg_count != 1 {
        return Err(StreamError::UnexpectedArguments);
    }
    Ok(())
}

/// Run the filter with the default configuration.
///
/// Returns the number of records written.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<usize, StreamError> {
    run_with(RunConfig::default(), input, output)
}

/// Run the filter: skip the configured header lines, then transform
/// records until the stream ends.
///
/// If the input ends while a header line is being discarded, the run is a
/// clean empty one: zero records, no error. A trailing partial record is
/// dropped silently, also without error.
pub fn run_with<R: BufRead, W: Write>(
    config: RunConfig,
    mut input: R,
    mut output: W,
) -> Result<usize, StreamError> {
    // The header skip is line-oriented (and byte-safe); the record scan
    // below is token-oriented and ignores line boundaries.
    let mut line = Vec::new();
    for _ in 0..config.skip_lines {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Ok(0);
        }
    }

    let mut scanner = ValueScanner::new(input);
    let mut written = 0;
    while let Some(detection) = scanner.next_record()? {
        output.write_all(detection.to_fixed_line().as_bytes())?;
        written += 1;
    }
    output.flush()?;
    Ok(written)
}
