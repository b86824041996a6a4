//! Free-form numeric scanning over a buffered input stream.
//!
//! Detection streams are not line-oriented: the six fields of a record may
//! be separated by any mix of spaces, tabs, and newlines, and a record may
//! span lines. `ValueScanner` pulls one whitespace-delimited token at a
//! time and parses it as `f64`; a token that does not parse is treated the
//! same as end-of-input, so the caller sees a single unified termination
//! condition.

use std::io::{self, BufRead};

use crate::record::Detection;

/// Whitespace-delimited `f64` scanner over any [`BufRead`].
pub struct ValueScanner<R> {
    input: R,
}

impl<R: BufRead> ValueScanner<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Scan the next token and parse it as `f64`.
    ///
    /// Returns `Ok(None)` at end of input, and also when the token does
    /// not parse as a float. Only transport-level read failures surface
    /// as errors.
    pub fn next_value(&mut self) -> io::Result<Option<f64>> {
        let mut token = String::new();
        loop {
            let buf = self.input.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut consumed = 0;
            let mut token_done = false;
            for &byte in buf {
                consumed += 1;
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        token_done = true;
                        break;
                    }
                } else {
                    token.push(byte as char);
                }
            }
            self.input.consume(consumed);
            if token_done {
                break;
            }
        }
        if token.is_empty() {
            return Ok(None);
        }
        Ok(token.parse::<f64>().ok())
    }

    /// Scan one whole detection record, six values in fixed order.
    ///
    /// Returns `Ok(None)` if fewer than six values remain; a partial
    /// record is never surfaced.
    pub fn next_record(&mut self) -> io::Result<Option<Detection>> {
        let mut fields = [0.0f64; 6];
        for field in &mut fields {
            match self.next_value()? {
                Some(value) => *field = value,
                None => return Ok(None),
            }
        }
        let [x, y, flux, area, flux_max, elongation] = fields;
        Ok(Some(Detection::new(x, y, flux, area, flux_max, elongation)))
    }
}
