//! Header section decoder.
//!
//! Consumes complete `name: value` lines from the front of a byte span and stores
//! them into a [`HeaderMap`], stopping at the first incomplete line. An empty line
//! ends the header section.
//!
//! Partial lines are never buffered here: the caller keeps the unconsumed bytes and
//! hands them back, together with whatever arrived since, on the next call.

use std::str;

use tracing::trace;

use crate::ensure;
use crate::protocol::{HeaderMap, ParseError, is_token};
use crate::utils::{CRLF, find_crlf};

/// Outcome of one pass of [`parse_headers`] over a span.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HeaderStatus {
    /// The section is not finished; holds the bytes consumed by complete lines (may be zero)
    Partial(usize),
    /// The empty line was reached; holds the bytes consumed including that line
    Complete(usize),
}

impl HeaderStatus {
    /// Number of bytes the caller may discard.
    #[inline]
    pub fn consumed(&self) -> usize {
        match *self {
            HeaderStatus::Partial(consumed) | HeaderStatus::Complete(consumed) => consumed,
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self, HeaderStatus::Complete(_))
    }
}

/// Parses as many complete header lines from `data` as possible into `headers`.
///
/// # Errors
///
/// - [`ParseError::InvalidHeaderFormat`] if a line has no colon
/// - [`ParseError::InvalidHeaderName`] if whitespace precedes the colon or the name is not a token
///
/// Values may carry any bytes; sequences that are not UTF-8 are stored as `U+FFFD`.
pub fn parse_headers(headers: &mut HeaderMap, data: &[u8]) -> Result<HeaderStatus, ParseError> {
    let mut consumed = 0;

    loop {
        let remaining = &data[consumed..];
        let Some(end) = find_crlf(remaining) else {
            return Ok(HeaderStatus::Partial(consumed));
        };

        if end == 0 {
            trace!(headers = headers.len(), "reached end of header section");
            return Ok(HeaderStatus::Complete(consumed + CRLF.len()));
        }

        parse_header_line(headers, &remaining[..end])?;
        consumed += end + CRLF.len();
    }
}

fn parse_header_line(headers: &mut HeaderMap, line: &[u8]) -> Result<(), ParseError> {
    let Some(colon) = line.iter().position(|b| *b == b':') else {
        return Err(ParseError::invalid_header_format(format!("missing colon in {:?}", String::from_utf8_lossy(line))));
    };
    let (name, value) = (&line[..colon], &line[colon + 1..]);

    // no whitespace allowed between the field name and the colon
    ensure!(name.trim_ascii_end().len() == name.len(), ParseError::invalid_header_name(String::from_utf8_lossy(name)));

    let name = match str::from_utf8(name.trim_ascii()) {
        Ok(name) if is_token(name) => name,
        _ => return Err(ParseError::invalid_header_name(String::from_utf8_lossy(name))),
    };

    let value = String::from_utf8_lossy(value.trim_ascii());
    trace!(name, value = %value, "parsed header");
    headers.set(name, &value);

    Ok(())
}
