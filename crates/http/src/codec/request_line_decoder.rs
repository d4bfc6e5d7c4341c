//! Recognizes the request line at the start of a byte span.

use tracing::trace;

use crate::protocol::{ParseError, RequestLine};
use crate::utils::{CRLF, find_crlf};

/// Parses the request line at the start of `data`.
///
/// # Returns
///
/// - `Ok(Some((line, consumed)))` once a full line is present; `consumed` includes the CRLF
/// - `Ok(None)` if no CRLF has arrived yet, nothing is consumed
///
/// # Errors
///
/// Any grammar violation reported by [`RequestLine::parse`]. Bytes that are not
/// UTF-8 are decoded as `U+FFFD` first, so they only fail the token they land in.
pub fn parse_request_line(data: &[u8]) -> Result<Option<(RequestLine, usize)>, ParseError> {
    let Some(end) = find_crlf(data) else {
        return Ok(None);
    };

    let line = String::from_utf8_lossy(&data[..end]);
    let request_line = RequestLine::parse(&line)?;

    trace!(method = request_line.method(), target = request_line.target(), "parsed request line");
    Ok(Some((request_line, end + CRLF.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn need_more_data() {
        assert!(parse_request_line(b"").unwrap().is_none());
        assert!(parse_request_line(b"GET / HTTP/1.1").unwrap().is_none());
        assert!(parse_request_line(b"GET / HTTP/1.1\r").unwrap().is_none());
        assert!(parse_request_line(b"GET / HTTP/1.1\n").unwrap().is_none());
    }

    #[test]
    fn consumes_line_and_crlf() {
        let (line, consumed) = parse_request_line(b"GET /coffee HTTP/1.1\r\nHost: localhost\r\n").unwrap().unwrap();

        assert_eq!(line.method(), "GET");
        assert_eq!(line.target(), "/coffee");
        assert_eq!(line.version(), "1.1");
        assert_eq!(consumed, 22);
    }

    #[test]
    fn invalid_utf8_target_is_replaced() {
        let (line, consumed) = parse_request_line(b"GET /caf\xe9 HTTP/1.1\r\n").unwrap().unwrap();

        assert_eq!(line.target(), "/caf\u{FFFD}");
        assert_eq!(consumed, 20);
    }

    #[test]
    fn invalid_utf8_method_is_invalid_method() {
        let result = parse_request_line(b"G\xc9T / HTTP/1.1\r\n");
        assert!(matches!(result, Err(ParseError::InvalidMethod { .. })));
    }

    #[test]
    fn grammar_errors() {
        assert!(matches!(parse_request_line(b"GET /path\r\n"), Err(ParseError::MalformedRequestLine { .. })));
        assert!(matches!(parse_request_line(b"Get /path HTTP/1.1\r\n"), Err(ParseError::InvalidMethod { .. })));
        assert!(matches!(parse_request_line(b"GET path HTTP/1.1\r\n"), Err(ParseError::InvalidTarget { .. })));
        assert!(matches!(parse_request_line(b"GET /path HTTP/1.0\r\n"), Err(ParseError::InvalidVersion { .. })));
    }
}
