//! Request state machine.
//!
//! [`RequestParser`] drives the request-line parser and the header parser in turn,
//! carrying the data each phase has produced so far:
//!
//! - `Initialized`: nothing parsed yet
//! - `ParsingHeaders`: request line known, header fields accumulating
//! - `Done`: header section terminated, the [`Request`] is complete
//!
//! The parser never keeps bytes of its own. Every call reports how many bytes of the
//! span it consumed; the caller drops those and presents the remainder, extended with
//! newly read data, on the next call.

use std::mem;

use tracing::debug;

use crate::codec::header::{HeaderStatus, parse_headers};
use crate::codec::request_line_decoder::parse_request_line;
use crate::ensure;
use crate::protocol::{HeaderMap, ParseError, Request, State};

#[derive(Debug)]
enum ParserState {
    Initialized,
    /// Holds the request line and the headers parsed so far
    ParsingHeaders(Request),
    Done(Request),
}

/// Incremental parser for one request head.
///
/// After a fatal error the parser is left in an unspecified state and should be dropped.
#[derive(Debug)]
pub struct RequestParser {
    state: ParserState,
}

impl Default for RequestParser {
    fn default() -> Self {
        Self { state: ParserState::Initialized }
    }
}

impl RequestParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> State {
        match self.state {
            ParserState::Initialized => State::Initialized,
            ParserState::ParsingHeaders(_) => State::ParsingHeaders,
            ParserState::Done(_) => State::Done,
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self.state, ParserState::Done(_))
    }

    /// Feeds `data` to the parser and returns how many bytes of it were consumed.
    ///
    /// Steps are taken until one of them consumes nothing (more input is needed) or
    /// the header section ends. Bytes after the terminating empty line are left
    /// unconsumed.
    ///
    /// # Errors
    ///
    /// - [`ParseError::ParseAfterDone`] if the parser already reached [`State::Done`]
    /// - any request-line or header error, as soon as it is found
    pub fn parse(&mut self, data: &[u8]) -> Result<usize, ParseError> {
        ensure!(!self.is_done(), ParseError::ParseAfterDone);

        let mut total_consumed = 0;
        while !self.is_done() {
            let consumed = self.parse_single(&data[total_consumed..])?;
            if consumed == 0 {
                break;
            }
            total_consumed += consumed;
        }

        Ok(total_consumed)
    }

    fn parse_single(&mut self, data: &[u8]) -> Result<usize, ParseError> {
        match &mut self.state {
            ParserState::Initialized => {
                let Some((request_line, consumed)) = parse_request_line(data)? else {
                    return Ok(0);
                };

                debug!(%request_line, "request line parsed, parsing headers");
                self.state = ParserState::ParsingHeaders(Request::new(request_line, HeaderMap::new()));
                Ok(consumed)
            }

            ParserState::ParsingHeaders(request) => {
                let status = parse_headers(request.headers_mut(), data)?;
                if let HeaderStatus::Complete(_) = status {
                    self.finish();
                }
                Ok(status.consumed())
            }

            ParserState::Done(_) => Err(ParseError::ParseAfterDone),
        }
    }

    fn finish(&mut self) {
        if let ParserState::ParsingHeaders(request) = mem::replace(&mut self.state, ParserState::Initialized) {
            debug!(headers = request.headers().len(), "request head complete");
            self.state = ParserState::Done(request);
        }
    }

    /// Returns the parsed request once the parser is [`State::Done`].
    pub fn into_request(self) -> Option<Request> {
        match self.state {
            ParserState::Done(request) => Some(request),
            _ => None,
        }
    }

    /// Returns a reference to the parsed request once the parser is [`State::Done`].
    pub fn request(&self) -> Option<&Request> {
        match &self.state {
            ParserState::Done(request) => Some(request),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn crlf(text: &str) -> String {
        text.replace('\n', "\r\n")
    }

    #[test]
    fn request_line_then_empty_line() {
        let mut parser = RequestParser::new();
        let data = b"GET /path HTTP/1.1\r\n\r\n";

        assert_eq!(parser.parse(data).unwrap(), data.len());
        assert_eq!(parser.state(), State::Done);

        let request = parser.into_request().unwrap();
        assert_eq!(request.method(), "GET");
        assert_eq!(request.target(), "/path");
        assert_eq!(request.version(), "1.1");
        assert!(request.headers().is_empty());
    }

    #[test]
    fn from_curl() {
        let data = crlf(indoc! {r##"
        GET /coffee HTTP/1.1
        Host: localhost:42069
        User-Agent: curl/7.81.0
        Accept: */*

        "##});

        let mut parser = RequestParser::new();
        assert_eq!(parser.parse(data.as_bytes()).unwrap(), data.len());

        let request = parser.request().unwrap();
        assert_eq!(request.method(), "GET");
        assert_eq!(request.target(), "/coffee");
        assert_eq!(request.headers().len(), 3);
        assert_eq!(request.headers().get("host"), Some("localhost:42069"));
        assert_eq!(request.headers().get("user-agent"), Some("curl/7.81.0"));
        assert_eq!(request.headers().get("accept"), Some("*/*"));
    }

    #[test]
    fn partial_input_consumes_complete_lines_only() {
        let mut parser = RequestParser::new();

        assert_eq!(parser.parse(b"GET / HT").unwrap(), 0);
        assert_eq!(parser.state(), State::Initialized);

        assert_eq!(parser.parse(b"GET / HTTP/1.1\r\nHost: loc").unwrap(), 16);
        assert_eq!(parser.state(), State::ParsingHeaders);

        assert_eq!(parser.parse(b"Host: localhost\r\nAccept").unwrap(), 17);
        assert_eq!(parser.state(), State::ParsingHeaders);

        assert_eq!(parser.parse(b"Accept: */*\r\n\r").unwrap(), 13);
        assert_eq!(parser.parse(b"\r\n").unwrap(), 2);
        assert!(parser.is_done());

        let request = parser.into_request().unwrap();
        assert_eq!(request.headers().get("host"), Some("localhost"));
        assert_eq!(request.headers().get("accept"), Some("*/*"));
    }

    #[test]
    fn leaves_bytes_after_head() {
        let mut parser = RequestParser::new();
        let data = b"POST /submit HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";

        assert_eq!(parser.parse(data).unwrap(), data.len() - 5);
        assert!(parser.is_done());
    }

    #[test]
    fn parse_after_done() {
        let mut parser = RequestParser::new();
        parser.parse(b"GET / HTTP/1.1\r\n\r\n").unwrap();

        assert!(matches!(parser.parse(b"GET / HTTP/1.1\r\n\r\n"), Err(ParseError::ParseAfterDone)));
        assert!(matches!(parser.parse(b""), Err(ParseError::ParseAfterDone)));
    }

    #[test]
    fn header_errors_propagate() {
        let mut parser = RequestParser::new();
        let result = parser.parse(b"GET / HTTP/1.1\r\nHost : localhost\r\n\r\n");

        assert!(matches!(result, Err(ParseError::InvalidHeaderName { .. })));
    }

    #[test]
    fn header_errors_propagate_on_later_call() {
        let mut parser = RequestParser::new();
        assert_eq!(parser.parse(b"GET / HTTP/1.1\r\n").unwrap(), 16);

        let result = parser.parse(b"no colon here\r\n\r\n");
        assert!(matches!(result, Err(ParseError::InvalidHeaderFormat { .. })));
    }

    #[test]
    fn request_line_errors() {
        let cases: [(&[u8], fn(&ParseError) -> bool); 4] = [
            (b"GET /path\r\n\r\n", |e| matches!(e, ParseError::MalformedRequestLine { .. })),
            (b"Get /path HTTP/1.1\r\n\r\n", |e| matches!(e, ParseError::InvalidMethod { .. })),
            (b"GET path HTTP/1.1\r\n\r\n", |e| matches!(e, ParseError::InvalidTarget { .. })),
            (b"GET /path HTTP/1.0\r\n\r\n", |e| matches!(e, ParseError::InvalidVersion { .. })),
        ];

        for (data, is_expected) in cases {
            let error = RequestParser::new().parse(data).unwrap_err();
            assert!(is_expected(&error), "{error}");
        }
    }

    #[test]
    fn no_request_before_done() {
        let mut parser = RequestParser::new();
        parser.parse(b"GET / HTTP/1.1\r\n").unwrap();

        assert!(parser.request().is_none());
        assert!(parser.into_request().is_none());
    }
}
