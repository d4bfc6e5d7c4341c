//! Incremental parsing of HTTP/1.1 request heads
//!
//! Every parser here works on a borrowed byte span and reports how many bytes it
//! consumed; none of them performs I/O or keeps bytes across calls.
//!
//! # Components
//!
//! - [`parse_request_line`]: recognizes and validates the request line
//! - [`header`]: parses header lines up to the empty line ending the section
//! - [`RequestParser`]: state machine running the two in sequence
//! - [`RequestDecoder`]: `tokio_util` [`Decoder`](tokio_util::codec::Decoder) on top of the state machine
//!
//! # Example
//!
//! ```
//! use httpfromtcp::codec::RequestParser;
//!
//! let mut parser = RequestParser::new();
//! let consumed = parser.parse(b"GET /path HTTP/1.1\r\nHost: local").unwrap();
//! // only the request line was complete
//! assert_eq!(consumed, 20);
//!
//! let consumed = parser.parse(b"Host: localhost\r\n\r\n").unwrap();
//! assert_eq!(consumed, 19);
//!
//! let request = parser.into_request().unwrap();
//! assert_eq!(request.headers().get("host"), Some("localhost"));
//! ```

pub mod header;
mod request_decoder;
mod request_line_decoder;
mod request_parser;

pub use request_decoder::RequestDecoder;
pub use request_line_decoder::parse_request_line;
pub use request_parser::RequestParser;
