//! HTTP request head decoder for framed streams
//!
//! [`RequestDecoder`] adapts [`RequestParser`] to `tokio_util`'s [`Decoder`] trait so a
//! request head can be read through a `FramedRead`. The framed buffer plays the role of
//! the read buffer: consumed bytes are split off the front and the rest waits for the
//! next read.
//!
//! # Example
//!
//! ```no_run
//! use futures::StreamExt;
//! use httpfromtcp::codec::RequestDecoder;
//! use tokio::net::TcpStream;
//! use tokio_util::codec::FramedRead;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let stream = TcpStream::connect("127.0.0.1:42069").await?;
//! let mut framed = FramedRead::new(stream, RequestDecoder::new());
//! if let Some(request) = framed.next().await {
//!     println!("{}", request?.request_line());
//! }
//! # Ok(())
//! # }
//! ```

use std::mem;

use bytes::{Buf, BytesMut};
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::codec::RequestParser;
use crate::config::ReaderConfig;
use crate::ensure;
use crate::protocol::{ParseError, Request, State};

/// A decoder producing one [`Request`] per request head found in the stream.
///
/// Once a head is complete the decoder starts over with a fresh parser, so bytes that
/// follow it are treated as the start of the next request.
#[derive(Debug)]
pub struct RequestDecoder {
    parser: RequestParser,
    max_pending: usize,
}

impl RequestDecoder {
    /// Creates a new `RequestDecoder` instance
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a decoder that fails once more than `config.max_buffer_size()` unparsed bytes are pending.
    pub fn with_config(config: &ReaderConfig) -> Self {
        Self { parser: RequestParser::new(), max_pending: config.max_buffer_size() }
    }

    pub fn state(&self) -> State {
        self.parser.state()
    }
}

impl Default for RequestDecoder {
    fn default() -> Self {
        Self::with_config(&ReaderConfig::default())
    }
}

impl Decoder for RequestDecoder {
    type Item = Request;
    type Error = ParseError;

    /// Attempts to decode a request head from the provided buffer
    ///
    /// # Returns
    ///
    /// - `Ok(Some(request))`: the empty line ending the header section was reached
    /// - `Ok(None)`: need more data to proceed
    /// - `Err(_)`: encountered a parsing error
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let consumed = self.parser.parse(src)?;
        src.advance(consumed);

        if self.parser.is_done() {
            trace!(remaining = src.len(), "decoded request head");
            return Ok(mem::take(&mut self.parser).into_request());
        }

        ensure!(src.len() <= self.max_pending, ParseError::too_large_head(src.len(), self.max_pending));
        Ok(None)
    }

    /// Like [`decode`](Self::decode), but the stream has ended.
    ///
    /// A clean end between requests yields `Ok(None)`; ending inside a request head is
    /// a [`ParseError::IncompleteRequest`].
    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(request) = self.decode(buf)? {
            return Ok(Some(request));
        }

        let state = self.parser.state();
        if buf.is_empty() && state == State::Initialized {
            return Ok(None);
        }

        Err(ParseError::incomplete_request(state, buf.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use indoc::indoc;
    use tokio_util::codec::FramedRead;

    fn crlf(text: &str) -> String {
        text.replace('\n', "\r\n")
    }

    #[test]
    fn test_bytes_mut_lens() {
        let str = crlf(indoc! {r##"
        GET /index.html HTTP/1.1
        Host: 127.0.0.1:8080
        User-Agent: curl/7.79.1
        Accept: */*

        123"##});

        let mut bytes = BytesMut::from(str.as_str());
        let mut decoder = RequestDecoder::new();

        let request = decoder.decode(&mut bytes).unwrap().unwrap();

        assert_eq!(request.target(), "/index.html");
        assert_eq!(request.headers().len(), 3);
        assert_eq!(&bytes[..], &b"123"[..]);
        assert_eq!(decoder.state(), State::Initialized);
    }

    #[test]
    fn need_more_data() {
        let mut bytes = BytesMut::from(&b"GET /index.html HTTP/1.1\r\nHost: 127"[..]);
        let mut decoder = RequestDecoder::new();

        assert!(decoder.decode(&mut bytes).unwrap().is_none());
        assert_eq!(&bytes[..], &b"Host: 127"[..]);
        assert_eq!(decoder.state(), State::ParsingHeaders);

        bytes.extend_from_slice(b".0.0.1\r\n\r\n");
        let request = decoder.decode(&mut bytes).unwrap().unwrap();
        assert_eq!(request.headers().get("host"), Some("127.0.0.1"));
        assert!(bytes.is_empty());
    }

    #[test]
    fn too_large_head() {
        let config = ReaderConfig::new().with_max_buffer_size(16);
        let mut decoder = RequestDecoder::with_config(&config);
        let mut bytes = BytesMut::from(&b"GET /a/very/long/target/without/end"[..]);

        assert!(matches!(decoder.decode(&mut bytes), Err(ParseError::TooLargeHead { max_size: 16, .. })));
    }

    #[test]
    fn eof_inside_head() {
        let mut bytes = BytesMut::from(&b"GET / HTTP/1.1\r\nHost: x\r\n"[..]);
        let mut decoder = RequestDecoder::new();

        let result = decoder.decode_eof(&mut bytes);
        assert!(matches!(result, Err(ParseError::IncompleteRequest { state: State::ParsingHeaders, pending: 0 })));
    }

    #[test]
    fn eof_between_requests() {
        let mut bytes = BytesMut::new();
        let mut decoder = RequestDecoder::new();

        assert!(decoder.decode_eof(&mut bytes).unwrap().is_none());
    }

    #[tokio::test]
    async fn framed_read_yields_each_head() {
        let data = crlf(indoc! {r##"
        GET /first HTTP/1.1
        Host: localhost

        DELETE /second HTTP/1.1
        X-Trace: a
        x-trace: b

        "##});

        let mut framed = FramedRead::new(data.as_bytes(), RequestDecoder::new());

        let first = framed.next().await.unwrap().unwrap();
        assert_eq!(first.method(), "GET");
        assert_eq!(first.target(), "/first");

        let second = framed.next().await.unwrap().unwrap();
        assert_eq!(second.method(), "DELETE");
        assert_eq!(second.headers().get("x-trace"), Some("a, b"));

        assert!(framed.next().await.is_none());
    }
}
