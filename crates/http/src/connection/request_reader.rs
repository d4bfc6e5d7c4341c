//! Stream consumption loop
//!
//! Reads a request head from a byte source that may deliver any number of bytes per
//! read, down to a single byte:
//!
//! 1. make sure the buffer has free space, doubling it if it is full
//! 2. read once into the free tail
//! 3. feed every pending byte to the [`RequestParser`]
//! 4. drop the consumed bytes, keeping the unfinished remainder at the front
//!
//! until the parser reaches [`State::Done`](crate::protocol::State::Done). The blocking
//! ([`std::io::Read`]) and async ([`tokio::io::AsyncRead`]) flavours share the same steps.
//!
//! Bytes that follow the header section are read into the buffer but not returned.

use std::io::{ErrorKind, Read};
use std::mem;

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::trace;

use crate::codec::RequestParser;
use crate::config::ReaderConfig;
use crate::connection::RequestBuffer;
use crate::protocol::{ParseError, Request};

/// Reads one request head from a blocking reader with the default [`ReaderConfig`].
///
/// # Errors
///
/// - any parse error, as soon as the offending line has arrived
/// - [`ParseError::IncompleteRequest`] if the reader hits end-of-stream first
/// - [`ParseError::Io`] if the reader fails
/// - [`ParseError::TooLargeHead`] if a line outgrows the buffer limit
pub fn request_from_reader<R: Read>(reader: R) -> Result<Request, ParseError> {
    request_from_reader_with_config(reader, &ReaderConfig::default())
}

/// Reads one request head from a blocking reader.
///
/// # Errors
///
/// See [`request_from_reader`].
pub fn request_from_reader_with_config<R: Read>(mut reader: R, config: &ReaderConfig) -> Result<Request, ParseError> {
    let mut consumer = StreamConsumer::new(config);

    loop {
        let read = match reader.read(consumer.unfilled_mut()?) {
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ParseError::io(e)),
        };

        if let Some(request) = consumer.on_read(read)? {
            return Ok(request);
        }
    }
}

/// Reads one request head from an async reader with the default [`ReaderConfig`].
///
/// # Errors
///
/// See [`request_from_reader`].
pub async fn request_from_async_reader<R: AsyncRead + Unpin>(reader: R) -> Result<Request, ParseError> {
    request_from_async_reader_with_config(reader, &ReaderConfig::default()).await
}

/// Reads one request head from an async reader.
///
/// # Errors
///
/// See [`request_from_reader`].
pub async fn request_from_async_reader_with_config<R: AsyncRead + Unpin>(
    mut reader: R,
    config: &ReaderConfig,
) -> Result<Request, ParseError> {
    let mut consumer = StreamConsumer::new(config);

    loop {
        let read = match reader.read(consumer.unfilled_mut()?).await {
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ParseError::io(e)),
        };

        if let Some(request) = consumer.on_read(read)? {
            return Ok(request);
        }
    }
}

/// The I/O independent half of the loop: buffer bookkeeping and parser feeding.
#[derive(Debug)]
struct StreamConsumer {
    buffer: RequestBuffer,
    parser: RequestParser,
}

impl StreamConsumer {
    fn new(config: &ReaderConfig) -> Self {
        Self { buffer: RequestBuffer::with_config(config), parser: RequestParser::new() }
    }

    fn unfilled_mut(&mut self) -> Result<&mut [u8], ParseError> {
        self.buffer.unfilled_mut()
    }

    /// Handles the outcome of a read of `read` bytes; zero means end-of-stream.
    fn on_read(&mut self, read: usize) -> Result<Option<Request>, ParseError> {
        if read == 0 {
            return Err(ParseError::incomplete_request(self.parser.state(), self.buffer.len()));
        }

        self.buffer.commit(read);
        let consumed = self.parser.parse(self.buffer.filled())?;
        self.buffer.consume(consumed);
        trace!(read, consumed, pending = self.buffer.len(), state = ?self.parser.state(), "fed read to parser");

        if self.parser.is_done() {
            return Ok(mem::take(&mut self.parser).into_request());
        }
        Ok(None)
    }
}
