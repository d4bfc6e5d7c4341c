use tracing::debug;

use crate::config::ReaderConfig;
use crate::ensure;
use crate::protocol::ParseError;

/// Growable read buffer with a logical fill length.
///
/// `buf[..filled]` holds bytes read but not yet consumed by the parser, `buf[filled..]`
/// is free space for the next read. Consuming bytes shifts the pending remainder to
/// the front, so the two regions never overlap.
#[derive(Debug)]
pub struct RequestBuffer {
    buf: Vec<u8>,
    filled: usize,
    max_size: usize,
}

impl RequestBuffer {
    pub fn with_config(config: &ReaderConfig) -> Self {
        Self { buf: vec![0; config.initial_buffer_size()], filled: 0, max_size: config.max_buffer_size() }
    }

    /// Returns the free tail of the buffer, doubling the buffer first if it is full.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::TooLargeHead`] if doubling would exceed the configured maximum.
    pub fn unfilled_mut(&mut self) -> Result<&mut [u8], ParseError> {
        if self.filled == self.buf.len() {
            let new_size = (self.buf.len() * 2).max(1);
            ensure!(new_size <= self.max_size, ParseError::too_large_head(self.filled, self.max_size));

            debug!(from = self.buf.len(), to = new_size, "growing read buffer");
            self.buf.resize(new_size, 0);
        }

        Ok(&mut self.buf[self.filled..])
    }

    /// Marks `read` bytes of the free tail as filled.
    pub fn commit(&mut self, read: usize) {
        debug_assert!(self.filled + read <= self.buf.len());
        self.filled += read;
    }

    /// The bytes read but not consumed yet.
    pub fn filled(&self) -> &[u8] {
        &self.buf[..self.filled]
    }

    /// Drops the first `consumed` pending bytes and moves the rest to the front.
    pub fn consume(&mut self, consumed: usize) {
        debug_assert!(consumed <= self.filled);
        self.buf.copy_within(consumed..self.filled, 0);
        self.filled -= consumed;
    }

    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }
}
