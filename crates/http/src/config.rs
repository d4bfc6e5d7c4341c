//! Buffer sizing for the stream consumption loop and the frame decoder.

/// Initial read buffer size. Deliberately tiny so that reads regularly end in the
/// middle of a line.
pub const DEFAULT_INITIAL_BUFFER_SIZE: usize = 8;

/// Maximum number of unparsed bytes held while waiting for a line terminator.
pub const DEFAULT_MAX_BUFFER_SIZE: usize = 8 * 1024;

/// Sizing of the buffer a request head is read into.
///
/// The buffer starts at `initial_buffer_size` bytes and doubles each time it fills up
/// before a line terminator arrives. Growing past `max_buffer_size` fails the parse
/// with [`ParseError::TooLargeHead`](crate::protocol::ParseError::TooLargeHead).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    initial_buffer_size: usize,
    max_buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { initial_buffer_size: DEFAULT_INITIAL_BUFFER_SIZE, max_buffer_size: DEFAULT_MAX_BUFFER_SIZE }
    }
}

impl ReaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the starting buffer size, clamped to at least one byte.
    #[must_use]
    pub fn with_initial_buffer_size(mut self, size: usize) -> Self {
        self.initial_buffer_size = size.max(1);
        self
    }

    #[must_use]
    pub fn with_max_buffer_size(mut self, size: usize) -> Self {
        self.max_buffer_size = size;
        self
    }

    pub fn initial_buffer_size(&self) -> usize {
        self.initial_buffer_size
    }

    pub fn max_buffer_size(&self) -> usize {
        self.max_buffer_size
    }
}
