use std::io;
use thiserror::Error;

/// Every way a request parse can fail.
///
/// All variants are fatal to the parse attempt: there is no resynchronization, the
/// caller should drop the connection. "Need more data" is never represented here.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed request line: {line:?}")]
    MalformedRequestLine { line: String },

    #[error("invalid http method: {method:?}")]
    InvalidMethod { method: String },

    #[error("invalid request target: {target:?}")]
    InvalidTarget { target: String },

    #[error("invalid http version: {version:?}")]
    InvalidVersion { version: String },

    #[error("invalid header name: {name:?}")]
    InvalidHeaderName { name: String },

    #[error("invalid header format: {reason}")]
    InvalidHeaderFormat { reason: String },

    #[error("incomplete request, stream closed in state {state:?} with {pending} unparsed bytes")]
    IncompleteRequest { state: super::State, pending: usize },

    #[error("request head too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeHead { current_size: usize, max_size: usize },

    #[error("attempted to parse data after completion")]
    ParseAfterDone,

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn malformed_request_line<S: ToString>(line: S) -> Self {
        Self::MalformedRequestLine { line: line.to_string() }
    }

    pub fn invalid_method<S: ToString>(method: S) -> Self {
        Self::InvalidMethod { method: method.to_string() }
    }

    pub fn invalid_target<S: ToString>(target: S) -> Self {
        Self::InvalidTarget { target: target.to_string() }
    }

    pub fn invalid_version<S: ToString>(version: S) -> Self {
        Self::InvalidVersion { version: version.to_string() }
    }

    pub fn invalid_header_name<S: ToString>(name: S) -> Self {
        Self::InvalidHeaderName { name: name.to_string() }
    }

    pub fn invalid_header_format<S: ToString>(reason: S) -> Self {
        Self::InvalidHeaderFormat { reason: reason.to_string() }
    }

    pub fn incomplete_request(state: super::State, pending: usize) -> Self {
        Self::IncompleteRequest { state, pending }
    }

    pub fn too_large_head(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeHead { current_size, max_size }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }

    /// Returns true if the error came from the byte source rather than from the bytes it delivered.
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns true if the peer closed the stream cleanly before the header section ended.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::IncompleteRequest { .. })
    }
}
