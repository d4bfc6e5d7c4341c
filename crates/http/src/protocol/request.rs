//! The parsed request head and the parse state tag.

use crate::protocol::{HeaderMap, RequestLine};

/// Progress of a single request parse.
///
/// A parse starts in `Initialized`, moves to `ParsingHeaders` once the request line
/// is recognized and to `Done` once the empty line closing the header section is
/// consumed. `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Initialized,
    ParsingHeaders,
    Done,
}

/// A fully parsed request head: the request line plus its header fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    request_line: RequestLine,
    headers: HeaderMap,
}

impl Request {
    pub(crate) fn new(request_line: RequestLine, headers: HeaderMap) -> Self {
        Self { request_line, headers }
    }

    pub fn request_line(&self) -> &RequestLine {
        &self.request_line
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn method(&self) -> &str {
        self.request_line.method()
    }

    pub fn target(&self) -> &str {
        self.request_line.target()
    }

    pub fn version(&self) -> &str {
        self.request_line.version()
    }

    pub fn into_parts(self) -> (RequestLine, HeaderMap) {
        (self.request_line, self.headers)
    }
}

/// Converts into an `http::Request<()>` so the head can be handed to `http` based handlers.
///
/// Folded header values are carried over as a single header value.
impl TryFrom<Request> for http::Request<()> {
    type Error = http::Error;

    fn try_from(request: Request) -> Result<Self, Self::Error> {
        let (request_line, headers) = request.into_parts();

        let mut builder = http::Request::builder()
            .method(request_line.method())
            .uri(request_line.target())
            .version(http::Version::HTTP_11);

        for (name, value) in &headers {
            builder = builder.header(name, value);
        }

        builder.body(())
    }
}
