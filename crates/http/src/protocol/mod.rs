//! Data model of a parsed request head.
//!
//! - [`RequestLine`]: method, target and version, validated on construction
//! - [`HeaderMap`]: lower-cased field names mapped to folded values
//! - [`Request`]: the completed head handed back to callers
//! - [`State`]: where a parse currently stands
//! - [`ParseError`]: every fatal outcome of a parse
//!
//! The types here hold no parsing state of their own; the [`codec`](crate::codec)
//! module drives them from raw bytes.

mod request_line;
pub use request_line::RequestLine;

mod header;
pub use header::HeaderIter;
pub use header::HeaderMap;
pub use header::is_token;

mod request;
pub use request::Request;
pub use request::State;

mod error;
pub use error::ParseError;
