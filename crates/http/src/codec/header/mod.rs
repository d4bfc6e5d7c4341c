//! Header section parsing.
//!
//! - [`parse_headers`]: consumes complete header lines from a byte span
//! - [`HeaderStatus`]: how far a pass got and whether the section ended
//!
//! Field names are validated against the token grammar and lower-cased; values are
//! trimmed of surrounding whitespace. Obsolete line folding is not supported.

mod header_decoder;

pub use header_decoder::HeaderStatus;
pub use header_decoder::parse_headers;
