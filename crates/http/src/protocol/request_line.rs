//! The HTTP/1.1 request line.
//!
//! A request line is `<METHOD> <TARGET> HTTP/1.1`, split on single spaces. Only the
//! `HTTP/1.1` version literal is accepted, and the version is stored without its
//! `HTTP/` prefix.

use std::fmt;

use crate::ensure;
use crate::protocol::ParseError;

const HTTP_NAME: &str = "HTTP";
const HTTP_VERSION: &str = "1.1";

/// A validated request line: method, target and version.
///
/// Values of this type only come out of [`RequestLine::parse`], so every field is
/// non-empty and satisfies the request-line grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestLine {
    method: String,
    target: String,
    version: String,
}

impl RequestLine {
    /// Parses the text of a request line, without its trailing CRLF.
    ///
    /// # Errors
    ///
    /// - [`ParseError::MalformedRequestLine`] if the line does not hold exactly three space separated tokens
    /// - [`ParseError::InvalidMethod`] if the method is not made of uppercase ASCII letters
    /// - [`ParseError::InvalidTarget`] if the target does not start with `/`
    /// - [`ParseError::InvalidVersion`] if the version is anything but `HTTP/1.1`
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = line.split(' ').collect();
        let [method, target, version] = parts[..] else {
            return Err(ParseError::malformed_request_line(line));
        };

        check_method(method)?;
        check_target(target)?;

        let mut version_parts = version.split('/');
        let (Some(name), Some(number), None) = (version_parts.next(), version_parts.next(), version_parts.next()) else {
            return Err(ParseError::invalid_version(version));
        };
        ensure!(name == HTTP_NAME && number == HTTP_VERSION, ParseError::invalid_version(version));

        Ok(Self { method: method.to_string(), target: target.to_string(), version: number.to_string() })
    }

    /// Checks this value against the request-line grammar again.
    ///
    /// A value produced by [`RequestLine::parse`] always passes.
    ///
    /// # Errors
    ///
    /// Returns the same error [`RequestLine::parse`] would report for the offending field.
    pub fn validate(&self) -> Result<(), ParseError> {
        check_method(&self.method)?;
        check_target(&self.target)?;
        ensure!(self.version == HTTP_VERSION, ParseError::invalid_version(format!("{HTTP_NAME}/{}", self.version)));
        Ok(())
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// The protocol version without the `HTTP/` prefix, always `1.1`.
    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Renders the wire form, without the line terminator.
impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {HTTP_NAME}/{}", self.method, self.target, self.version)
    }
}

fn check_method(method: &str) -> Result<(), ParseError> {
    ensure!(!method.is_empty() && method.bytes().all(|b| b.is_ascii_uppercase()), ParseError::invalid_method(method));
    Ok(())
}

fn check_target(target: &str) -> Result<(), ParseError> {
    ensure!(target.starts_with('/'), ParseError::invalid_target(target));
    Ok(())
}
