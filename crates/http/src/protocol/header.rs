//! Header field storage.
//!
//! Field names are normalized to lower case on insertion, so lookups are
//! case-insensitive and each name maps to exactly one value. Repeated fields are
//! folded into that value in arrival order, separated by `", "`.

use std::collections::HashMap;
use std::collections::hash_map;

use crate::ensure;
use crate::protocol::ParseError;

/// Symbol characters allowed in a field name besides ASCII letters and digits.
const TOKEN_SYMBOLS: &[u8] = b"!#$%&'*+-.^_`|~";

/// Map from lower-cased field name to its (possibly folded) value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    inner: HashMap<String, String>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored for `name`, whatever its case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.inner.contains_key(&name.to_ascii_lowercase())
    }

    /// Stores `value` under the lower-cased `name`.
    ///
    /// If the name is already present the new value is appended to the old one,
    /// joined by `", "`.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.inner.entry(name.to_ascii_lowercase()) {
            hash_map::Entry::Occupied(mut entry) => {
                let folded = entry.get_mut();
                folded.push_str(", ");
                folded.push_str(value);
            }
            hash_map::Entry::Vacant(entry) => {
                entry.insert(value.to_string());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over `(name, value)` pairs in no particular order.
    pub fn iter(&self) -> HeaderIter<'_> {
        HeaderIter { inner: self.inner.iter() }
    }

    /// Checks that every stored name is a lower-case token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidHeaderName`] for the first offending name.
    pub fn validate(&self) -> Result<(), ParseError> {
        for name in self.inner.keys() {
            ensure!(is_token(name) && !name.bytes().any(|b| b.is_ascii_uppercase()), ParseError::invalid_header_name(name));
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a str, &'a str);
    type IntoIter = HeaderIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the `(name, value)` pairs of a [`HeaderMap`].
#[derive(Debug, Clone)]
pub struct HeaderIter<'a> {
    inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for HeaderIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for HeaderIter<'_> {}

/// Returns true if `name` is a non-empty field-name token: ASCII letters, digits
/// and the symbols `` !#$%&'*+-.^_`|~ ``.
pub fn is_token(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || TOKEN_SYMBOLS.contains(&b))
}
