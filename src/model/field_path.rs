//! Dotted field paths used for data keys and sort fields.

use std::fmt;
use std::str::FromStr;

/// A parsed dotted path into a record, e.g. `"address.city"`.
///
/// Segments are never empty. Numeric segments index into arrays when the
/// record supports it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path.
    ///
    /// # Errors
    ///
    /// Returns [`FieldPathError::Empty`] for an empty string and
    /// [`FieldPathError::EmptySegment`] for paths like `"a..b"` or `".a"`.
    pub fn parse(raw: impl Into<String>) -> Result<Self, FieldPathError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(FieldPathError::Empty);
        }

        let segments: Vec<String> = raw.split('.').map(str::to_owned).collect();
        if let Some(position) = segments.iter().position(String::is_empty) {
            return Err(FieldPathError::EmptySegment { path: raw, position });
        }

        Ok(Self { raw, segments })
    }

    /// The path as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Path segments in descent order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors produced when parsing a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldPathError {
    /// The path string was empty.
    #[error("Field path cannot be empty")]
    Empty,

    /// One of the dot-separated segments was empty.
    #[error("Field path '{path}' has an empty segment at position {position}")]
    EmptySegment {
        /// The rejected path.
        path: String,
        /// Zero-based index of the empty segment.
        position: usize,
    },
}
