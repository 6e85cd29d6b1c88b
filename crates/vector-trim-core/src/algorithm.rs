//! Algorithm identifiers.

use std::fmt;

/// A sanitized algorithm name, usable as a single file name inside the
/// vectors directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Algorithm(String);

impl Algorithm {
    /// Sanitize a raw name: trim surrounding whitespace and replace every `/`
    /// with `-` so the name never reaches into a subdirectory.
    ///
    /// An empty name is kept as is; it fails when its file is read.
    pub fn sanitize(raw: &str) -> Self {
        Self(raw.trim().replace('/', "-"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Algorithm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
