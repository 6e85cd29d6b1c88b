//! Error types for the vector trimming library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the vector trimming library.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error on a specific path
    #[error("IO error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON, or the top level is not an array
    #[error("Parse error: {0}")]
    Parse(String),

    /// Input is valid JSON but does not have the vector file layout
    #[error("Unexpected vector layout: {0}")]
    Shape(#[from] ShapeError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Compression error
    #[error("Compression error on {}: {message}", .path.display())]
    Compression { path: PathBuf, message: String },

    /// Failure while processing one algorithm
    #[error("{stage} vectors for {algorithm:?}")]
    Algorithm {
        algorithm: String,
        stage: Stage,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Build an IO error tagged with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the pipeline stage this error was raised in, if known.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::Algorithm { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

/// Structural mismatches found while decoding a vector file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShapeError {
    /// A vector set is not a JSON object
    #[error("vector set {set} is not an object")]
    SetNotObject { set: usize },

    /// A vector set has no `testGroups` array
    #[error("vector set {set} has no \"testGroups\" array")]
    MissingTestGroups { set: usize },

    /// A test group is not a JSON object
    #[error("test group {group} of vector set {set} is not an object")]
    GroupNotObject { set: usize, group: usize },

    /// A test group has no `tests` array
    #[error("test group {group} of vector set {set} has no \"tests\" array")]
    MissingTests { set: usize, group: usize },

    /// A test group has an empty `tests` array, so there is nothing to keep
    #[error("test group {group} of vector set {set} has no tests: index out of range")]
    EmptyTests { set: usize, group: usize },
}

/// Pipeline stage an algorithm failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Reading,
    Trimming,
    Writing,
    Compressing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Reading => "reading",
            Stage::Trimming => "trimming",
            Stage::Writing => "writing trimmed",
            Stage::Compressing => "compressing",
        };
        f.write_str(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}
