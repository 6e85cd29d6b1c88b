//! Run configuration.

use std::path::PathBuf;

use crate::{Algorithm, Error, Result};

/// Value of the algorithms flag when it is left at its default.
pub const ALL_ALGORITHMS: &str = "all";

/// Directory holding the vector files, relative to the working directory.
pub const DEFAULT_VECTORS_DIR: &str = "vectors";

/// Configuration for a trimming run, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Algorithms to process, in order
    pub algorithms: Vec<Algorithm>,

    /// Directory holding one vector file per algorithm
    pub vectors_dir: PathBuf,
}

impl Config {
    /// Build a config from the comma-separated algorithms flag.
    ///
    /// The literal value `all` does not expand to anything: it produces an
    /// empty list, which is rejected like any other empty selection.
    pub fn from_algorithms_flag(raw: &str, vectors_dir: impl Into<PathBuf>) -> Result<Self> {
        let algorithms = if raw == ALL_ALGORITHMS {
            Vec::new()
        } else {
            raw.split(',').map(Algorithm::sanitize).collect()
        };

        if algorithms.is_empty() {
            return Err(Error::Config(
                "one or more -algorithms must be specified".to_string(),
            ));
        }

        Ok(Self {
            algorithms,
            vectors_dir: vectors_dir.into(),
        })
    }
}
