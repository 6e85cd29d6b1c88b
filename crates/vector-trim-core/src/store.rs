//! Vector file storage on the local filesystem.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::{Algorithm, Error, Result};

/// Directory of vector files, one file per algorithm.
#[derive(Debug, Clone)]
pub struct VectorStore {
    base_path: PathBuf,
}

impl VectorStore {
    /// Create a store rooted at the given directory
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Path of the vector file for an algorithm
    pub fn path_for(&self, algorithm: &Algorithm) -> PathBuf {
        self.base_path.join(algorithm.as_str())
    }

    /// Read the raw vector file for an algorithm
    pub fn read(&self, algorithm: &Algorithm) -> Result<Vec<u8>> {
        let path = self.path_for(algorithm);
        let data = fs::read(&path).map_err(|e| Error::io(&path, e))?;
        debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }

    /// Overwrite the vector file for an algorithm with trimmed contents.
    ///
    /// Returns the path written.
    pub fn write_trimmed(&self, algorithm: &Algorithm, data: &[u8]) -> Result<PathBuf> {
        let path = self.path_for(algorithm);

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let mut file = options.open(&path).map_err(|e| Error::io(&path, e))?;
        file.write_all(data).map_err(|e| Error::io(&path, e))?;
        file.flush().map_err(|e| Error::io(&path, e))?;

        debug!("Wrote {} trimmed bytes to {}", data.len(), path.display());
        Ok(path)
    }
}
