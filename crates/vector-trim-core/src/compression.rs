//! Compression of trimmed vector files.

use std::ffi::OsString;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use bzip2::write::BzEncoder;
use bzip2::Compression;
use tracing::debug;

use crate::{Error, Result};

/// Extension of compressed vector files
pub const BZ2_EXTENSION: &str = ".bz2";

/// Path of the compressed sibling of `path`.
///
/// The extension is only appended if the path does not already carry it.
pub fn bz2_path(path: &Path) -> PathBuf {
    if path.as_os_str().to_string_lossy().ends_with(BZ2_EXTENSION) {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(BZ2_EXTENSION);
    PathBuf::from(name)
}

/// Compress `data` with bzip2 at the default level into the `.bz2` sibling
/// of `path`, returning the path written.
pub fn write_bz2(path: &Path, data: &[u8]) -> Result<PathBuf> {
    let out_path = bz2_path(path);

    let file = File::create(&out_path).map_err(|e| Error::io(&out_path, e))?;
    let mut encoder = BzEncoder::new(file, Compression::default());

    encoder.write_all(data).map_err(|e| Error::Compression {
        path: out_path.clone(),
        message: format!("Failed to write to bzip2 encoder: {}", e),
    })?;

    let mut file = encoder.finish().map_err(|e| Error::Compression {
        path: out_path.clone(),
        message: format!("Failed to finish bzip2 stream: {}", e),
    })?;
    file.flush().map_err(|e| Error::io(&out_path, e))?;

    debug!("Compressed {} bytes into {}", data.len(), out_path.display());
    Ok(out_path)
}
