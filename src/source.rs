//! Reading RTF documents from disk.

use std::fs;
use std::path::Path;

use crate::error::ExtractionFailure;

/// Read the whole document at `path` as UTF-8 text
pub fn read_source(path: &Path) -> Result<String, ExtractionFailure> {
    let bytes = fs::read(path).map_err(|source| ExtractionFailure::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|source| ExtractionFailure::Decode {
        path: path.to_path_buf(),
        source,
    })
}
