//! Extraction errors.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop an extraction run.
///
/// Decoding itself never fails; these all come from getting the document
/// (or the configuration) off disk.
#[derive(Debug, Error)]
pub enum ExtractionFailure {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not valid UTF-8 text: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("invalid config file '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl ExtractionFailure {
    /// Path of the file the failure is about
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Decode { path, .. } | Self::Config { path, .. } => {
                path
            }
        }
    }
}
