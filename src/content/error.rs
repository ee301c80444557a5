//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Failures while discovering or reading content files.
///
/// Malformed front-matter is not represented here: it degrades to empty
/// metadata instead of failing the build.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read content directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read content file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    /// Path that could not be read
    pub fn path(&self) -> &std::path::Path {
        match self {
            ContentError::ReadDir { path, .. } | ContentError::ReadFile { path, .. } => path,
        }
    }
}
