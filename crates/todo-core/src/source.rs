//! Source file abstractions
//!
//! The query engine never touches the file system directly; it asks a
//! [`FileLister`] for the files to scan on every query.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// A source file and its full text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    /// Path of the file as found by the lister
    pub path: PathBuf,
    /// Full text content
    pub content: String,
}

impl RawFile {
    /// Create a raw file from a path and its content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Trait for file lister implementations
pub trait FileLister {
    /// Recursively list files under `root` whose name ends in `.<extension>`,
    /// with their content.
    fn list_files(&self, root: &Path, extension: &str) -> Result<Vec<RawFile>>;
}
