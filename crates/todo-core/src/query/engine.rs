//! Query engine over a file lister

use super::order;
use super::Query;
use crate::comment::{collect_comments, StructuredComment};
use crate::error::Result;
use crate::source::FileLister;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Runs queries against the marked comments under a root directory.
///
/// Nothing is cached: every call lists and parses all files again, so
/// results always reflect the files as they are on disk.
pub struct QueryEngine {
    /// File lister backend
    lister: Arc<dyn FileLister>,
    /// Directory to scan
    root: PathBuf,
    /// File extension to scan, without the dot
    extension: String,
}

impl QueryEngine {
    /// Create a new engine with the given lister
    pub fn new(
        lister: impl FileLister + 'static,
        root: impl Into<PathBuf>,
        extension: impl Into<String>,
    ) -> Self {
        Self::with_lister(Arc::new(lister), root, extension)
    }

    /// Create a new engine with a shared lister
    pub fn with_lister(
        lister: Arc<dyn FileLister>,
        root: impl Into<PathBuf>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            lister,
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Directory being scanned
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Extension being scanned
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// List, extract and structure every marked comment, in scan order
    pub fn collect(&self) -> Result<Vec<StructuredComment>> {
        let files = self.lister.list_files(&self.root, &self.extension)?;
        let comments = collect_comments(&files);
        debug!(
            "Collected {} comment(s) from {} .{} file(s) under {:?}",
            comments.len(),
            files.len(),
            self.extension,
            self.root
        );
        Ok(comments)
    }

    /// Rebuild the collection and apply `query` to it
    pub fn run(&self, query: &Query) -> Result<Vec<StructuredComment>> {
        debug!("Running query {:?}", query);
        let comments = self.collect()?;
        order::apply(query, comments)
    }
}
