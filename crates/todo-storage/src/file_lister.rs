//! File system file lister

use std::fs;
use std::path::Path;
use todo_core::config::ScanConfig;
use todo_core::error::{Result, TodoError};
use todo_core::source::{FileLister, RawFile};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Walks a directory tree and reads every file with a given extension
#[derive(Debug, Clone, Default)]
pub struct FileSystemLister {
    /// Directory names that are not descended into
    exclude_dirs: Vec<String>,
    /// Follow symbolic links while walking
    follow_links: bool,
}

impl FileSystemLister {
    /// Create a lister that visits every directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lister from scan settings
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            exclude_dirs: config.exclude_dirs.clone(),
            follow_links: config.follow_links,
        }
    }

    /// Skip directories with the given name
    pub fn exclude_dir(mut self, name: impl Into<String>) -> Self {
        self.exclude_dirs.push(name.into());
        self
    }

    /// Check whether an entry is an excluded directory (the root never is)
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .map(|name| self.exclude_dirs.iter().any(|d| d == name))
                .unwrap_or(false)
    }
}

impl FileLister for FileSystemLister {
    fn list_files(&self, root: &Path, extension: &str) -> Result<Vec<RawFile>> {
        if !root.is_dir() {
            return Err(TodoError::RootNotFound(root.to_path_buf()));
        }

        let suffix = format!(".{}", extension);
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded(entry));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            let matches = entry
                .file_name()
                .to_str()
                .map(|name| name.ends_with(&suffix))
                .unwrap_or(false);
            if !matches {
                continue;
            }

            let path = entry.into_path();
            // Invalid UTF-8 is replaced so the rest of the file still scans
            match fs::read(&path) {
                Ok(bytes) => {
                    let content = String::from_utf8_lossy(&bytes).into_owned();
                    files.push(RawFile::new(path, content));
                }
                Err(e) => warn!("Skipping unreadable file {:?}: {}", path, e),
            }
        }

        debug!("Listed {} .{} file(s) under {:?}", files.len(), extension, root);
        Ok(files)
    }
}
