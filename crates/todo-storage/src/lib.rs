//! todo-storage - File system access for todo-helper
//!
//! This crate provides the file lister that feeds source files to the
//! query engine.

mod file_lister;

pub use file_lister::FileSystemLister;
