//! todo-core - Core library for todo-helper
//!
//! This crate provides the core logic for the TODO comment scanner,
//! including marked-comment extraction, date normalization, querying and
//! table rendering.

pub mod error;
pub mod config;
pub mod date;
pub mod source;
pub mod comment;
pub mod query;
pub mod render;

pub use error::{TodoError, Result};
pub use comment::StructuredComment;
pub use source::{FileLister, RawFile};
