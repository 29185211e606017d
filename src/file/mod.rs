// src/file/mod.rs
use anyhow::Result;
use std::path::Path;

pub mod catalog;

pub use catalog::{CatalogFile, CatalogFileHandler};

// Core trait for file operations. Sessions are not persisted, so
// handlers only read.
pub trait FileHandler<T> {
    fn load(&self, path: &Path) -> Result<T>;
}
