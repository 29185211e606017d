// src/file/catalog.rs
use super::FileHandler;
use crate::config::Product;
use anyhow::{Result, Context, anyhow};
use serde::{Serialize, Deserialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const EMBEDDED_SEED: &str = include_str!("../../assets/seed_catalog.ron");

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogFile {
    pub products: Vec<Product>,
}

impl CatalogFile {
    pub fn parse(content: &str) -> Result<Self> {
        let file: CatalogFile = ron::from_str(content).context("Failed to parse catalog file")?;
        file.check_unique_ids()?;
        Ok(file)
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_SEED).context("Embedded seed catalog is invalid")
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for product in &self.products {
            if !seen.insert(&product.id) {
                return Err(anyhow!("Duplicate product id in catalog: {}", product.id));
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct CatalogFileHandler;

impl CatalogFileHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FileHandler<CatalogFile> for CatalogFileHandler {
    fn load(&self, path: &Path) -> Result<CatalogFile> {
        if !path.exists() {
            return Err(anyhow!("Catalog file not found: {}", path.display()));
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog from {}", path.display()))?;
        CatalogFile::parse(&content)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))
    }
}
