//! File-backed provider: reads the bundled templates document from disk.
//!
//! The file is read on every call, so edits show up without a restart.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::catalog::{CatalogError, TemplateCollection, TemplateProvider, parse_collection};

pub struct FileTemplateProvider {
    path: PathBuf,
}

impl FileTemplateProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TemplateProvider for FileTemplateProvider {
    fn name(&self) -> &str {
        "file"
    }

    async fn get_document(&self) -> Result<String, CatalogError> {
        debug!("Reading templates from {}", self.path.display());

        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            warn!("Failed to read {}: {}", self.path.display(), e);
            CatalogError::Load(format!("{}: {e}", self.path.display()))
        })
    }

    async fn get_templates(&self) -> Result<TemplateCollection, CatalogError> {
        let templates = parse_collection(&self.get_document().await?)?;
        info!(
            "Loaded {} templates from {}",
            templates.len(),
            self.path.display()
        );
        Ok(templates)
    }
}
