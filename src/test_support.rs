//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::catalog::{CatalogError, TemplateCollection, TemplateProvider, TemplateRecord};
use crate::core::state::{App, LoadState};

/// A provider that hands back a fixed collection.
pub struct StaticProvider(pub TemplateCollection);

#[async_trait]
impl TemplateProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn get_document(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string(&self.0).unwrap())
    }

    async fn get_templates(&self) -> Result<TemplateCollection, CatalogError> {
        Ok(self.0.clone())
    }
}

/// A provider whose storage is always unreadable.
pub struct FailingProvider;

#[async_trait]
impl TemplateProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn get_document(&self) -> Result<String, CatalogError> {
        Err(CatalogError::Load("storage unavailable".to_string()))
    }
}

/// Records `t0..t{n-1}` with predictable field values.
pub fn sample_templates(n: usize) -> TemplateCollection {
    (0..n)
        .map(|i| TemplateRecord {
            id: format!("t{i}"),
            cost: (10 * (i as u64 + 1)).into(),
            description: format!("Template number {i}"),
            thumbnail: format!("t{i}-m.jpg"),
            image: format!("t{i}-b.jpg"),
            title: format!("Site {i}"),
        })
        .collect()
}

/// The JSON document for `sample_templates(n)`.
pub fn sample_json(n: usize) -> String {
    serde_json::to_string_pretty(&sample_templates(n)).unwrap()
}

/// Creates a test App with an empty StaticProvider.
pub fn test_app() -> App {
    App::new(Arc::new(StaticProvider(Vec::new())))
}

/// Creates a test App that has already loaded `templates`.
pub fn test_app_with(templates: TemplateCollection) -> App {
    let mut app = App::new(Arc::new(StaticProvider(templates.clone())));
    app.templates = templates;
    app.load_state = LoadState::Loaded;
    app
}
