use std::fmt;

use async_trait::async_trait;

use super::types::{TemplateCollection, parse_collection};

/// Errors that can occur while fetching the template collection.
/// The HTTP boundary reports all of them the same way; the variants exist for diagnostics.
#[derive(Debug)]
pub enum CatalogError {
    /// Storage could not be read (missing file, permissions).
    Load(String),
    /// Content is not valid JSON.
    Parse(String),
    /// Valid JSON, but not an array of well-formed template records.
    Schema(String),
    /// Network-level failure reaching a remote provider.
    Network(String),
    /// Remote provider answered with a non-success status.
    Api { status: u16, message: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Load(msg) => write!(f, "load error: {msg}"),
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
            CatalogError::Schema(msg) => write!(f, "schema error: {msg}"),
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[async_trait]
pub trait TemplateProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Fetches the stored document exactly as kept, without validating it.
    async fn get_document(&self) -> Result<String, CatalogError>;

    /// Fetches the full ordered collection. No partial results.
    async fn get_templates(&self) -> Result<TemplateCollection, CatalogError> {
        parse_collection(&self.get_document().await?)
    }
}
