//! # Template Records
//!
//! The data model shared by the provider, the HTTP surface and the view.
//!
//! ```text
//! TemplateRecord
//! ├── id: String            // unique, stable
//! ├── cost: Number          // non-negative, kept exactly as read
//! ├── description: String   // detail text + alt text
//! ├── thumbnail: String     // under /imagesList/thumbnails/
//! ├── image: String         // under /imagesList/large/
//! └── title: String
//! ```
//!
//! Parsing goes through [`parse_collection`], which validates the document
//! shape before anything downstream gets to trust it.

use std::collections::HashSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::provider::CatalogError;

/// Mount point for every static image asset.
pub const ASSET_ROOT: &str = "/imagesList";

/// A single displayable template.
///
/// Field order matches the storage document so re-serialization keeps the
/// same shape the file had.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TemplateRecord {
    pub id: String,
    pub cost: Number,
    pub description: String,
    pub thumbnail: String,
    pub image: String,
    pub title: String,
}

/// Ordered templates; storage order is display order.
pub type TemplateCollection = Vec<TemplateRecord>;

impl TemplateRecord {
    /// Path of the small image, relative to the asset server.
    pub fn thumbnail_path(&self) -> String {
        format!("{ASSET_ROOT}/thumbnails/{}", self.thumbnail)
    }

    /// Path of the large image, relative to the asset server.
    pub fn image_path(&self) -> String {
        format!("{ASSET_ROOT}/large/{}", self.image)
    }

    /// Cost with its currency prefix, e.g. `$120`.
    pub fn display_cost(&self) -> String {
        format!("${}", self.cost)
    }
}

/// Parse and validate a templates document.
///
/// Rejects anything that is not a JSON array of objects carrying the six
/// fields with the expected types. Extra fields are ignored. Duplicate ids are
/// only reported.
pub fn parse_collection(text: &str) -> Result<TemplateCollection, CatalogError> {
    let document: Value =
        serde_json::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))?;
    validate_collection(document)
}

/// Validate an already-parsed JSON value as a templates document.
pub fn validate_collection(document: Value) -> Result<TemplateCollection, CatalogError> {
    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(CatalogError::Schema(format!(
                "expected an array of templates, found {}",
                value_kind(&other)
            )));
        }
    };

    let mut templates = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            return Err(CatalogError::Schema(format!(
                "template {index}: expected an object, found {}",
                value_kind(&item)
            )));
        }
        let record: TemplateRecord = serde_json::from_value(item)
            .map_err(|e| CatalogError::Schema(format!("template {index}: {e}")))?;
        if !record.cost.as_f64().is_some_and(|cost| cost >= 0.0) {
            return Err(CatalogError::Schema(format!(
                "template {index} ({}): cost must be non-negative, got {}",
                record.id, record.cost
            )));
        }
        templates.push(record);
    }

    let mut seen = HashSet::new();
    for record in &templates {
        if !seen.insert(record.id.as_str()) {
            warn!("Duplicate template id '{}' in collection", record.id);
        }
    }

    debug!("Validated {} templates", templates.len());
    Ok(templates)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
