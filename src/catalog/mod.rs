//! # Template Catalog
//!
//! The read-only source of template records. Everything that needs the
//! collection goes through the [`TemplateProvider`] trait:
//!
//! - [`FileTemplateProvider`] reads the bundled JSON document.
//! - [`HttpTemplateProvider`] asks a running server for it.

pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{CatalogError, TemplateProvider};
pub use providers::{FileTemplateProvider, HttpTemplateProvider};
pub use types::{ASSET_ROOT, TemplateCollection, TemplateRecord, parse_collection, validate_collection};
