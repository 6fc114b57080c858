//! HTTP provider: consumes `GET /api/templates` from a running `filmstrip serve`.
//!
//! The body is validated with the same rules as the file provider, so a
//! server returning something other than an array of records is a failure
//! here too.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::catalog::{CatalogError, TemplateProvider};

/// Path of the templates endpoint, relative to the server base URL.
pub const TEMPLATES_PATH: &str = "/api/templates";

/// Error body returned by the server on a failed load.
#[derive(Deserialize, Debug)]
struct ErrorBody {
    message: String,
}

pub struct HttpTemplateProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTemplateProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, TEMPLATES_PATH)
    }
}

#[async_trait]
impl TemplateProvider for HttpTemplateProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn get_document(&self) -> Result<String, CatalogError> {
        let url = self.url();
        info!("Fetching templates from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Templates response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            warn!("Templates endpoint error: {} - {}", status, message);
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }
}
