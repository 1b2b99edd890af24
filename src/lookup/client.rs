//! HTTP client for the property data REST service

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::error::LookupError;
use super::route::LookupRoute;
use super::service::LookupService;
use crate::config::LookupConfig;

/// Client for the property data service
pub struct LookupClient {
    /// HTTP client for making requests
    http_client: Client,
    base_url: String,
}

impl LookupClient {
    /// Create a new lookup client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| {
                LookupError::TransportError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl LookupService for LookupClient {
    async fn fetch(&self, route: &LookupRoute) -> Result<Value, LookupError> {
        let url = route.url(&self.base_url)?;

        let response = self
            .http_client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
