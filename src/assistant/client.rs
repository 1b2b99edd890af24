//! HTTP client for the hosted assistant (v1 message API)

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::error::AssistantError;
use super::service::{AssistantRequest, AssistantService};
use crate::config::AssistantConfig;
use crate::models::{ConversationContext, NluResult};

/// Body of `POST /v1/workspaces/{id}/message`
#[derive(Debug, Serialize)]
struct MessageBody<'a> {
    input: &'a Value,
    context: &'a ConversationContext,
}

/// Client for the assistant service
pub struct AssistantClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL, e.g. `https://gateway.watsonplatform.net/assistant/api`
    base_url: String,
    username: String,
    password: String,
    /// API version date
    version: String,
}

impl AssistantClient {
    /// Create a new assistant client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &AssistantConfig) -> Result<Self, AssistantError> {
        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| {
                AssistantError::TransportError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            base_url: config.url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            version: config.version.clone(),
        })
    }

    /// Build the message endpoint URL for a workspace
    fn build_endpoint_url(&self, workspace_id: &str) -> String {
        format!("{}/v1/workspaces/{}/message", self.base_url, workspace_id)
    }
}

#[async_trait]
impl AssistantService for AssistantClient {
    async fn message(&self, request: AssistantRequest) -> Result<NluResult, AssistantError> {
        let url = self.build_endpoint_url(&request.session_id);
        let body = MessageBody {
            input: &request.input,
            context: &request.context,
        };

        let response = self
            .http_client
            .post(&url)
            .query(&[("version", self.version.as_str())])
            .basic_auth(&self.username, Some(&self.password))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
