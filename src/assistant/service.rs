//! Service trait for the assistant (NLU) collaborator

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use super::error::AssistantError;
use crate::models::{ConversationContext, MessageRequest, NluResult};

/// One turn sent to the assistant
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssistantRequest {
    /// Workspace/session the dialog runs in
    pub session_id: String,
    pub context: ConversationContext,
    pub input: Value,
}

impl AssistantRequest {
    /// Build a request from the caller's payload, defaulting missing parts to `{}`
    pub fn from_message(session_id: impl Into<String>, message: MessageRequest) -> Self {
        Self {
            session_id: session_id.into(),
            context: message.context.unwrap_or_default(),
            input: message
                .input
                .unwrap_or_else(|| Value::Object(Map::new())),
        }
    }
}

/// Interface every assistant backend must satisfy
#[async_trait]
pub trait AssistantService: Send + Sync {
    /// Classify the input and advance the dialog
    ///
    /// # Returns
    /// The raw intents/entities/context/output, or the service's error with
    /// its status code
    async fn message(&self, request: AssistantRequest) -> Result<NluResult, AssistantError>;
}
