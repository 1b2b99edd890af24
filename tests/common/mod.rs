//! In-memory fakes for the assistant and property data services

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use property_assistant::assistant::{AssistantError, AssistantRequest, AssistantService};
use property_assistant::config::{AppConfig, FormatterOptions};
use property_assistant::formatter::ResponseFormatter;
use property_assistant::handlers::AppState;
use property_assistant::lookup::{LookupError, LookupRoute, LookupService};
use property_assistant::models::NluResult;

pub const WORKSPACE_ID: &str = "ws-test";

/// Assistant that replies with a canned result or error
pub struct FakeAssistant {
    reply: Result<Value, (u16, String)>,
    pub requests: Mutex<Vec<AssistantRequest>>,
}

impl FakeAssistant {
    pub fn replying(reply: Value) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err((status, body.to_string())),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl AssistantService for FakeAssistant {
    async fn message(&self, request: AssistantRequest) -> Result<NluResult, AssistantError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Ok(value) => Ok(serde_json::from_value(value.clone())?),
            Err((status, body)) => Err(AssistantError::HttpError {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

/// Lookup service that replies with a canned body or fails
pub struct FakeLookup {
    reply: Result<Value, String>,
    pub calls: Mutex<Vec<LookupRoute>>,
}

impl FakeLookup {
    pub fn replying(body: Value) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(body),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<LookupRoute> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LookupService for FakeLookup {
    async fn fetch(&self, route: &LookupRoute) -> Result<Value, LookupError> {
        self.calls.lock().unwrap().push(route.clone());
        match &self.reply {
            Ok(body) => Ok(body.clone()),
            Err(message) => Err(LookupError::TransportError(message.clone())),
        }
    }
}

pub fn formatter(lookup: Arc<FakeLookup>, options: FormatterOptions) -> ResponseFormatter {
    ResponseFormatter::new(lookup, options)
}

/// State with a configured workspace
pub fn configured_state(
    assistant: Arc<FakeAssistant>,
    lookup: Arc<FakeLookup>,
    options: FormatterOptions,
) -> AppState {
    let mut config = AppConfig::default();
    config.assistant.workspace_id = Some(WORKSPACE_ID.to_string());
    config.formatter = options;
    AppState::new(config, assistant, lookup)
}

/// State without a workspace id
pub fn unconfigured_state(assistant: Arc<FakeAssistant>, lookup: Arc<FakeLookup>) -> AppState {
    AppState::new(AppConfig::default(), assistant, lookup)
}
