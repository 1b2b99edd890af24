// Handlers module

pub mod health;
pub mod message;

use std::sync::Arc;

use crate::assistant::AssistantService;
use crate::config::AppConfig;
use crate::formatter::ResponseFormatter;
use crate::lookup::LookupService;

pub use health::health_handler;
pub use message::{message_handler, process_message, NOT_CONFIGURED_TEXT};

/// Everything a request needs, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub assistant: Arc<dyn AssistantService>,
    pub formatter: ResponseFormatter,
}

impl AppState {
    /// The formatter takes its switches from `config.formatter`
    pub fn new(
        config: AppConfig,
        assistant: Arc<dyn AssistantService>,
        lookup: Arc<dyn LookupService>,
    ) -> Self {
        let formatter = ResponseFormatter::new(lookup, config.formatter);
        Self {
            config: Arc::new(config),
            assistant,
            formatter,
        }
    }
}
