//! Response formatter
//!
//! Turns an assistant result into a single display string, enriched by at
//! most one property data lookup.

pub mod dispatch;
pub mod templates;

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::{FormatterOptions, LookupFailurePolicy};
use crate::lookup::{LookupError, LookupRoute, LookupService};
use crate::models::NluResult;

pub use dispatch::select_route;
pub use templates::{confidence_text, render, LOOKUP_ERROR_TEXT};

/// Outcome of the optional lookup for one turn
#[derive(Debug)]
pub enum LookupOutcome {
    /// No route matched
    NotAttempted,
    /// The lookup ran and its response was rendered
    Rendered(String),
    /// The GET or the rendering failed
    Failed(LookupError),
}

/// Compose the final result from the assistant output and the lookup outcome
pub fn compose(
    mut result: NluResult,
    outcome: LookupOutcome,
    options: &FormatterOptions,
) -> NluResult {
    let mut output = result.output.take().unwrap_or_default();

    let fallback = result.top_intent().map(confidence_text);
    match (outcome, fallback) {
        (_, None) => {}
        (LookupOutcome::Rendered(text), Some(_)) => output.text = Value::String(text),
        (LookupOutcome::NotAttempted, Some(fallback)) => output.text = Value::String(fallback),
        (LookupOutcome::Failed(_), Some(fallback)) => match options.lookup_failure {
            LookupFailurePolicy::Confidence => output.text = Value::String(fallback),
            LookupFailurePolicy::Silent => {}
            LookupFailurePolicy::ErrorText => {
                output.text = Value::String(LOOKUP_ERROR_TEXT.to_string())
            }
        },
    }

    result.output = Some(output);
    result
}

/// Runs route selection, the lookup and rendering for each turn
#[derive(Clone)]
pub struct ResponseFormatter {
    lookup: Arc<dyn LookupService>,
    options: FormatterOptions,
}

impl ResponseFormatter {
    pub fn new(lookup: Arc<dyn LookupService>, options: FormatterOptions) -> Self {
        Self { lookup, options }
    }

    /// Format one assistant result. Lookup failures never escape; they are
    /// logged and resolved through the configured policy.
    ///
    /// A result that arrived without an output container only gets the
    /// confidence phrasing; no lookup is attempted for it.
    pub async fn format(&self, result: NluResult) -> NluResult {
        let route = if result.output.is_none() {
            None
        } else {
            select_route(&result, &self.options)
        };
        let outcome = match route {
            Some(route) => self.run_lookup(&route, &result).await,
            None => LookupOutcome::NotAttempted,
        };

        let formatted = compose(result, outcome, &self.options);
        debug!(
            text = ?formatted.output.as_ref().map(|o| &o.text),
            "Formatted response"
        );
        formatted
    }

    async fn run_lookup(&self, route: &LookupRoute, result: &NluResult) -> LookupOutcome {
        debug!(endpoint = route.endpoint.as_str(), params = ?route.params, "Dispatching lookup");

        let rendered = match self.lookup.fetch(route).await {
            Ok(body) => render(route, &result.context, &body),
            Err(e) => Err(e),
        };

        match rendered {
            Ok(text) => LookupOutcome::Rendered(text),
            Err(e) => {
                warn!(endpoint = route.endpoint.as_str(), error = %e, "Lookup failed");
                LookupOutcome::Failed(e)
            }
        }
    }
}
