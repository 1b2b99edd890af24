// Data structures exchanged with the browser client and the assistant service

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Conversation context round-tripped by the caller between turns.
///
/// The assistant owns most of the keys; the formatter only reads
/// `currentContext`, `address` and `suburb`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ConversationContext(pub Map<String, Value>);

impl ConversationContext {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Non-empty string value stored under `key`
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Which lookup branch the dialog is currently in
    pub fn current_context(&self) -> Option<&str> {
        self.get_str("currentContext")
    }

    /// Property the conversation is about
    pub fn address(&self) -> Option<&str> {
        self.get_str("address")
    }

    pub fn suburb(&self) -> Option<&str> {
        self.get_str("suburb")
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

// Request Types
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub context: Option<ConversationContext>,
    #[serde(default)]
    pub input: Option<Value>,
}

/// A classified user goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Intent {
    pub intent: String,
    pub confidence: f64,
}

impl Intent {
    pub fn new(intent: impl Into<String>, confidence: f64) -> Self {
        Self {
            intent: intent.into(),
            confidence,
        }
    }
}

/// A structured value extracted from the user's input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    #[serde(default)]
    pub entity: String,
    pub value: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity {
    pub fn new(entity: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            value: value.into(),
            extra: Map::new(),
        }
    }
}

/// Output container. `text` is whatever the assistant produced until the
/// formatter replaces it with a single string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Output {
    #[serde(default)]
    pub text: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Output {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Value::String(text.into()),
            extra: Map::new(),
        }
    }

    pub fn text_str(&self) -> Option<&str> {
        self.text.as_str()
    }
}

/// Message response from the assistant service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NluResult {
    #[serde(default)]
    pub intents: Vec<Intent>,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub context: ConversationContext,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Output>,
    /// Fields the formatter does not interpret (`input`, `alternate_intents`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NluResult {
    pub fn top_intent(&self) -> Option<&Intent> {
        self.intents.first()
    }

    pub fn first_entity_value(&self) -> Option<&str> {
        self.entities
            .first()
            .map(|entity| entity.value.as_str())
            .filter(|value| !value.is_empty())
    }

    pub fn output_text(&self) -> Option<&str> {
        self.output.as_ref().and_then(Output::text_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_request_defaults() {
        let request: MessageRequest = serde_json::from_str("{}").unwrap();
        assert!(request.context.is_none());
        assert!(request.input.is_none());
    }

    #[test]
    fn test_message_request_deserialization() {
        let json = r#"{"context":{"currentContext":"tenant","address":"1 Main St"},"input":{"text":"who lives there"}}"#;
        let request: MessageRequest = serde_json::from_str(json).unwrap();
        let context = request.context.unwrap();
        assert_eq!(context.current_context(), Some("tenant"));
        assert_eq!(context.address(), Some("1 Main St"));
        assert_eq!(request.input.unwrap()["text"], "who lives there");
    }

    #[test]
    fn test_context_ignores_empty_and_non_string_values() {
        let context: ConversationContext =
            serde_json::from_value(json!({"address": "", "currentContext": 3})).unwrap();
        assert!(context.address().is_none());
        assert!(context.current_context().is_none());
    }

    #[test]
    fn test_nlu_result_preserves_unknown_fields() {
        let raw = json!({
            "intents": [{"intent": "averageRent", "confidence": 0.93}],
            "entities": [{"entity": "suburb", "value": "melbourne", "location": [20, 29]}],
            "input": {"text": "rent in melbourne"},
            "context": {"conversation_id": "abc"},
            "output": {"text": ["Hello"], "nodes_visited": ["node_1"]},
            "alternate_intents": false
        });
        let result: NluResult = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(result.top_intent().unwrap().intent, "averageRent");
        assert_eq!(result.first_entity_value(), Some("melbourne"));
        assert_eq!(result.entities[0].extra["location"], json!([20, 29]));
        assert!(result.output_text().is_none());

        let round_trip = serde_json::to_value(&result).unwrap();
        assert_eq!(round_trip, raw);
    }

    #[test]
    fn test_nlu_result_without_output() {
        let result: NluResult = serde_json::from_str(r#"{"intents":[]}"#).unwrap();
        assert!(result.output.is_none());
        assert!(result.top_intent().is_none());

        let serialized = serde_json::to_value(&result).unwrap();
        assert!(serialized.get("output").is_none());
    }

    #[test]
    fn test_output_with_text_serialization() {
        let value = serde_json::to_value(Output::with_text("hi")).unwrap();
        assert_eq!(value, json!({"text": "hi"}));
    }
}
