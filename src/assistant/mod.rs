//! Assistant (NLU) collaborator
//!
//! Sends the caller's input and context to the hosted assistant and returns
//! recognised intents, entities and the updated context.

pub mod client;
pub mod error;
pub mod service;

pub use client::AssistantClient;
pub use error::AssistantError;
pub use service::{AssistantRequest, AssistantService};
