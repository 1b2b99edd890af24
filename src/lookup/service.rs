//! Service trait for the property data collaborator

use async_trait::async_trait;
use serde_json::Value;

use super::error::LookupError;
use super::route::LookupRoute;

/// Interface every property data backend must satisfy
#[async_trait]
pub trait LookupService: Send + Sync {
    /// Perform one GET for the route and return the decoded JSON body
    async fn fetch(&self, route: &LookupRoute) -> Result<Value, LookupError>;
}
