//! Property data collaborator
//!
//! A family of GET endpoints keyed by suburb or address returning rent
//! averages, inspections, repairs, tenancy and property records.

pub mod client;
pub mod error;
pub mod route;
pub mod service;

pub use client::LookupClient;
pub use error::LookupError;
pub use route::{LookupEndpoint, LookupRoute};
pub use service::LookupService;
