//! Lookup endpoints and the routes built from them

use reqwest::Url;

use super::error::LookupError;

/// Endpoints of the property data service the formatter can call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupEndpoint {
    AverageRent,
    Inspections,
    Repairs,
    Transport,
    PropertyDetails,
    Tenant,
    Landlord,
    Carparking,
}

impl LookupEndpoint {
    /// Path segment below the service base URL
    pub fn path(&self) -> &'static str {
        match self {
            LookupEndpoint::AverageRent => "averagerent",
            LookupEndpoint::Inspections => "inspections",
            LookupEndpoint::Repairs => "repairs",
            LookupEndpoint::Transport => "transport",
            LookupEndpoint::PropertyDetails | LookupEndpoint::Carparking => "property",
            LookupEndpoint::Tenant => "tenant",
            LookupEndpoint::Landlord => "landlord",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LookupEndpoint::AverageRent => "average_rent",
            LookupEndpoint::Inspections => "inspections",
            LookupEndpoint::Repairs => "repairs",
            LookupEndpoint::Transport => "transport",
            LookupEndpoint::PropertyDetails => "property_details",
            LookupEndpoint::Tenant => "tenant",
            LookupEndpoint::Landlord => "landlord",
            LookupEndpoint::Carparking => "carparking",
        }
    }
}

/// A single GET against the property data service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRoute {
    pub endpoint: LookupEndpoint,
    pub params: Vec<(&'static str, String)>,
}

impl LookupRoute {
    pub fn new(endpoint: LookupEndpoint) -> Self {
        Self {
            endpoint,
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    /// Value of a query parameter, if the route carries it
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Full URL with percent-encoded query parameters
    pub fn url(&self, base_url: &str) -> Result<Url, LookupError> {
        let raw = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.endpoint.path()
        );
        let url = if self.params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, self.params.iter().map(|(k, v)| (*k, v.as_str())))
        };
        url.map_err(|e| LookupError::InvalidUrl(format!("{}: {}", raw, e)))
    }
}
