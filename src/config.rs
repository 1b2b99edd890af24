//! Application configuration
//!
//! Everything is read once at startup and handed to the router, the handler
//! and the formatter as plain values.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

/// Placeholder shipped in sample environments; treated as "not configured"
pub const WORKSPACE_PLACEHOLDER: &str = "<workspace-id>";

pub const DEFAULT_ASSISTANT_URL: &str = "https://gateway.watsonplatform.net/assistant/api";
pub const DEFAULT_ASSISTANT_VERSION: &str = "2018-02-16";
pub const DEFAULT_LOOKUP_BASE_URL: &str =
    "https://7jk4gr3buj.execute-api.us-east-1.amazonaws.com/trunkfinal";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// How the `carparking` context row treats a missing address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarparkingRule {
    /// Only matches when the context carries an address
    #[default]
    RequiresAddress,
    /// Matches on `currentContext` alone; the address is passed when present
    Independent,
}

impl FromStr for CarparkingRule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "requires-address" => Ok(CarparkingRule::RequiresAddress),
            "independent" => Ok(CarparkingRule::Independent),
            _ => Err(ConfigError::InvalidValue {
                key: "CARPARKING_RULE",
                value: s.to_string(),
            }),
        }
    }
}

/// Text produced when the data lookup fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupFailurePolicy {
    /// Fall back to the confidence phrasing of the top intent
    #[default]
    Confidence,
    /// Keep whatever text the assistant returned
    Silent,
    /// Replace the text with a fixed apology
    ErrorText,
}

impl FromStr for LookupFailurePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "confidence" => Ok(LookupFailurePolicy::Confidence),
            "silent" => Ok(LookupFailurePolicy::Silent),
            "error-text" => Ok(LookupFailurePolicy::ErrorText),
            _ => Err(ConfigError::InvalidValue {
                key: "LOOKUP_FAILURE",
                value: s.to_string(),
            }),
        }
    }
}

/// Formatter behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatterOptions {
    pub carparking: CarparkingRule,
    pub lookup_failure: LookupFailurePolicy,
}

impl FormatterOptions {
    pub fn with_carparking(mut self, carparking: CarparkingRule) -> Self {
        self.carparking = carparking;
        self
    }

    pub fn with_lookup_failure(mut self, lookup_failure: LookupFailurePolicy) -> Self {
        self.lookup_failure = lookup_failure;
        self
    }
}

/// Assistant (NLU) service settings
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantConfig {
    pub url: String,
    pub username: String,
    pub password: String,
    pub version: String,
    /// `None` when no usable workspace id was provided
    pub workspace_id: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ASSISTANT_URL.to_string(),
            username: "<username>".to_string(),
            password: "<password>".to_string(),
            version: DEFAULT_ASSISTANT_VERSION.to_string(),
            workspace_id: None,
        }
    }
}

/// Property data service settings
#[derive(Debug, Clone, PartialEq)]
pub struct LookupConfig {
    pub base_url: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LOOKUP_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub assistant: AssistantConfig,
    pub lookup: LookupConfig,
    pub formatter: FormatterOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            assistant: AssistantConfig::default(),
            lookup: LookupConfig::default(),
            formatter: FormatterOptions::default(),
        }
    }
}

impl AppConfig {
    /// Load `.env` (if any) and read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let host = match var("HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "HOST",
                value,
            })?,
            None => defaults.host,
        };

        let port = match var("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value,
            })?,
            None => defaults.port,
        };

        let workspace_id = var("WORKSPACE_ID")
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty() && id != WORKSPACE_PLACEHOLDER);

        let assistant = AssistantConfig {
            url: var("ASSISTANT_URL").unwrap_or(defaults.assistant.url),
            username: var("ASSISTANT_USERNAME").unwrap_or(defaults.assistant.username),
            password: var("ASSISTANT_PASSWORD").unwrap_or(defaults.assistant.password),
            version: var("ASSISTANT_VERSION").unwrap_or(defaults.assistant.version),
            workspace_id,
        };

        let lookup = LookupConfig {
            base_url: var("LOOKUP_BASE_URL").unwrap_or(defaults.lookup.base_url),
        };

        let mut formatter = FormatterOptions::default();
        if let Some(value) = var("CARPARKING_RULE") {
            formatter.carparking = value.parse()?;
        }
        if let Some(value) = var("LOOKUP_FAILURE") {
            formatter.lookup_failure = value.parse()?;
        }

        Ok(Self {
            host,
            port,
            assistant,
            lookup,
            formatter,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn is_workspace_configured(&self) -> bool {
        self.assistant.workspace_id.is_some()
    }
}
