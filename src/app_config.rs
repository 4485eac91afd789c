use serde::Serialize;
use url::Url;

use crate::errors::ConfigError;

/// Application configuration module
/// This module resolves the API credential, endpoint and model selection
/// from the process environment and validates them before any work starts.

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the API base URL
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Environment variable selecting the model
pub const MODEL_VAR: &str = "OPENAI_MODEL";

/// Environment variable setting the request timeout in seconds
pub const TIMEOUT_VAR: &str = "OPENAI_TIMEOUT_SECS";

/// Environment variable setting the log level
pub const LOG_LEVEL_VAR: &str = "POTWAI_LOG_LEVEL";

/// Environment variable setting the default `Project-Id-Version`
pub const PROJECT_ID_VAR: &str = "PO_PROJECT_ID";

/// Represents the resolved application configuration
#[derive(Debug, Serialize, Clone)]
pub struct Config {
    /// API key for the completion service
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Service base URL override (None means the public OpenAI endpoint)
    pub endpoint: Option<String>,

    /// Model name
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Project identifier written when the catalog has none
    pub project_id: String,

    /// Log level
    pub log_level: LogLevel,
}

/// Log level
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Config {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = get(API_KEY_VAR).ok_or(ConfigError::MissingVariable(API_KEY_VAR))?;

        let timeout_secs = match get(TIMEOUT_VAR) {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                name: TIMEOUT_VAR,
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => default_timeout_secs(),
        };

        let log_level = match get(LOG_LEVEL_VAR) {
            Some(raw) => raw.parse::<LogLevel>().map_err(|reason| ConfigError::InvalidValue {
                name: LOG_LEVEL_VAR,
                value: raw.clone(),
                reason,
            })?,
            None => LogLevel::default(),
        };

        let config = Self {
            api_key,
            endpoint: get(BASE_URL_VAR),
            model: get(MODEL_VAR).unwrap_or_else(default_model),
            timeout_secs,
            project_id: get(PROJECT_ID_VAR).unwrap_or_else(default_project_id),
            log_level,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingVariable(API_KEY_VAR));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: MODEL_VAR,
                value: self.model.clone(),
                reason: "model name must not be empty".to_string(),
            });
        }

        if let Some(endpoint) = &self.endpoint {
            let url = Url::parse(endpoint).map_err(|e| ConfigError::InvalidValue {
                name: BASE_URL_VAR,
                value: endpoint.clone(),
                reason: e.to_string(),
            })?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ConfigError::InvalidValue {
                    name: BASE_URL_VAR,
                    value: endpoint.clone(),
                    reason: format!("unsupported scheme '{}'", url.scheme()),
                });
            }
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: TIMEOUT_VAR,
                value: "0".to_string(),
                reason: "timeout must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_OPENAI_BASE_URL)
    }
}

/// Public OpenAI API base URL
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

fn default_model() -> String {
    "gpt-5-nano".to_string()
}

fn default_timeout_secs() -> u64 {
    600
}

fn default_project_id() -> String {
    "koreader-assistant".to_string()
}
