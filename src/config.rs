use std::env;

use tracing::warn;

use crate::error::ConfigError;
use crate::logging::{LogFormat, LoggingConfig};

const DEFAULT_PORT: u16 = 3000;

pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Settings for the chat-completion (GPT) adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    /// Sent as a leading `system` message when present.
    pub system_prompt: Option<String>,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            endpoint: DEFAULT_OPENAI_URL.to_string(),
            system_prompt: None,
        }
    }
}

/// Settings for the generate-content (Gemini) adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Prepended to the question text when present.
    pub persona: Option<String>,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_URL.to_string(),
            persona: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub openai: OpenAiSettings,
    pub gemini: GeminiSettings,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Read configuration from the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match var("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: "PORT",
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        let format = match var("LOG_FORMAT") {
            Some(value) => LogFormat::parse(&value).ok_or_else(|| ConfigError::InvalidValue {
                field: "LOG_FORMAT",
                reason: format!("expected `pretty` or `json`, got `{value}`"),
            })?,
            None => LogFormat::default(),
        };

        let openai = OpenAiSettings {
            api_key: var("OPENAI_API_KEY").unwrap_or_default(),
            model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            endpoint: var("OPENAI_API_URL").unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string()),
            system_prompt: var("GPT_SYSTEM_PROMPT"),
        };

        let gemini = GeminiSettings {
            api_key: var("GEMINI_API_KEY").unwrap_or_default(),
            model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            base_url: var("GEMINI_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GEMINI_URL.to_string()),
            persona: var("GEMINI_PERSONA"),
        };

        Ok(Self {
            port,
            openai,
            gemini,
            logging: LoggingConfig {
                level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                format,
            },
        })
    }

    /// Emit a warning for every provider credential that is not configured.
    ///
    /// Must run after the subscriber is installed.
    pub fn warn_missing_credentials(&self) {
        if self.openai.api_key.is_empty() {
            warn!("OPENAI_API_KEY is not set; /gpt requests will be rejected upstream");
        }
        if self.gemini.api_key.is_empty() {
            warn!("GEMINI_API_KEY is not set; /gemini requests will be rejected upstream");
        }
    }
}
