use serde::{Deserialize, Serialize};

use crate::provider::Model;

/// Serverless-style invocation event; only the path is routed on.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub path: String,
    #[serde(default)]
    pub http_method: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HelpResponse {
    pub message: &'static str,
    pub usage: Usage,
}

#[derive(Debug, Serialize)]
pub struct Usage {
    #[serde(rename = "/home")]
    pub home: &'static str,
    #[serde(rename = "/gpt/{question}")]
    pub gpt: &'static str,
    #[serde(rename = "/gemini/{question}")]
    pub gemini: &'static str,
}

impl HelpResponse {
    pub fn new() -> Self {
        Self {
            message: "✨ Welcome to AI API!",
            usage: Usage {
                home: "Show this help message",
                gpt: "Ask OpenAI GPT model",
                gemini: "Ask Google Gemini model",
            },
        }
    }
}

impl Default for HelpResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub model: Model,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl ErrorResponse {
    pub const MISSING_QUESTION: Self = Self {
        error: "Missing question",
    };
    pub const INVALID_ROUTE: Self = Self {
        error: "Invalid route",
    };
}
