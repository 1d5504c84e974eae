//! Provider adapters that turn a question into answer text.
//!
//! Each adapter classifies the upstream reply into an [`Outcome`]; the
//! router only ever sees the resulting string, so no provider failure can
//! escape a request.

mod gemini;
mod openai;

pub use gemini::Gemini;
pub use openai::OpenAi;

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

/// Upstream model family a question was answered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Model {
    #[serde(rename = "GPT")]
    Gpt,
    #[serde(rename = "Gemini")]
    Gemini,
}

impl Model {
    /// Map a route selector segment to a model.
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "gpt" => Some(Self::Gpt),
            "gemini" => Some(Self::Gemini),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Gpt => "GPT",
            Self::Gemini => "Gemini",
        }
    }

    /// Fallback answer when the provider gave neither text nor an error message.
    pub fn no_reply(self) -> String {
        format!("⚠️ No reply from {}", self.label())
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classified result of one provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    ProviderError(String),
    TransportError(String),
    NoReply,
}

impl Outcome {
    /// Pick the first non-empty of answer text and provider error message.
    pub fn from_fields(text: Option<String>, error: Option<String>) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

        if let Some(text) = non_empty(text) {
            Self::Success(text)
        } else if let Some(message) = non_empty(error) {
            Self::ProviderError(message)
        } else {
            Self::NoReply
        }
    }

    pub fn into_answer(self, model: Model) -> String {
        match self {
            Self::Success(text) => text,
            Self::ProviderError(message) => message,
            Self::TransportError(description) => format!("❌ Error: {description}"),
            Self::NoReply => model.no_reply(),
        }
    }
}

/// The request URL is stripped: Gemini carries its API key in the query string.
impl From<reqwest::Error> for Outcome {
    fn from(err: reqwest::Error) -> Self {
        Self::TransportError(err.without_url().to_string())
    }
}

/// Outbound adapter for a single provider.
#[async_trait]
pub trait Adapter: Send + Sync {
    fn model(&self) -> Model;

    /// Issue the outbound call. Never fails; failures are encoded in the outcome.
    async fn ask(&self, question: &str) -> Outcome;

    /// Ask and flatten the outcome into the answer text returned to callers.
    async fn answer(&self, question: &str) -> String {
        let model = self.model();
        let outcome = self.ask(question).await;
        match &outcome {
            Outcome::Success(_) => {}
            Outcome::ProviderError(message) => {
                warn!(%model, error = %message, "provider returned an error");
            }
            Outcome::TransportError(description) => {
                warn!(%model, error = %description, "provider call failed");
            }
            Outcome::NoReply => warn!(%model, "provider returned no answer"),
        }
        outcome.into_answer(model)
    }
}


#[cfg(test)]
mod internal_tests {
    use super::tests::MockAdapter;
    use super::*;

    #[test]
    fn selector_is_exact_and_case_sensitive() {
        assert_eq!(Model::from_selector("gpt"), Some(Model::Gpt));
        assert_eq!(Model::from_selector("gemini"), Some(Model::Gemini));
        assert_eq!(Model::from_selector("GPT"), None);
        assert_eq!(Model::from_selector("home"), None);
    }

    #[test]
    fn text_wins_over_error_message() {
        let outcome = Outcome::from_fields(Some("4".into()), Some("quota".into()));
        assert_eq!(outcome, Outcome::Success("4".into()));
    }

    #[test]
    fn empty_text_falls_back_to_error_then_sentinel() {
        assert_eq!(
            Outcome::from_fields(Some(String::new()), Some("bad key".into())),
            Outcome::ProviderError("bad key".into())
        );
        assert_eq!(
            Outcome::from_fields(Some(String::new()), Some(String::new())),
            Outcome::NoReply
        );
        assert_eq!(Outcome::from_fields(None, None), Outcome::NoReply);
    }

    #[test]
    fn outcomes_flatten_into_answer_text() {
        assert_eq!(Outcome::Success("hi".into()).into_answer(Model::Gpt), "hi");
        assert_eq!(
            Outcome::ProviderError("Invalid API key".into()).into_answer(Model::Gpt),
            "Invalid API key"
        );
        assert_eq!(
            Outcome::TransportError("connection refused".into()).into_answer(Model::Gemini),
            "❌ Error: connection refused"
        );
        assert_eq!(Outcome::NoReply.into_answer(Model::Gpt), "⚠️ No reply from GPT");
        assert_eq!(
            Outcome::NoReply.into_answer(Model::Gemini),
            "⚠️ No reply from Gemini"
        );
    }

    #[tokio::test]
    async fn transport_errors_do_not_echo_the_request_url() {
        let err = reqwest::Client::new()
            .post("http://127.0.0.1:1/v1/models/m:generateContent?key=secret-key")
            .send()
            .await
            .unwrap_err();

        let answer = Outcome::from(err).into_answer(Model::Gemini);

        assert!(answer.starts_with("❌ Error: "), "answer was {answer:?}");
        assert!(!answer.contains("secret-key"), "answer was {answer:?}");
        assert!(!answer.contains("127.0.0.1"), "answer was {answer:?}");
    }

    #[tokio::test]
    async fn answer_uses_adapter_model_for_sentinel() {
        let adapter = MockAdapter::new(Model::Gemini, Outcome::NoReply);
        assert_eq!(adapter.answer("hello").await, "⚠️ No reply from Gemini");
        assert_eq!(adapter.calls(), 1);
    }
}
