//! Generate-content (Gemini) adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{Adapter, Model, Outcome};
use crate::config::GeminiSettings;

/// Google Gemini generate-content client.
pub struct Gemini {
    client: Client,
    settings: GeminiSettings,
}

impl Gemini {
    pub fn new(settings: GeminiSettings) -> Self {
        Self::with_client(Client::new(), settings)
    }

    pub fn with_client(client: Client, settings: GeminiSettings) -> Self {
        Self { client, settings }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.base_url, self.settings.model
        )
    }

    /// The API has no system role, so a persona is folded into the user text.
    fn prompt_text(&self, question: &str) -> String {
        match self.settings.persona.as_deref() {
            Some(persona) => format!("{persona}\n\n{question}"),
            None => question.to_string(),
        }
    }

    fn request_body(&self, question: &str) -> Request {
        Request {
            contents: vec![Content {
                parts: vec![Part {
                    text: self.prompt_text(question),
                }],
            }],
        }
    }
}

#[derive(Serialize)]
struct Request {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Response {
    candidates: Vec<Candidate>,
    error: Option<ApiError>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ApiError {
    message: Option<String>,
}

impl Response {
    fn into_outcome(self) -> Outcome {
        let text = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text);
        Outcome::from_fields(text, self.error.and_then(|e| e.message))
    }
}

#[async_trait]
impl Adapter for Gemini {
    fn model(&self) -> Model {
        Model::Gemini
    }

    async fn ask(&self, question: &str) -> Outcome {
        let sent = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.settings.api_key.as_str())])
            .json(&self.request_body(question))
            .send()
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(e) => return e.into(),
        };

        match response.json::<Response>().await {
            Ok(body) => body.into_outcome(),
            Err(e) => e.into(),
        }
    }
}
