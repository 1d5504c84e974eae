//! Chat-completion (GPT) adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{Adapter, Model, Outcome};
use crate::config::OpenAiSettings;

/// OpenAI chat-completions client.
pub struct OpenAi {
    client: Client,
    settings: OpenAiSettings,
}

impl OpenAi {
    pub fn new(settings: OpenAiSettings) -> Self {
        Self::with_client(Client::new(), settings)
    }

    pub fn with_client(client: Client, settings: OpenAiSettings) -> Self {
        Self { client, settings }
    }

    fn request_body<'a>(&'a self, question: &'a str) -> Request<'a> {
        let mut messages = Vec::with_capacity(2);
        if let Some(prompt) = self.settings.system_prompt.as_deref() {
            messages.push(Message {
                role: "system",
                content: prompt,
            });
        }
        messages.push(Message {
            role: "user",
            content: question,
        });

        Request {
            model: &self.settings.model,
            messages,
        }
    }
}

#[derive(Serialize)]
struct Request<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Response {
    choices: Vec<Choice>,
    error: Option<ApiError>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ApiError {
    message: Option<String>,
}

impl Response {
    fn into_outcome(self) -> Outcome {
        let text = self
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content);
        Outcome::from_fields(text, self.error.and_then(|e| e.message))
    }
}

#[async_trait]
impl Adapter for OpenAi {
    fn model(&self) -> Model {
        Model::Gpt
    }

    async fn ask(&self, question: &str) -> Outcome {
        let sent = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(&self.settings.api_key)
            .json(&self.request_body(question))
            .send()
            .await;

        // Error statuses still carry a JSON body with `error.message`.
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
