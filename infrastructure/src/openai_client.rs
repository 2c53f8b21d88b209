use crate::config::Config;
use domain::command::{CommandGenerator, GenerationError};
use domain::session::ChatMessage;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::telemetry::Telemetry;
use std::sync::Arc;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// Chat-completions client for OpenAI-compatible endpoints.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Arc<Client>,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Arc::new(Client::new()),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages,
        };

        let timer = Telemetry::new();
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;
        tracing::debug!(%status, elapsed_ms = timer.elapsed_ms(), "chat completion returned");

        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        parse_reply(&text)
    }
}

impl CommandGenerator for OpenAiClient {
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, GenerationError> {
        self.chat(messages).await
    }
}

/// Content of the first choice in a chat-completions body.
fn parse_reply(body: &str) -> Result<String, GenerationError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;
    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GenerationError::MalformedResponse("response has no choices".to_string()))?;
    choice.message.content.ok_or(GenerationError::EmptyCommand)
}
