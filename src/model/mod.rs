use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::web::models::Message;

#[cfg(test)]
pub mod fake;

pub const MODEL: &str = "mistralai/mistral-7b-instruct";
pub const MAX_TOKENS: u32 = 1000;
pub const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Connection error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Error code: {status} - {body}")]
    Api { status: u16, body: String },
    #[error("Failed to decode completion response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Completion response contained no choices")]
    NoChoices,
    #[error("Completion response contained no message content")]
    MissingContent,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

// Client for an OpenAI-compatible chat completions API
pub struct CompletionGateway {
    base_url: String,
    api_key: String,
    client: Client,
}

impl CompletionGateway {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        info!("Using completion API at: {}", base_url);

        Self {
            base_url,
            api_key: api_key.into(),
            client: Client::new(),
        }
    }

    /// Sends the full message list and returns the first choice's content.
    pub async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);

        let payload = json!({
            "model": MODEL,
            "messages": messages,
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        });

        info!(
            "Sending {} messages to {} with max_tokens: {}",
            messages.len(),
            MODEL,
            MAX_TOKENS
        );
        debug!("Payload: {}", payload);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Response body: {}", body);
        let parsed: CompletionResponse = serde_json::from_str(&body)?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::NoChoices)?
            .message
            .content
            .ok_or(CompletionError::MissingContent)?;

        info!("Response length: {} characters", content.len());
        Ok(content)
    }
}
