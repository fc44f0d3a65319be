//! OpenAI-compatible responder implementation.
//!
//! Works with: OpenAI, OpenRouter, Ollama, Groq, and any endpoint exposing
//! an OpenAI-compatible `/v1/chat/completions` API.

use async_trait::async_trait;
use garcon_core::Responder;
use garcon_core::error::ResponderError;
use serde::Deserialize;
use tracing::{debug, warn};

/// Instructions sent with every general-chat request.
const SYSTEM_PROMPT: &str = "You are a friendly food ordering assistant. \
You help customers order food from a restaurant. Be helpful and guide them \
towards ordering. Keep responses concise and friendly.";

/// A responder backed by an OpenAI-compatible chat completion endpoint.
pub struct OpenAiCompatResponder {
    name: String,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    client: reqwest::Client,
}

impl OpenAiCompatResponder {
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            temperature,
            client,
        }
    }
}

#[async_trait]
impl Responder for OpenAiCompatResponder {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, message: &str) -> std::result::Result<String, ResponderError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": message },
            ],
            "temperature": self.temperature,
            "stream": false,
        });

        debug!(responder = %self.name, model = %self.model, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ResponderError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(ResponderError::RateLimited {
                retry_after_secs: 5,
            });
        }

        if status == 401 || status == 403 {
            return Err(ResponderError::AuthenticationFailed(
                "Invalid API key or insufficient permissions".into(),
            ));
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Responder backend returned error");
            return Err(ResponderError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: ApiResponse =
            response.json().await.map_err(|e| ResponderError::ApiError {
                status_code: 200,
                message: format!("Failed to parse response: {e}"),
            })?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ResponderError::ApiError {
                status_code: 200,
                message: "No choices in response".into(),
            })?;

        Ok(choice.message.content.unwrap_or_default())
    }
}

// --- OpenAI API types (internal) ---

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
