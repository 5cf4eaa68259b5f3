//! Client for the OpenAI-compatible chat completions API.

use std::time::Duration;

use thiserror::Error;

use crate::models::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat, UpstreamErrorBody,
};

const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{API_KEY_VAR} is not set")]
    MissingApiKey,
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("no content returned from upstream")]
    EmptyResponse,
}

pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl UpstreamClient {
    /// Reads the API key from the environment. A missing key is fatal at
    /// startup, like any other configuration error.
    pub fn from_env(
        base_url: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| UpstreamError::MissingApiKey)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
            model,
            timeout,
        })
    }

    /// Sends one system-instruction/user-content pair and returns the raw
    /// message content, which the caller expects to parse as JSON.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_content: &str,
    ) -> Result<String, UpstreamError> {
        let body = request_body(&self.model, system_prompt, user_content);

        let res = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let message = res
                .json::<UpstreamErrorBody>()
                .await
                .map(|b| b.error.message)
                .unwrap_or_default();
            return Err(UpstreamError::Status {
                status,
                message: if message.is_empty() {
                    "unknown error".to_string()
                } else {
                    message
                },
            });
        }

        let parsed: ChatCompletionResponse = res.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();
        if content.is_empty() {
            return Err(UpstreamError::EmptyResponse);
        }
        Ok(content)
    }
}

fn request_body(model: &str, system_prompt: &str, user_content: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: system_prompt.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_content.to_string(),
            },
        ],
        response_format: ResponseFormat {
            kind: "json_object".to_string(),
        },
        // Output is capped; the endpoints only need short structured JSON.
        temperature: 0.7,
        max_tokens: 2000,
    }
}
