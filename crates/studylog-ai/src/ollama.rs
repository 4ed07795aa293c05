use crate::{
    generator::{check_status, http_client, trim_base_url, TextGenerator},
    Result,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for a local or remote Ollama server (`/api/generate`).
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: String, model: String, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: trim_base_url(base_url),
            model,
        })
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        tracing::debug!("Ollama request: model={} prompt_len={}", self.model, prompt.len());

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                stream: false,
            })
            .send()
            .await?;

        let response = check_status(response, &self.model).await?;

        let body = response.text().await?;
        let result: GenerateResponse = serde_json::from_str(&body).map_err(|e| {
            crate::Error::ParseError(format!("Unexpected Ollama response: {}", e))
        })?;

        Ok(result.response)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}
