use crate::{
    generator::{check_status, http_client, trim_base_url, TextGenerator},
    Result,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for any endpoint speaking `/v1/chat/completions`
/// (OpenAI, vLLM, LM Studio, Ollama's compatibility layer).
pub struct OpenAICompatibleClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAICompatibleClient {
    pub fn new(
        base_url: String,
        model: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: trim_base_url(base_url),
            model,
            api_key,
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAICompatibleClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        tracing::debug!("Chat completion request: model={} prompt_len={}", self.model, prompt.len());

        let mut request = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .json(&ChatRequest {
                model: &self.model,
                messages: vec![Message {
                    role: "user",
                    content: prompt,
                }],
                stream: false,
            });

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = check_status(request.send().await?, &self.model).await?;

        let body = response.text().await?;
        let result: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            crate::Error::ParseError(format!("Unexpected chat completion response: {}", e))
        })?;

        result
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| crate::Error::ParseError("Response contained no choices".to_string()))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
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
