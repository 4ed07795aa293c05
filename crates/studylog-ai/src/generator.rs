use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use studylog_core::{ProviderKind, Settings};

use crate::{OllamaClient, OpenAICompatibleClient, Result};

/// A text-generation backend: one prompt in, one completion out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier sent with every request
    fn model(&self) -> &str;

    /// Generate a completion for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Build the configured provider.
pub fn build_generator(settings: &Settings) -> Result<Arc<dyn TextGenerator>> {
    let timeout = Duration::from_secs(settings.request_timeout_secs);

    let generator: Arc<dyn TextGenerator> = match settings.provider {
        ProviderKind::Ollama => Arc::new(OllamaClient::new(
            settings.llm_base_url.clone(),
            settings.model.clone(),
            timeout,
        )?),
        ProviderKind::OpenAi => Arc::new(OpenAICompatibleClient::new(
            settings.llm_base_url.clone(),
            settings.model.clone(),
            settings.api_key.clone(),
            timeout,
        )?),
    };

    tracing::info!(
        "Using {} provider with model {} at {}",
        settings.provider,
        settings.model,
        settings.llm_base_url
    );

    Ok(generator)
}

pub(crate) fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| crate::Error::ConfigError(format!("Failed to build HTTP client: {}", e)))
}

/// Map non-success statuses onto provider errors.
pub(crate) async fn check_status(response: Response, model: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_default();

    if status == StatusCode::NOT_FOUND {
        return Err(crate::Error::ModelNotAvailable(model.to_string()));
    }

    Err(crate::Error::ApiError(format!("{}: {}", status, error_text)))
}

pub(crate) fn trim_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}
