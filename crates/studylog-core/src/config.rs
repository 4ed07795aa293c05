use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, ValidationPolicy, DEFAULT_REPORT_INSTRUCTION};

/// Optional settings file read from the working directory.
pub const SETTINGS_FILE: &str = "studylog";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Ollama `/api/generate`
    #[default]
    Ollama,
    /// Any `/v1/chat/completions` endpoint
    OpenAi,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Ollama => write!(f, "ollama"),
            ProviderKind::OpenAi => write!(f, "openai"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ollama" => Ok(ProviderKind::Ollama),
            "openai" | "openai-compatible" => Ok(ProviderKind::OpenAi),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub provider: ProviderKind,
    pub model: String,
    pub llm_base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub request_timeout_secs: u64,
    pub validation: ValidationPolicy,
    #[serde(default)]
    pub report_instruction: Option<String>,
    pub api_port: u16,
}

impl Settings {
    /// Load settings from defaults, an optional `studylog.toml`, then the
    /// environment (`STUDYLOG_*`). `DATABASE_URL` overrides everything.
    pub fn load() -> Result<Self> {
        let builder = Self::defaults()?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(Environment::with_prefix("STUDYLOG").try_parsing(true))
            .set_override_option("database_url", std::env::var("DATABASE_URL").ok())
            .map_err(config_error)?;

        Self::build(builder)
    }

    /// Load settings from defaults overlaid with a TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let builder = Self::defaults()?.add_source(File::from_str(toml, FileFormat::Toml));
        Self::build(builder)
    }

    /// Instruction placed ahead of the record lines in report prompts
    pub fn instruction(&self) -> &str {
        self.report_instruction
            .as_deref()
            .unwrap_or(DEFAULT_REPORT_INSTRUCTION)
    }

    fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>> {
        Config::builder()
            .set_default("database_url", "sqlite://database.db")
            .and_then(|b| b.set_default("provider", "ollama"))
            .and_then(|b| b.set_default("model", "llama3"))
            .and_then(|b| b.set_default("llm_base_url", "http://localhost:11434"))
            .and_then(|b| b.set_default("request_timeout_secs", 60_i64))
            .and_then(|b| b.set_default("validation", "trimmed"))
            .and_then(|b| b.set_default("api_port", 3000_i64))
            .map_err(config_error)
    }

    fn build(builder: ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let settings: Settings = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(config_error)?;

        if settings.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        tracing::debug!(
            provider = %settings.provider,
            model = %settings.model,
            validation = %settings.validation,
            "settings loaded"
        );

        Ok(settings)
    }
}

fn config_error(e: config::ConfigError) -> Error {
    Error::Config(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_toml_str("").unwrap();

        assert_eq!(settings.database_url, "sqlite://database.db");
        assert_eq!(settings.provider, ProviderKind::Ollama);
        assert_eq!(settings.model, "llama3");
        assert_eq!(settings.llm_base_url, "http://localhost:11434");
        assert_eq!(settings.api_key, None);
        assert_eq!(settings.request_timeout_secs, 60);
        assert_eq!(settings.validation, ValidationPolicy::Trimmed);
        assert_eq!(settings.api_port, 3000);
        assert_eq!(settings.instruction(), DEFAULT_REPORT_INSTRUCTION);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_toml_str(
            r#"
            provider = "openai"
            model = "gpt-4o-mini"
            llm_base_url = "https://api.openai.com"
            api_key = "sk-test"
            validation = "presence"
            request_timeout_secs = 90
            report_instruction = "Write one short report in English."
            "#,
        )
        .unwrap();

        assert_eq!(settings.provider, ProviderKind::OpenAi);
        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.api_key.as_deref(), Some("sk-test"));
        assert_eq!(settings.validation, ValidationPolicy::Presence);
        assert_eq!(settings.request_timeout_secs, 90);
        assert_eq!(settings.instruction(), "Write one short report in English.");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Settings::from_toml_str("request_timeout_secs = 0").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_provider_rejected() {
        assert!(Settings::from_toml_str(r#"provider = "bard""#).is_err());
        assert_eq!("OpenAI".parse::<ProviderKind>(), Ok(ProviderKind::OpenAi));
    }
}
