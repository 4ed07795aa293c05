//! Environment-driven settings. Kept in its own test binary with a single
//! test because it mutates process-wide environment variables.

use studylog_core::{ProviderKind, Settings, ValidationPolicy};

const VARS: [(&str, &str); 6] = [
    ("STUDYLOG_MODEL", "qwen2"),
    ("STUDYLOG_PROVIDER", "openai"),
    ("STUDYLOG_REQUEST_TIMEOUT_SECS", "5"),
    ("STUDYLOG_API_KEY", "12345"),
    ("STUDYLOG_DATABASE_URL", "sqlite://a.db"),
    ("DATABASE_URL", "sqlite://b.db"),
];

#[test]
fn test_load_from_environment() {
    for (key, value) in VARS {
        std::env::set_var(key, value);
    }

    let loaded = Settings::load();

    // DATABASE_URL removed: STUDYLOG_DATABASE_URL applies
    std::env::remove_var("DATABASE_URL");
    let without_override = Settings::load();

    for (key, _) in VARS {
        std::env::remove_var(key);
    }

    let settings = loaded.unwrap();
    assert_eq!(settings.database_url, "sqlite://b.db");
    assert_eq!(settings.provider, ProviderKind::OpenAi);
    assert_eq!(settings.model, "qwen2");
    assert_eq!(settings.request_timeout_secs, 5);
    assert_eq!(settings.api_key.as_deref(), Some("12345"));
    assert_eq!(settings.validation, ValidationPolicy::Trimmed);
    assert_eq!(settings.api_port, 3000);

    assert_eq!(without_override.unwrap().database_url, "sqlite://a.db");
}
