use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studylog_api::{server, ApiState};
use studylog_core::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studylog_api=debug,studylog_db=debug,studylog_ai=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let settings = Settings::load()?;

    if settings.database_url.contains(":memory:") {
        tracing::warn!("Using an in-memory database, records will not survive a restart");
    }

    let state = ApiState::from_settings(&settings).await?;

    server::run(state, settings.api_port).await
}
