use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;

use cli::Cli;
use studylog_core::{RecordStore, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studylog=info,studylog_db=info,studylog_ai=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    let mut settings = Settings::load()?;
    cli.apply(&mut settings);

    run(cli, settings).await
}

async fn run(cli: Cli, settings: Settings) -> Result<()> {
    let database = studylog_db::Database::new(&settings.database_url)
        .await?
        .with_validation(settings.validation);
    database.initialize().await?;

    let store: Arc<dyn RecordStore> = Arc::new(database.clone());

    let result = commands::execute(cli.command, store, &settings).await;

    database.close().await;
    result
}
