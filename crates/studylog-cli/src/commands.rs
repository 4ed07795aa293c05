use anyhow::{bail, Result};
use std::sync::Arc;

use crate::cli::Commands;
use studylog_ai::ReportGenerator;
use studylog_api::ApiState;
use studylog_core::{RecordStore, Report, Settings};

pub async fn execute(command: Commands, store: Arc<dyn RecordStore>, settings: &Settings) -> Result<()> {
    match command {
        Commands::Add { goal, daily_record } => {
            let record = store.add(&goal, &daily_record).await?;
            println!("✓ Record added: #{}", record.id);
        }

        Commands::List => {
            let records = store.list_all().await?;
            if records.is_empty() {
                println!("No records yet.");
            }
            for record in records {
                println!("#{:<4} Goal: {}", record.id, record.goal);
                println!("      Daily Record: {}", record.daily_record);
            }
        }

        Commands::Reset { yes } => {
            if !yes {
                bail!("Refusing to delete all records without --yes");
            }
            store.reset().await?;
            println!("✓ All records deleted");
        }

        Commands::Report => {
            let records = store.list_all().await?;
            let reporter = reporter(settings)?;

            println!("Generating report with {} ({} records)...\n", reporter.model(), records.len());
            let report = reporter.generate_report(&records).await;
            println!("{}", report);

            if let Report::Failed(_) = report {
                tracing::warn!("Check that the {} server at {} is running", settings.provider, settings.llm_base_url);
            }
        }

        Commands::Serve { port } => {
            let port = port.unwrap_or(settings.api_port);
            let state = ApiState::new(store, Arc::new(reporter(settings)?));

            println!("Starting API server on port {}...", port);
            studylog_api::server::run(state, port).await?;
        }

        Commands::InitDb => {
            // Schema is created before every command runs
            println!("✓ Database initialized: {}", settings.database_url);
        }
    }

    Ok(())
}

fn reporter(settings: &Settings) -> Result<ReportGenerator> {
    let generator = studylog_ai::build_generator(settings)?;
    Ok(ReportGenerator::new(generator).with_instruction(settings.instruction()))
}
