use clap::{Parser, Subcommand};
use studylog_core::{ProviderKind, Settings};

#[derive(Parser)]
#[command(name = "studylog")]
#[command(about = "StudyLog - learning records with weekly AI reports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database URL
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    /// Model used for reports
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Model provider (ollama, openai)
    #[arg(long, global = true)]
    pub provider: Option<ProviderKind>,
}

impl Cli {
    /// Command-line flags take precedence over loaded settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(url) = &self.database_url {
            settings.database_url = url.clone();
        }
        if let Some(model) = &self.model {
            settings.model = model.clone();
        }
        if let Some(provider) = self.provider {
            settings.provider = provider;
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a learning record
    Add {
        /// What you are working towards
        goal: String,

        /// What you did today
        daily_record: String,
    },

    /// List all records
    List,

    /// Delete every record
    Reset {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },

    /// Generate a report from all records
    Report,

    /// Start API server
    Serve {
        /// Port to listen on (defaults to the configured api_port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Initialize database
    InitDb,
}
