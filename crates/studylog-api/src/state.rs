use std::sync::Arc;
use studylog_ai::ReportGenerator;
use studylog_core::{RecordStore, Settings};

#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<dyn RecordStore>,
    pub reporter: Arc<ReportGenerator>,
}

impl ApiState {
    pub fn new(store: Arc<dyn RecordStore>, reporter: Arc<ReportGenerator>) -> Self {
        Self { store, reporter }
    }

    /// Open the configured database, make sure the schema exists and
    /// build the configured report provider.
    pub async fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let database = studylog_db::Database::new(&settings.database_url)
            .await?
            .with_validation(settings.validation);
        let store: Arc<dyn RecordStore> = Arc::new(database);
        store.initialize().await?;

        let generator = studylog_ai::build_generator(settings)?;
        let reporter = ReportGenerator::new(generator).with_instruction(settings.instruction());

        Ok(Self::new(store, Arc::new(reporter)))
    }
}
