use crate::{generator::TextGenerator, Result};
use std::sync::Arc;
use studylog_core::{Record, Report, DEFAULT_REPORT_INSTRUCTION};

/// Turns the full record set into a summary via a [`TextGenerator`].
pub struct ReportGenerator {
    generator: Arc<dyn TextGenerator>,
    instruction: String,
}

impl ReportGenerator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            instruction: DEFAULT_REPORT_INSTRUCTION.to_string(),
        }
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn model(&self) -> &str {
        self.generator.model()
    }

    /// Instruction line followed by one `Goal: .., Daily Record: ..` line per record.
    pub fn build_prompt(&self, records: &[Record]) -> String {
        let records_text = records
            .iter()
            .map(Record::prompt_line)
            .collect::<Vec<_>>()
            .join("\n");

        format!("{}\n{}", self.instruction, records_text)
    }

    /// Summarize `records`. Never fails: model errors come back as
    /// [`Report::Failed`].
    pub async fn generate_report(&self, records: &[Record]) -> Report {
        if records.is_empty() {
            tracing::info!("No records, skipping report generation");
            return Report::NoRecords;
        }

        match self.try_generate(records).await {
            Ok(text) => {
                tracing::info!("Generated report from {} records", records.len());
                Report::Generated(text)
            }
            Err(e) => {
                tracing::error!("Report generation failed: {}", e);
                Report::Failed(e.to_string())
            }
        }
    }

    async fn try_generate(&self, records: &[Record]) -> Result<String> {
        let prompt = self.build_prompt(records);
        tracing::debug!(
            "Requesting report from {} ({} records, {} bytes)",
            self.generator.model(),
            records.len(),
            prompt.len()
        );

        let response = self.generator.generate(&prompt).await?;
        let report = response.trim();

        if report.is_empty() {
            return Err(crate::Error::EmptyResponse);
        }

        Ok(report.to_string())
    }
}
