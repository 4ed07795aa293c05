/// Returned instead of a report when there is nothing to summarize.
pub const NO_RECORDS_MESSAGE: &str = "No learning records to analyze.";

/// Instruction placed ahead of the record lines when none is configured.
pub const DEFAULT_REPORT_INSTRUCTION: &str =
    "사용자의 학습 기록을 바탕으로 간단하고 짧은 리포트 하나를 한국어로만 생성해줘.";

/// Prefix of the text shown when the model call fails.
pub const REPORT_ERROR_PREFIX: &str = "Error generating report: ";

/// Outcome of a report request.
///
/// Report generation is best-effort: a failing model call is carried as
/// `Failed` rather than returned as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    NoRecords,
    Generated(String),
    Failed(String),
}

impl Report {
    /// User-visible text for every variant.
    pub fn text(&self) -> String {
        match self {
            Report::NoRecords => NO_RECORDS_MESSAGE.to_string(),
            Report::Generated(text) => text.clone(),
            Report::Failed(detail) => format!("{}{}", REPORT_ERROR_PREFIX, detail),
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Report::NoRecords => "no_records",
            Report::Generated(_) => "generated",
            Report::Failed(_) => "failed",
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Report::Failed(_))
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_records_text() {
        assert_eq!(Report::NoRecords.text(), "No learning records to analyze.");
        assert_eq!(Report::NoRecords.status(), "no_records");
    }

    #[test]
    fn test_failed_text_has_prefix() {
        let report = Report::Failed("connection refused".to_string());

        assert!(report.is_failed());
        assert_eq!(report.to_string(), "Error generating report: connection refused");
    }

    #[test]
    fn test_generated_text_is_passed_through() {
        let report = Report::Generated("이번 주 요약".to_string());
        assert_eq!(report.text(), "이번 주 요약");
        assert_eq!(report.status(), "generated");
    }
}
