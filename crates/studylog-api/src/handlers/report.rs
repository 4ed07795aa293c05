use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::{error_response, ApiError};
use crate::state::ApiState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportResponse {
    pub status: String,
    pub report: String,
    pub model: String,
    pub record_count: usize,
    pub generated_at: String,
}

/// Summarize every stored record.
///
/// Model failures still answer 200; `status` is `failed` and `report`
/// carries the error text. Only a storage failure is an error response.
pub async fn generate_report(State(state): State<ApiState>) -> Result<Json<ReportResponse>, ApiError> {
    let records = state.store.list_all().await.map_err(error_response)?;

    let report = state.reporter.generate_report(&records).await;

    Ok(Json(ReportResponse {
        status: report.status().to_string(),
        report: report.text(),
        model: state.reporter.model().to_string(),
        record_count: records.len(),
        generated_at: chrono::Utc::now().to_rfc3339(),
    }))
}
