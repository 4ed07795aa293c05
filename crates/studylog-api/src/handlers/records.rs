use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use studylog_core::Record;

use super::{error_response, ApiError};
use crate::state::ApiState;

#[derive(Debug, Serialize, Deserialize)]
pub struct AddRecordRequest {
    pub goal: String,
    pub daily_record: String,
}

/// List all records in insertion order
pub async fn list_records(State(state): State<ApiState>) -> Result<Json<Vec<Record>>, ApiError> {
    state
        .store
        .list_all()
        .await
        .map(Json)
        .map_err(error_response)
}

/// Add a record
pub async fn add_record(
    State(state): State<ApiState>,
    Json(payload): Json<AddRecordRequest>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let record = state
        .store
        .add(&payload.goal, &payload.daily_record)
        .await
        .map_err(error_response)?;

    tracing::info!("Added record {}", record.id);

    Ok((StatusCode::CREATED, Json(record)))
}

/// Wipe every record
pub async fn reset_records(State(state): State<ApiState>) -> Result<StatusCode, ApiError> {
    state.store.reset().await.map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
