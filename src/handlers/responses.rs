use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::db::StudentResponse;
use crate::error::HandraiseError;
use crate::router::AppState;
use crate::service::responses::UpsertOutcome;
use crate::types::api::{StoredResponse, UpsertResponseRequest};

use super::require_non_empty;

/// POST /api/questions/{question_id}/responses -> submit or edit one
/// student's answer. 201 on first submission, 200 on replacement.
pub async fn upsert_response_handler(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
    Json(req): Json<UpsertResponseRequest>,
) -> Result<impl IntoResponse, HandraiseError> {
    require_non_empty(&req.student_name, "student_name")?;
    require_non_empty(&req.text, "text")?;
    let upsert = state
        .responses
        .upsert_response(question_id, &req.student_name, &req.text)
        .await?;
    let status = match upsert.outcome {
        UpsertOutcome::Created => StatusCode::CREATED,
        UpsertOutcome::Updated => StatusCode::OK,
    };
    Ok((status, Json(upsert)))
}

/// GET /api/questions/{question_id}/responses -> all answers to one
/// question, in first-submission order.
pub async fn list_responses_handler(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<Json<Vec<StudentResponse>>, HandraiseError> {
    Ok(Json(state.responses.list_responses_for(question_id).await?))
}

/// GET /api/questions/{question_id}/responses/{student_name} -> the
/// student's existing answer, or null; used to pre-fill the edit form.
pub async fn get_response_handler(
    State(state): State<AppState>,
    Path((question_id, student_name)): Path<(i64, String)>,
) -> Result<Json<StoredResponse>, HandraiseError> {
    let response = state
        .responses
        .get_response_for(question_id, &student_name)
        .await?;
    Ok(Json(StoredResponse { response }))
}
