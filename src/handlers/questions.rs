use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::db::Question;
use crate::error::HandraiseError;
use crate::middleware::TeacherSession;
use crate::router::AppState;
use crate::types::api::{ArchiveEntry, CurrentQuestion, QuestionCreated, SubmitQuestionRequest};

use super::require_non_empty;

/// POST /api/questions (teacher only) -> posts a new question, which becomes
/// the current one immediately.
pub async fn submit_question_handler(
    State(state): State<AppState>,
    _session: TeacherSession,
    Json(req): Json<SubmitQuestionRequest>,
) -> Result<impl IntoResponse, HandraiseError> {
    require_non_empty(&req.text, "text")?;
    let question = state.questions.submit_question(&req.text).await?;
    Ok((StatusCode::CREATED, Json(QuestionCreated { id: question.id })))
}

/// GET /api/questions/current -> the latest question, or null before any
/// was posted. Polled by clients to check for updates.
pub async fn current_question_handler(
    State(state): State<AppState>,
) -> Result<Json<CurrentQuestion>, HandraiseError> {
    let question = state.questions.current_question().await?;
    Ok(Json(CurrentQuestion { question }))
}

/// GET /api/questions -> all questions, most recent first.
pub async fn list_questions_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Question>>, HandraiseError> {
    Ok(Json(state.questions.list_questions_desc().await?))
}

/// GET /api/archive -> every question with its responses.
pub async fn archive_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArchiveEntry>>, HandraiseError> {
    Ok(Json(state.questions.archive().await?))
}
