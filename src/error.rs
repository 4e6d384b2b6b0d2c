use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum HandraiseError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("question {0} does not exist")]
    QuestionNotFound(i64),

    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("invalid username or password")]
    InvalidCredentials,
}

impl IntoResponse for HandraiseError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            HandraiseError::Database(ref e) => {
                tracing::error!(error = %e, "database failure");
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
            HandraiseError::QuestionNotFound(id) => {
                let body = ApiErrorBody {
                    code: "QUESTION_NOT_FOUND".to_string(),
                    message: format!("question {id} does not exist"),
                };
                (StatusCode::NOT_FOUND, body)
            }
            HandraiseError::EmptyField(field) => {
                let body = ApiErrorBody {
                    code: "EMPTY_FIELD".to_string(),
                    message: format!("field `{field}` must not be empty"),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, body)
            }
            HandraiseError::InvalidCredentials => {
                let body = ApiErrorBody {
                    code: "INVALID_CREDENTIALS".to_string(),
                    message: "Invalid username or password.".to_string(),
                };
                (StatusCode::UNAUTHORIZED, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
