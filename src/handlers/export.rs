use axum::{Json, http::header, response::IntoResponse};

use crate::error::HandraiseError;
use crate::service::share_card;
use crate::types::api::ShareCardRequest;

use super::require_non_empty;

/// POST /api/cards -> renders a (student_name, text) pair onto a fixed-size
/// card, returned as an SVG artifact.
pub async fn share_card_handler(
    Json(req): Json<ShareCardRequest>,
) -> Result<impl IntoResponse, HandraiseError> {
    require_non_empty(&req.student_name, "student_name")?;
    require_non_empty(&req.text, "text")?;
    let svg = share_card::render_card(&req.student_name, &req.text);
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
