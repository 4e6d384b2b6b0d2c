use axum::Json;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::{StatusCode, request::Parts};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Key, PrivateCookieJar};
use serde_json::json;

use crate::router::AppState;

pub const SESSION_COOKIE: &str = "handraise_session";
pub(crate) const SESSION_VALUE: &str = "teacher";

/// Ensure the request carries a valid teacher session.
/// The session is an encrypted private cookie set by a successful login;
/// anything else (absent, tampered, wrong value) is rejected.
pub fn ensure_teacher(jar: &PrivateCookieJar) -> Result<(), Response> {
    if let Some(cookie) = jar.get(SESSION_COOKIE)
        && cookie.value() == SESSION_VALUE
    {
        return Ok(());
    }

    Err((
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "unauthorized", "reason": "teacher login required"})),
    )
        .into_response())
}

#[derive(Debug, Clone, Copy)]
pub struct TeacherSession;

impl FromRequestParts<AppState> for TeacherSession {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::from_headers(&parts.headers, Key::from_ref(state));
        ensure_teacher(&jar)?;
        Ok(Self)
    }
}
