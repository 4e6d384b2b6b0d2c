use axum::{Json, http::StatusCode, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use subtle::ConstantTimeEq;
use time::Duration;
use tracing::{info, warn};

use crate::config::CONFIG;
use crate::error::HandraiseError;
use crate::middleware::auth::{SESSION_COOKIE, SESSION_VALUE};
use crate::types::api::LoginRequest;

const SESSION_TTL_HOURS: i64 = 8;

/// POST /api/login -> sets the teacher session cookie when both configured
/// credentials match. Comparison is constant-time; a failed attempt changes
/// no state and is not rate limited.
pub async fn login_handler(
    jar: PrivateCookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, HandraiseError> {
    let authorized = req.username.as_bytes().ct_eq(CONFIG.teacher_username.as_bytes())
        & req.password.as_bytes().ct_eq(CONFIG.teacher_password.as_bytes());
    if !bool::from(authorized) {
        warn!("rejected teacher login attempt");
        return Err(HandraiseError::InvalidCredentials);
    }

    let jar = jar.add(session_cookie());
    info!("teacher logged in");
    Ok((jar, StatusCode::NO_CONTENT))
}

/// POST /api/logout -> clears the session cookie.
pub async fn logout_handler(jar: PrivateCookieJar) -> impl IntoResponse {
    let jar = jar.remove(clear_session_cookie());
    info!("teacher logged out");
    (jar, StatusCode::NO_CONTENT)
}

fn session_cookie() -> Cookie<'static> {
    Cookie::build(Cookie::new(
        SESSION_COOKIE.to_string(),
        SESSION_VALUE.to_string(),
    ))
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .max_age(Duration::hours(SESSION_TTL_HOURS))
    .build()
}

fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE.to_string(), String::new()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
