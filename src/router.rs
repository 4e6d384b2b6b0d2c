use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;

use crate::db::ClassroomStorage;
use crate::handlers::export::share_card_handler;
use crate::handlers::questions::{
    archive_handler, current_question_handler, list_questions_handler, submit_question_handler,
};
use crate::handlers::responses::{
    get_response_handler, list_responses_handler, upsert_response_handler,
};
use crate::handlers::session::{login_handler, logout_handler};
use crate::service::{QuestionService, ResponseService};

#[derive(Clone)]
pub struct AppState {
    pub questions: QuestionService,
    pub responses: ResponseService,
    cookie_key: Key,
}

impl AppState {
    pub fn new(storage: ClassroomStorage, cookie_key: Key) -> Self {
        Self {
            questions: QuestionService::new(storage.clone()),
            responses: ResponseService::new(storage),
            cookie_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}

/// One route per user action; each handler makes one service call.
pub fn handraise_router(state: AppState) -> Router {
    Router::new()
        .route("/api/login", post(login_handler))
        .route("/api/logout", post(logout_handler))
        .route(
            "/api/questions",
            get(list_questions_handler).post(submit_question_handler),
        )
        .route("/api/questions/current", get(current_question_handler))
        .route(
            "/api/questions/{question_id}/responses",
            get(list_responses_handler).post(upsert_response_handler),
        )
        .route(
            "/api/questions/{question_id}/responses/{student_name}",
            get(get_response_handler),
        )
        .route("/api/archive", get(archive_handler))
        .route("/api/cards", post(share_card_handler))
        .with_state(state)
}
