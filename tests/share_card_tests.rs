use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use axum_extra::extract::cookie::Key;
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

use handraise::db::ClassroomStorage;
use handraise::router::{AppState, handraise_router};

async fn spawn_app(tag: &str) -> (axum::Router, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "handraise-{}-{}-{}.sqlite",
        tag,
        std::process::id(),
        nanos
    ));
    let database_url = format!("sqlite:{}", temp_path.display());
    let storage = ClassroomStorage::connect(&database_url)
        .await
        .expect("failed to open test database");
    let state = AppState::new(storage, Key::generate());
    (handraise_router(state), temp_path)
}

fn card_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/cards")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

async fn read_text(resp: axum::response::Response) -> String {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(body.to_vec()).expect("response body was not utf-8")
}

#[tokio::test]
async fn card_embeds_name_and_text() {
    let (app, temp_path) = spawn_app("card").await;

    let resp = app
        .clone()
        .oneshot(card_request(r#"{"student_name":"Alice","text":"Four"}"#))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::CONTENT_TYPE)
            .expect("missing content type"),
        "image/svg+xml"
    );
    let svg = read_text(resp).await;
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Alice"));
    assert!(svg.contains("Four"));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn card_escapes_markup_in_the_answer() {
    let (app, temp_path) = spawn_app("card-escape").await;

    let resp = app
        .clone()
        .oneshot(card_request(
            r#"{"student_name":"Alice","text":"<b>bold</b> & more"}"#,
        ))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let svg = read_text(resp).await;
    assert!(svg.contains("&lt;b&gt;bold&lt;/b&gt; &amp; more"));
    assert!(!svg.contains("<b>"));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn blank_card_fields_are_rejected() {
    let (app, temp_path) = spawn_app("card-blank").await;

    let resp = app
        .clone()
        .oneshot(card_request(r#"{"student_name":"","text":"Four"}"#))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let _ = fs::remove_file(&temp_path);
}
