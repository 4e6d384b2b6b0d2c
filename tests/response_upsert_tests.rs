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

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

async fn read_json(resp: axum::response::Response) -> serde_json::Value {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&body).expect("response body was not json")
}

async fn login(app: &axum::Router) -> String {
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/login",
            r#"{"username":"teacher","password":"password"}"#,
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    resp.headers()
        .get(header::SET_COOKIE)
        .expect("missing session cookie")
        .to_str()
        .expect("cookie was not ascii")
        .split(';')
        .next()
        .expect("empty set-cookie header")
        .to_string()
}

async fn submit_question(app: &axum::Router, cookie: &str, text: &str) -> i64 {
    let req = Request::builder()
        .method("POST")
        .uri("/api/questions")
        .header("content-type", "application/json")
        .header(header::COOKIE, cookie)
        .body(Body::from(format!(r#"{{"text":"{text}"}}"#)))
        .expect("failed to build request");
    let resp = app.clone().oneshot(req).await.expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    read_json(resp).await["id"].as_i64().expect("question id")
}

async fn submit_response(
    app: &axum::Router,
    question_id: i64,
    name: &str,
    text: &str,
) -> axum::response::Response {
    app.clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/questions/{question_id}/responses"),
            &format!(r#"{{"student_name":"{name}","text":"{text}"}}"#),
        ))
        .await
        .expect("request failed")
}

async fn list_responses(app: &axum::Router, question_id: i64) -> serde_json::Value {
    let resp = app
        .clone()
        .oneshot(json_request(
            "GET",
            &format!("/api/questions/{question_id}/responses"),
            "",
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    read_json(resp).await
}

#[tokio::test]
async fn resubmission_replaces_the_answer_in_place() {
    let (app, temp_path) = spawn_app("resubmit").await;
    let cookie = login(&app).await;
    let question_id = submit_question(&app, &cookie, "What is 2+2?").await;

    let resp = submit_response(&app, question_id, "Alice", "4").await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    assert_eq!(created["outcome"], "created");
    let response_id = created["id"].as_i64().expect("response id");

    let resp = submit_response(&app, question_id, "Alice", "Four").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = read_json(resp).await;
    assert_eq!(updated["outcome"], "updated");
    assert_eq!(updated["id"].as_i64(), Some(response_id));

    let listed = list_responses(&app, question_id).await;
    let listed = listed.as_array().expect("response list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["student_name"], "Alice");
    assert_eq!(listed[0]["text"], "Four");

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn students_are_listed_in_first_submission_order() {
    let (app, temp_path) = spawn_app("submission-order").await;
    let cookie = login(&app).await;
    let question_id = submit_question(&app, &cookie, "What is 2+2?").await;

    assert_eq!(
        submit_response(&app, question_id, "Alice", "4").await.status(),
        StatusCode::CREATED
    );
    assert_eq!(
        submit_response(&app, question_id, "Bob", "four").await.status(),
        StatusCode::CREATED
    );
    // Alice editing her answer must not reorder the list.
    assert_eq!(
        submit_response(&app, question_id, "Alice", "Four").await.status(),
        StatusCode::OK
    );

    let listed = list_responses(&app, question_id).await;
    let listed = listed.as_array().expect("response list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["student_name"], "Alice");
    assert_eq!(listed[0]["text"], "Four");
    assert_eq!(listed[1]["student_name"], "Bob");

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn responses_stay_with_their_question() {
    let (app, temp_path) = spawn_app("question-isolation").await;
    let cookie = login(&app).await;

    let first_id = submit_question(&app, &cookie, "What is 2+2?").await;
    assert_eq!(
        submit_response(&app, first_id, "Alice", "4").await.status(),
        StatusCode::CREATED
    );

    let second_id = submit_question(&app, &cookie, "Name a prime number").await;

    let resp = app
        .clone()
        .oneshot(json_request("GET", "/api/questions/current", ""))
        .await
        .expect("request failed");
    let current = read_json(resp).await;
    assert_eq!(current["question"]["id"].as_i64(), Some(second_id));

    let first_responses = list_responses(&app, first_id).await;
    let first_responses = first_responses.as_array().expect("response list");
    assert_eq!(first_responses.len(), 1);
    assert_eq!(first_responses[0]["student_name"], "Alice");
    assert_eq!(first_responses[0]["text"], "4");

    let second_responses = list_responses(&app, second_id).await;
    assert_eq!(second_responses.as_array().expect("response list").len(), 0);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn answering_an_unknown_question_is_not_found() {
    let (app, temp_path) = spawn_app("unknown-question").await;

    let resp = submit_response(&app, 999, "Alice", "4").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let value = read_json(resp).await;
    assert_eq!(value["error"]["code"], "QUESTION_NOT_FOUND");

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn blank_name_or_text_is_rejected() {
    let (app, temp_path) = spawn_app("blank-response").await;
    let cookie = login(&app).await;
    let question_id = submit_question(&app, &cookie, "What is 2+2?").await;

    let resp = submit_response(&app, question_id, " ", "4").await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = submit_response(&app, question_id, "Alice", "  ").await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let listed = list_responses(&app, question_id).await;
    assert_eq!(listed.as_array().expect("response list").len(), 0);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn existing_answer_prefills_the_edit_form() {
    let (app, temp_path) = spawn_app("prefill").await;
    let cookie = login(&app).await;
    let question_id = submit_question(&app, &cookie, "What is 2+2?").await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "GET",
            &format!("/api/questions/{question_id}/responses/Alice"),
            "",
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let value = read_json(resp).await;
    assert!(value["response"].is_null());

    assert_eq!(
        submit_response(&app, question_id, "Alice", "4").await.status(),
        StatusCode::CREATED
    );
    assert_eq!(
        submit_response(&app, question_id, "Alice", "Four").await.status(),
        StatusCode::OK
    );

    let resp = app
        .clone()
        .oneshot(json_request(
            "GET",
            &format!("/api/questions/{question_id}/responses/Alice"),
            "",
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let value = read_json(resp).await;
    assert_eq!(value["response"]["text"], "Four");
    assert_eq!(value["response"]["student_name"], "Alice");

    let _ = fs::remove_file(&temp_path);
}
