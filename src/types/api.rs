use serde::{Deserialize, Serialize};

use crate::db::{Question, StudentResponse};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitQuestionRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionCreated {
    pub id: i64,
}

/// `question` is `null` before the first question is posted.
#[derive(Debug, Serialize)]
pub struct CurrentQuestion {
    pub question: Option<Question>,
}

#[derive(Debug, Deserialize)]
pub struct UpsertResponseRequest {
    pub student_name: String,
    pub text: String,
}

/// `response` is `null` when the student has not answered yet.
#[derive(Debug, Serialize)]
pub struct StoredResponse {
    pub response: Option<StudentResponse>,
}

#[derive(Debug, Serialize)]
pub struct ArchiveEntry {
    pub question: Question,
    pub responses: Vec<StudentResponse>,
    pub response_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct ShareCardRequest {
    pub student_name: String,
    pub text: String,
}
