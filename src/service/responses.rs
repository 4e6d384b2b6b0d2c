use serde::Serialize;
use tracing::info;

use crate::db::{ClassroomStorage, StudentResponse};
use crate::error::HandraiseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertOutcome {
    Created,
    Updated,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseUpsert {
    pub id: i64,
    pub outcome: UpsertOutcome,
}

#[derive(Clone)]
pub struct ResponseService {
    storage: ClassroomStorage,
}

impl ResponseService {
    pub fn new(storage: ClassroomStorage) -> Self {
        Self { storage }
    }

    /// Store or replace the student's answer for one question. Writes
    /// against an unknown question are rejected rather than left to create
    /// orphaned rows.
    pub async fn upsert_response(
        &self,
        question_id: i64,
        student_name: &str,
        text: &str,
    ) -> Result<ResponseUpsert, HandraiseError> {
        if self.storage.get_question(question_id).await?.is_none() {
            return Err(HandraiseError::QuestionNotFound(question_id));
        }
        let (row, created) = self
            .storage
            .upsert_response(question_id, student_name, text)
            .await?;
        let outcome = if created {
            UpsertOutcome::Created
        } else {
            UpsertOutcome::Updated
        };
        info!(
            question_id,
            response_id = row.id,
            outcome = ?outcome,
            "stored student response"
        );
        Ok(ResponseUpsert {
            id: row.id,
            outcome,
        })
    }

    pub async fn list_responses_for(
        &self,
        question_id: i64,
    ) -> Result<Vec<StudentResponse>, HandraiseError> {
        self.storage.list_responses_for(question_id).await
    }

    /// The student's existing answer, used to pre-fill the edit form.
    pub async fn get_response_for(
        &self,
        question_id: i64,
        student_name: &str,
    ) -> Result<Option<StudentResponse>, HandraiseError> {
        self.storage.get_response(question_id, student_name).await
    }
}
