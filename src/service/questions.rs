use tracing::info;

use crate::db::{ClassroomStorage, Question};
use crate::error::HandraiseError;
use crate::types::api::ArchiveEntry;

#[derive(Clone)]
pub struct QuestionService {
    storage: ClassroomStorage,
}

impl QuestionService {
    pub fn new(storage: ClassroomStorage) -> Self {
        Self { storage }
    }

    /// Post a new question. It becomes the current question immediately;
    /// answers in flight against the previous question keep their old
    /// question_id and are not reattributed.
    pub async fn submit_question(&self, text: &str) -> Result<Question, HandraiseError> {
        let question = self.storage.insert_question(text).await?;
        info!(question_id = question.id, "question submitted");
        Ok(question)
    }

    /// The most recently posted question. `None` before the first post is a
    /// normal state, not a fault.
    pub async fn current_question(&self) -> Result<Option<Question>, HandraiseError> {
        self.storage.latest_question().await
    }

    pub async fn list_questions_desc(&self) -> Result<Vec<Question>, HandraiseError> {
        self.storage.list_questions_desc().await
    }

    /// Every question newest-first, each with its responses in
    /// first-submission order and a response count.
    pub async fn archive(&self) -> Result<Vec<ArchiveEntry>, HandraiseError> {
        let questions = self.storage.list_questions_desc().await?;
        let mut entries = Vec::with_capacity(questions.len());
        for question in questions {
            let responses = self.storage.list_responses_for(question.id).await?;
            let response_count = responses.len();
            entries.push(ArchiveEntry {
                question,
                responses,
                response_count,
            });
        }
        Ok(entries)
    }
}
