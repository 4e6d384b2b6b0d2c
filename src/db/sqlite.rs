use crate::db::models::{Question, StudentResponse};
use crate::db::schema::SQLITE_INIT;
use crate::error::HandraiseError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct ClassroomStorage {
    pool: SqlitePool,
}

impl ClassroomStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Open (creating if missing) the database at `database_url` and apply
    /// the bundled schema. Foreign keys are enforced on every connection.
    pub async fn connect(database_url: &str) -> Result<Self, HandraiseError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), HandraiseError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn insert_question(&self, text: &str) -> Result<Question, HandraiseError> {
        let now = Utc::now();
        let result = sqlx::query("INSERT INTO questions (question_text, created_at) VALUES (?, ?)")
            .bind(text)
            .bind(now.to_rfc3339())
            .execute(&self.pool)
            .await?;
        Ok(Question {
            id: result.last_insert_rowid(),
            text: text.to_owned(),
            created_at: now,
        })
    }

    /// The question with the maximum id, or `None` before any was posted.
    pub async fn latest_question(&self) -> Result<Option<Question>, HandraiseError> {
        let row = sqlx::query(
            "SELECT id, question_text, created_at FROM questions ORDER BY id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_question).transpose()
    }

    pub async fn get_question(&self, id: i64) -> Result<Option<Question>, HandraiseError> {
        let row = sqlx::query("SELECT id, question_text, created_at FROM questions WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Self::row_to_question).transpose()
    }

    pub async fn list_questions_desc(&self) -> Result<Vec<Question>, HandraiseError> {
        let rows =
            sqlx::query("SELECT id, question_text, created_at FROM questions ORDER BY id DESC")
                .fetch_all(&self.pool)
                .await?;
        rows.into_iter().map(Self::row_to_question).collect()
    }

    /// Insert-or-update keyed on UNIQUE (question_id, student_name).
    /// Uses SQLite `INSERT .. ON CONFLICT DO UPDATE`, so two concurrent
    /// submissions for the same pair serialize in the database instead of
    /// racing a check-then-write. Returns the stored row and whether it was
    /// freshly created.
    pub async fn upsert_response(
        &self,
        question_id: i64,
        student_name: &str,
        text: &str,
    ) -> Result<(StudentResponse, bool), HandraiseError> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM responses WHERE question_id = ? AND student_name = ?")
                .bind(question_id)
                .bind(student_name)
                .fetch_optional(&mut *tx)
                .await?;

        let now = Utc::now().to_rfc3339();
        sqlx::query(
            r#"
            INSERT INTO responses (
                question_id, student_name, response_text, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(question_id, student_name) DO UPDATE SET
                response_text=excluded.response_text,
                updated_at=excluded.updated_at
            "#,
        )
        .bind(question_id)
        .bind(student_name)
        .bind(text)
        .bind(&now)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        // Fetch the row after upsert
        let row = sqlx::query(
            r#"SELECT id, question_id, student_name, response_text, created_at, updated_at
               FROM responses WHERE question_id = ? AND student_name = ?"#,
        )
        .bind(question_id)
        .bind(student_name)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((Self::row_to_response(row)?, existing.is_none()))
    }

    pub async fn get_response(
        &self,
        question_id: i64,
        student_name: &str,
    ) -> Result<Option<StudentResponse>, HandraiseError> {
        let row = sqlx::query(
            r#"SELECT id, question_id, student_name, response_text, created_at, updated_at
               FROM responses WHERE question_id = ? AND student_name = ?"#,
        )
        .bind(question_id)
        .bind(student_name)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_response).transpose()
    }

    /// All responses for one question, in first-submission (id) order.
    pub async fn list_responses_for(
        &self,
        question_id: i64,
    ) -> Result<Vec<StudentResponse>, HandraiseError> {
        let rows = sqlx::query(
            r#"SELECT id, question_id, student_name, response_text, created_at, updated_at
               FROM responses WHERE question_id = ? ORDER BY id"#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_response).collect()
    }

    fn row_to_question(row: SqliteRow) -> Result<Question, HandraiseError> {
        let id: i64 = row.try_get("id")?;
        let text: String = row.try_get("question_text")?;
        let created_at = Self::parse_timestamp(row.try_get("created_at")?)?;
        Ok(Question {
            id,
            text,
            created_at,
        })
    }

    fn row_to_response(row: SqliteRow) -> Result<StudentResponse, HandraiseError> {
        let id: i64 = row.try_get("id")?;
        let question_id: i64 = row.try_get("question_id")?;
        let student_name: String = row.try_get("student_name")?;
        let text: String = row.try_get("response_text")?;
        let created_at = Self::parse_timestamp(row.try_get("created_at")?)?;
        let updated_at = Self::parse_timestamp(row.try_get("updated_at")?)?;
        Ok(StudentResponse {
            id,
            question_id,
            student_name,
            text,
            created_at,
            updated_at,
        })
    }

    fn parse_timestamp(raw: String) -> Result<DateTime<Utc>, HandraiseError> {
        let parsed = chrono::DateTime::parse_from_rfc3339(&raw)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(parsed.with_timezone(&Utc))
    }
}
