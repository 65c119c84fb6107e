//! PostgreSQL question store

use async_trait::async_trait;
use sqlx::{types::Json, FromRow, PgPool};

use crate::{
    db::store::{QuestionStore, StoreError, StoreResult},
    models::{GradeRecord, Question, QuestionId},
};

/// Row shape of the `questions` table
#[derive(Debug, FromRow)]
struct QuestionRow {
    id: String,
    theme: String,
    description: String,
    statement: Option<String>,
    record: Option<Json<GradeRecord>>,
    pvt: bool,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            id: Some(QuestionId(row.id)),
            theme: row.theme,
            description: row.description,
            statement: row.statement,
            record: row.record.map(|Json(record)| record),
            pvt: row.pvt,
        }
    }
}

/// Question store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, question: Question) -> StoreResult<QuestionId> {
        let id = QuestionId::generate();

        sqlx::query(
            r#"
            INSERT INTO questions (id, theme, description, statement, record, pvt)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id.as_str())
        .bind(&question.theme)
        .bind(&question.description)
        .bind(&question.statement)
        .bind(question.record.map(Json))
        .bind(question.pvt)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn replace(&self, id: QuestionId, question: Question) -> StoreResult<QuestionId> {
        let result = sqlx::query(
            r#"
            UPDATE questions
            SET theme = $2, description = $3, statement = $4, record = $5, pvt = $6,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .bind(&question.theme)
        .bind(&question.description)
        .bind(&question.statement)
        .bind(question.record.map(Json))
        .bind(question.pvt)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(id)
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn get(&self, id: &QuestionId) -> StoreResult<Option<Question>> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, theme, description, statement, record, pvt
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Question::from))
    }

    async fn list(&self, theme: Option<String>, pvt: Option<bool>) -> StoreResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, theme, description, statement, record, pvt
            FROM questions
            WHERE ($1::TEXT IS NULL OR theme = $1)
              AND ($2::BOOLEAN IS NULL OR pvt = $2)
            ORDER BY created_at, id
            "#,
        )
        .bind(theme)
        .bind(pvt)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn add(&self, question: Question) -> StoreResult<QuestionId> {
        match question.id.clone() {
            Some(id) => self.replace(id, question).await,
            None => self.insert(question).await,
        }
    }

    async fn remove(&self, id: &QuestionId) -> StoreResult<()> {
        let result = sqlx::query(r#"DELETE FROM questions WHERE id = $1"#)
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.clone()));
        }

        Ok(())
    }
}
