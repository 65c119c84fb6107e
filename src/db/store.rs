//! Question store abstraction
//!
//! Handlers never talk to a database directly; they go through a
//! [`QuestionStore`] held in the application state. Implementations must be
//! safe to call concurrently from many requests.

use async_trait::async_trait;

use crate::{
    models::{Question, QuestionId, Statistics},
    utils::summarize,
};

/// Store operation failures
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Question not found: {0}")]
    NotFound(QuestionId),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::Conflict(db_err.to_string())
            }
            _ => StoreError::Backend(err.to_string()),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence collaborator for questions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Short name of the storage backend, reported by the health endpoint
    fn backend(&self) -> &'static str;

    /// Check that the backend can serve requests
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    /// Fetch a single question
    async fn get(&self, id: &QuestionId) -> StoreResult<Option<Question>>;

    /// List questions, optionally restricted to a theme and/or a visibility
    async fn list(&self, theme: Option<String>, pvt: Option<bool>) -> StoreResult<Vec<Question>>;

    /// Insert a question without an id, or replace the stored question with
    /// the same id. Returns the id of the stored question.
    async fn add(&self, question: Question) -> StoreResult<QuestionId>;

    /// Remove a question
    async fn remove(&self, id: &QuestionId) -> StoreResult<()>;

    /// Statistics over the grades recorded for a question
    async fn statistics(&self, id: &QuestionId) -> StoreResult<Option<Statistics>> {
        Ok(self
            .get(id)
            .await?
            .map(|question| summarize(&question.grades())))
    }
}
