//! Question service

use tracing::{info, warn};

use crate::{
    db::{QuestionStore, StoreError},
    error::{AppError, AppResult},
    models::{Question, QuestionId, Statistics},
};

/// Question service for business logic
pub struct QuestionService;

impl QuestionService {
    /// List questions visible to the caller. Theme filtering is not exposed.
    pub async fn list_questions(
        store: &dyn QuestionStore,
        authorized: bool,
    ) -> AppResult<Vec<Question>> {
        info!("Fetching questions");

        let visibility = if authorized { None } else { Some(false) };
        store.list(None, visibility).await.map_err(read_failure)
    }

    /// Get question by ID
    pub async fn get_question(
        store: &dyn QuestionStore,
        id: &QuestionId,
        authorized: bool,
    ) -> AppResult<Question> {
        info!(question_id = %id, "Fetching question");

        let question = store
            .get(id)
            .await
            .map_err(read_failure)?
            .ok_or_else(|| not_found(id))?;

        ensure_readable(&question, authorized)?;
        Ok(question)
    }

    /// Get the statistics of a question
    pub async fn get_statistics(
        store: &dyn QuestionStore,
        id: &QuestionId,
        authorized: bool,
    ) -> AppResult<Statistics> {
        info!(question_id = %id, "Fetching question statistics");

        // Visibility lives on the question, so look it up before the statistics.
        let question = store
            .get(id)
            .await
            .map_err(read_failure)?
            .ok_or_else(|| not_found(id))?;
        ensure_readable(&question, authorized)?;

        store
            .statistics(id)
            .await
            .map_err(read_failure)?
            .ok_or_else(|| not_found(id))
    }

    /// Create or replace a question
    pub async fn save_question(store: &dyn QuestionStore, question: Question) -> AppResult<QuestionId> {
        let created = !question.is_persisted();
        let id = store.add(question).await?;
        info!(question_id = %id, created, "Question saved");
        Ok(id)
    }

    /// Delete a question
    pub async fn delete_question(store: &dyn QuestionStore, id: &QuestionId) -> AppResult<()> {
        info!(question_id = %id, "Deleting question");

        store.remove(id).await?;
        Ok(())
    }

    /// Remove every question one by one.
    ///
    /// Stops at the first failed removal without restoring what was already
    /// removed. An empty store counts as a failure. Returns the number of
    /// removed questions.
    pub async fn delete_all_questions(store: &dyn QuestionStore) -> AppResult<usize> {
        info!("Deleting all questions");

        let questions = store.list(None, None).await.map_err(read_failure)?;
        if questions.is_empty() {
            warn!("No questions to delete");
            return Err(AppError::NothingRemoved);
        }

        let total = questions.len();
        for (removed, question) in questions.into_iter().enumerate() {
            let id = question.id.ok_or_else(|| {
                AppError::Store(StoreError::Backend("listed question has no id".to_string()))
            })?;
            info!(question_id = %id, "Deleting question");

            if let Err(e) = store.remove(&id).await {
                warn!(question_id = %id, removed, total, "Aborting delete all");
                return Err(e.into());
            }
        }

        Ok(total)
    }
}

fn ensure_readable(question: &Question, authorized: bool) -> AppResult<()> {
    if question.pvt && !authorized {
        info!(question_id = ?question.id, "Private question requested without authorization");
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

fn not_found(id: &QuestionId) -> AppError {
    AppError::NotFound(format!("question {}", id))
}

/// Read failures are reported like any other invalid request
fn read_failure(err: StoreError) -> AppError {
    warn!(error = %err, "Failed to read questions");
    AppError::InvalidRequest(err.to_string())
}
