//! Question handler implementations

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::{
    error::AppResult,
    handlers::extract::ValidatedJson,
    middleware::auth::{AuthorizedCaller, Caller},
    models::{Question, Statistics},
    services::QuestionService,
    state::AppState,
};

use super::{
    request::{FetchQuestions, QuestionLookup, QuestionQuery, SaveQuestionRequest},
    response::MessageResponse,
};

/// List questions, or fetch one when an `id` is given.
///
/// Unauthorized callers only ever see public questions.
pub async fn get_questions(
    State(state): State<AppState>,
    caller: Caller,
    query: QuestionQuery,
) -> AppResult<Response> {
    info!(authorized = caller.authorized, "Received questions get");

    let response = match FetchQuestions::from(query) {
        FetchQuestions::All => {
            let questions =
                QuestionService::list_questions(state.questions(), caller.authorized).await?;
            Json(questions).into_response()
        }
        FetchQuestions::One(id) => {
            let question =
                QuestionService::get_question(state.questions(), &id, caller.authorized).await?;
            Json(question).into_response()
        }
    };

    info!("Done. Responding...");
    Ok(response)
}

/// Statistics of a single question, gated like a single-question get
pub async fn get_statistics(
    State(state): State<AppState>,
    caller: Caller,
    query: QuestionQuery,
) -> AppResult<Json<Statistics>> {
    info!(authorized = caller.authorized, "Received question statistics get");

    let QuestionLookup { id } = QuestionLookup::try_from(query)?;
    let statistics =
        QuestionService::get_statistics(state.questions(), &id, caller.authorized).await?;

    info!("Done. Responding...");
    Ok(Json(statistics))
}

/// Create a question, or replace it when the body carries an `id`
pub async fn save_question(
    State(state): State<AppState>,
    _caller: AuthorizedCaller,
    ValidatedJson(payload): ValidatedJson<SaveQuestionRequest>,
) -> AppResult<Json<MessageResponse>> {
    let question = Question::from(payload);
    info!(
        question_id = ?question.id,
        theme = %question.theme,
        "Received questions post"
    );

    QuestionService::save_question(state.questions(), question).await?;

    info!("Done. Responding...");
    Ok(Json(MessageResponse::ok()))
}

/// Delete a single question
pub async fn delete_question(
    State(state): State<AppState>,
    _caller: AuthorizedCaller,
    query: QuestionQuery,
) -> AppResult<Json<MessageResponse>> {
    info!("Received questions delete");

    let QuestionLookup { id } = QuestionLookup::try_from(query)?;
    QuestionService::delete_question(state.questions(), &id).await?;

    info!("Done. Responding...");
    Ok(Json(MessageResponse::ok()))
}

/// Delete every question, stopping at the first failed removal
pub async fn delete_all_questions(
    State(state): State<AppState>,
    _caller: AuthorizedCaller,
) -> AppResult<Json<MessageResponse>> {
    info!("Received questions delete all");

    let removed = QuestionService::delete_all_questions(state.questions()).await?;

    info!(removed, "Done. Responding...");
    Ok(Json(MessageResponse::ok()))
}
