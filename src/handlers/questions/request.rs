//! Question request DTOs and the typed commands built from them

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{
    constants::{MAX_DESCRIPTION_LENGTH, MAX_STATEMENT_LENGTH, MAX_THEME_LENGTH},
    error::AppError,
    models::{GradeRecord, Question, QuestionId},
};

/// Query parameters shared by the question routes.
///
/// The `token` parameter is consumed by the authorization extractors and is
/// ignored here.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionQuery {
    pub id: Option<String>,
}

impl QuestionQuery {
    /// The `id` parameter, treating an empty value as absent
    fn id(self) -> Option<QuestionId> {
        self.id
            .filter(|id| !id.trim().is_empty())
            .map(QuestionId::from)
    }
}

impl<S> FromRequestParts<S> for QuestionQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<QuestionQuery>::try_from_uri(&parts.uri)?;
        Ok(query)
    }
}

/// What a `GET /questions` request asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchQuestions {
    All,
    One(QuestionId),
}

impl From<QuestionQuery> for FetchQuestions {
    fn from(query: QuestionQuery) -> Self {
        match query.id() {
            Some(id) => FetchQuestions::One(id),
            None => FetchQuestions::All,
        }
    }
}

/// A request that must name exactly one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionLookup {
    pub id: QuestionId,
}

impl TryFrom<QuestionQuery> for QuestionLookup {
    type Error = AppError;

    fn try_from(query: QuestionQuery) -> Result<Self, Self::Error> {
        query
            .id()
            .map(|id| QuestionLookup { id })
            .ok_or_else(|| AppError::InvalidRequest("missing 'id' parameter".to_string()))
    }
}

fn default_private() -> bool {
    true
}

/// Create or update question request. An `id` makes it an update.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_save_request"))]
pub struct SaveQuestionRequest {
    pub id: Option<QuestionId>,

    #[validate(length(min = 1, max = MAX_THEME_LENGTH))]
    pub theme: String,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub description: String,

    #[validate(length(max = MAX_STATEMENT_LENGTH))]
    pub statement: Option<String>,

    /// Grades per semester and student
    pub record: Option<GradeRecord>,

    /// Questions are private unless stated otherwise
    #[serde(default = "default_private")]
    pub pvt: bool,
}

fn validate_save_request(request: &SaveQuestionRequest) -> Result<(), ValidationError> {
    if request
        .id
        .as_ref()
        .is_some_and(|id| id.as_str().trim().is_empty())
    {
        return Err(ValidationError::new("empty_id"));
    }

    if let Some(record) = &request.record {
        validate_record(record)?;
    }

    Ok(())
}

/// Semesters are written `<year>/<1|2>` and grades must be non-negative numbers
fn validate_record(record: &GradeRecord) -> Result<(), ValidationError> {
    for (semester, grades) in record {
        let valid_semester = semester
            .split_once('/')
            .is_some_and(|(year, part)| {
                year.len() == 4
                    && year.chars().all(|c| c.is_ascii_digit())
                    && matches!(part, "1" | "2")
            });
        if !valid_semester {
            return Err(ValidationError::new("invalid_semester"));
        }

        if grades
            .values()
            .any(|grade| !grade.is_finite() || *grade < 0.0)
        {
            return Err(ValidationError::new("invalid_grade"));
        }
    }

    Ok(())
}

impl From<SaveQuestionRequest> for Question {
    fn from(request: SaveQuestionRequest) -> Self {
        Question {
            id: request.id,
            theme: request.theme,
            description: request.description,
            statement: request.statement,
            record: request.record,
            pvt: request.pvt,
        }
    }
}
