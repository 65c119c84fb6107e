//! Question model

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque question identifier assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    /// Generate a fresh identifier for a question being created
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for QuestionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Grades per student, keyed by semester (`"2019/1"`) and then by student
pub type GradeRecord = BTreeMap<String, BTreeMap<String, f64>>;

/// Exam question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Absent until the question has been persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<QuestionId>,
    pub theme: String,
    pub description: String,
    pub statement: Option<String>,
    pub record: Option<GradeRecord>,
    /// Private questions are only readable by authorized callers
    pub pvt: bool,
}

impl Question {
    /// All grades in the record, across semesters
    pub fn grades(&self) -> Vec<f64> {
        self.record
            .iter()
            .flat_map(|semesters| semesters.values())
            .flat_map(|students| students.values().copied())
            .collect()
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Aggregate over the grades of a question's record
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub average: f64,
    pub median: f64,
    pub standard_deviation: f64,
}
