//! Database repositories
//!
//! Concrete [`QuestionStore`](super::QuestionStore) implementations.

pub mod memory_repo;
pub mod question_repo;

pub use memory_repo::InMemoryQuestionStore;
pub use question_repo::PgQuestionStore;
