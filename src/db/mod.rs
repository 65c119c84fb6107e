//! Database module
//!
//! This module handles database connections, migrations, and the question
//! stores the HTTP layer delegates to.

pub mod connection;
pub mod repositories;
pub mod store;

use sqlx::PgPool;

pub use connection::*;
pub use repositories::{InMemoryQuestionStore, PgQuestionStore};
pub use store::{QuestionStore, StoreError, StoreResult};

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
