//! PostgreSQL setup for the question store

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{config::DatabaseConfig, constants::DATABASE_ACQUIRE_TIMEOUT_SECS};

impl DatabaseConfig {
    /// Pool settings derived from the configuration
    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(DATABASE_ACQUIRE_TIMEOUT_SECS))
    }
}

/// Connect to the configured database and bring the `questions` schema up to
/// date. Fails if the database cannot be reached.
pub async fn open_question_database(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = config.pool_options().connect(&config.url).await?;

    tracing::info!(max_connections = config.max_connections, "Running database migrations...");
    super::run_migrations(&pool).await?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_options_follow_config() {
        let config = DatabaseConfig {
            url: "postgres://localhost/reprova".to_string(),
            max_connections: 3,
        };

        let options = config.pool_options();

        assert_eq!(options.get_max_connections(), 3);
        assert_eq!(
            options.get_acquire_timeout(),
            Duration::from_secs(DATABASE_ACQUIRE_TIMEOUT_SECS)
        );
    }
}
