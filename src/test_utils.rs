//! Test utilities with lazy testcontainers support
//!
//! One PostgreSQL container is started on first use and shared across tests.
//! Every test gets its own freshly migrated database inside it.

pub mod containers {
    use std::path::Path;

    use sqlx::PgPool;
    use testcontainers::{runners::AsyncRunner, ContainerAsync};
    use testcontainers_modules::postgres::Postgres;
    use tokio::sync::OnceCell;

    static POSTGRES: OnceCell<(ContainerAsync<Postgres>, String)> = OnceCell::const_new();

    /// Whether a Docker daemon looks reachable from this machine
    pub fn docker_available() -> bool {
        std::env::var_os("DOCKER_HOST").is_some() || Path::new("/var/run/docker.sock").exists()
    }

    /// Get or start the PostgreSQL container and return its base URL
    /// (without a database name)
    async fn postgres_base_url() -> &'static str {
        let (_, url) = POSTGRES
            .get_or_init(|| async {
                let container = Postgres::default()
                    .with_user("reprova")
                    .with_password("reprova_test")
                    .with_db_name("reprova_test")
                    .start()
                    .await
                    .expect("Failed to start PostgreSQL container");

                let host = container.get_host().await.unwrap();
                let port = container.get_host_port_ipv4(5432).await.unwrap();
                let url = format!("postgres://reprova:reprova_test@{}:{}", host, port);

                (container, url)
            })
            .await;
        url
    }

    /// Create an empty database with the `questions` schema applied.
    ///
    /// Returns `None` when Docker is not available.
    pub async fn fresh_database() -> Option<PgPool> {
        if !docker_available() {
            eprintln!("Docker not available, skipping PostgreSQL test");
            return None;
        }

        let base_url = postgres_base_url().await;
        let name = format!("reprova_{}", uuid::Uuid::new_v4().simple());

        let admin = PgPool::connect(&format!("{}/reprova_test", base_url))
            .await
            .expect("Failed to connect to test database");
        sqlx::query(&format!(r#"CREATE DATABASE "{}""#, name))
            .execute(&admin)
            .await
            .expect("Failed to create test database");
        admin.close().await;

        let pool = PgPool::connect(&format!("{}/{}", base_url, name))
            .await
            .expect("Failed to connect to test database");
        crate::db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Some(pool)
    }
}
