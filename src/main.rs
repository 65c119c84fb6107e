//! Reprova - Application Entry Point
//!
//! This is the main entry point for the Reprova question service.

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reprova::{
    config::CONFIG,
    db::{self, InMemoryQuestionStore, PgQuestionStore, QuestionStore},
    handlers,
    middleware::StaticTokenAuthorizer,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Reprova server...");

    let store: Arc<dyn QuestionStore> = match &CONFIG.database {
        Some(database) => {
            tracing::info!("Connecting to database...");
            let pool = db::open_question_database(database).await?;
            Arc::new(PgQuestionStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, questions are kept in memory");
            Arc::new(InMemoryQuestionStore::new())
        }
    };

    let authorizer = Arc::new(StaticTokenAuthorizer::new(CONFIG.auth.token.clone()));
    let state = AppState::new(store, authorizer);

    let app = handlers::create_router(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
