//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{db::QuestionStore, middleware::auth::Authorizer};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Question persistence
    pub questions: Arc<dyn QuestionStore>,

    /// Decides whether a request token grants access
    pub authorizer: Arc<dyn Authorizer>,
}

impl AppState {
    /// Create a new application state
    pub fn new(questions: Arc<dyn QuestionStore>, authorizer: Arc<dyn Authorizer>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                questions,
                authorizer,
            }),
        }
    }

    /// Get a reference to the question store
    pub fn questions(&self) -> &dyn QuestionStore {
        self.inner.questions.as_ref()
    }

    /// Get a reference to the authorizer
    pub fn authorizer(&self) -> &dyn Authorizer {
        self.inner.authorizer.as_ref()
    }
}
