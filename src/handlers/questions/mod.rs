//! Question handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::state::AppState;

/// Question routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::get_questions)
                .post(handler::save_question)
                .delete(handler::delete_question),
        )
        .route("/statistics", get(handler::get_statistics))
        .route("/deleteAll", delete(handler::delete_all_questions))
}
