//! Reprova - Question Bank Service
//!
//! This library provides the question endpoints of the Reprova
//! exam-management tool: listing and fetching questions, creating and
//! updating them, deleting them, and reading per-question grade statistics.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Authorization branching and status policy
//! - **Stores**: Question persistence (in memory or PostgreSQL)
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
