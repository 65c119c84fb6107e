//! Utility functions

pub mod crypto;
pub mod statistics;

pub use crypto::{hash_string, secrets_match};
pub use statistics::summarize;
