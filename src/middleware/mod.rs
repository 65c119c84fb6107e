//! HTTP middleware

pub mod auth;
pub mod logging;

pub use auth::{AuthorizedCaller, Authorizer, Caller, StaticTokenAuthorizer};
pub use logging::logging_middleware;
