//! Token authorization
//!
//! Callers prove access by passing the shared token as the `token` query
//! parameter. The check itself sits behind the [`Authorizer`] trait so other
//! schemes can replace the static token without touching the handlers.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::AppError,
    state::AppState,
    utils::{hash_string, secrets_match},
};

/// Decides whether a request token grants access
pub trait Authorizer: Send + Sync {
    fn is_authorized(&self, token: Option<&str>) -> bool;
}

/// Compares the request token against a single shared secret
pub struct StaticTokenAuthorizer {
    token: String,
}

impl StaticTokenAuthorizer {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Authorizer for StaticTokenAuthorizer {
    fn is_authorized(&self, token: Option<&str>) -> bool {
        token.is_some_and(|token| secrets_match(token, &self.token))
    }
}

#[derive(Debug, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Short, non-reversible fingerprint of a token for log lines
fn fingerprint(token: Option<&str>) -> String {
    match token {
        Some(token) => hash_string(token)[..12].to_string(),
        None => "none".to_string(),
    }
}

/// Authorization outcome of the current request (never fails)
#[derive(Debug, Clone, Copy)]
pub struct Caller {
    pub authorized: bool,
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // A malformed query string is handled like an absent token.
        let token = Query::<TokenQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(query)| query.token);

        let authorized = state.authorizer().is_authorized(token.as_deref());
        debug!(
            path = %parts.uri.path(),
            authorized,
            token = %fingerprint(token.as_deref()),
            "Checked request token"
        );

        Ok(Caller { authorized })
    }
}

/// Caller that presented a valid token. Rejects with 403 otherwise, before
/// the request body is read.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizedCaller;

impl FromRequestParts<AppState> for AuthorizedCaller {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Caller { authorized } = Caller::from_request_parts(parts, state).await?;

        if !authorized {
            debug!(path = %parts.uri.path(), "Auth failed: missing or invalid token");
            return Err(AppError::Unauthorized);
        }

        Ok(AuthorizedCaller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_token_authorizer() {
        let authorizer = StaticTokenAuthorizer::new("s3cret");

        assert!(authorizer.is_authorized(Some("s3cret")));
        assert!(!authorizer.is_authorized(Some("wrong")));
        assert!(!authorizer.is_authorized(Some("")));
        assert!(!authorizer.is_authorized(None));
    }

    #[test]
    fn test_fingerprint_does_not_leak_token() {
        let print = fingerprint(Some("s3cret"));
        assert_eq!(print.len(), 12);
        assert!(!print.contains("s3cret"));
        assert_eq!(fingerprint(None), "none");
    }
}
