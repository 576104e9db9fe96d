//! Authentication Error Types
//!
//! Centralized error handling for the credential and token core.
//!
//! Failed verification is not represented here: a password or token that
//! does not check out is a normal return value (`false` / `None`), never
//! an error. Only policy rejections, configuration problems, and
//! unusable-environment failures are error-shaped.

/// Authentication errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    #[error("Password does not meet requirements")]
    WeakPassword,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error")]
    Internal,
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::error!("Token encoding error: {:?}", err);
        AuthError::Internal
    }
}
