//! Authentication Configuration
//!
//! The signing secret is loaded from the environment once, by the caller.
//! The core operations in [`crate::token`] take the secret as an explicit
//! parameter on every call, so nothing in this crate reads ambient state
//! after startup.

use crate::error::AuthError;
use std::env;

/// Authentication configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT secret key for signing tokens (from JWT_SECRET env var)
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Load configuration from environment variables
    ///
    /// # Panics
    /// Panics if JWT_SECRET environment variable is not set
    pub fn from_env() -> Self {
        Self {
            jwt_secret: env::var("JWT_SECRET")
                .expect("JWT_SECRET environment variable must be set"),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.jwt_secret.len() < 32 {
            return Err(AuthError::Config(
                "JWT_SECRET must be at least 32 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// The secret as bytes, ready to pass to issue/verify calls
    pub fn secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = AuthConfig {
            jwt_secret: "a".repeat(32),
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_short_secret() {
        let config = AuthConfig {
            jwt_secret: "short".to_string(),
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_secret_bytes_round_trip() {
        let config = AuthConfig {
            jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
        };

        assert_eq!(config.secret_bytes(), config.jwt_secret.as_bytes());
    }
}
