//! QuillPress Credential & Token Core
//!
//! The authentication primitive for the QuillPress CMS backend, providing:
//! - Salted PBKDF2-HMAC-SHA256 password hashing and verification
//! - Signed, time-limited JWT bearer tokens (HS256)
//! - Password strength policy checks
//!
//! Request routing, input validation wiring, and the user store live in the
//! API layer; this crate only supplies the credential and token operations
//! they call into. Verification failures are normal return values (`false`
//! or `None`), never errors, and carry no detail about why a check failed.
//!
//! # Configuration
//!
//! The signing secret is provisioned from the environment by the caller:
//! - `JWT_SECRET` - Secret key for signing JWTs (required, min 32 chars)
//!
//! The core operations take the secret as an explicit parameter; see
//! [`AuthConfig`] for loading it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use quillpress_auth::{hash_password, verify_password, issue_token, verify_token};
//!
//! // At registration
//! let stored = hash_password(&password);
//!
//! // At login
//! if verify_password(&password, &stored) {
//!     let token = issue_token(user.id, &user.email, config.secret_bytes())?;
//! }
//!
//! // On each authenticated request
//! let claims = verify_token(token, config.secret_bytes()).ok_or(unauthorized)?;
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use config::AuthConfig;
pub use error::AuthError;
pub use models::TokenClaims;
pub use password::{hash_password, validate_password_strength, verify_password};
pub use token::{extract_bearer_token, issue_token, verify_token, TOKEN_TTL_SECS};
