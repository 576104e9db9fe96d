//! Authentication Models
//!
//! The signed token payload exchanged with clients. Stored credentials have
//! no model of their own: they travel as an opaque string column owned by
//! the user store (see [`crate::password`]).

use serde::{Deserialize, Serialize};

/// JWT claims for bearer tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: i64,
    /// User email
    pub email: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

impl TokenClaims {
    /// Check whether the token has expired at `now` (unix seconds).
    ///
    /// A token is live only while `now < exp`; at the exact expiry instant
    /// it is already expired.
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.exp
    }
}
