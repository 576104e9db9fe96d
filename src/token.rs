//! Bearer Tokens
//!
//! HS256-signed JWTs binding a user identity for a fixed lifetime. Tokens
//! are self-contained: no server-side session record exists, and there is
//! no revocation — a token stays valid until its natural expiry. The
//! signing secret is supplied by the caller on every call and never cached
//! here.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::error::AuthError;
use crate::models::TokenClaims;

/// Token lifetime in seconds (24 hours).
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Issue a signed bearer token for a user.
///
/// The only failure mode is an unusable crypto environment; bad input
/// cannot occur.
pub fn issue_token(user_id: i64, email: &str, secret: &[u8]) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();

    let claims = TokenClaims {
        sub: user_id,
        email: email.to_string(),
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };

    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))?;
    Ok(token)
}

/// Verify a bearer token and decode its claims.
///
/// Returns `None` for any failure — malformed structure, bad signature,
/// undecodable payload, missing fields, or expiry. Callers cannot (and
/// must not) distinguish between these cases.
pub fn verify_token(token: &str, secret: &[u8]) -> Option<TokenClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    // Expiry is checked strictly below; the library treats exp == now as live.
    validation.validate_exp = false;

    let data = match decode::<TokenClaims>(token, &DecodingKey::from_secret(secret), &validation) {
        Ok(data) => data,
        Err(err) => {
            tracing::debug!("Token rejected: {:?}", err);
            return None;
        }
    };

    let claims = data.claims;
    if claims.is_expired(Utc::now().timestamp()) {
        tracing::debug!(sub = claims.sub, "Token expired");
        return None;
    }

    Some(claims)
}

/// Extract the bare token from an Authorization header value.
pub fn extract_bearer_token(auth_header: Option<&str>) -> Option<&str> {
    auth_header.and_then(|h| h.strip_prefix("Bearer "))
}
