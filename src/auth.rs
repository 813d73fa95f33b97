use crate::errors::AppError;
use crate::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tokens expire after exactly one hour.
pub const TOKEN_TTL_SECS: i64 = 3600;
const BCRYPT_COST: u32 = 10;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("token signing failed: {0}")]
    Sign(jsonwebtoken::errors::Error),
    #[error("invalid token")]
    InvalidToken,
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken => AppError::unauthorized("Invalid token"),
            other => AppError::internal(other),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub exp: i64,
}

/// Stateless token issuance and verification plus password hashing.
/// Holds the HS256 keys derived from the configured secret.
pub struct AuthService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl AuthService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        Ok(bcrypt::hash(password, BCRYPT_COST)?)
    }

    /// A hash that fails to parse is treated as a mismatch, not an error.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }

    pub fn issue_token(&self, email: &str) -> Result<String, AuthError> {
        self.issue_token_expiring(email, Utc::now().timestamp() + TOKEN_TTL_SECS)
    }

    fn issue_token_expiring(&self, email: &str, exp: i64) -> Result<String, AuthError> {
        let claims = Claims {
            email: email.to_string(),
            exp,
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(AuthError::Sign)
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

/// Extractor for protected routes: pulls the bearer token from the
/// `Authorization` header and verifies it before any handler logic runs.
pub struct AuthUser {
    pub email: String,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("No token provided"))?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("No token provided"))?;
        let claims = state.auth.verify_token(token)?;
        Ok(AuthUser {
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_verifies_and_never_stores_plaintext() {
        let auth = AuthService::new("test-secret");
        let hash = auth.hash_password("hunter2").unwrap();

        assert!(!hash.contains("hunter2"));
        assert!(auth.verify_password("hunter2", &hash));
        assert!(!auth.verify_password("wrong", &hash));
    }

    #[test]
    fn issued_token_carries_the_email_claim() {
        let auth = AuthService::new("test-secret");
        let token = auth.issue_token("user@example.com").unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.email, "user@example.com");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn expired_token_is_rejected() {
        let auth = AuthService::new("test-secret");
        // Two hours in the past, well beyond the default validation leeway.
        let token = auth
            .issue_token_expiring("user@example.com", Utc::now().timestamp() - 7200)
            .unwrap();

        assert!(matches!(
            auth.verify_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let auth = AuthService::new("test-secret");
        let other = AuthService::new("other-secret");
        let token = other.issue_token("user@example.com").unwrap();

        assert!(matches!(
            auth.verify_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let auth = AuthService::new("test-secret");
        assert!(matches!(
            auth.verify_token("not-a-token"),
            Err(AuthError::InvalidToken)
        ));
    }
}
