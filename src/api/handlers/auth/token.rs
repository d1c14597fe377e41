//! Signed session tokens for admin authentication.
//!
//! Tokens are HS256 JWTs carrying the admin id, username, and a 7-day expiry.
//! They are self-contained: validity is decided by signature and expiry alone,
//! so no session state is kept server-side. Expiry is always evaluated
//! against this process's clock with zero leeway.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Claims embedded in an admin session token.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Admin id, stringified UUID.
    pub sub: String,
    pub username: String,
    /// Issued-at, unix seconds.
    pub iat: i64,
    /// Expiry, unix seconds.
    pub exp: i64,
}

/// Why a token failed verification.
///
/// Callers treat every variant as "unauthenticated"; the distinction exists
/// for server-side logging only and must never reach a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    /// Not a decodable token at all.
    Malformed,
    /// Well-formed token signed with a different secret.
    SignatureMismatch,
    /// Valid signature, expiry in the past.
    Expired,
}

impl TokenRejection {
    fn from_error(err: &jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::SignatureMismatch,
            _ => Self::Malformed,
        }
    }
}

impl fmt::Display for TokenRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "token is malformed"),
            Self::SignatureMismatch => write!(f, "token signature mismatch"),
            Self::Expired => write!(f, "token is expired"),
        }
    }
}

impl std::error::Error for TokenRejection {}

/// Signs and verifies admin session tokens with a single server-held secret.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_seconds: i64,
}

impl TokenCodec {
    #[must_use]
    pub fn new(secret: &SecretString, ttl_seconds: i64) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            ttl_seconds,
        }
    }

    /// Issue a token for an admin, expiring `ttl_seconds` from now.
    ///
    /// # Errors
    /// Returns an error if JWT encoding fails.
    pub fn issue(&self, subject: Uuid, username: &str) -> Result<String> {
        let now = Utc::now();
        let expiry = now + Duration::seconds(self.ttl_seconds);

        let claims = Claims {
            sub: subject.to_string(),
            username: username.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .context("failed to sign session token")
    }

    /// Verify signature and expiry, returning the claims when both hold.
    ///
    /// # Errors
    /// Returns a [`TokenRejection`] naming what failed. Callers collapse all
    /// variants to "unauthenticated" and keep the distinction in logs.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenRejection> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(data.claims),
            Err(err) => Err(TokenRejection::from_error(&err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEK_SECONDS: i64 = 60 * 60 * 24 * 7;

    fn codec() -> TokenCodec {
        TokenCodec::new(&SecretString::from("test-cookie-secret".to_string()), WEEK_SECONDS)
    }

    fn sign_with_offsets(codec_secret: &str, iat_offset: i64, exp_offset: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            username: "admin".to_string(),
            iat: now + iat_offset,
            exp: now + exp_offset,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(codec_secret.as_bytes()),
        )
        .expect("encode")
    }

    #[test]
    fn issued_token_verifies_and_keeps_subject() -> Result<()> {
        let codec = codec();
        let subject = Uuid::new_v4();

        let token = codec.issue(subject, "admin")?;
        let claims = codec.verify(&token).expect("token should verify");

        assert_eq!(claims.sub, subject.to_string());
        assert_eq!(claims.username, "admin");
        assert!(claims.exp - claims.iat == WEEK_SECONDS);
        Ok(())
    }

    #[test]
    fn token_valid_just_before_expiry_window_closes() {
        // Issued 6 days 23 hours ago with a 7-day lifetime: one hour left.
        let codec = codec();
        let age = WEEK_SECONDS - 3600;
        let token = sign_with_offsets("test-cookie-secret", -age, WEEK_SECONDS - age);
        assert!(codec.verify(&token).is_ok());
    }

    #[test]
    fn token_expired_one_hour_past_window() {
        // Issued 7 days 1 hour ago with a 7-day lifetime: one hour overdue.
        let codec = codec();
        let age = WEEK_SECONDS + 3600;
        let token = sign_with_offsets("test-cookie-secret", -age, WEEK_SECONDS - age);
        assert_eq!(codec.verify(&token), Err(TokenRejection::Expired));
    }

    #[test]
    fn expired_token_rejected() {
        let expired = TokenCodec::new(&SecretString::from("test-cookie-secret".to_string()), -60);
        let token = expired.issue(Uuid::new_v4(), "admin").expect("issue");
        assert_eq!(codec().verify(&token), Err(TokenRejection::Expired));
    }

    #[test]
    fn tampered_signature_byte_rejected() -> Result<()> {
        let codec = codec();
        let token = codec.issue(Uuid::new_v4(), "admin")?;

        // Flip one character inside the signature segment, keeping the
        // base64url alphabet valid so only the signature check can fail.
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        assert_eq!(parts.len(), 3);
        let signature = parts[2].clone();
        let replacement = if signature.starts_with('A') { 'B' } else { 'A' };
        parts[2] = format!("{replacement}{}", &signature[1..]);
        let tampered = parts.join(".");
        assert_ne!(tampered, token);

        assert_eq!(
            codec.verify(&tampered),
            Err(TokenRejection::SignatureMismatch)
        );
        Ok(())
    }

    #[test]
    fn wrong_secret_rejected() -> Result<()> {
        let token = codec().issue(Uuid::new_v4(), "admin")?;
        let other = TokenCodec::new(&SecretString::from("another-secret".to_string()), WEEK_SECONDS);
        assert_eq!(
            other.verify(&token),
            Err(TokenRejection::SignatureMismatch)
        );
        Ok(())
    }

    #[test]
    fn garbage_rejected_as_malformed() {
        assert_eq!(
            codec().verify("not-a-token"),
            Err(TokenRejection::Malformed)
        );
        assert_eq!(codec().verify(""), Err(TokenRejection::Malformed));
    }
}
