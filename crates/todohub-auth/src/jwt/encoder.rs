//! Session token issuing.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use todohub_core::config::{AuthConfig, MAX_JWT_TTL_HOURS};
use todohub_core::error::AppError;
use todohub_core::types::UserId;

use super::claims::Claims;

/// Signs session tokens with the server-held HMAC secret.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime.
    ttl: chrono::Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

/// A freshly signed token and its expiry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// Compact JWT.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// Fails when no signing secret is configured or the lifetime is out
    /// of range.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        if config.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration("JWT signing secret is not set"));
        }

        let ttl = Some(config.jwt_ttl_hours)
            .filter(|h| (1..=MAX_JWT_TTL_HOURS).contains(h))
            .and_then(|h| i64::try_from(h).ok())
            .and_then(chrono::Duration::try_hours)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "JWT lifetime of {} hours is out of range",
                    config.jwt_ttl_hours
                ))
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl,
        })
    }

    /// Issues a token for `user_id` that expires after the configured TTL.
    pub fn issue(&self, user_id: UserId, email: &str) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::internal("Session token expiry is out of range"))?;

        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
