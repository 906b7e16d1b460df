//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Longest accepted session token lifetime: ten years.
pub const MAX_JWT_TTL_HOURS: u64 = 24 * 365 * 10;

/// Authentication and credential configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256). Required; there is no default.
    #[serde(default)]
    pub jwt_secret: String,
    /// Session token lifetime in hours.
    #[serde(default = "default_ttl_hours")]
    pub jwt_ttl_hours: u64,
    /// Minimum password length accepted at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            jwt_ttl_hours: default_ttl_hours(),
            password_min_length: default_password_min(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"****")
            .field("jwt_ttl_hours", &self.jwt_ttl_hours)
            .field("password_min_length", &self.password_min_length)
            .finish()
    }
}

fn default_ttl_hours() -> u64 {
    7 * 24
}

fn default_password_min() -> usize {
    6
}
