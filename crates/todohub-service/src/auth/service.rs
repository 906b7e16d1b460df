//! Account registration and login.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use validator::ValidateEmail;

use todohub_auth::credentials::CredentialStore;
use todohub_auth::jwt::JwtEncoder;
use todohub_core::error::AppError;
use todohub_database::store::UserStore;
use todohub_entity::user::User;

use crate::context::RequestContext;

/// A signed-in user and the session token issued for them.
#[derive(Debug, Clone)]
pub struct AuthResult {
    /// Bearer token.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: User,
}

/// Handles registration, login, and identity lookup.
#[derive(Clone)]
pub struct AuthService {
    /// Credential store.
    credentials: Arc<CredentialStore>,
    /// Session token signer.
    encoder: Arc<JwtEncoder>,
    /// User store, for identity lookups.
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("credentials", &self.credentials)
            .field("encoder", &self.encoder)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        credentials: Arc<CredentialStore>,
        encoder: Arc<JwtEncoder>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            credentials,
            encoder,
            users,
        }
    }

    /// Creates an account and signs the new user in.
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthResult, AppError> {
        let email = email.trim();
        require_fields(email, password)?;

        if !email.validate_email() {
            return Err(AppError::validation("Please enter a valid email"));
        }

        let user = self.credentials.register(email, password).await?;
        info!(user_id = %user.id, "User registered");

        self.sign_in(user)
    }

    /// Checks credentials and issues a session token.
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResult, AppError> {
        let email = email.trim();
        require_fields(email, password)?;

        let user = self.credentials.authenticate(email, password).await?;
        info!(user_id = %user.id, "User logged in");

        self.sign_in(user)
    }

    /// Loads the user behind an authenticated request.
    ///
    /// A valid token whose user no longer exists is treated as
    /// unauthenticated.
    pub async fn current_user(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::authentication("User no longer exists"))
    }

    fn sign_in(&self, user: User) -> Result<AuthResult, AppError> {
        let issued = self.encoder.issue(user.id, &user.email)?;
        Ok(AuthResult {
            token: issued.token,
            expires_at: issued.expires_at,
            user,
        })
    }
}

fn require_fields(email: &str, password: &str) -> Result<(), AppError> {
    if email.is_empty() || password.is_empty() {
        return Err(AppError::validation("Please enter all fields"));
    }
    Ok(())
}
