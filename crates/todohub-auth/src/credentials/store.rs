//! Credential store: registers identifiers and checks candidate passwords.

use std::sync::Arc;

use tracing::{debug, info};

use todohub_core::error::AppError;
use todohub_core::result::AppResult;
use todohub_database::store::UserStore;
use todohub_entity::user::{CreateUser, User, normalize_email};

use crate::password::{PasswordHasher, PasswordValidator};

/// Stores credentials as Argon2id hashes keyed by normalized email.
///
/// Plaintext passwords are never persisted or logged.
#[derive(Clone)]
pub struct CredentialStore {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    validator: PasswordValidator,
    /// Verified against when the identifier is unknown, so a miss costs
    /// about as much as a wrong password.
    dummy_hash: Arc<str>,
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

impl CredentialStore {
    /// Creates a credential store over `users`.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        validator: PasswordValidator,
    ) -> AppResult<Self> {
        let dummy_hash = hasher.hash_password("todohub-timing-equalizer")?;
        Ok(Self {
            users,
            hasher,
            validator,
            dummy_hash: Arc::from(dummy_hash),
        })
    }

    /// Registers `identifier` with a freshly salted hash of `secret`.
    ///
    /// Fails with `Validation` when the password is too short and with
    /// `Conflict` when the identifier already exists.
    pub async fn register(&self, identifier: &str, secret: &str) -> AppResult<User> {
        let email = normalize_email(identifier);
        self.validator.validate(secret)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }

        let password_hash = self.hasher.hash_password(secret)?;
        let user = self
            .users
            .create(CreateUser {
                email,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "Credential registered");
        Ok(user)
    }

    /// Checks `candidate` against the stored hash for `identifier`.
    ///
    /// Fails with `NotFound` when the identifier is unknown.
    pub async fn verify(&self, identifier: &str, candidate: &str) -> AppResult<bool> {
        let email = normalize_email(identifier);
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        self.hasher.verify_password(candidate, &user.password_hash)
    }

    /// Returns the user when `candidate` matches.
    ///
    /// An unknown identifier and a wrong password both fail with the same
    /// `InvalidCredentials` error.
    pub async fn authenticate(&self, identifier: &str, candidate: &str) -> AppResult<User> {
        let email = normalize_email(identifier);

        let Some(user) = self.users.find_by_email(&email).await? else {
            let _ = self.hasher.verify_password(candidate, &self.dummy_hash);
            debug!("Login attempt for unknown identifier");
            return Err(AppError::invalid_credentials());
        };

        if !self.hasher.verify_password(candidate, &user.password_hash)? {
            debug!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::invalid_credentials());
        }

        Ok(user)
    }
}
