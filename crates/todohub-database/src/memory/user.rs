//! In-memory user store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use todohub_core::error::AppError;
use todohub_core::result::AppResult;
use todohub_core::types::UserId;
use todohub_entity::user::{CreateUser, User, normalize_email};

use crate::store::UserStore;

/// Process-local [`UserStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    /// Users keyed by id.
    users: Arc<DashMap<UserId, User>>,
    /// Unique email index.
    by_email: Arc<DashMap<String, UserId>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no user has registered yet.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let Some(id) = self.by_email.get(&normalize_email(email)).map(|id| *id) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn create(&self, mut data: CreateUser) -> AppResult<User> {
        data.email = normalize_email(&data.email);

        // The entry guard is held until the user row exists, so two
        // registrations of one email cannot both succeed.
        match self.by_email.entry(data.email.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict("User already exists")),
            Entry::Vacant(slot) => {
                let user = data.into_user();
                self.users.insert(user.id, user.clone());
                slot.insert(user.id);
                Ok(user)
            }
        }
    }
}
