use crate::di::{Container, Injectable};
use crate::error::{AppError, Result};
use crate::users::domain::{NewUser, User, UserId, seed_users};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Vec<User>;
    async fn find_by_id(&self, id: UserId) -> Option<User>;
    /// Assigns the next id and stores the record as one step.
    async fn insert(&self, user: NewUser) -> Result<User>;
}

/// Process-local user store
///
/// Ids only grow, so iterating the map by key yields insertion order.
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: RwLock::new(users),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Injectable for InMemoryUserRepository {
    fn inject(_container: &Container) -> Result<Self> {
        Ok(Self::seeded())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Vec<User> {
        self.users.read().await.values().cloned().collect()
    }

    async fn find_by_id(&self, id: UserId) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    async fn insert(&self, user: NewUser) -> Result<User> {
        let mut users = self.users.write().await;
        let id = match users.last_key_value() {
            Some((max, _)) => max
                .checked_add(1)
                .ok_or_else(|| AppError::Internal("user id space exhausted".to_string()))?,
            None => 1,
        };
        let user = user.with_id(id);
        users.insert(id, user.clone());
        Ok(user)
    }
}
