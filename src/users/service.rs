use crate::di::{Container, Injectable};
use crate::error::{AppError, Result};
use crate::users::domain::{NewUser, User, UserId};
use crate::users::repository::UserRepository;
use std::sync::Arc;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<User> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: UserId) -> Result<User> {
        self.repository.find_by_id(id).await.ok_or_else(|| {
            tracing::debug!(user_id = id, "user not found");
            AppError::NotFound
        })
    }

    pub async fn create(&self, new_user: NewUser) -> Result<User> {
        let user = self.repository.insert(new_user).await?;
        tracing::info!(user_id = user.id, "user created");
        Ok(user)
    }
}

impl Injectable for UserService {
    fn inject(container: &Container) -> Result<Self> {
        Ok(Self::new(container.resolve_trait::<dyn UserRepository>()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::repository::InMemoryUserRepository;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::seeded()))
    }

    #[tokio::test]
    async fn get_existing_and_missing() {
        let service = service();
        assert_eq!(service.get(1).await.unwrap().name, "John Doe");
        assert!(matches!(service.get(999).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let service = service();
        let mut ids = Vec::new();
        for i in 0..5 {
            let user = service
                .create(NewUser::new(format!("user{i}"), format!("user{i}@x.com")))
                .await
                .unwrap();
            ids.push(user.id);
        }
        assert_eq!(ids, vec![3, 4, 5, 6, 7]);
        assert_eq!(service.list().await.len(), 7);
    }

    #[tokio::test]
    async fn list_is_stable_between_reads() {
        let service = service();
        assert_eq!(service.list().await, service.list().await);
    }

    #[test]
    fn inject_requires_repository_binding() {
        let container = Container::new();
        assert!(matches!(
            UserService::inject(&container),
            Err(AppError::DependencyNotFound { .. })
        ));
    }
}
