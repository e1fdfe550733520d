use crate::di::{Container, Injectable};
use crate::error::Result;
use crate::module::Module;
use std::sync::Arc;

pub mod controller;
pub mod domain;
mod repository;
mod service;

pub use domain::{CreateUserRequest, NewUser, User, UserId};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;

/// Registers the seeded repository, its trait binding and the service.
pub struct UserModule;

impl Module for UserModule {
    fn register(container: &mut Container) -> Result<()> {
        let repository = InMemoryUserRepository::inject(container)?;
        container.register(repository);
        container.register_trait::<dyn UserRepository, InMemoryUserRepository, _>(|r| {
            r as Arc<dyn UserRepository>
        });

        let service = UserService::inject(container)?;
        container.register(service);

        tracing::debug!(providers = container.len(), "UserModule registered");
        Ok(())
    }
}
