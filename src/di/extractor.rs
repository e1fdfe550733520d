use crate::di::Container;
use crate::error::AppError;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

/// Axum extractor for dependency injection
///
/// Resolves `T` from the container carried by the router state.
///
/// ```ignore
/// async fn list(Inject(service): Inject<UserService>) -> Json<Vec<User>> {
///     Json(service.list().await)
/// }
/// ```
pub struct Inject<T>(pub Arc<T>);

/// Trait that the router state must implement to provide the DI container
pub trait HasContainer {
    fn get_container(&self) -> &Container;
}

impl<S, T> FromRequestParts<S> for Inject<T>
where
    S: Send + Sync + HasContainer,
    T: 'static + Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        state.get_container().resolve::<T>().map(Inject)
    }
}
