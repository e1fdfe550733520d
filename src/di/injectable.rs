use crate::di::Container;
use crate::error::Result;

/// Trait for types that can be built from the DI container
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use user_collection::di::{Container, Injectable};
/// use user_collection::users::UserRepository;
///
/// struct Auditor {
///     repository: Arc<dyn UserRepository>,
/// }
///
/// impl Injectable for Auditor {
///     fn inject(container: &Container) -> user_collection::Result<Self> {
///         Ok(Self {
///             repository: container.resolve_trait::<dyn UserRepository>()?,
///         })
///     }
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container
    ///
    /// # Errors
    /// Returns an error if any required dependency is not found in the container.
    fn inject(container: &Container) -> Result<Self>;
}
