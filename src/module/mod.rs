use crate::di::Container;
use crate::error::Result;

/// Trait for application modules
///
/// A module registers its providers in dependency order, so that each
/// provider can resolve the ones registered before it.
///
/// # Example
/// ```
/// use user_collection::di::Container;
/// use user_collection::module::Module;
/// use user_collection::users::{UserModule, UserService};
///
/// let mut container = Container::new();
/// UserModule::register(&mut container).unwrap();
/// assert!(container.contains::<UserService>());
/// ```
pub trait Module {
    /// Register all providers in this module
    fn register(container: &mut Container) -> Result<()>;
}
