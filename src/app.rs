use crate::config::AppConfig;
use crate::di::{Container, HasContainer};
use crate::error::Result;
use crate::interceptor::{LoggingInterceptor, SharedInterceptorLayer};
use crate::module::Module;
use crate::users::{self, UserModule};
use axum::Router;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    container: Arc<Container>,
}

impl AppState {
    pub fn new(container: Container) -> Self {
        Self {
            container: Arc::new(container),
        }
    }
}

impl HasContainer for AppState {
    fn get_container(&self) -> &Container {
        &self.container
    }
}

/// Build a container with every application module registered.
pub fn build_container() -> Result<Container> {
    let mut container = Container::new();
    UserModule::register(&mut container)?;
    Ok(container)
}

/// Mount the user routes at the configured base path and add request logging.
pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    let user_routes = users::controller::router::<AppState>();

    let router = if config.base_path == "/" {
        Router::new().merge(user_routes)
    } else {
        // A nested "/" only matches the bare prefix; serve "/users/" too.
        Router::new()
            .nest(&config.base_path, user_routes)
            .route(
                &format!("{}/", config.base_path),
                users::controller::collection_routes(),
            )
    };

    router
        .layer(SharedInterceptorLayer::new(vec![Box::new(LoggingInterceptor)]))
        .with_state(state)
}

/// Container, state and router in one step.
pub fn build_app(config: &AppConfig) -> Result<Router> {
    let state = AppState::new(build_container()?);
    Ok(build_router(state, config))
}
