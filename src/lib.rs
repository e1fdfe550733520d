//! # User Collection
//!
//! An HTTP service exposing list, get and create over an in-memory
//! collection of user records.
//!
//! The collection is owned by a repository registered in a small
//! dependency-injection container; handlers reach it through the
//! [`Inject`] extractor instead of global state.
//!
//! ## Routes
//!
//! | method | path    | success            | failure                                         |
//! |--------|---------|--------------------|-------------------------------------------------|
//! | GET    | `/`     | 200, array of users | none                                           |
//! | GET    | `/{id}` | 200, user          | 404 `{"error": "User not found"}`              |
//! | POST   | `/`     | 201, created user  | 400 `{"error": "Name and email are required"}` |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use user_collection::{app, config::AppConfig, lifecycle::shutdown_signal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let router = app::build_app(&config)?;
//!     let listener = tokio::net::TcpListener::bind(config.addr()).await?;
//!     axum::serve(listener, router)
//!         .with_graceful_shutdown(shutdown_signal())
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod common;
pub mod config;
pub mod di;
pub mod error;
pub mod interceptor;
pub mod lifecycle;
pub mod module;
pub mod pipe;
pub mod users;

pub use app::{AppState, build_app, build_container, build_router};
pub use common::{Created, ErrorBody};
pub use config::{AppConfig, ConfigService};
pub use di::{Container, HasContainer, Inject, Injectable};
pub use error::{AppError, Result};
pub use module::Module;
pub use users::{User, UserModule, UserService};
