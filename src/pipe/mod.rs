use async_trait::async_trait;

pub mod builtins;

pub use builtins::{CreateUserPipe, ParseIdPipe};

pub type PipeResult<T> = Result<T, PipeError>;

#[derive(Debug, thiserror::Error)]
pub enum PipeError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Transformation failed: {0}")]
    Transformation(String),
}

/// The Pipe trait for transformation and validation
///
/// Pipes run before a handler touches its input: raw path segments and
/// bodies go in, typed values come out.
#[async_trait]
pub trait Pipe: Send + Sync + 'static {
    type Input: Send + 'static;
    type Output: Send + 'static;

    async fn transform(&self, input: Self::Input) -> PipeResult<Self::Output>;
}
