use crate::pipe::{Pipe, PipeError, PipeResult};
use crate::users::domain::{CreateUserRequest, NewUser, UserId};
use async_trait::async_trait;
use axum::body::Bytes;
use serde_json::Value;

/// A pipe that parses a path segment into a user id
///
/// Only plain decimal digits are accepted; signs and whitespace are rejected.
#[derive(Default)]
pub struct ParseIdPipe;

#[async_trait]
impl Pipe for ParseIdPipe {
    type Input = String;
    type Output = UserId;

    async fn transform(&self, input: String) -> PipeResult<UserId> {
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PipeError::Validation(format!("Invalid id: {input:?}")));
        }
        input
            .parse::<UserId>()
            .map_err(|e| PipeError::Transformation(format!("Invalid id {input:?}: {e}")))
    }
}

/// A pipe that turns a raw request body into a validated `NewUser`
///
/// The body must be a non-empty JSON object carrying `name` and `email`
/// keys. Their values are taken as-is, `null` included. Extra keys are ignored.
#[derive(Default)]
pub struct CreateUserPipe;

#[async_trait]
impl Pipe for CreateUserPipe {
    type Input = Bytes;
    type Output = NewUser;

    async fn transform(&self, input: Bytes) -> PipeResult<NewUser> {
        if input.is_empty() {
            return Err(PipeError::Validation("Request body is empty".to_string()));
        }

        let value: Value = serde_json::from_slice(&input)
            .map_err(|e| PipeError::Validation(format!("Malformed JSON: {e}")))?;

        match &value {
            Value::Object(fields) if !fields.is_empty() => {}
            _ => {
                return Err(PipeError::Validation(
                    "Body must be a non-empty JSON object".to_string(),
                ));
            }
        }

        let request: CreateUserRequest = serde_json::from_value(value)
            .map_err(|e| PipeError::Transformation(format!("Unreadable payload: {e}")))?;

        request.validate().ok_or_else(|| {
            PipeError::Validation("Both name and email keys must be present".to_string())
        })
    }
}
