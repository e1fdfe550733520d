use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Body returned for every failed request
///
/// Serializes as a single-key object:
/// ```
/// use user_collection::common::ErrorBody;
///
/// let body = serde_json::to_value(ErrorBody::new("User not found")).unwrap();
/// assert_eq!(body, serde_json::json!({ "error": "User not found" }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// A JSON payload answered with `201 Created`
#[derive(Debug)]
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
