use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub type UserId = u64;

/// A stored user
///
/// `name` and `email` keep whatever JSON value the client sent; only their
/// presence is checked on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: Value,
    pub email: Value,
}

/// Create payload as received
///
/// A key that is absent stays `None`; a key that is present is `Some`, even
/// when its value is `null`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl CreateUserRequest {
    /// Returns `None` unless both keys are present.
    pub fn validate(self) -> Option<NewUser> {
        Some(NewUser {
            name: self.name?,
            email: self.email?,
        })
    }
}

/// A create payload that passed validation and is waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: Value,
    pub email: Value,
}

impl NewUser {
    pub fn new(name: impl Into<Value>, email: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Records present before any create call.
pub fn seed_users() -> Vec<User> {
    vec![
        NewUser::new("John Doe", "john@example.com").with_id(1),
        NewUser::new("Jane Smith", "jane@example.com").with_id(2),
    ]
}
