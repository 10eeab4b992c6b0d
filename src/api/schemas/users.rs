use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Fields arrive as `Option` so that missing keys surface as a payload error
/// rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn success(message: String) -> Self {
        Self { status: "success".to_string(), message }
    }
}

#[derive(Debug, Serialize)]
pub struct UserSchema {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for UserSchema {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub status: String,
    pub data: UserSchema,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self { status: "success".to_string(), data: user.into() }
    }
}

#[derive(Debug, Serialize)]
pub struct UserList {
    pub users: Vec<UserSchema>,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub status: String,
    pub data: UserList,
}

impl From<Vec<User>> for UserListResponse {
    fn from(users: Vec<User>) -> Self {
        Self {
            status: "success".to_string(),
            data: UserList { users: users.into_iter().map(Into::into).collect() },
        }
    }
}
