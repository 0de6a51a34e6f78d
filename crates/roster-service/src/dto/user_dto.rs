//! User-related DTOs.

use roster_core::{NewUser, User, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create a new user.
///
/// All four fields are required strings; serde rejects a missing or
/// non-string field before the handler runs. No further format checks are
/// applied (there is deliberately no email-format validation).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,

    pub email: String,

    /// Login handle; `user` on the wire.
    #[serde(rename = "user")]
    pub username: String,

    pub password: String,
}

/// Request to update a user.
///
/// Same shape as create: an update replaces every mutable field, so all
/// four are required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: String,

    pub email: String,

    #[serde(rename = "user")]
    pub username: String,

    pub password: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            username: request.username,
            password: request.password,
        }
    }
}

impl From<UpdateUserRequest> for NewUser {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            username: request.username,
            password: request.password,
        }
    }
}

/// User response DTO.
///
/// Mirrors the stored record, password included: the upstream contract
/// returns the password field verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(rename = "user")]
    pub username: String,
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            username: user.username,
            password: user.password,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Creates a new message response.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserializes_wire_shape() {
        let request: CreateUserRequest = serde_json::from_str(
            r#"{"name":"Ann","email":"a@x.com","user":"ann1","password":"p"}"#,
        )
        .unwrap();

        assert_eq!(request.name, "Ann");
        assert_eq!(request.username, "ann1");
    }

    #[test]
    fn test_create_request_rejects_missing_field() {
        let result: Result<CreateUserRequest, _> =
            serde_json::from_str(r#"{"name":"Ann","email":"a@x.com","user":"ann1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_rejects_non_string_field() {
        let result: Result<CreateUserRequest, _> =
            serde_json::from_str(r#"{"name":1,"email":"a@x.com","user":"ann1","password":"p"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_user_from_create_request() {
        let request = CreateUserRequest {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            username: "ann1".to_string(),
            password: "p".to_string(),
        };

        let new_user = NewUser::from(request);
        assert_eq!(new_user.name, "Ann");
        assert_eq!(new_user.username, "ann1");
    }

    #[test]
    fn test_user_response_from_user() {
        let user = NewUser::new("Ann", "a@x.com", "ann1", "p").into_user(UserId(1));
        let response = UserResponse::from(user);

        assert_eq!(response.id, UserId(1));
        assert_eq!(response.username, "ann1");
        assert_eq!(response.password, "p");
    }

    #[test]
    fn test_user_response_serializes_wire_shape() {
        let user = NewUser::new("Ann", "a@x.com", "ann1", "p").into_user(UserId(1));
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Ann",
                "email": "a@x.com",
                "user": "ann1",
                "password": "p"
            })
        );
    }

    #[test]
    fn test_message_response() {
        let response = MessageResponse::new("User deleted successfully");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "User deleted successfully");
    }
}
