//! User service trait definition.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use async_trait::async_trait;
use roster_core::{PageRequest, RosterResult, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Creates a new user; fails with a conflict if the email or login
    /// handle is already taken.
    async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserResponse>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse>;

    /// Lists users with offset pagination.
    async fn list_users(&self, page: PageRequest) -> RosterResult<Vec<UserResponse>>;

    /// Replaces every mutable field of a user.
    async fn update_user(&self, id: UserId, request: UpdateUserRequest)
        -> RosterResult<UserResponse>;

    /// Deletes a user.
    async fn delete_user(&self, id: UserId) -> RosterResult<()>;
}
