//! User service implementation.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use roster_core::{NewUser, PageRequest, RosterError, RosterResult, UserId};
use roster_repository::UserRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Message returned whenever a user uniqueness constraint is violated.
pub const USER_EXISTS_MESSAGE: &str = "User or Email already exists";

/// User service implementation over any repository.
pub struct UserServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

/// Rewrites a storage-level conflict into the canonical API message.
///
/// The unique indexes are the authoritative check; two concurrent writes
/// with colliding fields race there, and the loser's error lands here.
fn normalize_conflict(err: RosterError) -> RosterError {
    match err {
        RosterError::Conflict(_) => RosterError::Conflict(USER_EXISTS_MESSAGE.to_string()),
        other => other,
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserResponse> {
        debug!("Creating user: {}", request.username);

        // Pre-check for friendlier failures; the storage index still
        // backstops concurrent creates.
        if self
            .user_repository
            .exists_by_username(&request.username)
            .await?
        {
            return Err(RosterError::Conflict(USER_EXISTS_MESSAGE.to_string()));
        }

        if self.user_repository.exists_by_email(&request.email).await? {
            return Err(RosterError::Conflict(USER_EXISTS_MESSAGE.to_string()));
        }

        let new_user = NewUser::from(request);
        let saved = self
            .user_repository
            .insert(&new_user)
            .await
            .map_err(normalize_conflict)?;

        info!("User created: {}", saved.id);
        Ok(UserResponse::from(saved))
    }

    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse> {
        debug!("Getting user: {}", id);

        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found("User", id))?;

        Ok(UserResponse::from(user))
    }

    async fn list_users(&self, page: PageRequest) -> RosterResult<Vec<UserResponse>> {
        debug!("Listing users, skip: {}, limit: {}", page.skip, page.limit);

        let users = self.user_repository.list(page).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn update_user(
        &self,
        id: UserId,
        request: UpdateUserRequest,
    ) -> RosterResult<UserResponse> {
        debug!("Updating user: {}", id);

        let changes = NewUser::from(request);
        let updated = self
            .user_repository
            .update(id, &changes)
            .await
            .map_err(normalize_conflict)?
            .ok_or_else(|| RosterError::not_found("User", id))?;

        info!("User updated: {}", id);
        Ok(UserResponse::from(updated))
    }

    async fn delete_user(&self, id: UserId) -> RosterResult<()> {
        debug!("Deleting user: {}", id);

        let deleted = self.user_repository.delete(id).await?;

        if !deleted {
            return Err(RosterError::not_found("User", id));
        }

        info!("User deleted: {}", id);
        Ok(())
    }
}

impl<R: UserRepository> std::fmt::Debug for UserServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
