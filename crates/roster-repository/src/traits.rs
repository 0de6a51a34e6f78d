//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{NewUser, PageRequest, RosterResult, User, UserId};

/// User repository trait.
///
/// Each method is a single statement against the store; writes are atomic
/// at the row grain (commit or nothing).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user; storage assigns the id.
    async fn insert(&self, user: &NewUser) -> RosterResult<User>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>>;

    /// Checks if an email is taken.
    async fn exists_by_email(&self, email: &str) -> RosterResult<bool>;

    /// Checks if a login handle is taken.
    async fn exists_by_username(&self, username: &str) -> RosterResult<bool>;

    /// Lists users in insertion order with offset pagination.
    async fn list(&self, page: PageRequest) -> RosterResult<Vec<User>>;

    /// Replaces every mutable field of an existing user.
    ///
    /// Returns `None` when no row has the given id.
    async fn update(&self, id: UserId, changes: &NewUser) -> RosterResult<Option<User>>;

    /// Deletes a user by ID. Returns whether a row was removed.
    async fn delete(&self, id: UserId) -> RosterResult<bool>;

    /// Counts all users.
    async fn count(&self) -> RosterResult<u64>;
}
