//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// User record as stored in the system.
///
/// The login handle is named `username` in Rust and in storage, but is
/// serialized as `user` to preserve the wire contract. The password is
/// carried verbatim; this service stores and returns it as provided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier, immutable after insert.
    pub id: UserId,

    /// Display name, not unique.
    pub name: String,

    /// Email address, unique across all users.
    pub email: String,

    /// Login handle, unique across all users.
    #[serde(rename = "user")]
    pub username: String,

    /// Password, stored as provided.
    pub password: String,
}

impl User {
    /// Reconstructs a user from its stored fields.
    #[must_use]
    pub fn new(id: UserId, name: String, email: String, username: String, password: String) -> Self {
        Self {
            id,
            name,
            email,
            username,
            password,
        }
    }

    /// Replaces every mutable field from `changes`, keeping the id.
    pub fn apply(&mut self, changes: NewUser) {
        self.name = changes.name;
        self.email = changes.email;
        self.username = changes.username;
        self.password = changes.password;
    }
}

/// A user before storage has assigned an id.
///
/// Also doubles as the full-replace payload for updates, since an update
/// overwrites every mutable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(rename = "user")]
    pub username: String,
    pub password: String,
}

impl NewUser {
    /// Creates a new unsaved user.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Attaches a storage-assigned id, producing the stored entity.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            username: self.username,
            password: self.password,
        }
    }
}
