//! # Roster Service
//!
//! Business logic for the Roster user service. Holds the CRUD use cases
//! and the rules the HTTP layer relies on: uniqueness conflicts, not-found
//! mapping, and full-replace update semantics.

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::UserServiceImpl;
pub use user_service::*;
