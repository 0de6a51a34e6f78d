//! Domain entities for the Roster user service.

pub mod user;

pub use user::*;
