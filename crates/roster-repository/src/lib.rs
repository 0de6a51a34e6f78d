//! # Roster Repository
//!
//! Data access for the Roster user service:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>   (domain interface)
//! PgUserRepository               (explicit SQL via SQLx)
//!   ↓
//! PostgreSQL
//! ```
//!
//! The pool is the only shared mutable resource in the process; it is
//! created by the server binary and handed to the repository by `Arc`.

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;
