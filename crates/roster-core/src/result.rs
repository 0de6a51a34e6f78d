//! Result type aliases for Roster.

use crate::RosterError;

/// A specialized `Result` type for Roster operations.
pub type RosterResult<T> = Result<T, RosterError>;

/// A boxed future returning a `RosterResult`.
pub type BoxFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = RosterResult<T>> + Send + 'a>>;
