//! Service implementations.

pub mod user_service_impl;

pub use user_service_impl::*;
