//! # Roster Config
//!
//! Layered configuration for the Roster user service: TOML files,
//! `ROSTER`-prefixed environment variables, and the legacy `DB_*`
//! variables honored by the original deployment.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
