//! Roster Server Library
//!
//! HTTP front end for the Roster user service: five CRUD routes over a
//! single `User` resource plus a health check.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
