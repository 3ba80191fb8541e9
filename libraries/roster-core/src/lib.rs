//! Roster Core
//!
//! Storage-agnostic domain types, the repository trait, and error handling
//! for the Roster user service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `DateOfBirth`, and the create/update payloads
//! - **Repository Trait**: `UserRepository`, implemented by storage backends
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{DateOfBirth, NewUser};
//!
//! let payload = NewUser {
//!     name: "Alice".to_string(),
//!     dob: "1990-04-12".to_string(),
//!     address: "1 Main St".to_string(),
//!     description: "first user".to_string(),
//! };
//!
//! let user = payload.validate().unwrap();
//! assert_eq!(user.dob, DateOfBirth::parse("1990-04-12").unwrap());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod repository;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use repository::UserRepository;

pub use types::{
    CreateUser, DateOfBirth, NewUser, Timestamps, UpdateUser, User, UserChanges, UserId,
};
