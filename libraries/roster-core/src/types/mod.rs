//! Domain types for the user resource

mod date_of_birth;
mod ids;
mod user;

pub use date_of_birth::DateOfBirth;
pub use ids::UserId;
pub use user::{CreateUser, NewUser, Timestamps, UpdateUser, User, UserChanges};

/// Message returned when a path or body id is not a base-10 `u64`
pub const INVALID_ID: &str = "invalid ID";

/// Message returned when a date of birth is not `YYYY-MM-DD`
pub const INVALID_DOB: &str = "invalid date of birth format";

/// Message returned when a body id disagrees with the path id
pub const ID_MISMATCH: &str = "ID in body does not match path";
