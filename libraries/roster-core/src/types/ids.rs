/// ID types for Roster entities
use crate::error::{Result, RosterError};
use crate::types::INVALID_ID;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User identifier, assigned by the store on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw id
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a base-10 id. Signs, whitespace and empty input are rejected.
impl FromStr for UserId {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RosterError::invalid_input(INVALID_ID));
        }

        s.parse::<u64>()
            .map(Self)
            .map_err(|_| RosterError::invalid_input(INVALID_ID))
    }
}
