/// Date of birth value type
use crate::error::{Result, RosterError};
use crate::types::INVALID_DOB;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const FORMAT: &str = "%Y-%m-%d";

/// Calendar date in strict ISO-8601 `YYYY-MM-DD` form
///
/// The only way to build one from text is [`DateOfBirth::parse`], which
/// requires a four-digit year, two-digit month and day, and a date that
/// exists on the calendar. Serde goes through the same path, so every
/// serialized value is canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    /// Parse a `YYYY-MM-DD` string
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

        if !well_formed {
            return Err(RosterError::invalid_input(INVALID_DOB));
        }

        NaiveDate::parse_from_str(s, FORMAT)
            .map(Self)
            .map_err(|_| RosterError::invalid_input(INVALID_DOB))
    }

    /// Build from calendar components, `None` if the date does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl FromStr for DateOfBirth {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateOfBirth {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<DateOfBirth> for String {
    fn from(dob: DateOfBirth) -> Self {
        dob.to_string()
    }
}
