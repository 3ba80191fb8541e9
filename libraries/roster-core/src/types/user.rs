/// User domain type
use crate::error::{Result, RosterError};
use crate::types::{DateOfBirth, UserId, ID_MISMATCH};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Date of birth; `None` after an update that omitted it
    pub dob: Option<DateOfBirth>,

    /// Postal address
    pub address: String,

    /// Free-text description
    pub description: String,

    /// Audit fields, kept out of the JSON representation
    #[serde(skip)]
    pub timestamps: Timestamps,
}

/// Audit timestamps maintained by the repository
///
/// `deleted_at` is the soft-delete marker: a row with it set is invisible
/// to every repository read and write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timestamps {
    /// When the row was inserted
    pub created_at: DateTime<Utc>,
    /// When the row was last overwritten
    pub updated_at: DateTime<Utc>,
    /// When the row was soft-deleted
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// Whether the row has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Request body for creating a user
///
/// Fields are taken as sent; call [`NewUser::validate`] before persisting.
/// Missing strings default to empty and an `id` field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewUser {
    /// Display name
    pub name: String,
    /// Date of birth as sent by the client
    pub dob: String,
    /// Postal address
    pub address: String,
    /// Free-text description
    pub description: String,
}

impl NewUser {
    /// Check the date of birth and produce a record ready for insertion
    pub fn validate(self) -> Result<CreateUser> {
        let dob = DateOfBirth::parse(&self.dob)?;

        Ok(CreateUser {
            name: self.name,
            dob,
            address: self.address,
            description: self.description,
        })
    }
}

/// Validated input for inserting a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    /// Display name
    pub name: String,
    /// Date of birth
    pub dob: DateOfBirth,
    /// Postal address
    pub address: String,
    /// Free-text description
    pub description: String,
}

/// Request body for overwriting a user
///
/// Every field is replaced; a missing string becomes empty and a missing
/// `dob` becomes `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserChanges {
    /// Optional id, must match the target id when present
    pub id: Option<u64>,
    /// Display name
    pub name: String,
    /// Date of birth as sent by the client
    pub dob: Option<String>,
    /// Postal address
    pub address: String,
    /// Free-text description
    pub description: String,
}

impl UserChanges {
    /// Check the body against the target id and produce an overwrite
    ///
    /// The target id always wins: a body id that disagrees with it is
    /// rejected rather than silently applied. A present `dob` must satisfy
    /// the same format rule as on creation.
    pub fn validate(self, id: UserId) -> Result<UpdateUser> {
        if let Some(body_id) = self.id {
            if body_id != id.get() {
                return Err(RosterError::invalid_input(ID_MISMATCH));
            }
        }

        let dob = self.dob.as_deref().map(DateOfBirth::parse).transpose()?;

        Ok(UpdateUser {
            name: self.name,
            dob,
            address: self.address,
            description: self.description,
        })
    }
}

/// Validated full overwrite of a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    /// Display name
    pub name: String,
    /// Date of birth, cleared when `None`
    pub dob: Option<DateOfBirth>,
    /// Postal address
    pub address: String,
    /// Free-text description
    pub description: String,
}
