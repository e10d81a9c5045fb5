//! Data model definitions for the user directory.
//!
//! This module defines the structures flowing through the record store:
//! [`UserRecord`] is the authoritative card entry, [`EditDraft`] is the
//! transient copy of a record under edit, and [`Field`] names the editable
//! fields the validation rule applies to.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A single user entry in the directory.
///
/// Records are deserialized 1:1 from the users endpoint payload; unknown
/// payload fields are ignored. The `is_liked` flag is client-only state,
/// never part of the server payload, and is forced to `false` whenever a
/// load replaces the collection.
///
/// # Examples
///
/// ```rust
/// use directory_core::user_model::UserRecord;
///
/// let record: UserRecord = serde_json::from_str(
///     r#"{"id":1,"name":"Leanne","email":"l@x.com","phone":"1-770","website":"l.org","username":"Bret"}"#,
/// )?;
/// assert_eq!(record.id, 1);
/// assert!(!record.is_liked);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Unique identifier. Immutable once created; no operation on the
    /// store may introduce a duplicate.
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    /// Used only to derive a display image reference, see
    /// [`avatar_url`](crate::config::avatar_url).
    pub username: String,
    /// Client-only "liked" flag. Absent from the wire format.
    #[serde(default)]
    pub is_liked: bool,
}

/// The transient, possibly-invalid copy of a record being edited.
///
/// A draft carries the record id it was opened from plus the four editable
/// fields. It lives inside an [`EditSession`](crate::edit_session::EditSession)
/// between "open" and "commit or cancel" and never touches the store until
/// it passes validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

impl EditDraft {
    /// Copies the current editable values out of a record.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            website: record.website.clone(),
        }
    }

    /// Current value of one editable field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Website => &self.website,
        }
    }

    /// Replaces exactly one field, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Website => self.website = value,
        }
    }

    /// Live per-field marker: whether this field currently satisfies the
    /// validation rule. Uses the same predicate as the commit gate.
    pub fn field_is_valid(&self, field: Field) -> bool {
        field.is_valid(self.field(field))
    }

    /// First required field that is empty, or `None` when the draft is
    /// ready to commit.
    pub fn first_invalid_field(&self) -> Option<Field> {
        Field::REQUIRED
            .into_iter()
            .find(|field| !self.field_is_valid(*field))
    }
}

/// The editable fields of a record, all of which are required on commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Website,
}

impl Field {
    /// Commit order: validation reports the first empty field in this order.
    pub const REQUIRED: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Website];

    /// The emptiness predicate shared by the live per-field markers and the
    /// all-or-nothing commit gate. Raw length, no trimming.
    pub fn is_valid(self, value: &str) -> bool {
        !value.is_empty()
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Name => write!(f, "Name"),
            Field::Email => write!(f, "Email"),
            Field::Phone => write!(f, "Phone"),
            Field::Website => write!(f, "Website"),
        }
    }
}
