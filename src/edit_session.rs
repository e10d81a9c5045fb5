//! The edit session: one draft at a time, validated before it may touch
//! the store.

use log::debug;

use crate::app_error::ValidationError;
use crate::directory_state::DirectoryState;
use crate::user_model::{EditDraft, Field, UserRecord};

/// Owns the draft of the single record currently being edited, or none.
///
/// A session exists between "open" and "commit or cancel". Validation is
/// all-or-nothing: a commit with any empty required field fails, leaves
/// the store untouched and keeps the session open.
#[derive(Debug, Default)]
pub struct EditSession {
    draft: Option<EditDraft>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active draft, or `None` when no session is open.
    pub fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Starts editing a record, copying its current field values into a
    /// fresh draft. An already-active draft is discarded uncommitted:
    /// last writer wins at the gesture level.
    pub fn open(&mut self, record: &UserRecord) {
        if let Some(old) = &self.draft {
            debug!("discarding uncommitted draft for record {}", old.id);
        }
        self.draft = Some(EditDraft::from_record(record));
    }

    /// Updates exactly one field of the draft. `false` when no session is
    /// open.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.set(field, value.into());
                true
            }
            None => false,
        }
    }

    /// Discards the draft without mutating the store.
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Validates the draft and, if valid, writes it back into the store.
    ///
    /// On a validation failure the error names the first empty field, the
    /// store is untouched and the session stays open. On success the
    /// draft is cleared and the session is closed; the returned `bool` is
    /// whether the store still held a record with the draft's id (a
    /// commit against a since-removed record is a silent no-op, never an
    /// insert). A commit with no open session is `Ok(false)`.
    pub fn commit(&mut self, store: &mut DirectoryState) -> Result<bool, ValidationError> {
        let draft = match self.draft.as_ref() {
            Some(draft) => draft,
            None => return Ok(false),
        };

        if let Some(field) = draft.first_invalid_field() {
            return Err(ValidationError { field });
        }

        let applied = store.commit_edit(draft);
        self.draft = None;
        Ok(applied)
    }
}
