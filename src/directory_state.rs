use log::warn;

use crate::app_error::LoadError;
use crate::user_model::{EditDraft, UserRecord};

/// The authoritative in-memory record collection and its loading flag.
///
/// The collection is populated wholesale by a load, mutated in place by
/// the keyed operations, and destroyed with the session. Order is the
/// load-response order and is never re-sorted by subsequent mutations.
/// All mutation goes through the methods below; the fields are private so
/// ordering and the unique-id invariant cannot be bypassed.
#[derive(Debug, Default)]
pub struct DirectoryState {
    records: Vec<UserRecord>,
    is_loading: bool,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current records, in load-response order.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// True only while a load is outstanding.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get_by_id(&self, id: u64) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Marks a load as in flight. Returns `false` when one already is, in
    /// which case the caller must not issue a request.
    pub fn begin_load(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        true
    }

    /// Settles a load with one of its three outcomes.
    ///
    /// Success replaces the collection wholesale with `is_liked` forced to
    /// `false` on every entry. A server fault is swallowed with no
    /// user-visible effect and no log entry. Any other failure is reported
    /// to the diagnostic channel. On every path the collection is otherwise
    /// unchanged and the loading flag is cleared.
    pub fn finish_load(&mut self, outcome: Result<Vec<UserRecord>, LoadError>) {
        match outcome {
            Ok(mut users) => {
                for user in &mut users {
                    user.is_liked = false;
                }
                self.records = users;
            }
            Err(err) if err.is_suppressed() => {}
            Err(err) => {
                warn!("Could not fetch users. Check that the backend is running, reachable and returns valid JSON: {err}");
            }
        }
        self.is_loading = false;
    }

    /// Removes the record with the matching id. Silent no-op (`false`)
    /// when the id is absent.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    /// Flips `is_liked` on the matching record, leaving every other record
    /// untouched. Silent no-op (`false`) when the id is absent.
    pub fn toggle_liked(&mut self, id: u64) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.is_liked = !record.is_liked;
                true
            }
            None => false,
        }
    }

    /// Replaces the four editable fields of the record matching the
    /// draft's id, in place. `id`, `username` and `is_liked` are left
    /// untouched. Never inserts: `false` when the id is absent.
    pub fn commit_edit(&mut self, draft: &EditDraft) -> bool {
        match self.records.iter_mut().find(|record| record.id == draft.id) {
            Some(record) => {
                record.name = draft.name.clone();
                record.email = draft.email.clone();
                record.phone = draft.phone.clone();
                record.website = draft.website.clone();
                true
            }
            None => false,
        }
    }
}
