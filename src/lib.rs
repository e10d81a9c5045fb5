//! # Directory Core
//!
//! The state machine behind a single-page user directory browser: an
//! in-memory record store loaded once from a users endpoint, plus an edit
//! session with required-field validation that gates writes back into the
//! store. Presentation (cards, icons, the dialog widget) lives entirely
//! outside this crate and consumes the surface below.
//!
//! ## Features
//!
//! - **Owned record store**: one mutable collection behind an explicit
//!   mutation API, never touched directly by render code
//! - **Single asynchronous load**: one GET, three independently testable
//!   outcomes (success, suppressed server fault, reported failure)
//! - **All-or-nothing edit commits**: live per-field markers and the
//!   commit gate share one emptiness predicate and can never disagree
//! - **Silent referential no-ops**: operations keyed on an absent id are
//!   idempotent, not errors
//! - **Safe error handling**: no `unwrap()` calls in production code
//!
//! ## Quick Start
//!
//! ```no_run
//! use directory_core::{Directory, DirectoryConfig, Field};
//!
//! # async fn demo() -> Result<(), directory_core::LoadError> {
//! let mut directory = Directory::new(DirectoryConfig::default())?;
//! directory.load().await;
//!
//! for record in directory.records() {
//!     println!("{} <{}>", record.name, record.email);
//! }
//!
//! directory.toggle_liked(1);
//!
//! directory.open_edit(1);
//! directory.set_field(Field::Phone, "1-770-736-8031");
//! if let Err(rejection) = directory.commit_edit() {
//!     eprintln!("{rejection}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Operations
//!
//! - [`Directory::load`] - fetch and replace the collection, once
//! - [`Directory::remove`] - delete a record by id
//! - [`Directory::toggle_liked`] - flip the client-only liked flag
//! - [`Directory::open_edit`] / [`Directory::set_field`] /
//!   [`Directory::cancel_edit`] / [`Directory::commit_edit`] - the edit
//!   session lifecycle

pub mod app_error;
pub mod config;
pub mod directory_state;
pub mod edit_session;
pub mod fetch;
pub mod user_model;


pub use crate::app_error::{LoadError, ValidationError};
pub use crate::config::{avatar_url, DirectoryConfig, DEFAULT_USERS_ENDPOINT};
pub use crate::directory_state::DirectoryState;
pub use crate::edit_session::EditSession;
pub use crate::user_model::{EditDraft, Field, UserRecord};

use log::debug;

/// The outbound surface for the presentation layer.
///
/// Owns the record store, the edit session, the HTTP client and the
/// configuration, and exposes every user gesture as one synchronous call
/// ([`load`](Directory::load) being the single asynchronous exception).
/// All state mutation flows through this facade; nothing else holds a
/// reference into the collection.
pub struct Directory {
    config: DirectoryConfig,
    client: reqwest::Client,
    state: DirectoryState,
    session: EditSession,
}

impl Directory {
    /// Builds a directory around an empty store.
    ///
    /// # Errors
    ///
    /// Fails only when the HTTP client cannot be constructed, reported as
    /// [`LoadError::Network`].
    pub fn new(config: DirectoryConfig) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            config,
            client,
            state: DirectoryState::new(),
            session: EditSession::new(),
        })
    }

    /// The current records, in load-response order.
    pub fn records(&self) -> &[UserRecord] {
        self.state.records()
    }

    /// True only while the load is outstanding; the presentation layer
    /// shows its busy indicator off this flag.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Whether the collection is empty (the "No users" branch).
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// The active draft, or `None` when no edit dialog is open.
    pub fn draft(&self) -> Option<&EditDraft> {
        self.session.draft()
    }

    /// Loads the collection from the configured users endpoint.
    ///
    /// Issues exactly one request, no retry. A call while a load is
    /// already in flight is ignored. Success replaces the collection
    /// wholesale; a server fault (5xx) is suppressed silently; any other
    /// failure is reported to the diagnostic log. The collection is
    /// unchanged on every failure path.
    pub async fn load(&mut self) {
        if !self.state.begin_load() {
            debug!("load already in flight; ignoring");
            return;
        }

        let outcome = fetch::fetch_users(&self.client, &self.config.users_endpoint).await;
        self.state.finish_load(outcome);
    }

    /// Deletes the record with the matching id. Silent no-op (`false`)
    /// when absent.
    pub fn remove(&mut self, id: u64) -> bool {
        self.state.remove(id)
    }

    /// Flips the liked flag on the matching record. Silent no-op
    /// (`false`) when absent.
    pub fn toggle_liked(&mut self, id: u64) -> bool {
        self.state.toggle_liked(id)
    }

    /// Opens an edit session on the record with the matching id, copying
    /// its current values into the draft. An active draft is discarded.
    /// Silent no-op (`false`) when absent.
    pub fn open_edit(&mut self, id: u64) -> bool {
        match self.state.get_by_id(id) {
            Some(record) => {
                self.session.open(record);
                true
            }
            None => false,
        }
    }

    /// Updates one field of the active draft. `false` when no session is
    /// open.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        self.session.set_field(field, value)
    }

    /// Discards the draft without mutating the store.
    pub fn cancel_edit(&mut self) {
        self.session.cancel();
    }

    /// Validates the draft and commits it into the store. See
    /// [`EditSession::commit`] for the exact contract.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] naming the first empty required field; the
    /// store is untouched and the session stays open.
    pub fn commit_edit(&mut self) -> Result<bool, ValidationError> {
        self.session.commit(&mut self.state)
    }
}
