use std::fmt::{Display, Formatter};

use serde_json::Error as SerdeError;

use crate::user_model::Field;

/// Failure classes for the one network load.
///
/// The store treats these unevenly on purpose: a [`ServerFault`] is
/// suppressed entirely (no log entry, no state change), every other
/// variant is reported to the diagnostic channel and likewise leaves the
/// collection unchanged.
///
/// [`ServerFault`]: LoadError::ServerFault
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Transient server fault: the response carried a 5xx status.
    ServerFault(u16),
    /// Any other non-success status on the response.
    Status(u16),
    /// Transport-level failure before a status was available.
    Network(String),
    /// Body did not decode into the expected user array.
    Payload(String),
}

impl LoadError {
    /// Classifies a non-success HTTP status into the taxonomy above.
    pub fn from_status(status: u16) -> Self {
        if (500..600).contains(&status) {
            LoadError::ServerFault(status)
        } else {
            LoadError::Status(status)
        }
    }

    /// Whether this failure is swallowed silently by the store.
    pub fn is_suppressed(&self) -> bool {
        matches!(self, LoadError::ServerFault(_))
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::ServerFault(status) => write!(f, "Server fault: HTTP {}", status),
            LoadError::Status(status) => write!(f, "Unexpected status: HTTP {}", status),
            LoadError::Network(msg) => write!(f, "Network error: {}", msg),
            LoadError::Payload(msg) => write!(f, "Payload error: {}", msg),
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoadError::from_status(status.as_u16()),
            None if err.is_decode() => LoadError::Payload(err.to_string()),
            None => LoadError::Network(err.to_string()),
        }
    }
}

impl From<SerdeError> for LoadError {
    fn from(err: SerdeError) -> Self {
        LoadError::Payload(format!("invalid users payload: {}", err))
    }
}

/// Commit rejection: a required field of the draft is empty.
///
/// This is expected, user-correctable input, surfaced synchronously to the
/// caller and never logged. The session stays open so the operator can
/// correct the field and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    /// The first empty field, in [`Field::REQUIRED`] order.
    pub field: Field,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is required", self.field)
    }
}
