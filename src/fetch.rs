//! The one network operation: fetching the user collection.

use std::collections::HashSet;

use log::debug;
use reqwest::Client;

use crate::app_error::LoadError;
use crate::user_model::UserRecord;

/// Issues a single GET to the users endpoint and decodes the response.
///
/// Exactly one request per invocation, no retry. Classifies the outcome
/// into the [`LoadError`] taxonomy: non-success statuses by class,
/// transport failures as [`LoadError::Network`], undecodable or
/// duplicate-id bodies as [`LoadError::Payload`].
pub async fn fetch_users(client: &Client, endpoint: &str) -> Result<Vec<UserRecord>, LoadError> {
    debug!("GET {endpoint}");

    let response = client.get(endpoint).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::from_status(status.as_u16()));
    }

    let body = response.text().await?;
    parse_users(&body)
}

/// Decodes a users payload, rejecting bodies that would break the
/// unique-id invariant of the store.
pub fn parse_users(body: &str) -> Result<Vec<UserRecord>, LoadError> {
    let users: Vec<UserRecord> = serde_json::from_str(body)?;
    ensure_unique_ids(&users)?;
    Ok(users)
}

fn ensure_unique_ids(users: &[UserRecord]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(users.len());
    for user in users {
        if !seen.insert(user.id) {
            return Err(LoadError::Payload(format!(
                "duplicate user id {} in payload",
                user.id
            )));
        }
    }
    Ok(())
}
