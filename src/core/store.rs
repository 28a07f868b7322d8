// src/core/store.rs
use chrono::Utc;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::models::PasswordRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing site name or password")]
    MissingField,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("No passwords found")]
    EmptySession,
}

/// Ordered collection of saved passwords owned by a single client session.
///
/// Records are kept in insertion order; the newest-first view is produced
/// only when listing. The whole value round-trips through the session cookie
/// between requests, so every mutation must be written back by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStore {
    records: Vec<PasswordRecord>,
    next_id: u64,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new record and return it. Ids come from a counter persisted
    /// with the store, so they are strictly increasing within a session and
    /// never reused, even after deletions.
    pub fn append(
        &mut self,
        site_name: &str,
        password: &str,
    ) -> Result<PasswordRecord, ValidationError> {
        if site_name.trim().is_empty() || password.is_empty() {
            return Err(ValidationError::MissingField);
        }

        let id = self.next_id;
        self.next_id += 1;

        let record = PasswordRecord {
            id,
            site_name: site_name.to_string(),
            password: password.to_string(),
            created_at: Utc::now(),
        };
        self.records.push(record.clone());

        Ok(record)
    }

    /// All records, newest first. The stored order is left untouched.
    pub fn list(&self) -> Vec<PasswordRecord> {
        self.records.iter().rev().cloned().collect()
    }

    /// Remove the record with the given id. Deleting from an empty store is
    /// an error; deleting an id that is not present in a non-empty store is a
    /// tolerated no-op.
    pub fn delete(&mut self, id: u64) -> Result<(), NotFoundError> {
        if self.records.is_empty() {
            return Err(NotFoundError::EmptySession);
        }

        self.records.retain(|record| record.id != id);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
