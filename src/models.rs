// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// A password saved by one client session. Ids are assigned per session,
/// strictly increasing, and never reused after a delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRecord {
    pub id: u64,
    pub site_name: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_special: true,
        }
    }
}
