// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::PasswordRecord;

// Generation requests and responses
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateOptions {
    /// Include uppercase letters A-Z (defaults to true)
    pub uppercase: Option<bool>,
    /// Include lowercase letters a-z (defaults to true)
    pub lowercase: Option<bool>,
    /// Include digits 0-9 (defaults to true)
    pub numbers: Option<bool>,
    /// Include special characters @#$%&* (defaults to true)
    pub special: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Desired password length (defaults to the configured length)
    pub length: Option<i64>,
    /// Character class toggles (absent classes default to enabled)
    pub options: Option<GenerateOptions>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password (only present on success)
    pub password: Option<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Saved-password requests and responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    /// Site the password belongs to
    pub site_name: Option<String>,
    /// Password value to save
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SavedPasswordsResponse {
    /// Saved passwords for this session, newest first
    pub passwords: Vec<PasswordRecord>,
}

// System responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Whether the service is up
    pub success: bool,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
}
