//! Wire DTOs
//!
//! Typed shapes for the backend's JSON envelope and the payloads that do
//! not map one-to-one onto domain types.

pub mod auth;
pub mod menu;

use serde::Deserialize;

/// The backend wraps every payload in this envelope; responses are read
/// from `data`.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
