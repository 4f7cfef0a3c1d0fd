//! Typed endpoint wrappers.
//!
//! One module per backend resource. Each operation builds a fresh client
//! from the [`ApiContext`](crate::client::ApiContext), so the guard and
//! token attachment are uniform across the whole surface. Paths mirror
//! the backend's URL table verbatim.

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod notifications;
pub mod patients;
pub mod predictions;
pub mod profile;
pub mod rooms;
pub mod settings;
pub mod test_results;
pub mod treatment;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Decode a guarded response body into its typed shape.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(ClientError::Decode)
}

/// Backend acknowledgments that only carry a human-readable message.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Acknowledgment {
    #[serde(default)]
    pub message: String,
}
