use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by the catalog API on non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Reads an error body, accepting only the `{"message": ...}` shape.
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|err| !err.message.trim().is_empty())
    }
}
