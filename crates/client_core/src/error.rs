use shared::error::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}{}", describe_api_error(.api_error))]
    Status {
        url: String,
        status: u16,
        api_error: Option<ApiError>,
    },
    #[error("malformed catalog body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

fn describe_api_error(api_error: &Option<ApiError>) -> String {
    api_error
        .as_ref()
        .map(|err| format!(": {err}"))
        .unwrap_or_default()
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("catalog store is already populated for this session")]
    AlreadyPopulated,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid catalog api url '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },
}
