//! Client error types.

use pos_core::PosError;

/// Error type for backend requests.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string()).unwrap_or_default();
        if e.is_timeout() {
            ClientError::Timeout(url)
        } else if e.is_connect() {
            ClientError::Connection(e.to_string())
        } else if e.is_decode() {
            ClientError::Deserialization(e.to_string())
        } else if let Some(status) = e.status() {
            ClientError::Http {
                status: status.as_u16(),
                url,
            }
        } else {
            ClientError::Request(e.to_string())
        }
    }
}

impl From<ClientError> for PosError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Deserialization(msg) => PosError::MalformedResponse(msg),
            other => PosError::Backend(other.to_string()),
        }
    }
}
