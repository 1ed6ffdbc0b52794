use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`RecordingClient`](super::RecordingClient) operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// The data store answered with a non-2xx status
    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: StatusCode, body: String },

    /// The response body did not match the expected shape
    #[error("Malformed response: {source}")]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The request never got a response (refused, dropped, timed out)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid base address: {0}")]
    InvalidBaseAddress(String),
}

impl ClientError {
    /// HTTP status of a failed request, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
