use std::time::Duration;

/// Where the data store lives and how to talk to it
///
/// Read-only once handed to [`RecordingClient::new`](super::RecordingClient::new),
/// so several clients pointing at different servers can coexist.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base address of the data store API, e.g. "http://localhost:8000"
    pub base_url: String,

    /// Per-request timeout; `None` leaves it to the transport defaults
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
