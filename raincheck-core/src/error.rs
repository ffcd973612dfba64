use thiserror::Error;

/// Failures talking to the forecast service.
///
/// Invalid cities and empty forecasts are not errors; see [`crate::outlook::Lookup`].
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("failed to send request to {url}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed with status {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
