use thiserror::Error;

/// Unified error type for the probe.
///
/// Two classes matter to the operator: transport failures (connect errors,
/// timeouts, body decode failures) and remote failures (non-2xx statuses,
/// which keep the server's error body so it can be shown verbatim).
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("network transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote error: HTTP {status}")]
    Remote {
        status: u16,
        /// Decoded JSON error body, or the raw text wrapped as a JSON string
        /// when the server did not return valid JSON.
        body: serde_json::Value,
    },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Remote status code, when this error came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
