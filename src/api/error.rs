/// Errors returned by the backend client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL could not be parsed.
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request never produced an HTTP response (connection refused, DNS, TLS, ...).
    #[error("request to {endpoint} failed: {reason}")]
    Transport {
        endpoint: &'static str,
        reason: String,
    },

    /// The backend answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    /// A success response whose body was not the expected JSON.
    #[error("could not decode {endpoint} response: {reason}")]
    Decode {
        endpoint: &'static str,
        reason: String,
    },
}

impl ApiError {
    /// The error payload sent by the backend, if it sent a non-empty one.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => {
                let body = body.trim();
                (!body.is_empty()).then_some(body)
            }
            _ => None,
        }
    }
}
