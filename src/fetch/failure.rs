use thiserror::Error;

/// A failed remote request, as seen by pages and the error handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestFailure {
    /// No response: connection refused, DNS, timeout.
    #[error("network error: {0}")]
    Network(String),
    /// A response with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// A success response whose body did not decode.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl RequestFailure {
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestFailure::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for RequestFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return RequestFailure::Decode(err.to_string());
        }
        match err.status() {
            Some(status) => RequestFailure::Status {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => RequestFailure::Network(err.to_string()),
        }
    }
}
