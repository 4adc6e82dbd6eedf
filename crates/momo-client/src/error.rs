//! Error types for momo-sdk-client.

/// Result type alias for momo-sdk-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for momo-sdk-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the pre-flight connectivity check failed.
    pub fn is_connectivity(&self) -> bool {
        matches!(self.kind, ErrorKind::Connectivity)
    }

    /// Returns true if this is a transport-level failure (timeout, reset).
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    /// Returns the HTTP status code if the server answered with an error.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// No network path is available; the call was never attempted.
    #[error("no network connectivity")]
    Connectivity,

    /// Transport-level failure: timeout, connection reset, DNS, TLS.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx response from the server.
    #[error("HTTP error: {status} {message}")]
    Http { status: u16, message: String },

    /// Response body does not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid or incomplete SDK configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Transport(format!("request timed out: {}", err))
        } else if err.is_connect() {
            ErrorKind::Transport(err.to_string())
        } else if err.is_decode() {
            ErrorKind::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ErrorKind::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Decode(err.to_string()), err)
    }
}
