use thiserror::Error;

/// Reasons an outbound provider call produced no usable value.
///
/// Every upstream failure is converted to one of these variants at the
/// point of the call; callers decide per endpoint whether to fall back
/// or surface an explicit unavailability payload.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Request exceeded the configured timeout
    #[error("request timed out")]
    Timeout,

    /// Upstream returned a non-2xx status
    #[error("unexpected status: {0}")]
    Status(u16),

    /// Connection-level failure (DNS, TLS, reset)
    #[error("transport error: {0}")]
    Transport(String),

    /// Body did not match the expected shape
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// Payload was well-formed but the requested value was absent
    #[error("value not present in payload: {0}")]
    MissingValue(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if let Some(status) = err.status() {
            ProviderError::Status(status.as_u16())
        } else if err.is_decode() {
            ProviderError::MalformedPayload(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Upstream rate or spot price provider failed
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// History file could not be read or written
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Message(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Check if error is an upstream unavailability
    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(self, AppError::Provider(_))
    }

    /// Get HTTP status code for the error
    ///
    /// Handlers degrade to fallback payloads instead of surfacing these;
    /// the mapping is kept for logging and any surface that does want to
    /// propagate.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Provider(_) => 502,
            AppError::Config(_) => 500,
            AppError::Persistence(_) => 500,
            _ => 500,
        }
    }
}
