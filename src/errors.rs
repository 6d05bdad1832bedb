//! Errors for the launch tracker
use thiserror::Error;

/// Failure of a remote fetch.
///
/// HTTP and transport failures collapse into this one type. `status` is set
/// only when the server answered with a non-success code; transport and
/// decoding failures carry no status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
}

impl ApiError {
    /// Error for a non-success HTTP status
    pub fn from_status(context: &str, status: reqwest::StatusCode) -> Self {
        let reason = status.canonical_reason().unwrap_or("Unknown status");
        Self {
            message: format!("{}: {}", context, reason),
            status: Some(status.as_u16()),
        }
    }

    /// Error for transport-level failures
    pub fn network() -> Self {
        Self {
            message: "Network error occurred".to_string(),
            status: None,
        }
    }

    /// Error for a request rejected before it was sent
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum LaunchTrackerError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("HTTP client error")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Configuration error")]
    ConfigError(#[from] config::ConfigError),

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("IO error")]
    IoError(#[from] std::io::Error),

    #[error("Navigation error: {0}")]
    Navigation(#[from] crate::navigation::NavigationError),

    #[error("No launch at position {0}")]
    LaunchNotFound(usize),

    #[error("Launch site of {0} could not be loaded")]
    LaunchpadUnavailable(String),

    #[error("Screen closed before the request finished")]
    Unmounted(#[from] crate::lifecycle::Unmounted),
}
