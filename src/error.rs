use thiserror::Error;

pub type Result<T> = std::result::Result<T, InfoHubError>;

#[derive(Error, Debug)]
pub enum InfoHubError {
    #[error("{0}")]
    ConfigError(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{message}")]
    NotFound { message: String },

    #[error("Upstream error from {upstream}: {detail}")]
    UpstreamError { upstream: String, detail: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Server responded with status {status}")]
    Remote {
        status: u16,
        message: Option<String>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl InfoHubError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        InfoHubError::ConfigError(msg.into())
    }

    pub fn validation_error(msg: impl Into<String>) -> Self {
        InfoHubError::ValidationError(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        InfoHubError::NotFound {
            message: msg.into(),
        }
    }

    pub fn upstream(upstream: impl Into<String>, detail: impl Into<String>) -> Self {
        InfoHubError::UpstreamError {
            upstream: upstream.into(),
            detail: detail.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        InfoHubError::Internal(msg.into())
    }

    /// True for faults the caller caused; these keep their own message on the wire.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            InfoHubError::ConfigError(_)
                | InfoHubError::ValidationError(_)
                | InfoHubError::NotFound { .. }
        )
    }
}
