#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    /// Upstream answered with a non-success status.
    #[error("AEMO API error: {status} {status_text} ({path})")]
    Upstream {
        status: u16,
        status_text: String,
        path: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Whether the query layer may try the request again.
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Upstream { status, .. } => *status >= 500,
            Self::DataError(_) | Self::ConfigError(_) => false,
        }
    }
}
