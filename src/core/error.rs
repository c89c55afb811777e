/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Ledger operations never produce these; they surface only at the
/// configuration, draft and submission boundaries.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Malformed input that cannot be coerced (unknown form, unknown field)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The notification collaborator refused or failed to deliver
    #[error("Notification error: {0}")]
    Notification(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading drafts from disk or stdin
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn notification(msg: impl Into<String>) -> Self {
        AppError::Notification(msg.into())
    }
}
