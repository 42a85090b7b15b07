//! Error types for the referral pipeline.

/// Pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum ReferralError {
    /// The composer produced an empty email.
    #[error("failed to generate referral email")]
    GenerationFailed,

    /// An example is missing the `actual` or `ideal` text a scorer needs.
    #[error("invalid input: example has no '{field}' text")]
    InvalidInputKind { field: &'static str },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Credentials missing or rejected by the evaluation service.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Network error.
    #[error("network error: {message}")]
    Network { message: String },

    /// Requested mode the pipeline does not implement.
    #[error("unsupported: {message}")]
    Unsupported { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReferralError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::GenerationFailed => 1,
            _ => 2,
        }
    }
}

impl From<reqwest::Error> for ReferralError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for pipeline operations.
pub type ReferralResult<T> = Result<T, ReferralError>;
