use portfolio_tracker_core::errors::CoreError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    /// A CSV upload or form entry was rejected.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("rendering output failed: {0}")]
    Render(#[from] std::fmt::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Rejected(_) | Self::Core(CoreError::ValidationError(_)) => 2,
            Self::Core(CoreError::HoldingNotFound { .. }) => 3,
            Self::Core(_)
            | Self::Logging(_)
            | Self::Serialization(_)
            | Self::Io(_)
            | Self::Render(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_by_category() {
        assert_eq!(CliError::Rejected("bad csv".into()).exit_code(), 2);
        assert_eq!(CliError::from(std::fmt::Error).exit_code(), 10);
    }
}
