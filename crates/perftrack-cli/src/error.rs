use perftrack_core::{CoreError, SourceError, SourceErrorKind, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no item found for symbol '{symbol}'")]
    NotFound { symbol: String },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Source(error) if matches!(error.kind(), SourceErrorKind::InvalidRequest) => 2,
            Self::NotFound { .. } => 3,
            Self::Source(_) => 4,
            Self::Serialization(_) | Self::Timestamp(_) | Self::Io(_) => 10,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::Validation(error) => Self::Validation(error),
            CoreError::Source(error) => Self::Source(error),
            CoreError::NotFound { symbol } => Self::NotFound { symbol },
            CoreError::Serialization(error) => Self::Serialization(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_error_category() {
        assert_eq!(CliError::from(ValidationError::EmptySymbol).exit_code(), 2);
        assert_eq!(
            CliError::from(CoreError::NotFound {
                symbol: String::from("AAPL"),
            })
            .exit_code(),
            3
        );
        assert_eq!(CliError::from(SourceError::status(503)).exit_code(), 4);
        assert_eq!(
            CliError::from(SourceError::from(ValidationError::EmptySearchTerm)).exit_code(),
            2
        );
    }
}
