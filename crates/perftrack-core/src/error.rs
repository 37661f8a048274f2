use thiserror::Error;

use crate::data_source::SourceError;

/// Validation and contract errors exposed by `perftrack-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("at least one symbol is required")]
    EmptySymbolList,
    #[error("search term cannot be empty")]
    EmptySearchTerm,

    #[error("invalid time unit '{value}', expected one of d, mo, y")]
    InvalidTimeUnit { value: String },
    #[error("invalid {field} '{value}', expected <amount><unit> such as 1d, 3mo, 1y")]
    InvalidSpan { field: &'static str, value: String },
    #[error("{field} amount must be greater than zero, got {amount}")]
    NonPositiveAmount { field: &'static str, amount: i32 },

    #[error("config value {key} is invalid: '{value}'")]
    InvalidConfig { key: &'static str, value: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("no item found for symbol '{symbol}'")]
    NotFound { symbol: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
