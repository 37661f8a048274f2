//! Data source trait and structured source errors.
//!
//! | Operation | Input | Output |
//! |-----------|-------|--------|
//! | [`historic`](MarketDataSource::historic) | [`HistoricParams`] + symbols | one [`HistoricData`] per symbol |
//! | [`values`](MarketDataSource::values) | symbols | [`ValueResult`] |
//! | [`search`](MarketDataSource::search) | free-text term | [`SearchResult`] |
//!
//! Every call issues at most one blocking request and returns. Nothing is
//! retried and no state outlives the call.

use std::fmt::{Display, Formatter};

use crate::{HistoricData, HistoricParams, SearchResult, Symbol, ValidationError, ValueResult};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Network, DNS or timeout failure at the HTTP layer.
    Transport,
    /// Upstream answered with a non-2xx status.
    Status,
    /// Body is not JSON or does not match the provider shape.
    Decode,
    /// Rejected before any network activity.
    InvalidRequest,
}

/// Structured source error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            kind: SourceErrorKind::Status,
            message: format!("upstream returned status {status}"),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Decode,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Transport => "source.transport",
            SourceErrorKind::Status => "source.status",
            SourceErrorKind::Decode => "source.decode",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

impl From<ValidationError> for SourceError {
    fn from(value: ValidationError) -> Self {
        Self::invalid_request(value.to_string())
    }
}

/// Market data provider contract.
///
/// Provider wire shapes stay behind implementations of this trait; callers
/// and the gap-filling engine only see domain types.
pub trait MarketDataSource: Send + Sync {
    /// Gap-filled price history for each symbol, in provider response order.
    ///
    /// # Errors
    ///
    /// [`SourceErrorKind::InvalidRequest`] when `params` fails validation or
    /// `symbols` is empty; nothing is sent in that case. Transport, status
    /// and decode failures are surfaced as their own kinds.
    fn historic(
        &self,
        params: &HistoricParams,
        symbols: &[Symbol],
    ) -> Result<Vec<HistoricData>, SourceError>;

    /// Current prices of `symbols`.
    fn values(&self, symbols: &[Symbol]) -> Result<ValueResult, SourceError>;

    /// Provider suggestions for `term`, unfiltered and in provider order.
    fn search(&self, term: &str) -> Result<SearchResult, SourceError>;
}
