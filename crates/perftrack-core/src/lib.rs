//! # perftrack core
//!
//! Quote, search and price-history contracts for perftrack.
//!
//! ## Overview
//!
//! - **Domain models** for symbols, interval/range specs, historic points
//!   and current values
//! - **Fetch-decode utility** performing one blocking GET and decoding JSON
//! - **Yahoo adapter** mapping provider responses into domain types
//! - **Gap-filling engine** repairing series with skipped periods
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Yahoo) |
//! | [`config`] | Endpoint and transport configuration |
//! | [`data_source`] | Data source trait and source errors |
//! | [`domain`] | Domain models |
//! | [`error`] | Core error types |
//! | [`fetch`] | GET + JSON decode |
//! | [`gap_fill`] | Gap-filling engine |
//! | [`http_client`] | Blocking HTTP transport abstraction |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use perftrack_core::{ClientConfig, HistoricParams, MarketDataSource, Symbol, YahooAdapter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = YahooAdapter::new(ClientConfig::from_env()?)?;
//!     let symbols = Symbol::parse_all(["AAPL", "SAP.DE"])?;
//!
//!     for series in adapter.historic(&HistoricParams::default(), &symbols)? {
//!         println!("{}: {} points, last {:.2}", series.symbol, series.points.len(), series.current_price);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! caller ──▶ MarketDataSource (YahooAdapter)
//!               │  validate params
//!               ▼
//!            fetch_json ──▶ HttpClient (reqwest blocking / stub)
//!               │
//!               ▼
//!            provider mappers ──▶ GapFiller ──▶ HistoricData
//! ```
//!
//! Every operation is synchronous and stateless. Errors are returned as
//! [`SourceError`] values classified by [`SourceErrorKind`]; nothing is
//! retried.

pub mod adapters;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod gap_fill;
pub mod http_client;

pub use adapters::YahooAdapter;

pub use config::ClientConfig;

pub use data_source::{MarketDataSource, SourceError, SourceErrorKind};

pub use domain::{
    HistoricData, HistoricParams, HistoricPoint, IntervalSpec, RangeSpec, SearchItem,
    SearchResult, Symbol, TimeUnit, ValueItem, ValueResult,
};

pub use error::{CoreError, ValidationError};

pub use fetch::fetch_json;

pub use gap_fill::{fill_missing_points, GapFiller};

pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StubHttpClient,
};
