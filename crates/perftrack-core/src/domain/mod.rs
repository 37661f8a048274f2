//! # Domain Models
//!
//! Canonical domain types for perftrack.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Case-sensitive provider ticker |
//! | [`TimeUnit`] | Day, month or year granularity |
//! | [`IntervalSpec`] | Expected spacing between points |
//! | [`RangeSpec`] | Total requested span |
//! | [`HistoricParams`] | Range + interval of a history request |
//! | [`HistoricPoint`] | Dated price |
//! | [`HistoricData`] | Gap-filled series of one symbol |
//! | [`ValueItem`] / [`ValueResult`] | Current prices with symbol lookup |
//! | [`SearchItem`] / [`SearchResult`] | Provider search suggestions |
//!
//! All values are created fresh per call and hold no shared state.

mod interval;
mod models;
mod symbol;

pub use interval::{HistoricParams, IntervalSpec, RangeSpec, TimeUnit};
pub use models::{
    HistoricData, HistoricPoint, SearchItem, SearchResult, ValueItem, ValueResult,
};
pub use symbol::Symbol;
