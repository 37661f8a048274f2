//! Provider adapters.
//!
//! Each adapter owns its provider's wire shapes and maps them into domain
//! types before anything leaves the module.

pub mod yahoo;

pub use yahoo::YahooAdapter;
