//! Market data module - the quote source boundary.
//!
//! Quotes are ephemeral: fetched fresh for every trade decision and
//! valuation, never persisted. Providers implement [`QuoteProvider`]; the
//! service normalizes symbols and is the only entry point for callers.

mod market_data_errors;
mod market_data_model;
mod market_data_provider;
mod market_data_service;
pub mod providers;

pub use market_data_errors::MarketDataError;
pub use market_data_model::{normalize_symbol, Quote};
pub use market_data_provider::QuoteProvider;
pub use market_data_service::{MarketDataService, MarketDataServiceTrait};
