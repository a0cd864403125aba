//! papertrade_core - a paper-trading portfolio engine.
//!
//! Maintains per-account cash and share holdings in SQLite, executes
//! quote-priced buys and sells as atomic ledger commits, and derives
//! live valuations and an append-only trade history. HTTP routing,
//! sessions, and authentication live outside this crate; every operation
//! takes an already-authenticated `account_id`.

pub mod accounts;
pub mod constants;
pub mod db;
pub mod errors;
pub mod holdings;
pub mod market_data;
pub mod portfolio;
pub mod schema;
pub mod trading;
pub mod transactions;

pub use errors::{Error, Result};
