//! Trading module - validated buy/sell execution against the ledger.
//!
//! A trade reads a live quote, validates the request against current cash
//! or holdings, then applies the cash, holding, and log mutations as one
//! database transaction with the validation re-run inside it.

mod trading_errors;
mod trading_model;
mod trading_repository;
mod trading_service;
mod trading_traits;


pub use trading_errors::TradeError;
pub use trading_model::{TradeCommit, TradeConfirmation, TradeOrder};
pub use trading_repository::TradeRepository;
pub use trading_service::TradeService;
pub use trading_traits::{TradeRepositoryTrait, TradeServiceTrait};
