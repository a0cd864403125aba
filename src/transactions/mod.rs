//! Transactions module - the append-only trade log.
//!
//! Rows are written once, inside a trade commit, and never updated or
//! deleted; the history view is pure retrieval in insertion order.

mod transactions_model;
mod transactions_repository;
mod transactions_service;
mod transactions_traits;

pub use transactions_model::{NewTradeTransaction, TradeAction, TradeTransaction};
pub use transactions_repository::TransactionRepository;
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
