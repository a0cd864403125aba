//! Transaction log repository and service traits.

use super::transactions_model::TradeTransaction;
use crate::errors::Result;

/// Trait defining the read contract for the trade log.
///
/// Appends happen only inside a trade commit and are exposed as an
/// in-transaction method on the concrete repository.
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Lists an account's transactions in insertion (chronological) order.
    fn list_for_account(&self, account_id: &str) -> Result<Vec<TradeTransaction>>;
}

/// Trait defining the contract for transaction history operations.
pub trait TransactionServiceTrait: Send + Sync {
    /// Returns the account's full trade history in commit order.
    fn list_transactions(&self, account_id: &str) -> Result<Vec<TradeTransaction>>;
}
