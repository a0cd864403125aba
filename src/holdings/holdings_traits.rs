//! Holding repository trait.

use super::holdings_model::Holding;
use crate::errors::Result;

/// Trait defining the contract for Holding read operations.
///
/// Writes happen only inside a trade commit and are exposed as
/// in-transaction methods on the concrete repository.
pub trait HoldingRepositoryTrait: Send + Sync {
    /// Lists all holdings for an account, ordered by symbol.
    fn get_for_account(&self, account_id: &str) -> Result<Vec<Holding>>;

    /// Retrieves one holding by symbol, or `None` when the account holds
    /// no shares of it.
    fn get_by_symbol(&self, account_id: &str, symbol: &str) -> Result<Option<Holding>>;
}
