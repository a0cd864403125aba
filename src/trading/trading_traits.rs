//! Trade service and repository traits.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::trading_errors::Result;
use super::trading_model::{TradeCommit, TradeConfirmation, TradeOrder};

/// Trait defining the contract for trade execution.
#[async_trait]
pub trait TradeServiceTrait: Send + Sync {
    /// Buys shares at the current quote price. Rejects rather than
    /// partially fills when cash is insufficient.
    async fn buy(&self, order: TradeOrder) -> Result<TradeConfirmation>;

    /// Sells shares at the current quote price. Selling the full position
    /// removes the holding.
    async fn sell(&self, order: TradeOrder) -> Result<TradeConfirmation>;
}

/// Trait for the atomic ledger commit of a validated trade.
///
/// Implementations apply the cash, holding, and log mutations as one
/// all-or-nothing unit and re-validate affordability/sufficiency against
/// the state read inside that unit; that recheck is the authoritative
/// guard under concurrent trades.
pub trait TradeRepositoryTrait: Send + Sync {
    fn commit_buy(
        &self,
        account_id: &str,
        symbol: &str,
        shares: i64,
        price: Decimal,
    ) -> Result<TradeCommit>;

    fn commit_sell(
        &self,
        account_id: &str,
        symbol: &str,
        shares: i64,
        price: Decimal,
    ) -> Result<TradeCommit>;
}
