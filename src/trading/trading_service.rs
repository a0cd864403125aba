use async_trait::async_trait;
use log::info;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::accounts::AccountRepositoryTrait;
use crate::holdings::HoldingRepositoryTrait;
use crate::market_data::MarketDataServiceTrait;
use crate::transactions::TradeAction;

use super::trading_errors::{Result, TradeError};
use super::trading_model::{TradeConfirmation, TradeOrder};
use super::trading_traits::{TradeRepositoryTrait, TradeServiceTrait};

/// Service executing validated buy/sell orders.
///
/// Quote lookups run before the ledger transaction is opened, so external
/// I/O never happens under the database lock; the commit itself re-checks
/// affordability and sufficiency against in-transaction state.
pub struct TradeService {
    market_data: Arc<dyn MarketDataServiceTrait>,
    ledger: Arc<dyn TradeRepositoryTrait>,
    accounts: Arc<dyn AccountRepositoryTrait>,
    holdings: Arc<dyn HoldingRepositoryTrait>,
}

impl TradeService {
    /// Creates a new TradeService instance.
    pub fn new(
        market_data: Arc<dyn MarketDataServiceTrait>,
        ledger: Arc<dyn TradeRepositoryTrait>,
        accounts: Arc<dyn AccountRepositoryTrait>,
        holdings: Arc<dyn HoldingRepositoryTrait>,
    ) -> Self {
        Self {
            market_data,
            ledger,
            accounts,
            holdings,
        }
    }
}

#[async_trait]
impl TradeServiceTrait for TradeService {
    async fn buy(&self, order: TradeOrder) -> Result<TradeConfirmation> {
        let quote = self.market_data.get_quote(&order.symbol).await?;
        let cost = quote.price * Decimal::from(order.shares);

        // Early rejection on a stale read; the commit re-checks.
        let account = self.accounts.get_by_id(&order.account_id)?;
        if cost > account.cash {
            return Err(TradeError::InsufficientFunds {
                required: cost,
                available: account.cash,
            });
        }

        let commit =
            self.ledger
                .commit_buy(&order.account_id, &order.symbol, order.shares, quote.price)?;

        info!(
            "BUY {} x{} @ {} for account {} (cash {})",
            order.symbol, order.shares, quote.price, order.account_id, commit.cash_after
        );

        Ok(TradeConfirmation {
            account_id: order.account_id,
            symbol: order.symbol,
            shares: order.shares,
            price: quote.price,
            amount: cost,
            action: TradeAction::Buy,
            cash_after: commit.cash_after,
        })
    }

    async fn sell(&self, order: TradeOrder) -> Result<TradeConfirmation> {
        let held = self
            .holdings
            .get_by_symbol(&order.account_id, &order.symbol)?
            .ok_or_else(|| TradeError::NoSuchHolding(order.symbol.clone()))?;

        if order.shares > held.shares {
            return Err(TradeError::InsufficientShares {
                requested: order.shares,
                held: held.shares,
            });
        }

        // Even an owned symbol may have vanished from the quote source.
        let quote = self.market_data.get_quote(&order.symbol).await?;
        let proceeds = quote.price * Decimal::from(order.shares);

        let commit =
            self.ledger
                .commit_sell(&order.account_id, &order.symbol, order.shares, quote.price)?;

        info!(
            "SELL {} x{} @ {} for account {} (cash {})",
            order.symbol, order.shares, quote.price, order.account_id, commit.cash_after
        );

        Ok(TradeConfirmation {
            account_id: order.account_id,
            symbol: order.symbol,
            shares: order.shares,
            price: quote.price,
            amount: proceeds,
            action: TradeAction::Sell,
            cash_after: commit.cash_after,
        })
    }
}
