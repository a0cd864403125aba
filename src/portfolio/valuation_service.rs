use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::accounts::AccountRepositoryTrait;
use crate::holdings::HoldingRepositoryTrait;
use crate::market_data::MarketDataServiceTrait;

use super::portfolio_errors::{PortfolioError, Result};
use super::portfolio_model::{HoldingView, PortfolioSummary};

/// Trait defining the contract for portfolio valuation.
#[async_trait]
pub trait ValuationServiceTrait: Send + Sync {
    /// Prices every holding at a fresh quote and totals net worth.
    async fn get_portfolio(&self, account_id: &str) -> Result<PortfolioSummary>;
}

/// Service computing live portfolio valuations.
pub struct ValuationService {
    accounts: Arc<dyn AccountRepositoryTrait>,
    holdings: Arc<dyn HoldingRepositoryTrait>,
    market_data: Arc<dyn MarketDataServiceTrait>,
}

impl ValuationService {
    /// Creates a new ValuationService instance.
    pub fn new(
        accounts: Arc<dyn AccountRepositoryTrait>,
        holdings: Arc<dyn HoldingRepositoryTrait>,
        market_data: Arc<dyn MarketDataServiceTrait>,
    ) -> Self {
        Self {
            accounts,
            holdings,
            market_data,
        }
    }
}

#[async_trait]
impl ValuationServiceTrait for ValuationService {
    async fn get_portfolio(&self, account_id: &str) -> Result<PortfolioSummary> {
        let account = self.accounts.get_by_id(account_id)?;
        let holdings = self.holdings.get_for_account(account_id)?;

        let mut views = Vec::with_capacity(holdings.len());
        let mut net_worth = account.cash;

        for holding in holdings {
            let quote = self
                .market_data
                .get_quote(&holding.symbol)
                .await
                .map_err(|e| PortfolioError::QuoteUnavailable {
                    symbol: holding.symbol.clone(),
                    reason: e.to_string(),
                })?;

            let value = quote.price * Decimal::from(holding.shares);
            net_worth += value;

            views.push(HoldingView {
                symbol: holding.symbol,
                shares: holding.shares,
                price: quote.price,
                value,
            });
        }

        debug!(
            "Valued {} holdings for account {}: net worth {}",
            views.len(),
            account_id,
            net_worth
        );

        Ok(PortfolioSummary {
            holdings: views,
            cash: account.cash,
            net_worth,
        })
    }
}
