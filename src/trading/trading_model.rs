//! Trade request and result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::market_data::normalize_symbol;
use crate::transactions::TradeAction;

use super::trading_errors::{Result, TradeError};

/// A validated trade request: positive whole share count, normalized
/// symbol. Construction is the only validation boundary; once a
/// `TradeOrder` exists it is safe to execute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOrder {
    pub account_id: String,
    pub symbol: String,
    pub shares: i64,
}

impl TradeOrder {
    pub fn new(account_id: &str, symbol: &str, shares: i64) -> Result<Self> {
        if account_id.trim().is_empty() {
            return Err(TradeError::InvalidInput(
                "account id cannot be empty".to_string(),
            ));
        }

        let symbol = normalize_symbol(symbol);
        if symbol.is_empty() {
            return Err(TradeError::InvalidInput(
                "symbol cannot be empty".to_string(),
            ));
        }

        if shares <= 0 {
            return Err(TradeError::InvalidInput(format!(
                "share count must be positive, got {}",
                shares
            )));
        }

        Ok(Self {
            account_id: account_id.to_string(),
            symbol,
            shares,
        })
    }

    /// Strict parse of untrusted share-count input, for callers sitting at
    /// the form/API boundary. Rejects anything that is not a positive
    /// whole number.
    pub fn parse(account_id: &str, symbol: &str, shares_input: &str) -> Result<Self> {
        let shares = shares_input.trim().parse::<i64>().map_err(|_| {
            TradeError::InvalidInput(format!(
                "share count must be a whole number, got '{}'",
                shares_input
            ))
        })?;

        Self::new(account_id, symbol, shares)
    }
}

/// Result of a committed trade, for display by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeConfirmation {
    pub account_id: String,
    pub symbol: String,
    pub shares: i64,
    /// Executed quote price per share.
    pub price: Decimal,
    /// Total cost (buy) or proceeds (sell).
    pub amount: Decimal,
    pub action: TradeAction,
    pub cash_after: Decimal,
}

/// Post-commit ledger state handed back by the trade repository.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeCommit {
    pub cash_after: Decimal,
    /// Remaining shares of the traded symbol; 0 when the position closed.
    pub shares_after: i64,
}
