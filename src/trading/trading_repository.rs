use rust_decimal::Decimal;
use std::sync::Arc;

use crate::accounts::AccountRepository;
use crate::db::DbTransactionExecutor;
use crate::holdings::HoldingRepository;
use crate::transactions::{NewTradeTransaction, TradeAction, TransactionRepository};

use super::trading_errors::{Result, TradeError};
use super::trading_model::TradeCommit;
use super::trading_traits::TradeRepositoryTrait;

/// Ledger-side trade commits (generic over the transaction executor).
///
/// Each commit runs in one SQLite write transaction: the balance and
/// holding are re-read and re-validated inside it, so a racing trade that
/// passed the service-level pre-check still gets rejected here if the
/// books moved underneath it.
pub struct TradeRepository<E: DbTransactionExecutor + Send + Sync> {
    executor: E,
    accounts: Arc<AccountRepository>,
    holdings: Arc<HoldingRepository>,
    transactions: Arc<TransactionRepository>,
}

impl<E: DbTransactionExecutor + Send + Sync> TradeRepository<E> {
    /// Creates a new TradeRepository instance.
    pub fn new(
        executor: E,
        accounts: Arc<AccountRepository>,
        holdings: Arc<HoldingRepository>,
        transactions: Arc<TransactionRepository>,
    ) -> Self {
        Self {
            executor,
            accounts,
            holdings,
            transactions,
        }
    }
}

impl<E: DbTransactionExecutor + Send + Sync> TradeRepositoryTrait for TradeRepository<E> {
    fn commit_buy(
        &self,
        account_id: &str,
        symbol: &str,
        shares: i64,
        price: Decimal,
    ) -> Result<TradeCommit> {
        let cost = price * Decimal::from(shares);

        self.executor.execute(|conn| {
            let cash = self.accounts.get_cash_in_transaction(conn, account_id)?;
            if cost > cash {
                return Err(TradeError::InsufficientFunds {
                    required: cost,
                    available: cash,
                });
            }

            let cash_after = cash - cost;
            self.accounts
                .set_cash_in_transaction(conn, account_id, cash_after)?;

            let holding = self
                .holdings
                .add_shares_in_transaction(conn, account_id, symbol, shares)?;

            self.transactions.append_in_transaction(
                conn,
                NewTradeTransaction {
                    account_id: account_id.to_string(),
                    symbol: symbol.to_string(),
                    shares,
                    price,
                    action: TradeAction::Buy,
                },
            )?;

            Ok(TradeCommit {
                cash_after,
                shares_after: holding.shares,
            })
        })
    }

    fn commit_sell(
        &self,
        account_id: &str,
        symbol: &str,
        shares: i64,
        price: Decimal,
    ) -> Result<TradeCommit> {
        let proceeds = price * Decimal::from(shares);

        self.executor.execute(|conn| {
            let held = self
                .holdings
                .get_by_symbol_in_transaction(conn, account_id, symbol)?
                .ok_or_else(|| TradeError::NoSuchHolding(symbol.to_string()))?;

            if shares > held.shares {
                return Err(TradeError::InsufficientShares {
                    requested: shares,
                    held: held.shares,
                });
            }

            let remaining = self
                .holdings
                .reduce_shares_in_transaction(conn, account_id, symbol, shares)?;

            let cash = self.accounts.get_cash_in_transaction(conn, account_id)?;
            let cash_after = cash + proceeds;
            self.accounts
                .set_cash_in_transaction(conn, account_id, cash_after)?;

            self.transactions.append_in_transaction(
                conn,
                NewTradeTransaction {
                    account_id: account_id.to_string(),
                    symbol: symbol.to_string(),
                    shares,
                    price,
                    action: TradeAction::Sell,
                },
            )?;

            Ok(TradeCommit {
                cash_after,
                shares_after: remaining.map(|h| h.shares).unwrap_or(0),
            })
        })
    }
}
