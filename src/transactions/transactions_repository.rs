use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::constants::DECIMAL_PRECISION;
use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::transactions;

use super::transactions_model::{
    NewTradeTransaction, TradeTransaction, TradeTransactionDB, TradeTransactionRowDB,
};
use super::transactions_traits::TransactionRepositoryTrait;

/// Repository for the append-only trade log.
///
/// There is deliberately no update or delete path here; the log is the
/// audit trail.
pub struct TransactionRepository {
    pool: Arc<DbPool>,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository instance.
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Appends one trade to the log inside an open transaction.
    pub fn append_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        new_transaction: NewTradeTransaction,
    ) -> Result<TradeTransaction> {
        let row = TradeTransactionRowDB {
            account_id: new_transaction.account_id,
            symbol: new_transaction.symbol,
            shares: new_transaction.shares,
            price: new_transaction
                .price
                .round_dp(DECIMAL_PRECISION)
                .to_string(),
            action: new_transaction.action.as_str().to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        };

        let inserted = diesel::insert_into(transactions::table)
            .values(&row)
            .returning(TradeTransactionDB::as_returning())
            .get_result::<TradeTransactionDB>(conn)?;

        inserted.try_into()
    }
}

impl TransactionRepositoryTrait for TransactionRepository {
    /// Lists an account's transactions in insertion order. The rowid-backed
    /// `id` column is the commit order, independent of timestamp precision.
    fn list_for_account(&self, account_id: &str) -> Result<Vec<TradeTransaction>> {
        let mut conn = get_connection(&self.pool)?;

        let results = transactions::table
            .filter(transactions::account_id.eq(account_id))
            .select(TradeTransactionDB::as_select())
            .order(transactions::id.asc())
            .load::<TradeTransactionDB>(&mut conn)?;

        results.into_iter().map(TradeTransaction::try_from).collect()
    }
}
