use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::holdings;

use super::holdings_model::{Holding, HoldingDB};
use super::holdings_traits::HoldingRepositoryTrait;

/// Repository for managing holding rows in the database.
pub struct HoldingRepository {
    pool: Arc<DbPool>,
}

impl HoldingRepository {
    /// Creates a new HoldingRepository instance.
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Retrieves one holding inside an open transaction.
    pub fn get_by_symbol_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        account_id: &str,
        symbol: &str,
    ) -> Result<Option<Holding>> {
        let holding = holdings::table
            .filter(holdings::account_id.eq(account_id))
            .filter(holdings::symbol.eq(symbol))
            .select(HoldingDB::as_select())
            .first::<HoldingDB>(conn)
            .optional()?;

        Ok(holding.map(Holding::from))
    }

    /// Adds shares to a position inside an open transaction, creating the
    /// row on the first buy of a symbol.
    pub fn add_shares_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        account_id: &str,
        symbol: &str,
        shares: i64,
    ) -> Result<Holding> {
        if shares <= 0 {
            return Err(Error::ConstraintViolation(format!(
                "cannot add {} shares of {}",
                shares, symbol
            )));
        }

        let now = chrono::Utc::now().naive_utc();

        match self.get_by_symbol_in_transaction(conn, account_id, symbol)? {
            Some(existing) => {
                let new_shares = existing.shares + shares;
                diesel::update(holdings::table.find(&existing.id))
                    .set((
                        holdings::shares.eq(new_shares),
                        holdings::updated_at.eq(now),
                    ))
                    .execute(conn)?;

                Ok(Holding {
                    shares: new_shares,
                    updated_at: now,
                    ..existing
                })
            }
            None => {
                let holding_db = HoldingDB {
                    id: uuid::Uuid::new_v4().to_string(),
                    account_id: account_id.to_string(),
                    symbol: symbol.to_string(),
                    shares,
                    created_at: now,
                    updated_at: now,
                };

                diesel::insert_into(holdings::table)
                    .values(&holding_db)
                    .execute(conn)?;

                Ok(holding_db.into())
            }
        }
    }

    /// Removes shares from a position inside an open transaction.
    ///
    /// Selling the full position deletes the row and returns `None`;
    /// a partial sale returns the reduced holding.
    pub fn reduce_shares_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        account_id: &str,
        symbol: &str,
        shares: i64,
    ) -> Result<Option<Holding>> {
        if shares <= 0 {
            return Err(Error::ConstraintViolation(format!(
                "cannot remove {} shares of {}",
                shares, symbol
            )));
        }

        let existing = self
            .get_by_symbol_in_transaction(conn, account_id, symbol)?
            .ok_or(diesel::result::Error::NotFound)?;

        if shares > existing.shares {
            return Err(Error::ConstraintViolation(format!(
                "holding {} has {} shares, cannot remove {}",
                symbol, existing.shares, shares
            )));
        }

        let now = chrono::Utc::now().naive_utc();

        if shares == existing.shares {
            diesel::delete(holdings::table.find(&existing.id)).execute(conn)?;
            return Ok(None);
        }

        let new_shares = existing.shares - shares;
        diesel::update(holdings::table.find(&existing.id))
            .set((
                holdings::shares.eq(new_shares),
                holdings::updated_at.eq(now),
            ))
            .execute(conn)?;

        Ok(Some(Holding {
            shares: new_shares,
            updated_at: now,
            ..existing
        }))
    }
}

impl HoldingRepositoryTrait for HoldingRepository {
    /// Lists all holdings for an account, ordered by symbol.
    fn get_for_account(&self, account_id: &str) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;

        let results = holdings::table
            .filter(holdings::account_id.eq(account_id))
            .select(HoldingDB::as_select())
            .order(holdings::symbol.asc())
            .load::<HoldingDB>(&mut conn)?;

        Ok(results.into_iter().map(Holding::from).collect())
    }

    fn get_by_symbol(&self, account_id: &str, symbol: &str) -> Result<Option<Holding>> {
        let mut conn = get_connection(&self.pool)?;

        let holding = holdings::table
            .filter(holdings::account_id.eq(account_id))
            .filter(holdings::symbol.eq(symbol))
            .select(HoldingDB::as_select())
            .first::<HoldingDB>(&mut conn)
            .optional()?;

        Ok(holding.map(Holding::from))
    }
}
