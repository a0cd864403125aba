use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

use crate::constants::DECIMAL_PRECISION;
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::accounts;

use super::accounts_model::{Account, AccountDB, NewAccount};
use super::accounts_traits::AccountRepositoryTrait;

/// Repository for managing account data in the database.
pub struct AccountRepository {
    pool: Arc<DbPool>,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance.
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Reads the current cash balance inside an open transaction.
    ///
    /// This is the authoritative balance a trade commit must validate
    /// against; balances read outside the transaction may be stale.
    pub fn get_cash_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        account_id: &str,
    ) -> Result<Decimal> {
        let cash_text = accounts::table
            .find(account_id)
            .select(accounts::cash)
            .first::<String>(conn)?;

        Ok(Decimal::from_str(&cash_text)?)
    }

    /// Writes a new cash balance inside an open transaction.
    ///
    /// Rejects negative balances outright; the trade engine validates
    /// affordability before calling this, so hitting the guard means a bug
    /// upstream, and the surrounding transaction rolls back.
    pub fn set_cash_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        account_id: &str,
        new_cash: Decimal,
    ) -> Result<()> {
        if new_cash < Decimal::ZERO {
            return Err(Error::ConstraintViolation(format!(
                "cash balance for account {} would become negative ({})",
                account_id, new_cash
            )));
        }

        let affected = diesel::update(accounts::table.find(account_id))
            .set((
                accounts::cash.eq(new_cash.round_dp(DECIMAL_PRECISION).to_string()),
                accounts::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(conn)?;

        if affected == 0 {
            return Err(diesel::result::Error::NotFound.into());
        }

        Ok(())
    }
}

impl AccountRepositoryTrait for AccountRepository {
    /// Opens a new account with its starting cash balance.
    fn create(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;

        let account_db: AccountDB = new_account.into();

        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(accounts::table)
            .values(&account_db)
            .execute(&mut conn)?;

        Ok(account_db.into())
    }

    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;

        let account = accounts::table
            .find(account_id)
            .select(AccountDB::as_select())
            .first::<AccountDB>(&mut conn)?;

        Ok(account.into())
    }
}
