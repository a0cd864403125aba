//! Account domain and database models.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::{DECIMAL_PRECISION, DEFAULT_OPENING_CASH};
use crate::errors::ValidationError;
use crate::{Error, Result};

/// Domain model representing an account in the system.
///
/// `cash` is the free balance available for buys; it can never go negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub cash: Decimal,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for opening a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Opening balance; defaults to [`DEFAULT_OPENING_CASH`] when omitted.
    pub cash: Option<Decimal>,
}

impl NewAccount {
    /// Validates the new account data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        if let Some(cash) = self.cash {
            if cash < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Opening cash cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Database model for accounts.
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub id: String,
    pub name: String,
    pub cash: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            cash: Decimal::from_str(&db.cash).unwrap_or_default(),
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewAccount> for AccountDB {
    fn from(domain: NewAccount) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: domain.name,
            cash: domain
                .cash
                .unwrap_or(DEFAULT_OPENING_CASH)
                .round_dp(DECIMAL_PRECISION)
                .to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
