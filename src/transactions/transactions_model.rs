//! Trade transaction domain and database models.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};

/// Direction of an executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeAction::Buy => "BUY",
            TradeAction::Sell => "SELL",
        }
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(TradeAction::Buy),
            "SELL" => Ok(TradeAction::Sell),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "unknown trade action '{}'",
                other
            )))),
        }
    }
}

/// Domain model for one committed trade.
///
/// `price` is the executed quote price; `shares` is always positive, the
/// direction lives in `action`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeTransaction {
    pub id: i64,
    pub account_id: String,
    pub symbol: String,
    pub shares: i64,
    pub price: Decimal,
    pub action: TradeAction,
    pub created_at: NaiveDateTime,
}

/// Input model for appending a trade to the log.
#[derive(Debug, Clone)]
pub struct NewTradeTransaction {
    pub account_id: String,
    pub symbol: String,
    pub shares: i64,
    pub price: Decimal,
    pub action: TradeAction,
}

/// Database model for transactions.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TradeTransactionDB {
    pub id: i64,
    pub account_id: String,
    pub symbol: String,
    pub shares: i64,
    pub price: String,
    pub action: String,
    pub created_at: NaiveDateTime,
}

/// Insert model for transactions; `id` is assigned by the database so the
/// log carries its own insertion order.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
pub struct TradeTransactionRowDB {
    pub account_id: String,
    pub symbol: String,
    pub shares: i64,
    pub price: String,
    pub action: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<TradeTransactionDB> for TradeTransaction {
    type Error = Error;

    fn try_from(db: TradeTransactionDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id,
            account_id: db.account_id,
            symbol: db.symbol,
            shares: db.shares,
            price: Decimal::from_str(&db.price)
                .map_err(|e| Error::Validation(ValidationError::DecimalParse(e)))?,
            action: db.action.parse()?,
            created_at: db.created_at,
        })
    }
}
