use log::debug;
use std::sync::Arc;

use super::transactions_model::TradeTransaction;
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;

/// Service exposing the trade history view.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    /// Creates a new TransactionService instance.
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl TransactionServiceTrait for TransactionService {
    fn list_transactions(&self, account_id: &str) -> Result<Vec<TradeTransaction>> {
        let history = self.repository.list_for_account(account_id)?;
        debug!(
            "Loaded {} transactions for account {}",
            history.len(),
            account_id
        );
        Ok(history)
    }
}
