//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use super::accounts_model::{Account, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
pub trait AccountRepositoryTrait: Send + Sync {
    /// Opens a new account.
    fn create(&self, new_account: NewAccount) -> Result<Account>;

    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Account>;
}

/// Trait defining the contract for Account service operations.
pub trait AccountServiceTrait: Send + Sync {
    /// Opens a new account with business validation applied.
    fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    /// Retrieves an account, including its current cash balance.
    fn get_account(&self, account_id: &str) -> Result<Account>;
}
