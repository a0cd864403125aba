//! Holdings module - per-account share positions.
//!
//! A holding row exists only while its share count is positive; closing a
//! position deletes the row rather than leaving it at zero.

mod holdings_model;
mod holdings_repository;
mod holdings_traits;

pub use holdings_model::Holding;
pub use holdings_repository::HoldingRepository;
pub use holdings_traits::HoldingRepositoryTrait;
