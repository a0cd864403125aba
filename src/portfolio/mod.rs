//! Portfolio module - live valuation of an account's holdings.

mod portfolio_errors;
mod portfolio_model;
mod valuation_service;

#[cfg(test)]
mod valuation_service_tests;

pub use portfolio_errors::PortfolioError;
pub use portfolio_model::{HoldingView, PortfolioSummary};
pub use valuation_service::{ValuationService, ValuationServiceTrait};
