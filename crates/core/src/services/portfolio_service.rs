use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ingest::IngestBatch;
use crate::models::holding::{Holding, DATE_FORMAT};
use crate::models::portfolio::Portfolio;

/// Message shown when the manual entry form is incomplete.
pub const INCOMPLETE_FORM: &str = "Please fill in all required fields";

/// Fields of the manual "add holding" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHolding {
    pub asset_type: String,
    pub asset_id: String,
    pub asset_name: String,
    pub quantity: f64,
    pub purchase_price: f64,
    pub purchase_date: NaiveDate,
}

/// Manages the holdings list of a portfolio.
///
/// Pure business logic, no I/O.
#[derive(Debug, Clone, Copy)]
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Append a manually entered holding, priced at its purchase price.
    ///
    /// Rules:
    /// - asset id and name must not be blank
    /// - quantity and purchase price must be positive
    pub fn add_holding(
        &self,
        portfolio: &mut Portfolio,
        entry: NewHolding,
    ) -> Result<(), CoreError> {
        let complete = !entry.asset_id.trim().is_empty()
            && !entry.asset_name.trim().is_empty()
            && entry.quantity > 0.0
            && entry.purchase_price > 0.0;
        if !complete {
            return Err(CoreError::ValidationError(INCOMPLETE_FORM.into()));
        }

        let holding = Holding::new(
            entry.asset_type,
            entry.asset_id,
            entry.asset_name,
            entry.quantity,
            entry.purchase_price,
            Some(entry.purchase_date.format(DATE_FORMAT).to_string()),
        );
        tracing::info!(asset_id = %holding.asset_id, "holding added");
        portfolio.holdings.push(holding);
        Ok(())
    }

    /// Replace all holdings with an uploaded batch.
    ///
    /// The batch must pass the Validator; on rejection the portfolio is left
    /// untouched. Returns how many holdings were loaded.
    pub fn replace_holdings_from_batch(
        &self,
        portfolio: &mut Portfolio,
        batch: IngestBatch,
    ) -> Result<usize, CoreError> {
        let holdings = batch.into_holdings()?;
        let count = holdings.len();
        portfolio.holdings = holdings;
        tracing::info!(count, "holdings replaced from batch");
        Ok(count)
    }

    /// Rename the portfolio. Blank names are rejected.
    pub fn rename(&self, portfolio: &mut Portfolio, name: &str) -> Result<(), CoreError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::ValidationError(
                "Portfolio name must not be empty".into(),
            ));
        }
        portfolio.name = trimmed.to_string();
        Ok(())
    }

    /// Set the current price of the holding at `index`.
    ///
    /// No positivity rule applies: a price of zero or below is recorded as is.
    pub fn reprice(
        &self,
        portfolio: &mut Portfolio,
        index: usize,
        current_price: f64,
    ) -> Result<(), CoreError> {
        let len = portfolio.holdings.len();
        let holding = portfolio
            .holdings
            .get_mut(index)
            .ok_or(CoreError::HoldingNotFound { index, len })?;
        holding.current_price = current_price;
        Ok(())
    }

    /// Remove and return the holding at `index`.
    pub fn remove_holding(
        &self,
        portfolio: &mut Portfolio,
        index: usize,
    ) -> Result<Holding, CoreError> {
        let len = portfolio.holdings.len();
        if index >= len {
            return Err(CoreError::HoldingNotFound { index, len });
        }
        Ok(portfolio.holdings.remove(index))
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
