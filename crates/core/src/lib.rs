pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod services;
pub mod storage;

use std::path::Path;

use errors::CoreError;
use ingest::{IngestBatch, ValidationOutcome};
use models::{
    analytics::{AllocationSlice, AssetTypePerformance, HoldingAnalytics, PortfolioSummary},
    holding::Holding,
    portfolio::Portfolio,
};
use services::{
    analytics_service::AnalyticsService,
    portfolio_service::{NewHolding, PortfolioService},
};
use storage::manager::StorageManager;

/// Main entry point for the Portfolio Tracker core library.
/// Holds the portfolio state and the services that operate on it.
#[must_use]
pub struct PortfolioTracker {
    portfolio: Portfolio,
    portfolio_service: PortfolioService,
    analytics_service: AnalyticsService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for PortfolioTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioTracker")
            .field("name", &self.portfolio.name)
            .field("holdings", &self.portfolio.holdings.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl PortfolioTracker {
    /// Start from an empty "My Portfolio".
    pub fn create_new() -> Self {
        Self::build(Portfolio::default())
    }

    /// Wrap an already loaded portfolio.
    pub fn from_portfolio(portfolio: Portfolio) -> Self {
        Self::build(portfolio)
    }

    /// Load from a JSON file; a missing file gives an empty portfolio.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let portfolio = StorageManager::load_from_file(path)?;
        Ok(Self::build(portfolio))
    }

    /// Save to a JSON file. Clears the unsaved-changes flag on success.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.portfolio, path)?;
        self.dirty = false;
        Ok(())
    }

    // ── Portfolio & Holdings ────────────────────────────────────────

    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.portfolio.name
    }

    /// Holdings in display order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.portfolio.holdings
    }

    pub fn rename(&mut self, name: &str) -> Result<(), CoreError> {
        self.portfolio_service.rename(&mut self.portfolio, name)?;
        self.dirty = true;
        Ok(())
    }

    /// Add a holding from the manual entry form.
    pub fn add_holding(&mut self, entry: NewHolding) -> Result<(), CoreError> {
        self.portfolio_service.add_holding(&mut self.portfolio, entry)?;
        self.dirty = true;
        Ok(())
    }

    /// Update the current price of the holding at `index`.
    pub fn reprice(&mut self, index: usize, current_price: f64) -> Result<(), CoreError> {
        self.portfolio_service.reprice(&mut self.portfolio, index, current_price)?;
        self.dirty = true;
        Ok(())
    }

    /// Remove the holding at `index`, returning it.
    pub fn remove_holding(&mut self, index: usize) -> Result<Holding, CoreError> {
        let removed = self.portfolio_service.remove_holding(&mut self.portfolio, index)?;
        self.dirty = true;
        Ok(removed)
    }

    // ── CSV Upload ──────────────────────────────────────────────────

    /// Run the Validator over CSV text without touching the portfolio.
    pub fn validate_csv_str(&self, csv: &str) -> Result<ValidationOutcome, CoreError> {
        let batch = IngestBatch::from_csv_str(csv)?;
        Ok(ingest::validate(&batch))
    }

    /// Replace all holdings with the rows of an uploaded CSV.
    /// All-or-nothing: a rejected file leaves the portfolio unchanged.
    /// Returns the number of holdings loaded.
    pub fn import_csv_str(&mut self, csv: &str) -> Result<usize, CoreError> {
        let batch = IngestBatch::from_csv_str(csv)?;
        self.import_batch(batch)
    }

    /// Replace all holdings with an already parsed batch.
    pub fn import_batch(&mut self, batch: IngestBatch) -> Result<usize, CoreError> {
        let count = self.portfolio_service.replace_holdings_from_batch(&mut self.portfolio, batch)?;
        self.dirty = true;
        Ok(count)
    }

    // ── Analytics ───────────────────────────────────────────────────

    /// Totals, gain/loss percentage, best performer and per-holding rows.
    #[must_use]
    pub fn summary(&self) -> PortfolioSummary {
        self.analytics_service.summarize(&self.portfolio)
    }

    /// Value split by asset type.
    #[must_use]
    pub fn allocation(&self) -> Vec<AllocationSlice> {
        self.analytics_service.asset_allocation(&self.portfolio.holdings)
    }

    /// Holdings sorted by CAGR, highest first.
    #[must_use]
    pub fn cagr_ranking(&self) -> Vec<HoldingAnalytics> {
        self.analytics_service.cagr_ranking(&self.portfolio.holdings)
    }

    #[must_use]
    pub fn top_performers(&self, n: usize) -> Vec<HoldingAnalytics> {
        self.analytics_service.top_performers(&self.portfolio.holdings, n)
    }

    #[must_use]
    pub fn asset_type_performance(&self) -> Vec<AssetTypePerformance> {
        self.analytics_service.asset_type_performance(&self.portfolio.holdings)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Holdings as CSV; empty string when there are none.
    pub fn export_csv(&self) -> Result<String, CoreError> {
        export::to_delimited_text(&self.portfolio)
    }

    /// PDF report bytes.
    #[must_use]
    pub fn export_pdf(&self) -> Vec<u8> {
        export::to_document(&self.portfolio)
    }

    /// The persisted JSON document, without writing it anywhere.
    pub fn to_json(&self) -> Result<String, CoreError> {
        StorageManager::save_to_string(&self.portfolio)
    }

    /// Returns `true` if the portfolio has been modified since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            portfolio_service: PortfolioService::new(),
            analytics_service: AnalyticsService::new(),
            dirty: false,
        }
    }
}
