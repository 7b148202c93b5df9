use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// A holding together with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingAnalytics {
    /// The underlying position, unchanged
    #[serde(flatten)]
    pub holding: Holding,

    /// quantity × current_price
    pub value: f64,

    /// (current_price − purchase_price) × quantity
    pub gain_loss: f64,

    /// Compound annual growth rate in percent (0.0 when not computable)
    pub cagr: f64,
}

/// Portfolio-wide totals plus the per-holding rows they were built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Portfolio display name
    pub name: String,

    /// Number of holdings (duplicates counted separately)
    pub holding_count: usize,

    /// Σ quantity × purchase_price
    pub total_investment: f64,

    /// Σ quantity × current_price
    pub total_value: f64,

    /// total_value − total_investment
    pub total_gain_loss: f64,

    /// (total_gain_loss / total_investment) × 100, or 0 with nothing invested
    pub gain_loss_pct: f64,

    /// Holding with the largest gain/loss; the earliest one wins ties
    pub best_performer: Option<HoldingAnalytics>,

    /// Per-holding rows in portfolio order
    pub holdings: Vec<HoldingAnalytics>,
}

/// Share of portfolio value held in one asset type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub asset_type: String,

    /// Σ value of holdings with this asset type
    pub value: f64,

    /// value / total portfolio value × 100 (0 when the portfolio is worth nothing)
    pub percentage: f64,
}

/// Aggregate performance of one asset type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetTypePerformance {
    pub asset_type: String,

    /// Mean CAGR of the type's holdings, rounded to 2 decimals
    pub mean_cagr: f64,

    /// Σ gain/loss of the type's holdings, rounded to 2 decimals
    pub total_gain_loss: f64,

    /// Number of holdings of this type
    pub holding_count: usize,
}
