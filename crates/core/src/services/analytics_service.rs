use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

use crate::models::analytics::{
    AllocationSlice, AssetTypePerformance, HoldingAnalytics, PortfolioSummary,
};
use crate::models::holding::{parse_purchase_date, Holding};
use crate::models::portfolio::Portfolio;

/// Fixed average-year length used to turn elapsed days into years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Anchor date assumed for holdings that have no purchase date field.
pub const DEFAULT_ANCHOR_DATE: &str = "2023-01-01";

/// Market value of a holding: quantity × current price.
///
/// Zero or negative prices are not special-cased.
#[must_use]
pub fn value(holding: &Holding) -> f64 {
    holding.quantity * holding.current_price
}

/// Unrealized gain (positive) or loss (negative) of a holding. Unrounded.
#[must_use]
pub fn gain_loss(holding: &Holding) -> f64 {
    (holding.current_price - holding.purchase_price) * holding.quantity
}

/// Why a CAGR figure could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CagrDegradation {
    /// The purchase date did not parse
    UnparsableDate,
    /// Purchase date is today or in the future
    NonPositiveDuration,
    /// Division by a zero or negative purchase price
    NonPositivePurchasePrice,
    /// Negative price ratio or an overflowing / NaN power
    NonRealResult,
}

impl std::fmt::Display for CagrDegradation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CagrDegradation::UnparsableDate => write!(f, "unparsable purchase date"),
            CagrDegradation::NonPositiveDuration => write!(f, "non-positive holding period"),
            CagrDegradation::NonPositivePurchasePrice => write!(f, "non-positive purchase price"),
            CagrDegradation::NonRealResult => write!(f, "growth rate is not a real number"),
        }
    }
}

/// Result of a CAGR evaluation with the failure reason kept inspectable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CagrOutcome {
    /// Annualized growth in percent
    Computed(f64),
    /// Not computable; reported to callers as 0.0
    Degraded(CagrDegradation),
}

impl CagrOutcome {
    /// The percentage, with every degradation mapped to `0.0`.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            CagrOutcome::Computed(pct) => pct,
            CagrOutcome::Degraded(_) => 0.0,
        }
    }

    #[must_use]
    pub fn is_degraded(self) -> bool {
        matches!(self, CagrOutcome::Degraded(_))
    }
}

/// Evaluate CAGR against an explicit "today".
///
/// years = (today − purchase_date) in days / 365.25, then
/// cagr = ((current / purchase)^(1 / years) − 1) × 100.
pub fn evaluate_cagr(
    purchase_price: f64,
    current_price: f64,
    purchase_date: &str,
    today: NaiveDate,
) -> CagrOutcome {
    let Some(purchased) = parse_purchase_date(purchase_date) else {
        return CagrOutcome::Degraded(CagrDegradation::UnparsableDate);
    };

    let years = (today - purchased).num_days() as f64 / DAYS_PER_YEAR;
    if years <= 0.0 {
        return CagrOutcome::Degraded(CagrDegradation::NonPositiveDuration);
    }

    if purchase_price.is_nan() || purchase_price <= 0.0 {
        return CagrOutcome::Degraded(CagrDegradation::NonPositivePurchasePrice);
    }

    let ratio = current_price / purchase_price;
    if !ratio.is_finite() || ratio < 0.0 {
        return CagrOutcome::Degraded(CagrDegradation::NonRealResult);
    }

    let cagr = (ratio.powf(1.0 / years) - 1.0) * 100.0;
    if cagr.is_finite() {
        CagrOutcome::Computed(cagr)
    } else {
        CagrOutcome::Degraded(CagrDegradation::NonRealResult)
    }
}

/// CAGR in percent as of `today`; `0.0` whenever it cannot be computed.
#[must_use]
pub fn cagr_at(
    purchase_price: f64,
    current_price: f64,
    purchase_date: &str,
    today: NaiveDate,
) -> f64 {
    let outcome = evaluate_cagr(purchase_price, current_price, purchase_date, today);
    if let CagrOutcome::Degraded(reason) = outcome {
        tracing::debug!(purchase_date, %reason, "CAGR degraded to 0.0");
    }
    outcome.value()
}

/// CAGR in percent as of the local current date. Never fails.
#[must_use]
pub fn cagr(purchase_price: f64, current_price: f64, purchase_date: &str) -> f64 {
    cagr_at(purchase_price, current_price, purchase_date, today())
}

/// CAGR of a holding. Holdings that carry no date field at all are anchored
/// at [`DEFAULT_ANCHOR_DATE`]; a present but blank date degrades to `0.0`.
#[must_use]
pub fn holding_cagr_at(holding: &Holding, today: NaiveDate) -> f64 {
    let date = holding
        .purchase_date
        .as_deref()
        .unwrap_or(DEFAULT_ANCHOR_DATE);
    cagr_at(holding.purchase_price, holding.current_price, date, today)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Computes portfolio analytics: value, gain/loss, CAGR, allocation and
/// per-type performance.
///
/// Stateless. Every method is a pure function of its arguments; the
/// `_at` variants take "today" explicitly so results are reproducible.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Derived metrics for one holding.
    #[must_use]
    pub fn analyze_holding_at(&self, holding: &Holding, today: NaiveDate) -> HoldingAnalytics {
        HoldingAnalytics {
            holding: holding.clone(),
            value: value(holding),
            gain_loss: gain_loss(holding),
            cagr: holding_cagr_at(holding, today),
        }
    }

    /// Derived metrics for every holding, in portfolio order.
    #[must_use]
    pub fn analyze_holdings_at(
        &self,
        holdings: &[Holding],
        today: NaiveDate,
    ) -> Vec<HoldingAnalytics> {
        holdings
            .iter()
            .map(|h| self.analyze_holding_at(h, today))
            .collect()
    }

    #[must_use]
    pub fn analyze_holdings(&self, holdings: &[Holding]) -> Vec<HoldingAnalytics> {
        self.analyze_holdings_at(holdings, today())
    }

    /// Portfolio totals, gain/loss percentage and best performer.
    #[must_use]
    pub fn summarize_at(&self, portfolio: &Portfolio, today: NaiveDate) -> PortfolioSummary {
        let rows = self.analyze_holdings_at(&portfolio.holdings, today);

        let total_investment: f64 = portfolio
            .holdings
            .iter()
            .map(|h| h.quantity * h.purchase_price)
            .sum();
        let total_value: f64 = rows.iter().map(|r| r.value).sum();
        let total_gain_loss = total_value - total_investment;
        let gain_loss_pct = if total_investment > 0.0 {
            (total_gain_loss / total_investment) * 100.0
        } else {
            0.0
        };

        // First maximum wins, matching row order.
        let best_performer = rows
            .iter()
            .fold(None::<&HoldingAnalytics>, |best, row| match best {
                Some(b) if b.gain_loss >= row.gain_loss => Some(b),
                _ => Some(row),
            })
            .cloned();

        PortfolioSummary {
            name: portfolio.name.clone(),
            holding_count: rows.len(),
            total_investment,
            total_value,
            total_gain_loss,
            gain_loss_pct,
            best_performer,
            holdings: rows,
        }
    }

    #[must_use]
    pub fn summarize(&self, portfolio: &Portfolio) -> PortfolioSummary {
        self.summarize_at(portfolio, today())
    }

    /// Value grouped by asset type, sorted by type name.
    #[must_use]
    pub fn asset_allocation(&self, holdings: &[Holding]) -> Vec<AllocationSlice> {
        let mut by_type: BTreeMap<&str, f64> = BTreeMap::new();
        for holding in holdings {
            *by_type.entry(holding.asset_type.as_str()).or_insert(0.0) += value(holding);
        }

        let total: f64 = by_type.values().sum();
        by_type
            .into_iter()
            .map(|(asset_type, value)| AllocationSlice {
                asset_type: asset_type.to_string(),
                value,
                percentage: if total != 0.0 {
                    value / total * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }

    /// Holdings ordered by CAGR, highest first. Ties keep portfolio order.
    #[must_use]
    pub fn cagr_ranking_at(&self, holdings: &[Holding], today: NaiveDate) -> Vec<HoldingAnalytics> {
        let mut rows = self.analyze_holdings_at(holdings, today);
        rows.sort_by(|a, b| {
            b.cagr
                .partial_cmp(&a.cagr)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rows
    }

    #[must_use]
    pub fn cagr_ranking(&self, holdings: &[Holding]) -> Vec<HoldingAnalytics> {
        self.cagr_ranking_at(holdings, today())
    }

    /// The `n` best holdings by CAGR.
    #[must_use]
    pub fn top_performers_at(
        &self,
        holdings: &[Holding],
        n: usize,
        today: NaiveDate,
    ) -> Vec<HoldingAnalytics> {
        let mut ranking = self.cagr_ranking_at(holdings, today);
        ranking.truncate(n);
        ranking
    }

    #[must_use]
    pub fn top_performers(&self, holdings: &[Holding], n: usize) -> Vec<HoldingAnalytics> {
        self.top_performers_at(holdings, n, today())
    }

    /// Mean CAGR and summed gain/loss per asset type, sorted by type name.
    #[must_use]
    pub fn asset_type_performance_at(
        &self,
        holdings: &[Holding],
        today: NaiveDate,
    ) -> Vec<AssetTypePerformance> {
        // asset_type → (Σ cagr, Σ gain/loss, count)
        let mut groups: BTreeMap<&str, (f64, f64, usize)> = BTreeMap::new();
        for holding in holdings {
            let entry = groups
                .entry(holding.asset_type.as_str())
                .or_insert((0.0, 0.0, 0));
            entry.0 += holding_cagr_at(holding, today);
            entry.1 += gain_loss(holding);
            entry.2 += 1;
        }

        groups
            .into_iter()
            .map(|(asset_type, (cagr_sum, gain_loss_sum, count))| AssetTypePerformance {
                asset_type: asset_type.to_string(),
                mean_cagr: round2(cagr_sum / count as f64),
                total_gain_loss: round2(gain_loss_sum),
                holding_count: count,
            })
            .collect()
    }

    #[must_use]
    pub fn asset_type_performance(&self, holdings: &[Holding]) -> Vec<AssetTypePerformance> {
        self.asset_type_performance_at(holdings, today())
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
