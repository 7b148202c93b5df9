use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Date format used for `purchase_date` everywhere a date is written.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Datetime layouts accepted after `/` has been normalized to `-`.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A single position in the portfolio.
///
/// Holdings are plain records: value, gain/loss and CAGR are derived by
/// the analytics service and never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Free-form category label (e.g., "equity", "mutual_fund", "insurance")
    pub asset_type: String,

    /// External identifier: ticker symbol or fund code (e.g., "RELIANCE", "HDFC123")
    pub asset_id: String,

    /// Human-readable name (e.g., "Reliance Industries Ltd")
    pub asset_name: String,

    /// Units held
    pub quantity: f64,

    /// Price per unit at acquisition
    pub purchase_price: f64,

    /// Latest known price per unit. Starts equal to `purchase_price`
    /// and is only changed by repricing.
    pub current_price: f64,

    /// Acquisition date as an ISO `YYYY-MM-DD` string. `None` when the
    /// source had no date field; an empty string when it had a blank one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
}

impl Holding {
    /// Create a holding priced at its purchase price.
    pub fn new(
        asset_type: impl Into<String>,
        asset_id: impl Into<String>,
        asset_name: impl Into<String>,
        quantity: f64,
        purchase_price: f64,
        purchase_date: Option<String>,
    ) -> Self {
        Self {
            asset_type: asset_type.into(),
            asset_id: asset_id.into(),
            asset_name: asset_name.into(),
            quantity,
            purchase_price,
            current_price: purchase_price,
            purchase_date,
        }
    }

    /// Builder-style override of the current price.
    #[must_use]
    pub fn with_current_price(mut self, current_price: f64) -> Self {
        self.current_price = current_price;
        self
    }

    /// The parsed purchase date, if present and well-formed.
    #[must_use]
    pub fn parsed_purchase_date(&self) -> Option<NaiveDate> {
        self.purchase_date.as_deref().and_then(parse_purchase_date)
    }
}

/// Parse a purchase date written with `-` or `/` separators.
///
/// Accepts a bare date (`2023-01-15`, `2023/01/15`) or an ISO datetime
/// whose time part is discarded (`2023-01-15T10:30:00`, `2023-01-15 10:30`).
/// Seconds and fractional seconds are optional.
pub fn parse_purchase_date(raw: &str) -> Option<NaiveDate> {
    let normalized = raw.trim().replace('/', "-");
    if normalized.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(&normalized, DATE_FORMAT) {
        return Some(date);
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
        .map(|dt| dt.date())
}
