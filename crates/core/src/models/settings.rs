use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the portfolio file location.
pub const ENV_PORTFOLIO_FILE: &str = "PORTFOLIO_FILE";
/// Environment variable overriding the currency symbol used in views.
pub const ENV_CURRENCY_SYMBOL: &str = "PORTFOLIO_CURRENCY";
/// Standard tracing filter variable.
pub const ENV_LOG_LEVEL: &str = "RUST_LOG";

/// Runtime settings for front-ends. Not stored inside the portfolio file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Where the portfolio JSON document lives.
    pub portfolio_file: PathBuf,

    /// Symbol prefixed to amounts in text views (e.g., "₹", "$").
    pub currency_symbol: String,

    /// How many holdings the "top performers" listing shows.
    pub top_performers: usize,

    /// `tracing` filter directive (e.g., "warn", "portfolio_tracker_core=debug").
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            portfolio_file: PathBuf::from("portfolio.json"),
            currency_symbol: "₹".to_string(),
            top_performers: 3,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Defaults overridden by `PORTFOLIO_FILE`, `PORTFOLIO_CURRENCY` and `RUST_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] but reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            portfolio_file: non_blank(ENV_PORTFOLIO_FILE)
                .map(PathBuf::from)
                .unwrap_or(defaults.portfolio_file),
            currency_symbol: non_blank(ENV_CURRENCY_SYMBOL).unwrap_or(defaults.currency_symbol),
            top_performers: defaults.top_performers,
            log_level: non_blank(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
        }
    }
}
