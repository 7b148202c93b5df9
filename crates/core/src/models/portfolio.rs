use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// Name given to a portfolio that has never been saved.
pub const DEFAULT_PORTFOLIO_NAME: &str = "My Portfolio";

/// The main data container. Everything in here gets serialized to the
/// portfolio JSON file verbatim.
///
/// Holdings keep insertion order, which is also display order. The same
/// `asset_id` may appear more than once; each entry is its own row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Display name of the portfolio
    pub name: String,

    /// All positions, in the order they were added
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holdings: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new(DEFAULT_PORTFOLIO_NAME)
    }
}
