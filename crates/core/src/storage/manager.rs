use std::path::Path;

use crate::errors::CoreError;
use crate::models::portfolio::Portfolio;

/// High-level storage operations: save/load a portfolio to/from its JSON
/// document, either in memory or on disk.
///
/// Document layout:
/// ```text
/// {
///   "name": "My Portfolio",
///   "holdings": [
///     { "asset_type": ..., "asset_id": ..., "asset_name": ..., "quantity": ...,
///       "purchase_price": ..., "current_price": ..., "purchase_date": ... }
///   ]
/// }
/// ```
pub struct StorageManager;

impl StorageManager {
    /// Serialize a portfolio to pretty-printed JSON (2-space indent).
    pub fn save_to_string(portfolio: &Portfolio) -> Result<String, CoreError> {
        serde_json::to_string_pretty(portfolio)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize portfolio: {e}")))
    }

    /// Parse a portfolio from its JSON document.
    pub fn load_from_str(json: &str) -> Result<Portfolio, CoreError> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::Deserialization(format!("Invalid portfolio document: {e}")))
    }

    /// Write the portfolio document to `path`, replacing any previous content.
    pub fn save_to_file(portfolio: &Portfolio, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        let json = Self::save_to_string(portfolio)?;
        std::fs::write(path, json).map_err(|e| file_error("saving portfolio to", path, &e))?;
        tracing::info!(path = %path.display(), holdings = portfolio.holdings.len(), "saved");
        Ok(())
    }

    /// Read the portfolio document at `path`.
    ///
    /// A missing file is the first-run case and yields an empty default
    /// portfolio. Unreadable or malformed files are errors.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Portfolio, CoreError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "no portfolio file yet, starting empty");
            return Ok(Portfolio::default());
        }

        let json = std::fs::read_to_string(path)
            .map_err(|e| file_error("loading portfolio from", path, &e))?;
        let portfolio = Self::load_from_str(&json)?;
        tracing::info!(path = %path.display(), holdings = portfolio.holdings.len(), "loaded");
        Ok(portfolio)
    }
}

fn file_error(action: &str, path: &Path, error: &std::io::Error) -> CoreError {
    CoreError::FileIO(format!("Error {action} {}: {error}", path.display()))
}
