use csv::Writer;

use crate::errors::CoreError;
use crate::models::portfolio::Portfolio;

/// Header row of exported CSV files, in persisted field order.
pub const CSV_HEADER: [&str; 7] = [
    "asset_type",
    "asset_id",
    "asset_name",
    "quantity",
    "purchase_price",
    "current_price",
    "purchase_date",
];

/// Render all holdings as CSV with a header row.
///
/// An empty portfolio produces an empty string (no header either).
pub fn to_delimited_text(portfolio: &Portfolio) -> Result<String, CoreError> {
    if portfolio.holdings.is_empty() {
        return Ok(String::new());
    }

    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for h in &portfolio.holdings {
        writer.write_record([
            h.asset_type.clone(),
            h.asset_id.clone(),
            h.asset_name.clone(),
            h.quantity.to_string(),
            h.purchase_price.to_string(),
            h.current_price.to_string(),
            h.purchase_date.clone().unwrap_or_default(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CoreError::Export(format!("Failed to flush CSV: {e}")))?;
    String::from_utf8(bytes).map_err(|e| CoreError::Export(format!("CSV is not valid UTF-8: {e}")))
}
