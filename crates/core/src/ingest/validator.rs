use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::holding::parse_purchase_date;

use super::batch::{IngestBatch, DATE_COLUMN, REQUIRED_COLUMNS};

/// Message returned for an accepted batch.
pub const VALID_MESSAGE: &str = "Valid";
pub const QUANTITY_NOT_POSITIVE: &str = "Quantity must be positive";
pub const PRICE_NOT_POSITIVE: &str = "Purchase price must be positive";
pub const INVALID_DATE_FORMAT: &str = "Invalid date format in purchase_date. Use YYYY-MM-DD";

/// Verdict of the Validator on a whole batch.
///
/// Exactly one message is reported: the first failing check's, or
/// [`VALID_MESSAGE`] when everything passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub accepted: bool,
    pub message: String,
}

impl ValidationOutcome {
    fn accept() -> Self {
        Self {
            accepted: true,
            message: VALID_MESSAGE.to_string(),
        }
    }

    fn reject(message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.accepted
    }

    /// Turn a rejection into `CoreError::ValidationError`.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.accepted {
            Ok(())
        } else {
            Err(CoreError::ValidationError(self.message))
        }
    }
}

/// Gatekeep a batch of candidate holdings. All-or-nothing.
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. required columns present
/// 2. `quantity` and `purchase_price` are numeric
/// 3. every quantity is positive
/// 4. every purchase price is positive
/// 5. `purchase_date` cells parse as dates, if the column exists
///
/// The batch is only read, never modified.
pub fn validate(batch: &IngestBatch) -> ValidationOutcome {
    let outcome = run_checks(batch);
    if outcome.accepted {
        tracing::debug!(rows = batch.len(), "batch accepted");
    } else {
        tracing::warn!(rows = batch.len(), reason = %outcome.message, "batch rejected");
    }
    outcome
}

fn run_checks(batch: &IngestBatch) -> ValidationOutcome {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !batch.has_column(column))
        .collect();
    if !missing.is_empty() {
        return ValidationOutcome::reject(format!(
            "Missing required columns: {}",
            missing.join(", ")
        ));
    }

    let quantities = match coerce_column(batch, "quantity") {
        Ok(values) => values,
        Err(detail) => return numeric_rejection(&detail),
    };
    let prices = match coerce_column(batch, "purchase_price") {
        Ok(values) => values,
        Err(detail) => return numeric_rejection(&detail),
    };

    if quantities.iter().any(|q| *q <= 0.0) {
        return ValidationOutcome::reject(QUANTITY_NOT_POSITIVE);
    }
    if prices.iter().any(|p| *p <= 0.0) {
        return ValidationOutcome::reject(PRICE_NOT_POSITIVE);
    }

    if batch.has_column(DATE_COLUMN) {
        let bad_date = batch.rows.iter().any(|row| {
            let cell = IngestBatch::cell(row, DATE_COLUMN);
            !cell.trim().is_empty() && parse_purchase_date(cell).is_none()
        });
        if bad_date {
            return ValidationOutcome::reject(INVALID_DATE_FORMAT);
        }
    }

    ValidationOutcome::accept()
}

fn numeric_rejection(detail: &str) -> ValidationOutcome {
    ValidationOutcome::reject(format!(
        "Invalid numeric data in quantity or purchase_price: {detail}"
    ))
}

/// Coerce one column to numbers, reporting the first offending cell.
fn coerce_column(batch: &IngestBatch, column: &str) -> Result<Vec<f64>, String> {
    batch
        .rows
        .iter()
        .enumerate()
        .map(|(position, row)| {
            let cell = IngestBatch::cell(row, column);
            parse_number(cell)
                .ok_or_else(|| format!("Unable to parse string \"{cell}\" at position {position}"))
        })
        .collect()
}

/// Finite decimal number, surrounding whitespace ignored.
pub(crate) fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_accepts_integers_and_decimals() {
        assert_eq!(parse_number("10"), Some(10.0));
        assert_eq!(parse_number(" 2000.50 "), Some(2000.5));
        assert_eq!(parse_number("-10"), Some(-10.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
    }

    #[test]
    fn parse_number_rejects_blank_text_and_non_finite() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("invalid"), None);
        assert_eq!(parse_number("1,000"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }
}
