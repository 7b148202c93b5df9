use std::collections::BTreeMap;
use std::io::Read;

use csv::{ReaderBuilder, Trim};

use crate::errors::CoreError;
use crate::models::holding::{parse_purchase_date, Holding, DATE_FORMAT};

use super::validator::{self, parse_number};

/// Columns every ingested batch must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "asset_type",
    "asset_id",
    "asset_name",
    "quantity",
    "purchase_price",
];

/// Optional date column. When present, every non-blank cell must be a date.
pub const DATE_COLUMN: &str = "purchase_date";

/// Template handed to users who want to prepare a CSV upload.
pub const SAMPLE_CSV: &str = "\
asset_type,asset_id,asset_name,quantity,purchase_price,purchase_date
mutual_fund,HDFC123,HDFC Nifty 50 Index Fund,100,150.0,2023-01-15
equity,RELIANCE,Reliance Industries Ltd,10,2500.0,2023-02-20
insurance,LIC001,LIC Term Plan,1,50000.0,2023-03-10
";

/// One untyped input row: column name → raw cell text.
///
/// Only lives between upload and validation. Accepted rows are turned
/// into typed [`Holding`]s straight away.
pub type RawRow = BTreeMap<String, String>;

/// A table of candidate holdings waiting to pass the Validator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestBatch {
    /// Column names in header order
    pub columns: Vec<String>,

    /// Rows in file order
    pub rows: Vec<RawRow>,
}

impl IngestBatch {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row given as `(column, cell)` pairs.
    pub fn push_row<I, K, V>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let row = cells
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.rows.push(row);
    }

    /// Builder-style variant of [`IngestBatch::push_row`].
    #[must_use]
    pub fn with_row<I, K, V>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.push_row(cells);
        self
    }

    /// Parse CSV text with a header row.
    pub fn from_csv_str(text: &str) -> Result<Self, CoreError> {
        Self::from_csv_reader(text.as_bytes())
    }

    /// Parse CSV from any reader. Cells are trimmed; short rows are allowed
    /// and their missing cells read as blank.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CoreError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let row: RawRow = columns
                .iter()
                .zip(record.iter())
                .map(|(column, cell)| (column.clone(), cell.to_string()))
                .collect();
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw cell text, blank when the row has no such cell.
    pub(crate) fn cell<'a>(row: &'a RawRow, column: &str) -> &'a str {
        row.get(column).map(String::as_str).unwrap_or("")
    }

    /// Convert an accepted batch into typed holdings priced at purchase price.
    ///
    /// Runs the Validator first; a rejected batch yields
    /// `CoreError::ValidationError` with the rejection message and no holdings.
    pub fn into_holdings(self) -> Result<Vec<Holding>, CoreError> {
        validator::validate(&self).into_result()?;

        let has_dates = self.has_column(DATE_COLUMN);
        self.rows
            .iter()
            .enumerate()
            .map(|(position, row)| {
                let quantity = parse_number(Self::cell(row, "quantity"))
                    .ok_or_else(|| coercion_error("quantity", position))?;
                let purchase_price = parse_number(Self::cell(row, "purchase_price"))
                    .ok_or_else(|| coercion_error("purchase_price", position))?;
                // A blank cell in a present date column stays blank, not absent.
                let purchase_date = has_dates.then(|| {
                    let raw = Self::cell(row, DATE_COLUMN);
                    match parse_purchase_date(raw) {
                        Some(date) => date.format(DATE_FORMAT).to_string(),
                        None => raw.to_string(),
                    }
                });

                Ok(Holding::new(
                    Self::cell(row, "asset_type"),
                    Self::cell(row, "asset_id"),
                    Self::cell(row, "asset_name"),
                    quantity,
                    purchase_price,
                    purchase_date,
                ))
            })
            .collect()
    }
}

fn coercion_error(column: &str, position: usize) -> CoreError {
    CoreError::ValidationError(format!(
        "Invalid numeric data in {column} at position {position}"
    ))
}

/// The bundled template as a batch.
pub fn sample_batch() -> IngestBatch {
    IngestBatch::from_csv_str(SAMPLE_CSV).unwrap_or_default()
}
