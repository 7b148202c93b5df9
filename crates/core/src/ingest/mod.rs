//! Bulk ingestion of holdings from tabular input (CSV uploads).
//!
//! Rows arrive untyped as an [`IngestBatch`], pass through the
//! [`validate`] gate, and only then become typed holdings.

pub mod batch;
pub mod validator;

pub use batch::{sample_batch, IngestBatch, RawRow, DATE_COLUMN, REQUIRED_COLUMNS, SAMPLE_CSV};
pub use validator::{validate, ValidationOutcome, VALID_MESSAGE};
