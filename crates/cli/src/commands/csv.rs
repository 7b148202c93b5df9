use std::path::Path;

use portfolio_tracker_core::errors::CoreError;
use portfolio_tracker_core::ingest::{self, IngestBatch, SAMPLE_CSV};

use crate::cli::{CsvFileArgs, OutputArgs};
use crate::error::CliError;

use super::Context;

fn read_batch(path: &Path) -> Result<IngestBatch, CliError> {
    let file = std::fs::File::open(path)?;
    IngestBatch::from_csv_reader(file)
        .map_err(|e| CliError::Rejected(format!("Error loading CSV: {e}")))
}

fn rejected(message: &str) -> CliError {
    CliError::Rejected(format!("CSV validation failed: {message}"))
}

pub fn import(ctx: &Context, args: &CsvFileArgs) -> Result<String, CliError> {
    let batch = read_batch(&args.path)?;

    ctx.update(|tracker| match tracker.import_batch(batch) {
        Ok(count) => Ok(format!("Successfully loaded {count} holdings from CSV!")),
        Err(CoreError::ValidationError(message)) => Err(rejected(&message)),
        Err(e) => Err(e.into()),
    })
}

pub fn validate(args: &CsvFileArgs) -> Result<String, CliError> {
    let batch = read_batch(&args.path)?;
    let outcome = ingest::validate(&batch);
    if outcome.accepted {
        Ok(format!("{} ({} rows)", outcome.message, batch.len()))
    } else {
        Err(rejected(&outcome.message))
    }
}

pub fn sample(args: &OutputArgs) -> Result<String, CliError> {
    match &args.output {
        Some(path) => {
            std::fs::write(path, SAMPLE_CSV)?;
            Ok(format!("Sample CSV written to {}", path.display()))
        }
        None => Ok(SAMPLE_CSV.trim_end().to_string()),
    }
}
