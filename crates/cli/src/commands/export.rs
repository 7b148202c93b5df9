use std::path::PathBuf;

use portfolio_tracker_core::export::{csv_file_name, pdf_file_name};

use crate::cli::{ExportArgs, ExportFormat};
use crate::error::CliError;

use super::Context;

pub fn export(ctx: &Context, args: &ExportArgs) -> Result<String, CliError> {
    let tracker = ctx.load()?;

    match args.format {
        ExportFormat::Csv => {
            let csv = tracker.export_csv()?;
            if csv.is_empty() {
                return Err(CliError::Rejected(
                    "Add holdings to generate reports".into(),
                ));
            }
            let path = args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(csv_file_name(tracker.name())));
            std::fs::write(&path, csv)?;
            tracing::info!(path = %path.display(), "CSV report written");
            Ok(format!("CSV report written to {}", path.display()))
        }
        ExportFormat::Pdf => {
            let path = args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(pdf_file_name(tracker.name())));
            std::fs::write(&path, tracker.export_pdf())?;
            tracing::info!(path = %path.display(), "PDF report written");
            Ok(format!("PDF report written to {}", path.display()))
        }
    }
}
