//! Export of a portfolio to CSV text and PDF reports.

pub mod csv_export;
pub mod format;
pub mod pdf;
pub mod report;

pub use csv_export::{to_delimited_text, CSV_HEADER};
pub use report::to_document;

/// File-name stem derived from the portfolio name: spaces become underscores.
#[must_use]
pub fn export_file_stem(portfolio_name: &str) -> String {
    portfolio_name.replace(' ', "_")
}

/// Default file name for a CSV export, e.g. `My_Portfolio_portfolio.csv`.
#[must_use]
pub fn csv_file_name(portfolio_name: &str) -> String {
    format!("{}_portfolio.csv", export_file_stem(portfolio_name))
}

/// Default file name for a PDF report, e.g. `My_Portfolio_report.pdf`.
#[must_use]
pub fn pdf_file_name(portfolio_name: &str) -> String {
    format!("{}_report.pdf", export_file_stem(portfolio_name))
}
