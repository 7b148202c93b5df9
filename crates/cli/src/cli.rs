//! CLI argument definitions for the `portfolio` binary.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `summary` | Total value, holdings table, allocation by type |
//! | `analytics` | Investment totals, CAGR table, performance insights |
//! | `add` | Add a holding manually |
//! | `import` | Replace holdings from a validated CSV file |
//! | `validate` | Check a CSV file without importing it |
//! | `sample-csv` | Print or write the CSV template |
//! | `rename` | Change the portfolio name |
//! | `reprice` | Set the current price of a holding |
//! | `remove` | Delete a holding |
//! | `export` | Write a CSV or PDF report |

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Personal portfolio tracker: holdings, gain/loss, CAGR, CSV/PDF reports.
#[derive(Debug, Parser)]
#[command(name = "portfolio", author, version, about)]
pub struct Cli {
    /// Portfolio JSON file. Defaults to $PORTFOLIO_FILE or ./portfolio.json.
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Print machine-readable JSON instead of text views.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show total value, holdings with gain/loss, and asset allocation.
    Summary,

    /// Show investment totals, CAGR per holding and per asset type.
    Analytics,

    /// Add a holding manually (current price starts at purchase price).
    Add(AddArgs),

    /// Replace all holdings with the rows of a CSV file.
    ///
    /// Required columns: asset_type, asset_id, asset_name, quantity,
    /// purchase_price. Optional: purchase_date (YYYY-MM-DD).
    Import(CsvFileArgs),

    /// Validate a CSV file and print the verdict.
    Validate(CsvFileArgs),

    /// Print the sample CSV template, or write it to a file.
    SampleCsv(OutputArgs),

    /// Rename the portfolio.
    Rename(RenameArgs),

    /// Set the current price of the holding at INDEX (0-based).
    Reprice(RepriceArgs),

    /// Remove the holding at INDEX (0-based).
    Remove(RemoveArgs),

    /// Export holdings to CSV or a PDF report.
    Export(ExportArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Asset category, e.g. "Mutual Fund", "Equity", "Insurance".
    #[arg(long)]
    pub asset_type: String,

    /// Fund code or stock symbol.
    #[arg(long)]
    pub asset_id: String,

    #[arg(long)]
    pub asset_name: String,

    #[arg(long, default_value_t = 100.0)]
    pub quantity: f64,

    #[arg(long, default_value_t = 100.0)]
    pub purchase_price: f64,

    /// Purchase date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub purchase_date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct CsvFileArgs {
    /// Path to the CSV file.
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Destination file. Prints to stdout when omitted.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct RepriceArgs {
    pub index: usize,

    #[arg(allow_negative_numbers = true)]
    pub price: f64,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Destination file. Defaults to <name>_portfolio.csv / <name>_report.pdf.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
