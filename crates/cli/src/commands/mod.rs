mod csv;
mod export;
mod holdings;
mod view;

use std::path::Path;

use portfolio_tracker_core::models::settings::Settings;
use portfolio_tracker_core::PortfolioTracker;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Resolved runtime options shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: Settings,
    pub json: bool,
}

impl Context {
    /// Settings from the environment, with `--file` taking precedence.
    pub fn resolve(cli: &Cli, settings: Settings) -> Self {
        let mut settings = settings;
        if let Some(file) = &cli.file {
            settings.portfolio_file = file.clone();
        }
        Self {
            settings,
            json: cli.json,
        }
    }

    pub fn portfolio_file(&self) -> &Path {
        &self.settings.portfolio_file
    }

    fn load(&self) -> Result<PortfolioTracker, CliError> {
        Ok(PortfolioTracker::load_from_file(self.portfolio_file())?)
    }

    /// Load, apply `mutate`, and save when anything changed.
    fn update<F>(&self, mutate: F) -> Result<String, CliError>
    where
        F: FnOnce(&mut PortfolioTracker) -> Result<String, CliError>,
    {
        let mut tracker = self.load()?;
        let message = mutate(&mut tracker)?;
        if tracker.has_unsaved_changes() {
            tracker.save_to_file(self.portfolio_file())?;
        }
        Ok(message)
    }
}

/// Execute one command and return what should be printed on stdout.
pub fn run(cli: &Cli, ctx: &Context) -> Result<String, CliError> {
    let file = ctx.portfolio_file();
    tracing::debug!(command = ?cli.command, file = %file.display(), "running command");

    match &cli.command {
        Command::Summary => view::summary(ctx),
        Command::Analytics => view::analytics(ctx),
        Command::Add(args) => holdings::add(ctx, args),
        Command::Import(args) => csv::import(ctx, args),
        Command::Validate(args) => csv::validate(args),
        Command::SampleCsv(args) => csv::sample(args),
        Command::Rename(args) => holdings::rename(ctx, args),
        Command::Reprice(args) => holdings::reprice(ctx, args),
        Command::Remove(args) => holdings::remove(ctx, args),
        Command::Export(args) => export::export(ctx, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    struct Workspace {
        dir: tempfile::TempDir,
    }

    impl Workspace {
        fn new() -> Self {
            Self {
                dir: tempfile::tempdir().unwrap(),
            }
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        fn run(&self, args: &[&str]) -> Result<String, CliError> {
            let file = self.path("portfolio.json");
            let mut argv = vec!["portfolio", "--file", file.to_str().unwrap()];
            argv.extend_from_slice(args);
            let cli = Cli::try_parse_from(argv).unwrap();
            let ctx = Context::resolve(&cli, Settings::default());
            run(&cli, &ctx)
        }

        fn write(&self, name: &str, contents: &str) -> String {
            let path = self.path(name);
            std::fs::write(&path, contents).unwrap();
            path.to_string_lossy().into_owned()
        }
    }

    #[test]
    fn file_flag_overrides_settings() {
        let cli = Cli::try_parse_from(["portfolio", "--file", "/tmp/x.json", "summary"]).unwrap();
        let ctx = Context::resolve(&cli, Settings::default());
        assert_eq!(ctx.portfolio_file(), std::path::Path::new("/tmp/x.json"));
    }

    #[test]
    fn add_persists_and_summary_shows_it() {
        let ws = Workspace::new();
        let out = ws
            .run(&[
                "add",
                "--asset-type", "Equity",
                "--asset-id", "TCS",
                "--asset-name", "Tata Consultancy",
                "--quantity", "5",
                "--purchase-price", "3200",
                "--purchase-date", "2024-03-01",
            ])
            .unwrap();
        assert_eq!(out, "Successfully added Tata Consultancy to portfolio!");
        assert!(ws.path("portfolio.json").exists());

        let summary = ws.run(&["summary"]).unwrap();
        assert!(summary.contains("Tata Consultancy"));
        assert!(summary.contains("₹16,000.00"));
    }

    #[test]
    fn import_sample_then_export_csv() {
        let ws = Workspace::new();
        let csv = ws.write("upload.csv", portfolio_tracker_core::ingest::SAMPLE_CSV);
        assert_eq!(
            ws.run(&["import", &csv]).unwrap(),
            "Successfully loaded 3 holdings from CSV!"
        );

        let target = ws.path("out.csv");
        let target_arg = target.to_str().unwrap();
        ws.run(&["export", "csv", "--output", target_arg]).unwrap();
        let exported = std::fs::read_to_string(target).unwrap();
        assert_eq!(exported.lines().count(), 4);
    }

    #[test]
    fn rejected_import_exits_with_2() {
        let ws = Workspace::new();
        let csv = ws.write("bad.csv", "asset_type,asset_id\nequity,X\n");
        let err = ws.run(&["import", &csv]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.to_string(),
            "CSV validation failed: Missing required columns: asset_name, quantity, purchase_price"
        );
        assert!(!ws.path("portfolio.json").exists());
    }

    #[test]
    fn unknown_index_exits_with_3() {
        let ws = Workspace::new();
        let err = ws.run(&["remove", "0"]).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn empty_csv_export_is_rejected() {
        let ws = Workspace::new();
        let err = ws.run(&["export", "csv"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn json_summary_is_machine_readable() {
        let ws = Workspace::new();
        let csv = ws.write("upload.csv", portfolio_tracker_core::ingest::SAMPLE_CSV);
        ws.run(&["import", &csv]).unwrap();
        let out = ws.run(&["--json", "summary"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["summary"]["holding_count"], 3);
        assert_eq!(value["allocation"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn sample_csv_prints_template() {
        let ws = Workspace::new();
        let out = ws.run(&["sample-csv"]).unwrap();
        let header = "asset_type,asset_id,asset_name,quantity,purchase_price,purchase_date";
        assert!(out.starts_with(header));
    }
}
