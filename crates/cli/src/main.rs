mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;
use portfolio_tracker_core::models::settings::Settings;

use crate::cli::Cli;
use crate::commands::Context;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = Context::resolve(&cli, Settings::from_env());
    logging::init_logging(&ctx.settings.log_level)?;

    let rendered = commands::run(&cli, &ctx)?;
    println!("{}", rendered.trim_end());
    Ok(())
}
