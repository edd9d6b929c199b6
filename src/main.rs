use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use popup_formatter::{PopupFormatter, PopupFormatterConfig};

/// Build the striped HTML popup template for one GIS layer or table
#[derive(Parser, Debug)]
#[command(name = "popup-formatter")]
#[command(version)]
#[command(about = "Build the striped HTML popup template for one GIS layer or table")]
#[command(long_about = None)]
struct Args {
    /// Path to the JSON run configuration
    #[arg(default_value = "popup.json")]
    config: PathBuf,
}

fn run(args: &Args) -> anyhow::Result<()> {
    info!("Loading run configuration from: {}", args.config.display());
    let config = PopupFormatterConfig::from_path(&args.config).with_context(|| {
        format!("Failed to load run configuration {}", args.config.display())
    })?;

    info!(
        "Formatting {} '{}' from map '{}'",
        config.kind, config.layer, config.map
    );
    let html = PopupFormatter::new(config)
        .run()
        .context("Failed to format popup")?;

    print!("{html}");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
