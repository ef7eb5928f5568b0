//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;
use tabsplit::config::Config;
use tabsplit::output::OutputMode;

/// tabsplit - Split a bill from a receipt photo
#[derive(Parser, Debug)]
#[command(
    name = "tabsplit",
    version,
    about = "Split a restaurant bill from a receipt photo",
    long_about = "Reads a receipt photo, then lets you say who had what in plain language.\n\n\
                  Example: \"David had the burger, Jane and John shared the fries\".\n\
                  Tax and tip are split in proportion to what each person ordered."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.config/tabsplit/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Photo of the receipt
    pub image: PathBuf,
}

/// Run the CLI
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    // Reject non-images before touching config or the network
    let image = commands::read_receipt(&cli.image)?;

    let config = Config::load(cli.config.as_deref())?;
    if !config.display.color {
        colored::control::set_override(false);
    }

    commands::chat(image, &config, output_mode).await
}
