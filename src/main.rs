// src/main.rs — Questlog entry point

use clap::Parser;

use questlog::cli::{Cli, Commands};
use questlog::infra::config::Config;
use questlog::infra::logger;

fn main() {
    // Initialize logging (respects RUST_LOG)
    logger::init_logging("warn");

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    match cli.command {
        Some(Commands::Rules) => {
            questlog::cli::rules::run_rules();
            Ok(())
        }
        None => questlog::tui::run_app(&config),
    }
}
