//! cousins - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use cousins::model::AppError;
use cousins::view::TuiApp;

/// Find an ingredient's chemical cousins from your terminal
#[derive(Parser, Debug)]
#[command(name = "cousins")]
#[command(version)]
#[command(about = "TUI client for the flavor-similarity search service")]
pub struct Args {
    /// Ingredient to search immediately on startup
    pub query: Option<String>,

    /// Endpoint root of the similarity service (overrides config and env)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Path to log file for tracing output
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Propagate --no-color so every Palette construction sees it
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Precedence: defaults, then config file, then env vars, then CLI
    let config = {
        let config_file = cousins::config::load_config_with_precedence(args.config.clone())?;
        let merged = cousins::config::merge_config(config_file);
        let with_env = cousins::config::apply_env_overrides(merged);
        cousins::config::apply_cli_overrides(with_env, args.api_url.clone(), args.log_file.clone())
    };
    config.validate()?;

    cousins::logging::init(&config.log_file_path)?;
    info!(config = ?config, "configuration loaded and resolved");

    let mut app = TuiApp::new(&config)?;
    app.run(args.query)
}
