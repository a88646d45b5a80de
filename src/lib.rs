//! rpunch library root.
//! Exposes the punch engine, its storage, and the CLI that drives them.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::In => cli::commands::clock::handle_in(cfg),
        Commands::Out => cli::commands::clock::handle_out(cfg),
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics on stderr
    utils::logging::enable_logging(cli.verbose);

    // 3️⃣ load config once
    let mut cfg = Config::load()?;

    // 4️⃣ apply the punch file override from the command line
    if let Some(custom) = &cli.file {
        cfg.data_file = expand_tilde(custom).to_string_lossy().to_string();
    }

    dispatch(&cli, &cfg)
}
