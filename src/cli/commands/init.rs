use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped with --test)
///  - an empty punch file with its header, unless one exists already
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing rpunch…");

    let cfg = Config::init_all(cli.file.as_deref(), cli.test)?;

    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Punch file  : {}", cfg.data_path().display()));

    success("rpunch initialization completed!");
    Ok(())
}
