use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            header("Current configuration");
            println!("{}", ConfigLogic::render(cfg)?);
        }

        // ---- CHECK / MIGRATE ----
        if *check || *run_migrate {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use). Run `rpunch init`.",
                    path.display()
                ));
                return Ok(());
            }

            if *run_migrate {
                let added = migrate::fill_missing(&path)?;
                if added.is_empty() {
                    success("Configuration already up to date.");
                }
            } else {
                let missing = migrate::missing_keys(&path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                    info("Run `rpunch config --migrate` to add them with default values.");
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(&path, editor.as_deref())?;
        }
    }

    Ok(())
}
