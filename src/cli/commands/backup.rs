use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        out,
        compress,
        force,
    } = cmd
    {
        BackupLogic::backup(&cfg.data_path(), &expand_tilde(out), *compress, *force)?;
    }

    Ok(())
}
