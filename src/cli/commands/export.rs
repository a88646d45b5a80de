use super::{close_engine, open_engine, resolve_range, resolve_wage};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        out,
        period,
        wage,
        force,
    } = cmd
    {
        let engine = open_engine(cfg)?;
        let wage = resolve_wage(*wage, cfg)?;
        let period = period.as_deref().unwrap_or("all");
        let (start, end) = resolve_range(None, None, Some(period), cfg, &engine)?;

        let summary = engine.summary(start, end, wage)?;
        close_engine(engine);

        ExportLogic::export(&summary, *format, Path::new(out), *force)?;
    }
    Ok(())
}
