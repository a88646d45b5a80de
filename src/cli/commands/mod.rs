pub mod backup;
pub mod clock;
pub mod config;
pub mod export;
pub mod init;
pub mod status;
pub mod summary;

use crate::config::{Config, MAX_WAGE};
use crate::core::{SystemClock, TrackerEngine};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, warning};
use crate::utils::date::{last_n_days, parse_date, today};
use crate::utils::range::{Period, parse_period};
use chrono::NaiveDate;

/// Opens the configured punch file, reporting rows that could not be read.
pub(crate) fn open_engine(cfg: &Config) -> AppResult<TrackerEngine> {
    let (engine, report) = TrackerEngine::open(cfg.data_path(), SystemClock)?;
    if report.skipped > 0 {
        warning(format!(
            "{} unreadable row(s) skipped in {}",
            report.skipped,
            cfg.data_path().display()
        ));
    }
    Ok(engine)
}

/// Final save before the process exits. Failure is reported, not returned:
/// there is nothing left to retry with.
pub(crate) fn close_engine(engine: TrackerEngine) {
    if let Some(e) = engine.shutdown() {
        error(format!("Final save failed: {e}"));
    }
}

pub(crate) fn resolve_wage(wage: Option<f64>, cfg: &Config) -> AppResult<f64> {
    let w = wage.unwrap_or(cfg.default_wage);
    if !w.is_finite() || !(0.0..=MAX_WAGE).contains(&w) {
        return Err(AppError::InvalidWage(format!(
            "{w} (allowed: 0.00 - {MAX_WAGE:.2})"
        )));
    }
    Ok(w)
}

fn date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Date bounds from `--period`, or from `--from/--to` with the configured
/// window as fallback. `all` spans the punches on file.
pub(crate) fn resolve_range(
    from: Option<&str>,
    to: Option<&str>,
    period: Option<&str>,
    cfg: &Config,
    engine: &TrackerEngine,
) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some(p) = period {
        return Ok(match parse_period(p)? {
            Period::Range(a, b) => (a, b),
            Period::All => {
                let mut dates = engine.punches().iter().map(|punch| punch.date());
                let first = dates.next().unwrap_or_else(today);
                dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)))
            }
        });
    }

    let end = to.map(date_arg).transpose()?.unwrap_or_else(today);
    let start = match from {
        Some(f) => date_arg(f)?,
        None => last_n_days(end, cfg.default_range_days)?.0,
    };
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> Config {
        Config {
            data_file: "/unused.csv".into(),
            ..Config::default()
        }
    }

    #[test]
    fn wage_bounds() {
        assert_eq!(resolve_wage(None, &cfg()).unwrap(), 20.0);
        assert_eq!(resolve_wage(Some(0.0), &cfg()).unwrap(), 0.0);
        assert_eq!(resolve_wage(Some(1000.0), &cfg()).unwrap(), 1000.0);
        assert!(resolve_wage(Some(1000.01), &cfg()).is_err());
        assert!(resolve_wage(Some(-0.25), &cfg()).is_err());
    }
}
