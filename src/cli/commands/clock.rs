//! `in` and `out`: the two clock transitions.

use super::{close_engine, open_engine};
use crate::config::Config;
use crate::core::calculator::{round_punch_duration, rounding::seconds_to_hours};
use crate::errors::AppResult;
use crate::store::codec::format_timestamp;
use crate::ui::messages::{success, warning};
use crate::utils::colors::colorize_in_out;
use crate::utils::format_hours;
use crate::utils::time::format_elapsed;

/// Misuse of the clock is a warning; anything else propagates.
fn report_misuse(res: AppResult<()>) -> AppResult<()> {
    match res {
        Err(e) if e.is_warning() => {
            warning(e);
            Ok(())
        }
        other => other,
    }
}

pub fn handle_in(cfg: &Config) -> AppResult<()> {
    let mut engine = open_engine(cfg)?;

    let res = engine.clock_in().map(|p| {
        success(format!(
            "Clocked in at {}",
            colorize_in_out(&format_timestamp(&p.in_time), true, false)
        ));
    });

    close_engine(engine);
    report_misuse(res)
}

pub fn handle_out(cfg: &Config) -> AppResult<()> {
    let mut engine = open_engine(cfg)?;

    let res = engine.clock_out().map(|p| {
        let out = p.out_time.unwrap_or(p.in_time);
        let worked = p.duration(out);
        let rounded = round_punch_duration(worked).num_seconds();
        success(format!(
            "Clocked out at {} (worked {}, billed {}h)",
            colorize_in_out(&format_timestamp(&out), false, false),
            format_elapsed(worked),
            format_hours(seconds_to_hours(rounded))
        ));
    });

    close_engine(engine);
    report_misuse(res)
}
