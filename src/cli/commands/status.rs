use super::{close_engine, open_engine};
use crate::config::Config;
use crate::core::Clock;
use crate::errors::AppResult;
use crate::models::TrackerState;
use crate::store::codec::format_timestamp;
use crate::utils::colors::{RESET, color_for_state};
use crate::utils::time::format_elapsed;

/// `Status: …` line, with start time and elapsed time while clocked in.
pub fn status_line(state: TrackerState, now: chrono::NaiveDateTime) -> String {
    let color = color_for_state(state.is_active());
    match state {
        TrackerState::Idle => format!("Status: {color}{}{RESET}", state.label()),
        TrackerState::Active { since } => format!(
            "Status: {color}{}{RESET} (since {}, running {})",
            state.label(),
            format_timestamp(&since),
            format_elapsed(now - since)
        ),
    }
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let engine = open_engine(cfg)?;
    println!("{}", status_line(engine.state(), engine.clock().now()));
    close_engine(engine);
    Ok(())
}
