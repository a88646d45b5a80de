use super::status::status_line;
use super::{close_engine, open_engine, resolve_range, resolve_wage};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Clock;
use crate::core::TrackerEngine;
use crate::errors::AppResult;
use crate::models::Summary;
use crate::utils::table::Table;
use crate::utils::time::{format_clock, format_now};
use crate::utils::{format_hours, format_money};
use chrono::{NaiveDate, NaiveDateTime};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const ROUNDING_HINT: &str = "Rounding: per punch, nearest 6 minutes (0.1h).";

/// Full text of one summary screen.
pub fn render(summary: &Summary, separator: char) -> String {
    let mut table = Table::new(["Date", "In", "Out", "Rounded h (0.1h)"], separator);
    for row in &summary.rows {
        table.add_row(vec![
            row.date.format("%Y-%m-%d").to_string(),
            format_clock(&row.in_time),
            row.out_time
                .as_ref()
                .map(format_clock)
                .unwrap_or_else(|| "— (running)".to_string()),
            format_hours(row.rounded_hours),
        ]);
    }

    let mut out = format!("Period: {} → {}\n\n", summary.start, summary.end);
    if summary.is_empty() {
        out.push_str("No punches in this period.\n");
    } else {
        out.push_str(&table.render());
    }
    out.push('\n');
    out.push_str(&format!(
        "Total hours (rounded): {}\n",
        format_hours(summary.total_rounded_hours)
    ));
    out.push_str(&format!(
        "Wage: {}/h    Pay (rounded): {}\n",
        format_money(summary.wage),
        format_money(summary.pay)
    ));
    out.push_str(ROUNDING_HINT);
    out.push('\n');
    out
}

fn screen(engine: &TrackerEngine, summary: &Summary, now: NaiveDateTime, sep: char) -> String {
    format!(
        "rpunch  {}\n{}\n\n{}",
        format_now(&now),
        status_line(engine.state(), now),
        render(summary, sep)
    )
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        from,
        to,
        period,
        wage,
        watch,
        ticks,
    } = cmd
    {
        let wage = resolve_wage(*wage, cfg)?;
        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        let engine = open_engine(cfg)?;

        // the final save runs whatever happens after the engine is open
        let result = resolve_range(
            from.as_deref(),
            to.as_deref(),
            period.as_deref(),
            cfg,
            &engine,
        )
        .and_then(|(start, end)| {
            if *watch {
                watch_loop(&engine, start, end, wage, *ticks, sep)
            } else {
                let summary = engine.summary(start, end, wage)?;
                print!("{}", screen(&engine, &summary, engine.clock().now(), sep));
                Ok(())
            }
        });
        close_engine(engine);
        result?;
    }
    Ok(())
}

/// Periodic refresh: summary() is read-only, so recomputing it every second
/// is always safe. Runs until `ticks` refreshes, or forever without a bound.
/// Interrupting it skips the final save, which has nothing new to write.
fn watch_loop(
    engine: &TrackerEngine,
    start: NaiveDate,
    end: NaiveDate,
    wage: f64,
    ticks: Option<u64>,
    sep: char,
) -> AppResult<()> {
    let mut tick: u64 = 0;
    loop {
        let summary = engine.summary(start, end, wage)?;
        print!(
            "\x1b[2J\x1b[H{}",
            screen(engine, &summary, engine.clock().now(), sep)
        );
        io::stdout().flush()?;

        tick += 1;
        if ticks.is_some_and(|max| tick >= max) {
            return Ok(());
        }
        thread::sleep(Duration::from_secs(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::build_summary;
    use crate::models::Punch;

    #[test]
    fn render_shows_rows_totals_and_pay() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let punches = [
            Punch::closed(d.and_hms_opt(9, 0, 0).unwrap(), d.and_hms_opt(9, 7, 0).unwrap()),
            Punch::open(d.and_hms_opt(13, 0, 0).unwrap()),
        ];
        let s = build_summary(&punches, d, d, 15.0, d.and_hms_opt(15, 0, 0).unwrap());
        let text = render(&s, '-');

        assert!(text.contains("Period: 2024-01-01 → 2024-01-01"));
        assert!(text.contains("09:07:00"));
        assert!(text.contains("— (running)"));
        assert!(text.contains("Total hours (rounded): 2.1"));
        assert!(text.contains("Pay (rounded): $31.50"));
        assert!(text.contains(ROUNDING_HINT));
    }

    #[test]
    fn empty_period_is_explicit() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let none: Vec<Punch> = Vec::new();
        let s = build_summary(&none, d, d, 20.0, d.and_hms_opt(12, 0, 0).unwrap());
        let text = render(&s, '-');
        assert!(text.contains("No punches in this period."));
        assert!(text.contains("Pay (rounded): $0.00"));
    }
}
