//! Period expressions shared by `summary` and `export`.

use crate::errors::{AppError, AppResult};
use chrono::{Months, NaiveDate};

/// A parsed `--period` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Every punch on file.
    All,
    /// Inclusive date bounds.
    Range(NaiveDate, NaiveDate),
}

fn invalid(msg: &str, input: &str) -> AppError {
    AppError::InvalidRange(format!("{msg}: '{input}'"))
}

/// Parse a period.
///
/// Supports:
/// - `all`
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_period(r: &str) -> AppResult<Period> {
    let r = r.trim();
    if r.eq_ignore_ascii_case("all") {
        return Ok(Period::All);
    }

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());
        if start.len() != end.len() {
            return Err(invalid("start and end must have same format", r));
        }
        let (a1, a2) = bounds(start)?;
        let (b1, b2) = bounds(end)?;
        // either order is accepted; the range covers both tokens whole
        return Ok(Period::Range(a1.min(b1), a2.max(b2)));
    }

    let (d1, d2) = bounds(r)?;
    Ok(Period::Range(d1, d2))
}

/// First and last day covered by a single YYYY / YYYY-MM / YYYY-MM-DD token.
fn bounds(token: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match token.len() {
        // YYYY
        4 => {
            let y: i32 = token.parse().map_err(|_| invalid("invalid year", token))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid("invalid year", token))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid("invalid year", token))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{token}-01"), "%Y-%m-%d")
                .map_err(|_| invalid("invalid month", token))?;
            let d2 = d1
                .checked_add_months(Months::new(1))
                .and_then(|d| d.pred_opt())
                .ok_or_else(|| invalid("invalid month", token))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(token, "%Y-%m-%d")
                .map_err(|_| invalid("invalid date", token))?;
            Ok((d, d))
        }
        _ => Err(invalid("unsupported period format", token)),
    }
}
