use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// The `days` days ending with `end`, inclusive. Zero days is treated as one.
pub fn last_n_days(end: NaiveDate, days: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let span = u64::from(days.max(1)) - 1;
    let start = end.checked_sub_days(Days::new(span)).ok_or_else(|| {
        AppError::InvalidRange(format!("{days} days before {end} is out of range"))
    })?;
    Ok((start, end))
}
