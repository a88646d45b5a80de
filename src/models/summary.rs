use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One displayed punch of a summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub date: NaiveDate,
    pub in_time: NaiveDateTime,
    pub out_time: Option<NaiveDateTime>,
    /// True when the punch is still open and was billed up to the query instant.
    pub running: bool,
    pub rounded_seconds: i64,
    pub rounded_hours: f64,
}

/// Rounded totals for a date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub wage: f64,
    pub rows: Vec<SummaryRow>,
    pub total_rounded_seconds: i64,
    pub total_rounded_hours: f64,
    pub pay: f64,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
