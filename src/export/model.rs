// src/export/model.rs

use crate::models::SummaryRow;
use crate::store::codec::format_timestamp;
use serde::Serialize;

/// Flat per-punch row used by the CSV export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SummaryExport {
    pub date: String,
    pub in_time: String,
    pub out_time: String,
    pub running: bool,
    pub rounded_hours: String,
}

impl From<&SummaryRow> for SummaryExport {
    fn from(r: &SummaryRow) -> Self {
        Self {
            date: r.date.format("%Y-%m-%d").to_string(),
            in_time: format_timestamp(&r.in_time),
            out_time: r.out_time.as_ref().map(format_timestamp).unwrap_or_default(),
            running: r.running,
            rounded_hours: format!("{:.1}", r.rounded_hours),
        }
    }
}
