//! Row format of the punch file: `in_time,out_time`, second precision,
//! no timezone offset, empty `out_time` for an open punch.

use crate::models::Punch;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const TIMESTAMP_FMT: &str = "%Y-%m-%dT%H:%M:%S";
pub const HEADERS: [&str; 2] = ["in_time", "out_time"];

/// A raw CSV row, before any timestamp is validated.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PunchRecord {
    pub in_time: String,
    #[serde(default)]
    pub out_time: String,
}

pub fn format_timestamp(t: &NaiveDateTime) -> String {
    t.format(TIMESTAMP_FMT).to_string()
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FMT).ok()
}

impl From<&Punch> for PunchRecord {
    fn from(p: &Punch) -> Self {
        Self {
            in_time: format_timestamp(&p.in_time),
            out_time: p.out_time.as_ref().map(format_timestamp).unwrap_or_default(),
        }
    }
}

impl PunchRecord {
    /// `None` when the row cannot become a punch.
    pub fn into_punch(self) -> Option<Punch> {
        let in_time = parse_timestamp(&self.in_time)?;
        let out_time = if self.out_time.trim().is_empty() {
            None
        } else {
            Some(parse_timestamp(&self.out_time)?)
        };
        Some(Punch { in_time, out_time })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(i: &str, o: &str) -> PunchRecord {
        PunchRecord {
            in_time: i.to_string(),
            out_time: o.to_string(),
        }
    }

    #[test]
    fn open_punch_writes_empty_out_field() {
        let t = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 5)
            .unwrap();
        let r = PunchRecord::from(&Punch::open(t));
        assert_eq!(r.in_time, "2024-01-01T09:00:05");
        assert_eq!(r.out_time, "");
    }

    #[test]
    fn blank_out_field_means_open() {
        let p = rec("2024-01-01T09:00:00", "  ").into_punch().unwrap();
        assert!(p.is_open());
    }

    #[test]
    fn malformed_fields_reject_the_row() {
        assert!(rec("2024-01-01 09:00:00", "").into_punch().is_none());
        assert!(rec("", "2024-01-01T10:00:00").into_punch().is_none());
        assert!(rec("2024-01-01T09:00:00", "yesterday").into_punch().is_none());
        assert!(rec("2024-13-01T09:00:00", "").into_punch().is_none());
    }
}
