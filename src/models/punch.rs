use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One clock-in/clock-out interval.
///
/// `in_time` is fixed at creation; `out_time` is set once, at clock-out.
/// Times are local wall-clock values at second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Punch {
    pub in_time: NaiveDateTime,
    pub out_time: Option<NaiveDateTime>,
}

impl Punch {
    /// A freshly opened punch (no out time yet).
    pub fn open(in_time: NaiveDateTime) -> Self {
        Self {
            in_time,
            out_time: None,
        }
    }

    pub fn closed(in_time: NaiveDateTime, out_time: NaiveDateTime) -> Self {
        Self {
            in_time,
            out_time: Some(out_time),
        }
    }

    pub fn is_open(&self) -> bool {
        self.out_time.is_none()
    }

    /// Calendar date the punch is filed under (its start date).
    pub fn date(&self) -> NaiveDate {
        self.in_time.date()
    }

    /// Worked time of this punch. An open punch runs up to `reference_now`.
    /// Never negative, so a skewed clock cannot subtract hours.
    pub fn duration(&self, reference_now: NaiveDateTime) -> Duration {
        let end = self.out_time.unwrap_or(reference_now);
        (end - self.in_time).max(Duration::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn closed_punch_ignores_reference_now() {
        let p = Punch::closed(at(9, 0, 0), at(9, 7, 0));
        assert_eq!(p.duration(at(23, 0, 0)), Duration::seconds(420));
        assert!(!p.is_open());
    }

    #[test]
    fn open_punch_runs_until_reference_now() {
        let p = Punch::open(at(9, 0, 0));
        assert!(p.is_open());
        assert_eq!(p.duration(at(10, 30, 0)), Duration::minutes(90));
    }

    #[test]
    fn skewed_punch_is_floored_at_zero() {
        let p = Punch::closed(at(10, 0, 0), at(9, 0, 0));
        assert_eq!(p.duration(at(11, 0, 0)), Duration::zero());

        let open = Punch::open(at(10, 0, 0));
        assert_eq!(open.duration(at(9, 59, 0)), Duration::zero());
    }
}
