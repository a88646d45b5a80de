use super::rounding::{round_punch_duration, seconds_to_hours};
use crate::models::{Punch, Summary, SummaryRow};
use chrono::{NaiveDate, NaiveDateTime};

/// Orders the range so that start <= end.
pub fn normalize_range(start: NaiveDate, end: NaiveDate) -> (NaiveDate, NaiveDate) {
    if start <= end {
        (start, end)
    } else {
        (end, start)
    }
}

/// Builds the rounded summary of all punches started within `[start, end]`.
///
/// Each punch is rounded on its own before summing. Open punches are billed
/// up to `now`, and are filed under the day they started.
pub fn build_summary<'a, I>(
    punches: I,
    start: NaiveDate,
    end: NaiveDate,
    wage: f64,
    now: NaiveDateTime,
) -> Summary
where
    I: IntoIterator<Item = &'a Punch>,
{
    let (start, end) = normalize_range(start, end);

    let mut selected: Vec<&Punch> = punches
        .into_iter()
        .filter(|p| (start..=end).contains(&p.date()))
        .collect();

    // open punches sort after closed ones sharing the same in_time
    selected.sort_by_key(|p| (p.in_time, p.out_time.is_none(), p.out_time));

    let rows: Vec<SummaryRow> = selected
        .into_iter()
        .map(|p| {
            let rounded = round_punch_duration(p.duration(now)).num_seconds();
            SummaryRow {
                date: p.date(),
                in_time: p.in_time,
                out_time: p.out_time,
                running: p.is_open(),
                rounded_seconds: rounded,
                rounded_hours: seconds_to_hours(rounded),
            }
        })
        .collect();

    let total_rounded_seconds: i64 = rows.iter().map(|r| r.rounded_seconds).sum();
    let total_rounded_hours = seconds_to_hours(total_rounded_seconds);

    Summary {
        start,
        end,
        wage,
        rows,
        total_rounded_seconds,
        total_rounded_hours,
        pay: total_rounded_hours * wage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        day(d).and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn per_punch_rounding_beats_combined_rounding() {
        let a = at(1, 9, 0, 0);
        let b = at(1, 10, 0, 0);
        let punches = [
            Punch::closed(a, a + Duration::seconds(200)),
            Punch::closed(b, b + Duration::seconds(200)),
        ];
        let s = build_summary(&punches, day(1), day(1), 10.0, at(1, 12, 0, 0));
        assert_eq!(s.total_rounded_seconds, 720);
        assert_eq!(s.total_rounded_hours, 0.2);

        let combined = [Punch::closed(a, a + Duration::seconds(400))];
        let s = build_summary(&combined, day(1), day(1), 10.0, at(1, 12, 0, 0));
        assert_eq!(s.total_rounded_hours, 0.1);
    }

    #[test]
    fn range_is_inclusive_and_by_start_date() {
        let punches = [
            Punch::closed(at(1, 23, 0, 0), at(2, 1, 0, 0)),
            Punch::closed(at(2, 9, 0, 0), at(2, 10, 0, 0)),
            Punch::closed(at(3, 9, 0, 0), at(3, 10, 0, 0)),
            Punch::closed(at(4, 9, 0, 0), at(4, 10, 0, 0)),
        ];
        let s = build_summary(&punches, day(2), day(3), 0.0, at(5, 0, 0, 0));
        let dates: Vec<NaiveDate> = s.rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(2), day(3)]);

        // spanning midnight: filed under its start day only
        let s = build_summary(&punches, day(1), day(1), 0.0, at(5, 0, 0, 0));
        assert_eq!(s.rows.len(), 1);
        assert_eq!(s.total_rounded_hours, 2.0);
    }

    #[test]
    fn reversed_range_is_swapped() {
        let punches = [Punch::closed(at(2, 9, 0, 0), at(2, 10, 0, 0))];
        let s = build_summary(&punches, day(3), day(1), 1.0, at(5, 0, 0, 0));
        assert_eq!((s.start, s.end), (day(1), day(3)));
        assert_eq!(s.rows.len(), 1);
    }

    #[test]
    fn rows_are_sorted_with_open_punch_last_on_ties() {
        let punches = [
            Punch::open(at(2, 9, 0, 0)),
            Punch::closed(at(1, 9, 0, 0), at(1, 10, 0, 0)),
            Punch::closed(at(2, 9, 0, 0), at(2, 9, 30, 0)),
        ];
        let s = build_summary(&punches, day(1), day(2), 1.0, at(2, 11, 0, 0));
        assert_eq!(s.rows[0].date, day(1));
        assert!(!s.rows[1].running);
        assert!(s.rows[2].running);
        assert_eq!(s.rows[2].rounded_seconds, 2 * 3600);
    }

    #[test]
    fn pay_is_hours_times_wage() {
        let start = at(1, 8, 0, 0);
        let punches = [Punch::closed(start, start + Duration::minutes(150))];
        let s = build_summary(&punches, day(1), day(1), 20.0, at(2, 0, 0, 0));
        assert_eq!(s.total_rounded_hours, 2.5);
        assert_eq!(s.pay, 50.0);
    }

    #[test]
    fn seven_minute_punch_bills_a_tenth() {
        let punches = [Punch::closed(at(1, 9, 0, 0), at(1, 9, 7, 0))];
        let s = build_summary(&punches, day(1), day(1), 15.0, at(1, 9, 7, 0));
        assert_eq!(s.total_rounded_hours, 0.1);
        assert!((s.pay - 1.5).abs() < 1e-9);
        assert_eq!(format!("{:.2}", s.pay), "1.50");
    }

    #[test]
    fn empty_range_sums_to_zero() {
        let none: Vec<Punch> = Vec::new();
        let s = build_summary(&none, day(1), day(7), 20.0, at(1, 0, 0, 0));
        assert!(s.is_empty());
        assert_eq!(s.total_rounded_seconds, 0);
        assert_eq!(s.pay, 0.0);
    }
}
