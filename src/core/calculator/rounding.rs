use chrono::Duration;

/// Billing increment: 6 minutes, i.e. 0.1h.
pub const INCREMENT_SECS: i64 = 6 * 60;

/// Rounds one punch duration to the nearest 0.1h, ties going up.
/// Negative input counts as zero.
pub fn round_punch_duration(d: Duration) -> Duration {
    Duration::seconds(round_seconds(d.num_seconds()))
}

pub fn round_seconds(secs: i64) -> i64 {
    let secs = secs.max(0);
    (secs + INCREMENT_SECS / 2) / INCREMENT_SECS * INCREMENT_SECS
}

pub fn seconds_to_hours(secs: i64) -> f64 {
    secs as f64 / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(secs: i64) -> i64 {
        round_punch_duration(Duration::seconds(secs)).num_seconds()
    }

    #[test]
    fn boundaries() {
        assert_eq!(r(0), 0);
        assert_eq!(r(179), 0);
        assert_eq!(r(180), 360);
        assert_eq!(r(181), 360);
        assert_eq!(r(359), 360);
        assert_eq!(r(360), 360);
        assert_eq!(r(539), 360);
        assert_eq!(r(540), 720);
        assert_eq!(r(420), 360);
    }

    #[test]
    fn negative_counts_as_zero() {
        assert_eq!(r(-1), 0);
        assert_eq!(r(-10_000), 0);
    }

    #[test]
    fn monotonic_and_idempotent() {
        let mut prev = 0;
        for s in 0..=4 * 3600 {
            let cur = r(s);
            assert!(cur >= prev, "not monotonic at {s}s");
            assert_eq!(r(cur), cur, "not idempotent at {s}s");
            prev = cur;
        }
    }

    #[test]
    fn hours_conversion() {
        assert_eq!(seconds_to_hours(360), 0.1);
        assert_eq!(seconds_to_hours(9000), 2.5);
    }
}
