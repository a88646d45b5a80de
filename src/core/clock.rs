//! Wall-clock access, injectable so the engine can be driven by tests.

use chrono::{Duration, Local, NaiveDateTime, SubsecRound};
use std::cell::Cell;

/// Source of "now" for the engine. Implementations return local wall-clock
/// time with no sub-second part.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The real local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local().trunc_subsecs(0)
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(now.trunc_subsecs(0)),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now.trunc_subsecs(0));
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn system_clock_has_whole_seconds() {
        assert_eq!(SystemClock.now().nanosecond(), 0);
    }

    #[test]
    fn fixed_clock_moves_only_on_request() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let clock = FixedClock::new(start);
        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::minutes(7));
        assert_eq!(clock.now(), start + Duration::seconds(420));
    }
}
