//! The punch clock itself: state machine, persistence on every transition,
//! and the range summary consumed by the CLI.

use crate::core::calculator::build_summary;
use crate::core::clock::{Clock, SystemClock};
use crate::errors::{AppError, AppResult};
use crate::models::{Punch, PunchSequence, Summary, TrackerState};
use crate::store::{LoadReport, PunchStore};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub struct TrackerEngine<C: Clock = SystemClock> {
    store: PunchStore,
    punches: PunchSequence,
    clock: C,
}

impl<C: Clock> TrackerEngine<C> {
    /// Loads the punch file at `path` and derives the initial state from it.
    pub fn open(path: impl Into<PathBuf>, clock: C) -> AppResult<(Self, LoadReport)> {
        let store = PunchStore::new(path);
        let (punches, report) = store.load()?;
        let engine = Self::with_sequence(store, punches, clock);
        debug!(state = ?engine.state(), "tracker opened");
        Ok((engine, report))
    }

    pub fn with_sequence(store: PunchStore, punches: PunchSequence, clock: C) -> Self {
        Self {
            store,
            punches,
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn store(&self) -> &PunchStore {
        &self.store
    }

    pub fn punches(&self) -> &PunchSequence {
        &self.punches
    }

    pub fn state(&self) -> TrackerState {
        self.punches.state()
    }

    pub fn is_active(&self) -> bool {
        self.punches.is_clocked_in()
    }

    pub fn open_punch(&self) -> Option<&Punch> {
        self.punches.open_punch()
    }

    /// Opens a new punch at the current time.
    ///
    /// Fails with [`AppError::AlreadyActive`] without touching anything when a
    /// punch is already open. If the save fails the new punch stays in memory
    /// and the persistence error is returned.
    pub fn clock_in(&mut self) -> AppResult<Punch> {
        if let Some(open) = self.punches.open_punch() {
            return Err(AppError::AlreadyActive {
                since: open.in_time,
            });
        }

        let now = self.clock.now();
        let punch = *self.punches.push_open(now);
        info!(at = %now, "clocked in");

        self.store.save(&self.punches)?;
        Ok(punch)
    }

    /// Closes the open punch at the current time.
    ///
    /// Fails with [`AppError::NotActive`] when idle. Same save semantics as
    /// [`TrackerEngine::clock_in`].
    pub fn clock_out(&mut self) -> AppResult<Punch> {
        let now = self.clock.now();
        let punch = *self
            .punches
            .close_last(now)
            .ok_or(AppError::NotActive)?;
        info!(at = %now, "clocked out");

        self.store.save(&self.punches)?;
        Ok(punch)
    }

    /// Rounded hours and pay for punches started in `[start, end]`.
    /// The range may be given reversed.
    pub fn summary(&self, start: NaiveDate, end: NaiveDate, wage: f64) -> AppResult<Summary> {
        if !wage.is_finite() || wage < 0.0 {
            return Err(AppError::InvalidWage(wage.to_string()));
        }
        let now = self.clock.now();
        Ok(build_summary(&self.punches, start, end, wage, now))
    }

    pub fn save(&self) -> AppResult<()> {
        self.store.save(&self.punches)
    }

    /// Final save on exit. Best effort: the error is logged and handed back,
    /// there is nothing left to retry with.
    pub fn shutdown(self) -> Option<AppError> {
        match self.save() {
            Ok(()) => {
                debug!("tracker shut down");
                None
            }
            Err(e) => {
                warn!(error = %e, "final save failed");
                Some(e)
            }
        }
    }
}
