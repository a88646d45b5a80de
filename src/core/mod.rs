pub mod backup;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod engine;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::TrackerEngine;
