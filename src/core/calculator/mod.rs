pub mod rounding;
pub mod summary;

pub use rounding::{INCREMENT_SECS, round_punch_duration};
pub use summary::{build_summary, normalize_range};
