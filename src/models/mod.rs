pub mod punch;
pub mod sequence;
pub mod state;
pub mod summary;

pub use punch::Punch;
pub use sequence::PunchSequence;
pub use state::TrackerState;
pub use summary::{Summary, SummaryRow};
