pub mod colors;
pub mod date;
pub mod formatting;
pub mod fs;
pub mod logging;
pub mod path;
pub mod range;
pub mod table;
pub mod time;

pub use formatting::{format_hours, format_money};
