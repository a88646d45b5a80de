// src/export/mod.rs

mod json_csv;
pub mod logic;
mod model;

pub use logic::ExportLogic;
pub use model::SummaryExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
