// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{SummaryExport, notify_export_success};
use crate::models::Summary;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty JSON of the whole summary, totals included.
pub(crate) fn export_json(summary: &Summary, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(summary)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// One CSV line per punch; the header comes from serde.
pub(crate) fn export_csv(summary: &Summary, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for row in &summary.rows {
        wtr.serialize(SummaryExport::from(row))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
