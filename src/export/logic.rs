// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::Summary;
use crate::ui::messages::warning;
use crate::utils::fs::ensure_writable;
use std::path::Path;

/// High level export of an already computed summary.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes `summary` to `file`.
    ///
    /// - `format`: csv (one row per punch) or json (rows plus totals)
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite without asking
    ///
    /// Returns `false` when there was nothing to export.
    pub fn export(
        summary: &Summary,
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<bool> {
        if !file.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {}",
                file.display()
            )));
        }

        if summary.is_empty() {
            warning(format!(
                "No punches found between {} and {}.",
                summary.start, summary.end
            ));
            return Ok(false);
        }

        ensure_writable(file, force)?;

        match format {
            ExportFormat::Csv => export_csv(summary, file)?,
            ExportFormat::Json => export_json(summary, file)?,
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::build_summary;
    use crate::models::Punch;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> Summary {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let punches = [
            Punch::closed(d.and_hms_opt(9, 0, 0).unwrap(), d.and_hms_opt(9, 7, 0).unwrap()),
            Punch::open(d.and_hms_opt(10, 0, 0).unwrap()),
        ];
        build_summary(&punches, d, d, 15.0, d.and_hms_opt(10, 30, 0).unwrap())
    }

    #[test]
    fn csv_has_one_line_per_punch() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("summary.csv");

        assert!(ExportLogic::export(&sample(), ExportFormat::Csv, &out, true).unwrap());

        let content = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "date,in_time,out_time,running,rounded_hours");
        assert_eq!(
            lines[1],
            "2024-01-01,2024-01-01T09:00:00,2024-01-01T09:07:00,false,0.1"
        );
        assert_eq!(lines[2], "2024-01-01,2024-01-01T10:00:00,,true,0.5");
    }

    #[test]
    fn json_carries_totals() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("summary.json");

        ExportLogic::export(&sample(), ExportFormat::Json, &out, true).unwrap();

        let v: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(v["total_rounded_seconds"], 2160);
        assert_eq!(v["rows"].as_array().unwrap().len(), 2);
        assert_eq!(v["rows"][1]["out_time"], serde_json::Value::Null);
    }

    #[test]
    fn relative_path_is_refused() {
        let err = ExportLogic::export(&sample(), ExportFormat::Csv, Path::new("out.csv"), true)
            .unwrap_err();
        assert!(matches!(err, AppError::Export(_)));
    }
}
