//! Durable storage of the punch sequence.
//!
//! The whole sequence is rewritten on every save: rows go to a sibling
//! `.tmp` file which is synced and then renamed over the target, so a reader
//! only ever sees the previous file or the new one.

pub mod codec;

use crate::errors::{AppError, AppResult};
use crate::models::PunchSequence;
use codec::{HEADERS, PunchRecord};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Outcome of a load: how many rows became punches and how many were dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// CSV-backed punch file. Holds only the path; the sequence itself is
/// owned by the engine.
#[derive(Debug, Clone)]
pub struct PunchStore {
    path: PathBuf,
}

impl PunchStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling of the target with `.tmp` appended to the full file name, so it
    /// never collides with the target whatever its extension.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Reads every parseable row, in file order.
    ///
    /// A missing file is a first run and yields an empty sequence. Rows with a
    /// bad timestamp or missing `in_time` are skipped and counted.
    pub fn load(&self) -> AppResult<(PunchSequence, LoadReport)> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no punch file yet, starting empty");
                return Ok((PunchSequence::new(), LoadReport::default()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut punches = Vec::new();
        let mut report = LoadReport::default();

        for (idx, row) in reader.deserialize::<PunchRecord>().enumerate() {
            // +2: header line, 1-based numbering
            let line = idx + 2;
            match row.ok().and_then(PunchRecord::into_punch) {
                Some(p) => punches.push(p),
                None => {
                    warn!(path = %self.path.display(), line, "skipping malformed punch row");
                    report.skipped += 1;
                }
            }
        }

        report.loaded = punches.len();
        let seq = PunchSequence::from(punches);

        let dangling = seq.dangling_open_count();
        if dangling > 0 {
            warn!(dangling, "punch file has open punches before the last row");
        }

        debug!(
            path = %self.path.display(),
            loaded = report.loaded,
            skipped = report.skipped,
            "punches loaded"
        );
        Ok((seq, report))
    }

    /// Replaces the punch file with `seq`. Any failure is a
    /// [`AppError::Persistence`]; the previous file is left untouched.
    pub fn save(&self, seq: &PunchSequence) -> AppResult<()> {
        self.write_atomic(seq).map_err(|source| AppError::Persistence {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), rows = seq.len(), "punches saved");
        Ok(())
    }

    fn write_atomic(&self, seq: &PunchSequence) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.tmp_path();
        let result = Self::write_rows(&tmp, seq).and_then(|()| fs::rename(&tmp, &self.path));
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result
    }

    fn write_rows(tmp: &Path, seq: &PunchSequence) -> io::Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(File::create(tmp)?);

        wtr.write_record(HEADERS)?;
        for p in seq {
            wtr.serialize(PunchRecord::from(p))?;
        }
        wtr.flush()?;

        let file = wtr.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()
    }
}
