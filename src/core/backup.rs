use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::fs::ensure_writable;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copies the punch file to `dest`, optionally replacing the copy with a
    /// zip archive. Returns the path actually written.
    pub fn backup(data_file: &Path, dest: &Path, compress: bool, force: bool) -> AppResult<PathBuf> {
        // 1️⃣ Check the punch file exists
        if !data_file.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Punch file not found: {}", data_file.display()),
            )
            .into());
        }

        if dest == data_file {
            return Err(AppError::Other(
                "Backup destination is the punch file itself".into(),
            ));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        // 3️⃣ Never overwrite silently
        ensure_writable(&final_path, force)?;

        // 4️⃣ Copy or compress
        if compress {
            compress_backup(data_file, &final_path)?;
            info(format!("Compressed: {}", final_path.display()));
        } else {
            fs::copy(data_file, &final_path)?;
        }

        success(format!("Backup created: {}", final_path.display()));
        debug!(from = %data_file.display(), to = %final_path.display(), compress, "backup written");
        Ok(final_path)
    }
}

/// Writes `src` as the single entry of a deflated zip at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry = src
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "punches.csv".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}
