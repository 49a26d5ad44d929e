//! Snapshot of a partition file taken right before it is overwritten.
//!
//! `dir/name.ext` is copied to `dir/name.<unix seconds>.ext`.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use chrono::Utc;
use fs_err::OpenOptions;

use crate::error::{Result, SbrError};

/// Copy an existing file at `path` aside. Returns the backup location, or `None` when there
/// was nothing to back up.
pub fn backup_existing(path: &Path) -> Result<Option<PathBuf>> {
    match fs_err::metadata(path) {
        Ok(_) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    }
    let dest = backup_path(path, Utc::now().timestamp());
    copy_file(path, &dest)?;
    tracing::debug!(source = %path.display(), backup = %dest.display(), "backed up partition");
    Ok(Some(dest))
}

/// Backup name for `path` taken at `timestamp`.
#[must_use]
pub fn backup_path(path: &Path, timestamp: i64) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}.{timestamp}.{}", ext.to_string_lossy()),
        None => format!("{stem}.{timestamp}"),
    };
    path.with_file_name(name)
}

/// Copy `src` to a new file `dst`. Refuses to overwrite and refuses non-regular sources.
fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    let meta = fs_err::metadata(src)?;
    if !meta.is_file() {
        return Err(SbrError::NotRegularFile {
            path: src.to_path_buf(),
        });
    }
    let mut source = fs_err::File::open(src)?;
    let mut destination = match OpenOptions::new().write(true).create_new(true).open(dst) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            return Err(SbrError::BackupExists {
                path: dst.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };
    io::copy(&mut source, &mut destination)?;
    destination.sync_all()?;
    Ok(())
}
