use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use ces_types::EntityRecord;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Load an entity collection from an NDJSON file.
///
/// Blank lines are skipped. Any non-blank line that fails to parse aborts
/// the load with [`StoreError::MalformedRecord`] carrying the 1-based line
/// number; nothing is written.
pub fn load(path: &Path) -> StoreResult<Vec<EntityRecord>> {
    let file = File::open(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|source| StoreError::MalformedRecord {
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }

    debug!(path = %path.display(), count = records.len(), "loaded entity collection");
    Ok(records)
}

/// Save an entity collection to an NDJSON file, atomically.
///
/// Each record becomes one compact, newline-terminated JSON line. The
/// collection is written to a temporary file in the target directory,
/// fsynced, and renamed into place, so a crash mid-write never leaves a
/// truncated store file behind.
pub fn save(path: &Path, records: &[EntityRecord]) -> StoreResult<()> {
    let dir = parent_dir(path);
    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        for record in records {
            serde_json::to_writer(&mut writer, record)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            writer.write_all(b"\n").map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        writer.flush().map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    tmp.as_file().sync_all().map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tmp.persist(path).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!(path = %path.display(), count = records.len(), "saved entity collection");
    Ok(())
}

/// Copy the store file to a `<stem>_backup.<ext>` sibling.
///
/// Intended to run before destructive edits. Returns the backup path.
pub fn backup(path: &Path) -> StoreResult<PathBuf> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "store".to_owned());
    let ext = path
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "jsonl".to_owned());
    let backup_path = path.with_file_name(format!("{stem}_backup.{ext}"));

    fs::copy(path, &backup_path).map_err(|source| StoreError::Write {
        path: backup_path.clone(),
        source,
    })?;

    debug!(path = %path.display(), backup = %backup_path.display(), "backed up entity collection");
    Ok(backup_path)
}

/// Directory containing `path`, defaulting to `.` for bare file names.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}
