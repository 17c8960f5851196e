use std::io::{self, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::NamedTempFile;
use tracing::info;
use walkdir::WalkDir;

use crate::error::{PackError, PackResult};

/// Result of writing a snapshot archive.
#[derive(Clone, Debug)]
pub struct SnapshotReport {
    pub archive_path: PathBuf,
    pub files_archived: usize,
    pub bytes_written: u64,
}

/// Package the whole data directory tree as a gzip-compressed tar archive.
///
/// Entry paths are relative to `source_dir` and traversal order is sorted,
/// so the same tree always produces the same entry sequence. The archive is
/// written to a temporary file and renamed into place.
pub fn snapshot(source_dir: &Path, archive_path: &Path) -> PackResult<SnapshotReport> {
    if !source_dir.is_dir() {
        return Err(PackError::MissingMember {
            path: source_dir.to_path_buf(),
        });
    }
    write_archive(source_dir, &[source_dir.to_path_buf()], archive_path)
}

/// Package only the named members (files or directories) of `source_dir`.
///
/// Mirrors the export layout of CMS data directories, where a snapshot
/// covers `entities/`, `schemas/`, `metadata.json` and friends but not
/// stray siblings. A member that does not exist fails the whole run.
pub fn snapshot_members<P: AsRef<Path>>(
    source_dir: &Path,
    members: &[P],
    archive_path: &Path,
) -> PackResult<SnapshotReport> {
    let mut roots = Vec::with_capacity(members.len());
    for member in members {
        let root = source_dir.join(member.as_ref());
        if !root.exists() {
            return Err(PackError::MissingMember { path: root });
        }
        roots.push(root);
    }
    write_archive(source_dir, &roots, archive_path)
}

fn write_archive(
    source_dir: &Path,
    roots: &[PathBuf],
    archive_path: &Path,
) -> PackResult<SnapshotReport> {
    let dir = parent_dir(archive_path);
    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| PackError::Archive {
        path: archive_path.to_path_buf(),
        source,
    })?;
    let tmp_path = tmp.path().to_path_buf();

    let mut files_archived = 0;
    {
        let encoder = GzEncoder::new(tmp.as_file_mut(), Compression::default());
        let mut builder = tar::Builder::new(encoder);

        for root in roots {
            files_archived +=
                append_tree(&mut builder, source_dir, root, &tmp_path, archive_path)?;
        }

        let encoder = builder.into_inner().map_err(|source| PackError::Archive {
            path: archive_path.to_path_buf(),
            source,
        })?;
        let mut file = encoder.finish().map_err(|source| PackError::Archive {
            path: archive_path.to_path_buf(),
            source,
        })?;
        file.flush().map_err(|source| PackError::Archive {
            path: archive_path.to_path_buf(),
            source,
        })?;
    }

    tmp.as_file().sync_all().map_err(|source| PackError::Archive {
        path: archive_path.to_path_buf(),
        source,
    })?;
    let bytes_written = tmp
        .as_file()
        .metadata()
        .map_err(|source| PackError::Archive {
            path: archive_path.to_path_buf(),
            source,
        })?
        .len();
    tmp.persist(archive_path).map_err(|e| PackError::Archive {
        path: archive_path.to_path_buf(),
        source: e.error,
    })?;

    info!(
        archive = %archive_path.display(),
        files = files_archived,
        bytes = bytes_written,
        "snapshot written"
    );
    Ok(SnapshotReport {
        archive_path: archive_path.to_path_buf(),
        files_archived,
        bytes_written,
    })
}

/// Append one member tree to the archive. Returns the number of files added.
fn append_tree<W: Write>(
    builder: &mut tar::Builder<W>,
    source_dir: &Path,
    root: &Path,
    tmp_path: &Path,
    archive_path: &Path,
) -> PackResult<usize> {
    let mut files = 0;
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| PackError::Archive {
            path: root.to_path_buf(),
            source: io::Error::from(e),
        })?;
        let path = entry.path();
        // Skip the archive itself when it lives inside the tree being packed.
        if path == tmp_path || path == archive_path {
            continue;
        }
        let rel = path
            .strip_prefix(source_dir)
            .map_err(|e| PackError::Archive {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, e),
            })?;
        if rel.as_os_str().is_empty() {
            continue;
        }

        if entry.file_type().is_dir() {
            builder
                .append_dir(rel, path)
                .map_err(|source| PackError::Archive {
                    path: path.to_path_buf(),
                    source,
                })?;
        } else {
            builder
                .append_path_with_name(path, rel)
                .map_err(|source| PackError::Archive {
                    path: path.to_path_buf(),
                    source,
                })?;
            files += 1;
        }
    }
    Ok(files)
}

/// Directory containing `path`, defaulting to `.` for bare file names.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}
