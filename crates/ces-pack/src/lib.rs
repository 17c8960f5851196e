//! Snapshot archives for the Content Entity Store.
//!
//! A snapshot is a gzip-compressed tar archive of a CMS data directory,
//! produced for distribution. There is no format contract beyond "tar +
//! gzip of the given tree": consumers unpack it with stock tooling.
//!
//! # Architecture
//!
//! - [`snapshot`] — pack the whole data directory tree
//! - [`snapshot_members`] — pack only named members (`entities/`,
//!   `metadata.json`, ...), the layout real exports use
//! - [`SnapshotReport`] — file count and compressed size, for logging
//!
//! Archives are written via temporary file + rename, and entry order is
//! deterministic (sorted traversal).

pub mod error;
pub mod snapshot;

pub use error::{PackError, PackResult};
pub use snapshot::{snapshot, snapshot_members, SnapshotReport};
