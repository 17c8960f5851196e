//! Newline-delimited JSON persistence for the Content Entity Store.
//!
//! An entity collection lives in one NDJSON file: one JSON object per line,
//! UTF-8, no surrounding array brackets. Line order is the only ordering
//! guarantee; the store enforces no index and no uniqueness constraint.
//!
//! # Design Rules
//!
//! 1. Loads are fail-fast: the first malformed line aborts the whole load
//!    and reports its line number. Blank lines are skipped.
//! 2. Saves are whole-file and atomic: records are written to a temporary
//!    file in the target directory, fsynced, and renamed into place. A
//!    crash never leaves a truncated store file.
//! 3. Single-process semantics only. Concurrent writers against the same
//!    file are unsafe and must be serialized by the caller.
//! 4. No retries: every I/O or parse failure propagates to the invoker.

pub mod error;
pub mod ndjson;

pub use error::{StoreError, StoreResult};
pub use ndjson::{backup, load, save};
