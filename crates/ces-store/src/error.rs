use std::io;
use std::path::PathBuf;

/// Errors from entity store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A non-blank line in the store file is not valid JSON.
    #[error("malformed record on line {line}: {source}")]
    MalformedRecord {
        /// 1-based line number within the store file.
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The store file is missing or unreadable.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The store file (or its temporary sibling) could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
