use std::io;
use std::path::PathBuf;

/// Errors from snapshot packaging.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    /// A named member of the source directory does not exist.
    #[error("missing archive member: {}", path.display())]
    MissingMember { path: PathBuf },

    /// The archive could not be built or written.
    #[error("archive failure for {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result alias for packaging operations.
pub type PackResult<T> = Result<T, PackError>;
