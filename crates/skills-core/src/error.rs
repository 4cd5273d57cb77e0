//! Error types for skill discovery.

use std::path::PathBuf;

/// Errors that can occur while reading skill files and directories.
///
/// The public discovery entry points are fail-soft and never return these;
/// they surface through the `try_` variants and in log events.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A skill file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be enumerated.
    #[error("failed to list directory {}: {source}", path.display())]
    ListDir {
        /// The directory that was being listed.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for skill discovery operations.
pub type Result<T> = std::result::Result<T, Error>;
