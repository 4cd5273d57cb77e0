//! Error types for bootstrap skill listing.

use std::path::PathBuf;

/// Errors that can occur while listing plugin skills.
///
/// Unlike the fail-soft core scanner, the bootstrap path reports these to
/// the host instead of skipping the offending entry.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A `SKILL.md` file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A plugins or skills directory could not be enumerated.
    #[error("failed to list directory {}: {source}", path.display())]
    ListDir {
        /// The directory that was being listed.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for bootstrap operations.
pub type Result<T> = std::result::Result<T, Error>;
