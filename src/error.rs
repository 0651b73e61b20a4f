//! Error type shared by table construction, bulk loading and the session loop.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by this crate.
///
/// Lookups of absent keys are not errors; they return `None`.
#[derive(Debug, Error)]
pub enum Error {
    /// A table needs at least one bucket.
    #[error("bucket count must be greater than zero")]
    ZeroBucketCount,

    /// Every bucket needs at least one inline slot.
    #[error("bucket capacity must be greater than zero")]
    ZeroBucketCapacity,

    /// The bulk load source could not be opened.
    #[error("could not open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an already open source failed.
    #[error("read failed: {0}")]
    Read(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
