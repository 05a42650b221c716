//! Error type for loading a dataset from disk.
//!
//! Search never fails with an error: an unknown or unreachable person is a
//! normal `None` result. Only I/O and CSV decoding surface here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The data directory passed to the loader does not exist.
    #[error("Data directory does not exist: {0:?}")]
    MissingDirectory(PathBuf),

    /// A CSV file could not be opened or a row failed to decode.
    #[error("Failed to read {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl Error {
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
