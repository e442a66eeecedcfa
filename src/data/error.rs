//! Errors raised while reading enemy data files.
//!
//! Only I/O-level failures surface here; malformed rows degrade to zeros and
//! are reported through [`crate::data::loader::LoadReport`] instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to split line {line} of {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        line: usize,
        #[source]
        source: csv::Error,
    },
}

pub type LoadResult<T> = Result<T, LoadError>;
