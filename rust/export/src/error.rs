use std::io;
use thiserror::Error;

/// All errors produced by the export API.
#[derive(Debug, Error)]
pub enum Error {
    /// None of the candidate content roots exist on the filesystem.
    #[error("no content root found among candidates")]
    NoContentRoot,

    /// Filesystem I/O failed while probing a candidate root.
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
