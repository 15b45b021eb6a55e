//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, probe-loader, and sorter errors so the binary can
//! propagate any failure as a single diagnostic and a non-zero exit status.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("probe loader error: {0}")]
    Probe(#[from] crate::io::ProbeError),

    #[error("sorter error: {0}")]
    Sorter(#[from] crate::sorter::SorterError),
}
