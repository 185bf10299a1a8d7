use thiserror::Error;

/// Trace comparison errors.
///
/// Trace-content irregularities (malformed tokens, missing cycles, value
/// mismatches) are report content, never errors; only I/O can fail here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
