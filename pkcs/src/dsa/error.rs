use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("expected SEQUENCE")]
    ExpectedSequence,

    #[error("expected 6 elements, got {0}")]
    InvalidElementCount(usize),

    #[error("expected INTEGER for {0}")]
    ExpectedInteger(&'static str),

    #[error("invalid version: must be 0")]
    InvalidVersion,
}

pub type Result<T> = std::result::Result<T, Error>;
