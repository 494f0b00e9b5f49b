use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("expected SEQUENCE")]
    ExpectedSequence,

    #[error("expected 2 to 4 elements, got {0}")]
    InvalidElementCount(usize),

    #[error("expected INTEGER for version")]
    ExpectedInteger,

    #[error("invalid version: must be 1 (ecPrivkeyVer1)")]
    InvalidVersion,

    #[error("expected OCTET STRING for privateKey")]
    ExpectedOctetString,

    #[error("unexpected element {0} after privateKey")]
    UnexpectedElement(&'static str),

    #[error("publicKey [1] must wrap a BIT STRING")]
    InvalidPublicKey,

    #[error("parameters [0] must wrap exactly one element")]
    InvalidParameters,
}

pub type Result<T> = std::result::Result<T, Error>;
