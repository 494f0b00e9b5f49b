use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("expected SEQUENCE")]
    ExpectedSequence,

    #[error("invalid element count: {0}")]
    InvalidElementCount(usize),

    #[error("expected INTEGER for version")]
    ExpectedInteger,

    #[error("invalid version: must be 0 (v1) or 1 (v2)")]
    InvalidVersion,

    #[error("expected OCTET STRING for {0}")]
    ExpectedOctetString(&'static str),

    #[error("unexpected element {0} after privateKey")]
    UnexpectedElement(&'static str),

    #[error("publicKey [1] requires version v2")]
    PublicKeyRequiresV2,

    #[error("publicKey [1] is not a valid BIT STRING")]
    InvalidPublicKey,

    #[error("unknown encryption scheme: {0}")]
    UnknownEncryptionScheme(String),

    #[error("invalid PBES2 parameters: {0}")]
    InvalidPbes2Parameters(&'static str),

    #[error(transparent)]
    PKIXTypes(#[from] mitate_pkix_types::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
