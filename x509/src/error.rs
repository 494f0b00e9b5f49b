use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}: expected SEQUENCE")]
    ExpectedSequence(&'static str),
    #[error("{structure}: invalid element count {actual}")]
    InvalidElementCount {
        structure: &'static str,
        actual: usize,
    },
    #[error("missing [0] EXPLICIT version")]
    MissingVersion,
    #[error("invalid version: {0}")]
    InvalidVersion(&'static str),
    #[error("not a v3 certificate")]
    NotV3,
    #[error("expected INTEGER for serialNumber")]
    ExpectedSerialNumber,
    #[error("expected BIT STRING for signatureValue")]
    ExpectedSignatureValue,
    #[error("invalid validity: {0}")]
    InvalidValidity(&'static str),
    #[error("unexpected element {0} in TBSCertificate")]
    UnexpectedElement(&'static str),
    #[error("extensions must not be empty")]
    ExtensionsEmpty,
    #[error("extensions must be a SEQUENCE")]
    ExpectedSequenceInExtensions,
    #[error("invalid ASN.1: {0}")]
    InvalidASN1(#[from] mitate_asn1::error::Error),
    #[error("PKIX types error: {0}")]
    PKIXTypesError(#[from] mitate_pkix_types::Error),
    #[error(transparent)]
    Extension(#[from] crate::extensions::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
