use base64::DecodeError;
use thiserror::Error;

/// Errors that can occur when unwrapping PEM armor or base64 text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Missing the opening boundary marker (e.g., `-----BEGIN CERTIFICATE-----`)
    #[error("missing a pre encapsulation boundary")]
    MissingPreEncapsulationBoundary,

    /// Missing the closing boundary marker (e.g., `-----END CERTIFICATE-----`)
    #[error("missing a post encapsulation boundary")]
    MissingPostEncapsulationBoundary,

    /// Nothing to decode: no data between the boundaries, or blank input
    #[error("missing data")]
    MissingData,

    /// The BEGIN and END labels do not match (e.g., BEGIN CERTIFICATE, END PRIVATE KEY)
    #[error("label doesn't match")]
    LabelMissMatch,

    /// Input is not text, so it cannot be base64
    #[error("input is not UTF-8 text")]
    NotText,

    /// No base64 variant accepted the data
    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}

pub type Result<T> = std::result::Result<T, Error>;
