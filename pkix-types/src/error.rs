//! Error types for PKIX types

use thiserror::Error;

/// Result type for PKIX types operations
pub type Result<T> = std::result::Result<T, Error>;

/// PKIX types error types
#[derive(Debug, Error)]
pub enum Error {
    // AlgorithmIdentifier errors
    #[error("AlgorithmIdentifier: expected SEQUENCE")]
    ExpectedSequence,
    #[error("AlgorithmIdentifier: empty sequence")]
    EmptyAlgorithmIdentifier,
    #[error("AlgorithmIdentifier: expected OBJECT IDENTIFIER for algorithm")]
    ExpectedOidForAlgorithm,
    #[error("AlgorithmIdentifier: expected at most 2 elements, got {0}")]
    TooManyElements(usize),
    #[error("AlgorithmIdentifier: NULL parameters are not valid for this algorithm")]
    NullParameterNotSupported,

    // Parameter errors
    #[error("Dss-Parms: {0}")]
    InvalidDsaParameter(&'static str),
    #[error("ECParameters: {0}")]
    InvalidEcParameter(&'static str),
    #[error("RSASSA-PSS-params: {0}")]
    InvalidPssParameter(&'static str),
    #[error("unknown named curve: {0}")]
    UnknownNamedCurve(String),

    // Extension errors
    #[error("Extension: expected SEQUENCE")]
    ExtensionExpectedSequence,
    #[error("Extension: expected 2 or 3 elements, got {0}")]
    ExtensionInvalidElementCount(usize),
    #[error("Extension: expected OCTET STRING for extnValue")]
    ExtensionExpectedOctetString,
    #[error("Extension: expected BOOLEAN for critical or OCTET STRING for extnValue")]
    ExtensionInvalidCriticalOrValue,
    #[error("Extension: expected OBJECT IDENTIFIER for extnID")]
    ExtensionExpectedOidForExtnId,

    // Name errors
    #[error("Name: expected SEQUENCE")]
    NameExpectedSequence,
    #[error("RelativeDistinguishedName: expected SET")]
    RdnExpectedSet,
    #[error("RelativeDistinguishedName: empty SET")]
    RdnEmpty,
    #[error("AttributeTypeAndValue: expected SEQUENCE")]
    AttributeTypeAndValueExpectedSequence,
    #[error("AttributeTypeAndValue: expected OBJECT IDENTIFIER for attribute type")]
    AttributeTypeAndValueExpectedOid,
    #[error("AttributeTypeAndValue: expected 2 elements")]
    AttributeTypeAndValueInvalidElementCount,

    // SubjectPublicKeyInfo errors
    #[error("SubjectPublicKeyInfo: expected SEQUENCE")]
    SubjectPublicKeyInfoExpectedSequence,
    #[error("SubjectPublicKeyInfo: expected BIT STRING for subject public key")]
    SubjectPublicKeyInfoExpectedBitString,
    #[error("SubjectPublicKeyInfo: expected 2 elements, got {0}")]
    SubjectPublicKeyInfoInvalidElementCount(usize),

    /// ASN.1 decoding error
    #[error("ASN.1 error: {0}")]
    ASN1Error(#[from] mitate_asn1::error::Error),
}
