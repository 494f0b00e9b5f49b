//! Extension-specific error types

use thiserror::Error;

/// Context for where an extension error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    BasicConstraints,
    KeyUsage,
    SubjectKeyIdentifier,
    AuthorityKeyIdentifier,
    SubjectAltName,
    GeneralName,
    ExtendedKeyUsage,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BasicConstraints => write!(f, "BasicConstraints"),
            Self::KeyUsage => write!(f, "KeyUsage"),
            Self::SubjectKeyIdentifier => write!(f, "SubjectKeyIdentifier"),
            Self::AuthorityKeyIdentifier => write!(f, "AuthorityKeyIdentifier"),
            Self::SubjectAltName => write!(f, "SubjectAltName"),
            Self::GeneralName => write!(f, "GeneralName"),
            Self::ExtendedKeyUsage => write!(f, "ExtendedKeyUsage"),
        }
    }
}

/// Extension parsing errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}: extension value is not DER: {1}")]
    InvalidValue(Kind, #[source] mitate_asn1::error::Error),

    #[error("{0}: empty sequence")]
    EmptySequence(Kind),

    #[error("{0}: expected SEQUENCE")]
    ExpectedSequence(Kind),

    #[error("{0}: expected BIT STRING")]
    ExpectedBitString(Kind),

    #[error("{0}: expected OCTET STRING")]
    ExpectedOctetString(Kind),

    #[error("{0}: expected INTEGER")]
    ExpectedInteger(Kind),

    #[error("{0}: expected OBJECT IDENTIFIER")]
    ExpectedOid(Kind),

    #[error("{0}: unexpected element {1}")]
    UnexpectedElement(Kind, &'static str),

    #[error("{kind}: unexpected context-specific tag [{slot}]")]
    UnexpectedContextTag { kind: Kind, slot: u32 },

    #[error("GeneralName: invalid IP address length {0}")]
    InvalidIpAddressLength(usize),

    #[error("GeneralName: {0} is not valid ASCII")]
    NotIa5String(&'static str),

    #[error("BasicConstraints: pathLenConstraint out of range")]
    PathLenOutOfRange,
}

pub type Result<T> = std::result::Result<T, Error>;
