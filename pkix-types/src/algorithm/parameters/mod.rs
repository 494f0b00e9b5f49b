//! Algorithm Parameters
//!
//! Typed views of the `parameters` field for the algorithms we describe:
//! - [RFC 3279](https://datatracker.ietf.org/doc/html/rfc3279) - DSA, explicit EC domains
//! - [RFC 4055](https://datatracker.ietf.org/doc/html/rfc4055) - RSASSA-PSS
//! - [RFC 5480](https://datatracker.ietf.org/doc/html/rfc5480) - Elliptic Curve Cryptography

use mitate_asn1::{Element, Integer};

use crate::error::{Error, Result};

pub mod dsa;
pub mod ec;
pub mod pss;

pub use dsa::DsaParameters;
pub use ec::{EcParameters, ExplicitCurve, FieldType, NamedCurve};
pub use pss::PssParameters;

/// Trait for algorithm-specific parameters
pub trait AlgorithmParameter: Sized {
    /// Parse from RawAlgorithmParameter
    fn parse(raw: &RawAlgorithmParameter) -> Result<Self>;

    /// Parse an explicit NULL. Most algorithms don't allow it.
    fn parse_null() -> Result<Self> {
        Err(Error::NullParameterNotSupported)
    }
}

/// Raw algorithm parameter wrapper
///
/// Wraps the ASN.1 Element so specific parameter types can be decoded on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAlgorithmParameter {
    element: Element,
}

impl RawAlgorithmParameter {
    /// Create a new RawAlgorithmParameter from an Element
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Get the inner Element
    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl From<Element> for RawAlgorithmParameter {
    fn from(element: Element) -> Self {
        Self::new(element)
    }
}

impl From<RawAlgorithmParameter> for Element {
    fn from(raw: RawAlgorithmParameter) -> Self {
        raw.element
    }
}

pub(crate) fn expect_integer(element: &Element, err: Error) -> Result<&Integer> {
    match element {
        Element::Integer(i) => Ok(i),
        _ => Err(err),
    }
}
