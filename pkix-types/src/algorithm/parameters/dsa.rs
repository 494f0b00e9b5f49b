//! DSA Parameters
//!
//! Defined in [RFC 3279 Section 2.3.2](https://datatracker.ietf.org/doc/html/rfc3279#section-2.3.2)

use mitate_asn1::{Element, Integer};

use super::{AlgorithmParameter, RawAlgorithmParameter, expect_integer};
use crate::error::{Error, Result};

/// DSA Parameters
///
/// ```asn1
/// Dss-Parms ::= SEQUENCE {
///     p   INTEGER,
///     q   INTEGER,
///     g   INTEGER
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsaParameters {
    /// Prime modulus p
    pub p: Integer,
    /// Prime divisor q (q divides p-1)
    pub q: Integer,
    /// Generator g
    pub g: Integer,
}

impl DsaParameters {
    pub fn new(p: Integer, q: Integer, g: Integer) -> Self {
        Self { p, q, g }
    }

    /// Key size in bits, taken from the prime modulus.
    pub fn size_bits(&self) -> usize {
        self.p.size_bits()
    }
}

impl AlgorithmParameter for DsaParameters {
    fn parse(raw: &RawAlgorithmParameter) -> Result<Self> {
        raw.try_into()
    }
}

impl TryFrom<&RawAlgorithmParameter> for DsaParameters {
    type Error = Error;

    fn try_from(raw: &RawAlgorithmParameter) -> Result<Self> {
        let Element::Sequence(elements) = raw.element() else {
            return Err(Error::InvalidDsaParameter("Dss-Parms must be a SEQUENCE"));
        };
        let [p, q, g] = elements.as_slice() else {
            return Err(Error::InvalidDsaParameter("Dss-Parms must have 3 elements"));
        };
        Ok(Self {
            p: expect_integer(p, Error::InvalidDsaParameter("p must be an INTEGER"))?.clone(),
            q: expect_integer(q, Error::InvalidDsaParameter("q must be an INTEGER"))?.clone(),
            g: expect_integer(g, Error::InvalidDsaParameter("g must be an INTEGER"))?.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_dsa_parameters() {
        let raw = RawAlgorithmParameter::new(Element::Sequence(vec![
            Element::Integer(Integer::from(0xfb_i64)),
            Element::Integer(Integer::from(0x0d_i64)),
            Element::Integer(Integer::from(2_i64)),
        ]));
        let params = DsaParameters::parse(&raw).unwrap();
        assert_eq!(Integer::from(0x0d_i64), params.q);
        assert_eq!(8, params.size_bits());
    }

    #[rstest]
    #[case::not_sequence(Element::Null)]
    #[case::too_few(Element::Sequence(vec![Element::Integer(Integer::from(1_i64))]))]
    #[case::not_integer(Element::Sequence(vec![
        Element::Integer(Integer::from(1_i64)),
        Element::Null,
        Element::Integer(Integer::from(1_i64)),
    ]))]
    fn test_dsa_parameters_rejects(#[case] element: Element) {
        let raw = RawAlgorithmParameter::new(element);
        assert!(DsaParameters::parse(&raw).is_err());
    }

    #[test]
    fn test_dsa_parameters_null() {
        assert!(DsaParameters::parse_null().is_err());
    }
}
