use mitate::decoder::{DecodableFrom, Decoder};
use mitate_asn1::{Element, OctetString};

use super::error::{Error, Kind, Result};
use super::{Extension, parse_value};

/*
RFC 5280 Section 4.2.1.9
BasicConstraints ::= SEQUENCE {
    cA                      BOOLEAN DEFAULT FALSE,
    pathLenConstraint       INTEGER (0..MAX) OPTIONAL
}
*/

/// Basic Constraints extension ([RFC 5280 Section 4.2.1.9](https://datatracker.ietf.org/doc/html/rfc5280#section-4.2.1.9)).
///
/// Identifies whether the subject of the certificate is a CA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicConstraints {
    /// Whether this certificate represents a CA
    pub ca: bool,
    /// Optional maximum path length for certificate chains
    pub path_len_constraint: Option<u32>,
}

impl Extension for BasicConstraints {
    /// OID for BasicConstraints extension (2.5.29.19)
    const OID: &'static str = "2.5.29.19";

    fn parse(value: &OctetString) -> Result<Self> {
        parse_value(value, Kind::BasicConstraints)?.decode()
    }
}

impl DecodableFrom<Element> for BasicConstraints {}

impl Decoder<Element, BasicConstraints> for Element {
    type Error = Error;

    fn decode(&self) -> Result<BasicConstraints> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence(Kind::BasicConstraints));
        };
        let (ca, rest) = match elements.as_slice() {
            [Element::Boolean(ca), rest @ ..] => (*ca, rest),
            rest => (false, rest),
        };
        let path_len_constraint = match rest {
            [] => None,
            [Element::Integer(len)] => Some(len.to_u32().ok_or(Error::PathLenOutOfRange)?),
            [Element::Integer(_), extra, ..] | [extra, ..] => {
                return Err(Error::UnexpectedElement(Kind::BasicConstraints, extra.kind()));
            }
        };
        Ok(BasicConstraints {
            ca,
            path_len_constraint,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::end_entity(vec![0x30, 0x00], false, None)]
    #[case::ca(vec![0x30, 0x03, 0x01, 0x01, 0xff], true, None)]
    #[case::ca_with_path_len(vec![0x30, 0x06, 0x01, 0x01, 0xff, 0x02, 0x01, 0x00], true, Some(0))]
    fn test_parse_basic_constraints(
        #[case] der: Vec<u8>,
        #[case] ca: bool,
        #[case] path_len_constraint: Option<u32>,
    ) {
        let bc = BasicConstraints::parse(&der.into()).unwrap();
        assert_eq!(
            BasicConstraints {
                ca,
                path_len_constraint
            },
            bc
        );
    }

    #[rstest]
    #[case::not_sequence(vec![0x05, 0x00])]
    #[case::negative_path_len(vec![0x30, 0x06, 0x01, 0x01, 0xff, 0x02, 0x01, 0xff])]
    #[case::trailing(vec![0x30, 0x05, 0x01, 0x01, 0xff, 0x05, 0x00])]
    fn test_parse_basic_constraints_rejects(#[case] der: Vec<u8>) {
        assert!(BasicConstraints::parse(&der.into()).is_err());
    }
}
