use mitate::decoder::{DecodableFrom, Decoder};
use mitate_asn1::{Element, OctetString};

use super::error::{Error, Kind, Result};
use super::{Extension, parse_value};

/*
RFC 5280 Section 4.2.1.1
AuthorityKeyIdentifier ::= SEQUENCE {
    keyIdentifier             [0] KeyIdentifier           OPTIONAL,
    authorityCertIssuer       [1] GeneralNames            OPTIONAL,
    authorityCertSerialNumber [2] CertificateSerialNumber OPTIONAL
}
*/

/// Only the key identifier is kept; issuer and serial are checked for
/// their tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityKeyIdentifier {
    pub key_identifier: Option<OctetString>,
}

impl Extension for AuthorityKeyIdentifier {
    const OID: &'static str = "2.5.29.35";

    fn parse(value: &OctetString) -> Result<Self> {
        parse_value(value, Kind::AuthorityKeyIdentifier)?.decode()
    }
}

impl DecodableFrom<Element> for AuthorityKeyIdentifier {}

impl Decoder<Element, AuthorityKeyIdentifier> for Element {
    type Error = Error;

    fn decode(&self) -> Result<AuthorityKeyIdentifier> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence(Kind::AuthorityKeyIdentifier));
        };
        let mut key_identifier = None;
        for element in elements {
            let Element::ContextSpecific(tagged) = element else {
                return Err(Error::UnexpectedElement(Kind::AuthorityKeyIdentifier, element.kind()));
            };
            match tagged.slot() {
                0 => {
                    let data = tagged
                        .data()
                        .ok_or(Error::ExpectedOctetString(Kind::AuthorityKeyIdentifier))?;
                    key_identifier = Some(OctetString::from(data));
                }
                1 | 2 => {}
                slot => {
                    return Err(Error::UnexpectedContextTag {
                        kind: Kind::AuthorityKeyIdentifier,
                        slot,
                    });
                }
            }
        }
        Ok(AuthorityKeyIdentifier { key_identifier })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::key_id(vec![0x30, 0x05, 0x80, 0x03, 0x5e, 0xd7, 0xbe], Some("5ed7be"))]
    #[case::issuer_and_serial_only(vec![0x30, 0x05, 0xa1, 0x00, 0x82, 0x01, 0x01], None)]
    #[case::empty(vec![0x30, 0x00], None)]
    fn test_parse_authority_key_identifier(#[case] der: Vec<u8>, #[case] expected: Option<&str>) {
        let aki = AuthorityKeyIdentifier::parse(&der.into()).unwrap();
        assert_eq!(expected.map(str::to_string), aki.key_identifier.map(|id| id.to_string()));
    }

    #[test]
    fn test_parse_authority_key_identifier_rejects_unknown_tag() {
        let result = AuthorityKeyIdentifier::parse(&vec![0x30, 0x03, 0x83, 0x01, 0x00].into());
        assert!(matches!(result, Err(Error::UnexpectedContextTag { slot: 3, .. })));
    }
}
