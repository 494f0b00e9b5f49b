use mitate_asn1::{Element, OctetString};

use super::error::{Error, Kind, Result};
use super::{Extension, parse_value};

/*
RFC 5280 Section 4.2.1.2
SubjectKeyIdentifier ::= KeyIdentifier
KeyIdentifier ::= OCTET STRING
*/

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectKeyIdentifier {
    pub key_identifier: OctetString,
}

impl Extension for SubjectKeyIdentifier {
    const OID: &'static str = "2.5.29.14";

    fn parse(value: &OctetString) -> Result<Self> {
        match parse_value(value, Kind::SubjectKeyIdentifier)? {
            Element::OctetString(key_identifier) => Ok(SubjectKeyIdentifier { key_identifier }),
            _ => Err(Error::ExpectedOctetString(Kind::SubjectKeyIdentifier)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subject_key_identifier() {
        let ski = SubjectKeyIdentifier::parse(&vec![0x04, 0x03, 0xdc, 0x76, 0x0c].into()).unwrap();
        assert_eq!("dc760c", ski.key_identifier.to_string());
    }

    #[test]
    fn test_parse_subject_key_identifier_rejects_sequence() {
        let result = SubjectKeyIdentifier::parse(&vec![0x30, 0x00].into());
        assert!(result.is_err());
    }
}
