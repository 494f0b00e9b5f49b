use mitate::decoder::{DecodableFrom, Decoder};
use mitate_asn1::{Element, OctetString};

use super::error::{Error, Kind, Result};
use super::general_name::GeneralName;
use super::{Extension, parse_value};

/*
RFC 5280 Section 4.2.1.6
SubjectAltName ::= GeneralNames
GeneralNames ::= SEQUENCE SIZE (1..MAX) OF GeneralName
*/

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectAltName {
    pub names: Vec<GeneralName>,
}

impl SubjectAltName {
    pub fn dns_names(&self) -> Vec<String> {
        self.collect(|name| match name {
            GeneralName::DnsName(s) => Some(s.clone()),
            _ => None,
        })
    }

    pub fn email_addresses(&self) -> Vec<String> {
        self.collect(|name| match name {
            GeneralName::Rfc822Name(s) => Some(s.clone()),
            _ => None,
        })
    }

    pub fn ip_addresses(&self) -> Vec<String> {
        self.collect(|name| match name {
            GeneralName::IpAddress(addr) => Some(addr.to_string()),
            _ => None,
        })
    }

    pub fn uris(&self) -> Vec<String> {
        self.collect(|name| match name {
            GeneralName::Uri(s) => Some(s.clone()),
            _ => None,
        })
    }

    fn collect(&self, pick: impl Fn(&GeneralName) -> Option<String>) -> Vec<String> {
        self.names.iter().filter_map(pick).collect()
    }
}

impl Extension for SubjectAltName {
    const OID: &'static str = "2.5.29.17";

    fn parse(value: &OctetString) -> Result<Self> {
        parse_value(value, Kind::SubjectAltName)?.decode()
    }
}

impl DecodableFrom<Element> for SubjectAltName {}

impl Decoder<Element, SubjectAltName> for Element {
    type Error = Error;

    fn decode(&self) -> Result<SubjectAltName> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence(Kind::SubjectAltName));
        };
        if elements.is_empty() {
            return Err(Error::EmptySequence(Kind::SubjectAltName));
        }
        let names = elements
            .iter()
            .map(|elem| elem.decode())
            .collect::<Result<Vec<GeneralName>>>()?;
        Ok(SubjectAltName { names })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subject_alt_name() {
        let der = vec![
            0x30, 0x1f, //
            0x82, 0x09, b'l', b'o', b'c', b'a', b'l', b'h', b'o', b's', b't', //
            0x87, 0x04, 127, 0, 0, 1, //
            0x81, 0x0c, b'a', b'd', b'm', b'i', b'n', b'@', b'e', b'x', b'.', b'c', b'o', b'm',
        ];
        let san = SubjectAltName::parse(&der.into()).unwrap();
        assert_eq!(vec!["localhost"], san.dns_names());
        assert_eq!(vec!["127.0.0.1"], san.ip_addresses());
        assert_eq!(vec!["admin@ex.com"], san.email_addresses());
        assert!(san.uris().is_empty());
    }

    #[test]
    fn test_parse_subject_alt_name_rejects_empty() {
        let result = SubjectAltName::parse(&vec![0x30, 0x00].into());
        assert!(matches!(result, Err(Error::EmptySequence(Kind::SubjectAltName))));
    }
}
