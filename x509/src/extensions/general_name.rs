use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use mitate::decoder::{DecodableFrom, Decoder};
use mitate_asn1::{Element, Tagged};
use mitate_pkix_types::Name;

use super::error::{Error, Kind, Result};

/*
RFC 5280 Section 4.2.1.6
GeneralName ::= CHOICE {
    otherName                 [0] OtherName,
    rfc822Name                [1] IA5String,
    dNSName                   [2] IA5String,
    x400Address               [3] ORAddress,
    directoryName             [4] Name,
    ediPartyName              [5] EDIPartyName,
    uniformResourceIdentifier [6] IA5String,
    iPAddress                 [7] OCTET STRING,
    registeredID              [8] OBJECT IDENTIFIER
}
*/

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneralName {
    /// rfc822Name [1] - Email address
    Rfc822Name(String),
    /// dNSName [2]
    DnsName(String),
    /// directoryName [4]
    DirectoryName(Name),
    /// uniformResourceIdentifier [6]
    Uri(String),
    /// iPAddress [7]
    IpAddress(IpAddr),
    /// otherName, x400Address, ediPartyName and registeredID are kept as
    /// their tag only.
    Other(u32),
}

impl fmt::Display for GeneralName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneralName::Rfc822Name(s) | GeneralName::DnsName(s) | GeneralName::Uri(s) => {
                write!(f, "{}", s)
            }
            GeneralName::DirectoryName(name) => write!(f, "{}", name),
            GeneralName::IpAddress(addr) => write!(f, "{}", addr),
            GeneralName::Other(slot) => write!(f, "[{}]", slot),
        }
    }
}

fn ia5(tagged: &Tagged, field: &'static str) -> Result<String> {
    let data = tagged
        .data()
        .ok_or(Error::UnexpectedElement(Kind::GeneralName, "constructed"))?;
    if !data.is_ascii() {
        return Err(Error::NotIa5String(field));
    }
    Ok(data.iter().map(|b| char::from(*b)).collect())
}

impl DecodableFrom<Element> for GeneralName {}

impl Decoder<Element, GeneralName> for Element {
    type Error = Error;

    fn decode(&self) -> Result<GeneralName> {
        let Element::ContextSpecific(tagged) = self else {
            return Err(Error::UnexpectedElement(Kind::GeneralName, self.kind()));
        };
        match tagged.slot() {
            1 => Ok(GeneralName::Rfc822Name(ia5(tagged, "rfc822Name")?)),
            2 => Ok(GeneralName::DnsName(ia5(tagged, "dNSName")?)),
            4 => {
                let inner = tagged
                    .explicit()
                    .ok_or(Error::ExpectedSequence(Kind::GeneralName))?;
                let name: mitate_pkix_types::Result<Name> = inner.decode();
                name.map(GeneralName::DirectoryName)
                    .map_err(|_| Error::ExpectedSequence(Kind::GeneralName))
            }
            6 => Ok(GeneralName::Uri(ia5(tagged, "uniformResourceIdentifier")?)),
            7 => {
                let data = tagged
                    .data()
                    .ok_or(Error::ExpectedOctetString(Kind::GeneralName))?;
                let addr = if let Ok(v4) = <[u8; 4]>::try_from(data) {
                    IpAddr::V4(Ipv4Addr::from(v4))
                } else if let Ok(v6) = <[u8; 16]>::try_from(data) {
                    IpAddr::V6(Ipv6Addr::from(v6))
                } else {
                    return Err(Error::InvalidIpAddressLength(data.len()));
                };
                Ok(GeneralName::IpAddress(addr))
            }
            slot @ (0 | 3 | 5 | 8) => Ok(GeneralName::Other(slot)),
            slot => Err(Error::UnexpectedContextTag {
                kind: Kind::GeneralName,
                slot,
            }),
        }
    }
}
