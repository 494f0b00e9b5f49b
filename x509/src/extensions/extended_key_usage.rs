use mitate::decoder::{DecodableFrom, Decoder};
use mitate_asn1::{Element, ObjectIdentifier, OctetString};
use mitate_pkix_types::lookup;

use super::error::{Error, Kind, Result};
use super::{Extension, parse_value};

/*
RFC 5280 Section 4.2.1.12
ExtendedKeyUsage ::= SEQUENCE SIZE (1..MAX) OF KeyPurposeId
KeyPurposeId ::= OBJECT IDENTIFIER
*/

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedKeyUsage {
    pub purposes: Vec<ObjectIdentifier>,
}

impl ExtendedKeyUsage {
    pub const ANY: &'static str = "2.5.29.37.0";
    /// TLS WWW server authentication
    pub const SERVER_AUTH: &'static str = "1.3.6.1.5.5.7.3.1";
    /// TLS WWW client authentication
    pub const CLIENT_AUTH: &'static str = "1.3.6.1.5.5.7.3.2";
    pub const CODE_SIGNING: &'static str = "1.3.6.1.5.5.7.3.3";
    pub const EMAIL_PROTECTION: &'static str = "1.3.6.1.5.5.7.3.4";
    pub const IPSEC_END_SYSTEM: &'static str = "1.3.6.1.5.5.7.3.5";
    pub const IPSEC_TUNNEL: &'static str = "1.3.6.1.5.5.7.3.6";
    pub const IPSEC_USER: &'static str = "1.3.6.1.5.5.7.3.7";
    pub const TIME_STAMPING: &'static str = "1.3.6.1.5.5.7.3.8";
    pub const OCSP_SIGNING: &'static str = "1.3.6.1.5.5.7.3.9";
    pub const MS_SGC: &'static str = "1.3.6.1.4.1.311.10.3.3";
    pub const NS_SGC: &'static str = "2.16.840.1.113730.4.1";
    pub const MS_CODE_COM: &'static str = "1.3.6.1.4.1.311.2.1.22";
    pub const MS_KERNEL_CODE_SIGNING: &'static str = "1.3.6.1.4.1.311.61.1.1";

    /// Short names in encoding order; unknown purposes are dotted.
    pub fn names(&self) -> Vec<String> {
        self.purposes
            .iter()
            .map(|oid| {
                lookup(PURPOSE_NAMES, oid)
                    .map(str::to_string)
                    .unwrap_or_else(|| oid.to_string())
            })
            .collect()
    }
}

static PURPOSE_NAMES: &[(&str, &str)] = &[
    (ExtendedKeyUsage::ANY, "any"),
    (ExtendedKeyUsage::SERVER_AUTH, "serverAuth"),
    (ExtendedKeyUsage::CLIENT_AUTH, "clientAuth"),
    (ExtendedKeyUsage::CODE_SIGNING, "codeSigning"),
    (ExtendedKeyUsage::EMAIL_PROTECTION, "emailProtection"),
    (ExtendedKeyUsage::IPSEC_END_SYSTEM, "ipsecEndSystem"),
    (ExtendedKeyUsage::IPSEC_TUNNEL, "ipsecTunnel"),
    (ExtendedKeyUsage::IPSEC_USER, "ipsecUser"),
    (ExtendedKeyUsage::TIME_STAMPING, "timeStamping"),
    (ExtendedKeyUsage::OCSP_SIGNING, "OCSPSigning"),
    (ExtendedKeyUsage::MS_SGC, "msSGC"),
    (ExtendedKeyUsage::NS_SGC, "nsSGC"),
    (ExtendedKeyUsage::MS_CODE_COM, "msCodeCom"),
    (ExtendedKeyUsage::MS_KERNEL_CODE_SIGNING, "msKernelCodeSigning"),
];

impl Extension for ExtendedKeyUsage {
    const OID: &'static str = "2.5.29.37";

    fn parse(value: &OctetString) -> Result<Self> {
        parse_value(value, Kind::ExtendedKeyUsage)?.decode()
    }
}

impl DecodableFrom<Element> for ExtendedKeyUsage {}

impl Decoder<Element, ExtendedKeyUsage> for Element {
    type Error = Error;

    fn decode(&self) -> Result<ExtendedKeyUsage> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence(Kind::ExtendedKeyUsage));
        };
        if elements.is_empty() {
            return Err(Error::EmptySequence(Kind::ExtendedKeyUsage));
        }
        let purposes = elements
            .iter()
            .map(|elem| match elem {
                Element::ObjectIdentifier(oid) => Ok(oid.clone()),
                _ => Err(Error::ExpectedOid(Kind::ExtendedKeyUsage)),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ExtendedKeyUsage { purposes })
    }
}
