use mitate::decoder::{DecodableFrom, Decoder};
use mitate_asn1::{Element, OctetString};

use super::error::{Error, Kind, Result};
use super::{Extension, parse_value};

/*
RFC 5280 Section 4.2.1.3
KeyUsage ::= BIT STRING {
    digitalSignature        (0),
    nonRepudiation          (1), -- renamed to contentCommitment
    keyEncipherment         (2),
    dataEncipherment        (3),
    keyAgreement            (4),
    keyCertSign             (5),
    cRLSign                 (6),
    encipherOnly            (7),
    decipherOnly            (8)
}
*/

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyUsage {
    pub digital_signature: bool,
    pub content_commitment: bool,
    pub key_encipherment: bool,
    pub data_encipherment: bool,
    pub key_agreement: bool,
    pub key_cert_sign: bool,
    pub crl_sign: bool,
    pub encipher_only: bool,
    pub decipher_only: bool,
}

impl KeyUsage {
    /// Names of the asserted usages in bit order.
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.digital_signature, "digitalSignature"),
            (self.content_commitment, "contentCommitment"),
            (self.key_encipherment, "keyEncipherment"),
            (self.data_encipherment, "dataEncipherment"),
            (self.key_agreement, "keyAgreement"),
            (self.key_cert_sign, "keyCertSign"),
            (self.crl_sign, "cRLSign"),
            (self.encipher_only, "encipherOnly"),
            (self.decipher_only, "decipherOnly"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

impl Extension for KeyUsage {
    const OID: &'static str = "2.5.29.15";

    fn parse(value: &OctetString) -> Result<Self> {
        parse_value(value, Kind::KeyUsage)?.decode()
    }
}

impl DecodableFrom<Element> for KeyUsage {}

impl Decoder<Element, KeyUsage> for Element {
    type Error = Error;

    fn decode(&self) -> Result<KeyUsage> {
        let Element::BitString(bits) = self else {
            return Err(Error::ExpectedBitString(Kind::KeyUsage));
        };
        Ok(KeyUsage {
            digital_signature: bits.is_set(0),
            content_commitment: bits.is_set(1),
            key_encipherment: bits.is_set(2),
            data_encipherment: bits.is_set(3),
            key_agreement: bits.is_set(4),
            key_cert_sign: bits.is_set(5),
            crl_sign: bits.is_set(6),
            encipher_only: bits.is_set(7),
            decipher_only: bits.is_set(8),
        })
    }
}
