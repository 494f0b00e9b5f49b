use mitate::decoder::{DecodableFrom, Decoder};
use mitate::{Describe, Description};
use mitate_asn1::{BitString, Element, OctetString};
use mitate_pkix_types::AlgorithmIdentifier;

use super::error::{Error, Result};
use crate::key_attributes::{EmbeddedKey, key_attributes};

/*
RFC 5958 - Asymmetric Key Packages

OneAsymmetricKey ::= SEQUENCE {
    version                   Version,
    privateKeyAlgorithm       PrivateKeyAlgorithmIdentifier,
    privateKey                PrivateKey,
    attributes            [0] Attributes OPTIONAL,
    ...,
    [[2: publicKey        [1] PublicKey OPTIONAL ]],
    ...
}

PrivateKeyInfo ::= OneAsymmetricKey

Version ::= INTEGER { v1(0), v2(1) } (v1, ..., v2)

PrivateKey ::= OCTET STRING

PublicKey ::= BIT STRING
*/

/// PKCS#8 OneAsymmetricKey version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// Version 1 (no public key)
    V1 = 0,
    /// Version 2 (may carry the public key)
    V2 = 1,
}

impl DecodableFrom<Element> for Version {}

impl Decoder<Element, Version> for Element {
    type Error = Error;

    fn decode(&self) -> Result<Version> {
        let Element::Integer(int) = self else {
            return Err(Error::ExpectedInteger);
        };
        match int.to_i64() {
            Some(0) => Ok(Version::V1),
            Some(1) => Ok(Version::V2),
            _ => Err(Error::InvalidVersion),
        }
    }
}

/// PKCS#8 private key (RFC 5958 OneAsymmetricKey)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneAsymmetricKey {
    pub version: Version,
    pub private_key_algorithm: AlgorithmIdentifier,
    pub private_key: OctetString,
    /// Whether the [0] attributes set is present. Its contents are not read.
    pub has_attributes: bool,
    pub public_key: Option<BitString>,
}

impl DecodableFrom<Element> for OneAsymmetricKey {}

impl Decoder<Element, OneAsymmetricKey> for Element {
    type Error = Error;

    fn decode(&self) -> Result<OneAsymmetricKey> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence);
        };
        let [version, algorithm, private_key, rest @ ..] = elements.as_slice() else {
            return Err(Error::InvalidElementCount(elements.len()));
        };
        if rest.len() > 2 {
            return Err(Error::InvalidElementCount(elements.len()));
        }
        let version: Version = version.decode()?;
        let private_key_algorithm: AlgorithmIdentifier = algorithm.decode()?;
        let Element::OctetString(private_key) = private_key else {
            return Err(Error::ExpectedOctetString("privateKey"));
        };

        let mut has_attributes = false;
        let mut public_key = None;
        let mut last_slot = None;
        for element in rest {
            let Element::ContextSpecific(tagged) = element else {
                return Err(Error::UnexpectedElement(element.kind()));
            };
            if last_slot.is_some_and(|slot| slot >= tagged.slot()) {
                return Err(Error::UnexpectedElement(element.kind()));
            }
            last_slot = Some(tagged.slot());
            match tagged.slot() {
                0 => has_attributes = true,
                1 => {
                    if version != Version::V2 {
                        return Err(Error::PublicKeyRequiresV2);
                    }
                    // IMPLICIT BIT STRING: leading unused-bits octet
                    let Some([unused, bits @ ..]) = tagged.data() else {
                        return Err(Error::InvalidPublicKey);
                    };
                    if *unused > 7 {
                        return Err(Error::InvalidPublicKey);
                    }
                    public_key = Some(BitString::new(*unused, bits.to_vec()));
                }
                _ => return Err(Error::UnexpectedElement(element.kind())),
            }
        }

        Ok(OneAsymmetricKey {
            version,
            private_key_algorithm,
            private_key: private_key.clone(),
            has_attributes,
            public_key,
        })
    }
}

impl Describe for OneAsymmetricKey {
    fn describe(&self) -> Description {
        let key = EmbeddedKey::Private(self.private_key.as_bytes());
        Description::new("PKCS#8 private key")
            .with_attributes(key_attributes(&self.private_key_algorithm, key))
    }
}
