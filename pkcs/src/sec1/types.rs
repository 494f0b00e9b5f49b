use mitate::decoder::{DecodableFrom, Decoder};
use mitate::{Describe, Description};
use mitate_asn1::{BitString, Element, OctetString};
use mitate_pkix_types::algorithm::parameters::EcParameters;

use super::error::{Error, Result};

/*
RFC 5915 - Elliptic Curve Private Key Structure

ECPrivateKey ::= SEQUENCE {
    version        INTEGER { ecPrivkeyVer1(1) } (ecPrivkeyVer1),
    privateKey     OCTET STRING,
    parameters [0] ECParameters {{ NamedCurve }} OPTIONAL,
    publicKey  [1] BIT STRING OPTIONAL
}
*/

/// SEC1 EC Private Key structure (RFC 5915)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ECPrivateKey {
    pub private_key: OctetString,
    /// [0], named or explicit. `None` also when the parameters did not
    /// decode, so the key is still described.
    pub parameters: Option<EcParameters>,
    /// [1]
    pub public_key: Option<BitString>,
}

impl DecodableFrom<Element> for ECPrivateKey {}

impl Decoder<Element, ECPrivateKey> for Element {
    type Error = Error;

    fn decode(&self) -> Result<ECPrivateKey> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence);
        };
        if !(2..=4).contains(&elements.len()) {
            return Err(Error::InvalidElementCount(elements.len()));
        }
        match &elements[0] {
            Element::Integer(v) if v.to_i64() == Some(1) => {}
            Element::Integer(_) => return Err(Error::InvalidVersion),
            _ => return Err(Error::ExpectedInteger),
        }
        let Element::OctetString(private_key) = &elements[1] else {
            return Err(Error::ExpectedOctetString);
        };

        let mut parameters = None;
        let mut public_key = None;
        let mut last_slot = None;
        for element in &elements[2..] {
            let Element::ContextSpecific(tagged) = element else {
                return Err(Error::UnexpectedElement(element.kind()));
            };
            // [0] before [1], each at most once
            if last_slot.is_some_and(|slot| slot >= tagged.slot()) {
                return Err(Error::UnexpectedElement(element.kind()));
            }
            last_slot = Some(tagged.slot());
            match tagged.slot() {
                0 => {
                    let inner = tagged.explicit().ok_or(Error::InvalidParameters)?;
                    let decoded: mitate_pkix_types::Result<EcParameters> = inner.decode();
                    match decoded {
                        Ok(params) => parameters = Some(params),
                        Err(e) => tracing::debug!(error = %e, "EC parameters did not decode"),
                    }
                }
                1 => match tagged.explicit() {
                    Some(Element::BitString(bits)) => public_key = Some(bits.clone()),
                    _ => return Err(Error::InvalidPublicKey),
                },
                _ => return Err(Error::UnexpectedElement(element.kind())),
            }
        }

        Ok(ECPrivateKey {
            private_key: private_key.clone(),
            parameters,
            public_key,
        })
    }
}

impl Describe for ECPrivateKey {
    fn describe(&self) -> Description {
        let curve = self
            .parameters
            .as_ref()
            .map(EcParameters::attributes)
            .unwrap_or_default();
        Description::new("EC private key")
            .with("Algorithm", "ECDSA")
            .with_attributes(curve)
    }
}
