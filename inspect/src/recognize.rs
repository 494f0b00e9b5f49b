//! Maps a decoded ASN.1 tree to a known artifact shape.

use mitate::decoder::{DecodableFrom, Decoder};
use mitate::{Describe, Description};
use mitate_asn1::{ASN1Object, Element};
use mitate_der::Der;
use mitate_pkcs::PkixPublicKey;
use mitate_pkcs::dsa::DsaPrivateKey;
use mitate_pkcs::pkcs1::{RSAPrivateKey, RSAPublicKey};
use mitate_pkcs::pkcs8::{EncryptedPrivateKeyInfo, OneAsymmetricKey};
use mitate_pkcs::sec1::ECPrivateKey;
use mitate_x509::Certificate;

use crate::error::{Error, Result};
use crate::fallback;

/// How the DER bytes reached the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Binary,
    Base64,
}

type Recognizer = fn(&Element) -> Result<Description>;

// First match wins.
const RECOGNIZERS: [(&str, Recognizer); 8] = [
    ("PKCS#8 private key", recognize_as::<OneAsymmetricKey>),
    ("PKCS#8 encrypted private key", recognize_as::<EncryptedPrivateKeyInfo>),
    ("PKIX public key", recognize_as::<PkixPublicKey>),
    ("DSA private key", recognize_as::<DsaPrivateKey>),
    ("PKCS#1 private key", recognize_as::<RSAPrivateKey>),
    ("PKCS#1 public key", recognize_as::<RSAPublicKey>),
    ("EC private key", recognize_as::<ECPrivateKey>),
    ("x.509v3 certificate", recognize_as::<Certificate>),
];

fn recognize_as<T>(element: &Element) -> Result<Description>
where
    T: Describe + DecodableFrom<Element>,
    Element: Decoder<Element, T>,
    Error: From<<Element as Decoder<Element, T>>::Error>,
{
    let shape = <Element as Decoder<Element, T>>::decode(element)?;
    Ok(shape.describe())
}

/// Describes `element` as the first artifact shape it matches.
pub fn recognize(element: &Element) -> Result<Description> {
    for (shape, recognizer) in RECOGNIZERS {
        match recognizer(element) {
            Ok(description) => {
                tracing::trace!(shape, "recognized");
                return Ok(description);
            }
            Err(e) => tracing::debug!(shape, error = %e, "shape did not match"),
        }
    }
    Err(Error::UnrecognizedShape)
}

/// Describes valid DER, falling back to its outline when no shape matches.
pub(crate) fn describe_der(der: &Der, encoding: Encoding) -> Description {
    let object: std::result::Result<ASN1Object, _> = der.decode();
    let recognized = match object {
        Ok(object) => recognize(object.element()),
        Err(e) => Err(Error::Asn1(e)),
    };
    match recognized {
        Ok(description) => description,
        Err(e) => {
            tracing::debug!(error = %e, "describing DER outline");
            fallback::asn1(der, encoding)
        }
    }
}
