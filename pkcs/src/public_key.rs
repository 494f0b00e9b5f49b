//! PKIX public keys: a bare SubjectPublicKeyInfo, as written by
//! `openssl pkey -pubout -outform DER`.

use mitate::decoder::{DecodableFrom, Decoder};
use mitate::{Describe, Description};
use mitate_asn1::Element;
use mitate_pkix_types::SubjectPublicKeyInfo;

use crate::error::Result;
use crate::key_attributes::{EmbeddedKey, key_attributes};

/// A SubjectPublicKeyInfo that stands on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PkixPublicKey(pub SubjectPublicKeyInfo);

impl PkixPublicKey {
    pub fn spki(&self) -> &SubjectPublicKeyInfo {
        &self.0
    }
}

impl From<SubjectPublicKeyInfo> for PkixPublicKey {
    fn from(spki: SubjectPublicKeyInfo) -> Self {
        PkixPublicKey(spki)
    }
}

impl DecodableFrom<Element> for PkixPublicKey {}

impl Decoder<Element, PkixPublicKey> for Element {
    type Error = crate::error::Error;

    fn decode(&self) -> Result<PkixPublicKey> {
        let spki: SubjectPublicKeyInfo = self.decode()?;
        Ok(PkixPublicKey(spki))
    }
}

impl Describe for PkixPublicKey {
    fn describe(&self) -> Description {
        let key = EmbeddedKey::Public(self.0.subject_public_key().as_bytes());
        Description::new("PKIX public key").with_attributes(key_attributes(self.0.algorithm(), key))
    }
}

#[cfg(test)]
mod tests {
    use mitate::Attribute;
    use mitate_asn1::ASN1Object;
    use rstest::rstest;

    use super::*;

    fn decode(der: &[u8]) -> PkixPublicKey {
        ASN1Object::try_from(der).unwrap().element().decode().unwrap()
    }

    #[rstest]
    #[case::rsa(
        include_bytes!("../../testdata/der/rsa-512.pub").as_slice(),
        vec![("Algorithm", "RSA"), ("Size", "512 bits")]
    )]
    #[case::dsa(
        include_bytes!("../../testdata/der/dsa-1024.pub").as_slice(),
        vec![("Algorithm", "DSA"), ("Size", "1024 bits")]
    )]
    #[case::ec(
        include_bytes!("../../testdata/der/prime256v1.pub").as_slice(),
        vec![("Algorithm", "ECDSA"), ("Curve", "P-256 (secp256r1, prime256v1)")]
    )]
    #[case::ed25519(
        include_bytes!("../../testdata/der/ed25519.pub").as_slice(),
        vec![("Algorithm", "EdDSA"), ("Curve", "Ed25519")]
    )]
    #[case::secp384r1_explicit(
        include_bytes!("../../testdata/der/secp384r1-explicit.pub").as_slice(),
        vec![
            ("Algorithm", "ECDSA"),
            ("Field type", "prime field"),
            ("Prime size", "384 bits"),
            ("Curve (inferred)", "P-384 (secp384r1)"),
        ]
    )]
    fn test_describe_pkix_public_key(#[case] der: &[u8], #[case] expected: Vec<(&str, &str)>) {
        let described = decode(der).describe();
        assert_eq!("PKIX public key", described.description);
        let expected: Vec<Attribute> = expected
            .into_iter()
            .map(|(name, value)| Attribute::new(name, value))
            .collect();
        assert_eq!(expected, described.attributes);
    }

    #[test]
    fn test_pkcs1_public_key_is_not_pkix() {
        let der = include_bytes!("../../testdata/der/rsa-512-pkcs1.pub");
        let element = ASN1Object::try_from(der.as_slice()).unwrap().into_element();
        let result: Result<PkixPublicKey> = element.decode();
        assert!(result.is_err());
    }
}
