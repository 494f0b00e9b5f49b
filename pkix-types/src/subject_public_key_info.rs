//! Subject Public Key Info
//!
//! RFC 5280 Section 4.1.2.7
//!
//! ```asn1
//! SubjectPublicKeyInfo  ::=  SEQUENCE  {
//!     algorithm            AlgorithmIdentifier,
//!     subjectPublicKey     BIT STRING
//! }
//! ```

use mitate::decoder::{DecodableFrom, Decoder};
use mitate_asn1::{BitString, Element};

use crate::algorithm::AlgorithmIdentifier;
use crate::error::{Error, Result};

/// Subject Public Key Info
///
/// Contains the algorithm identifier and the public key itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectPublicKeyInfo {
    algorithm: AlgorithmIdentifier,
    subject_public_key: BitString,
}

impl SubjectPublicKeyInfo {
    pub fn new(algorithm: AlgorithmIdentifier, subject_public_key: BitString) -> Self {
        Self {
            algorithm,
            subject_public_key,
        }
    }

    pub fn algorithm(&self) -> &AlgorithmIdentifier {
        &self.algorithm
    }

    pub fn subject_public_key(&self) -> &BitString {
        &self.subject_public_key
    }
}

impl DecodableFrom<Element> for SubjectPublicKeyInfo {}

impl Decoder<Element, SubjectPublicKeyInfo> for Element {
    type Error = Error;

    fn decode(&self) -> Result<SubjectPublicKeyInfo> {
        let Element::Sequence(elements) = self else {
            return Err(Error::SubjectPublicKeyInfoExpectedSequence);
        };
        let [algorithm, subject_public_key] = elements.as_slice() else {
            return Err(Error::SubjectPublicKeyInfoInvalidElementCount(elements.len()));
        };
        let algorithm: AlgorithmIdentifier = algorithm.decode()?;
        let Element::BitString(subject_public_key) = subject_public_key else {
            return Err(Error::SubjectPublicKeyInfoExpectedBitString);
        };
        Ok(SubjectPublicKeyInfo::new(algorithm, subject_public_key.clone()))
    }
}

#[cfg(test)]
mod tests {
    use mitate_asn1::ASN1Object;
    use rstest::rstest;

    use super::*;
    use crate::algorithm::KeyAlgorithm;

    #[rstest]
    #[case::rsa(include_bytes!("../../testdata/der/rsa-512.pub").as_slice(), KeyAlgorithm::Rsa)]
    #[case::dsa(include_bytes!("../../testdata/der/dsa-1024.pub").as_slice(), KeyAlgorithm::Dsa)]
    #[case::ec(include_bytes!("../../testdata/der/prime256v1.pub").as_slice(), KeyAlgorithm::Ec)]
    #[case::ed25519(include_bytes!("../../testdata/der/ed25519.pub").as_slice(), KeyAlgorithm::Ed25519)]
    fn test_decode_spki(#[case] der: &[u8], #[case] expected: KeyAlgorithm) {
        let object = ASN1Object::try_from(der).unwrap();
        let spki: SubjectPublicKeyInfo = object.element().decode().unwrap();
        assert_eq!(Some(expected), spki.algorithm().key_algorithm());
        assert!(!spki.subject_public_key().as_bytes().is_empty());
    }

    #[rstest]
    #[case::not_sequence(Element::Null)]
    #[case::one_element(Element::Sequence(vec![Element::Null]))]
    #[case::key_not_bit_string(Element::Sequence(vec![
        Element::Sequence(vec![Element::ObjectIdentifier("1.3.101.112".parse().unwrap())]),
        Element::Null,
    ]))]
    fn test_decode_spki_rejects(#[case] element: Element) {
        let result: Result<SubjectPublicKeyInfo> = element.decode();
        assert!(result.is_err());
    }
}
