//! Attributes shared by every key description: `Algorithm`, then `Size` or
//! the curve attributes.

use mitate::Attribute;
use mitate::decoder::Decoder;
use mitate_asn1::ASN1Object;
use mitate_pkix_types::algorithm::parameters::{DsaParameters, EcParameters};
use mitate_pkix_types::{AlgorithmIdentifier, KeyAlgorithm};

use crate::pkcs1::{RSAPrivateKey, RSAPublicKey};

/// The key material that accompanies an algorithm identifier.
#[derive(Debug, Clone, Copy)]
pub enum EmbeddedKey<'a> {
    /// Contents of a PKCS#8 privateKey OCTET STRING.
    Private(&'a [u8]),
    /// Contents of a SubjectPublicKeyInfo BIT STRING.
    Public(&'a [u8]),
}

/// Describes the key an [`AlgorithmIdentifier`] names. Sizes and curves that
/// can't be recovered are left out rather than failing the whole key.
pub fn key_attributes(algorithm: &AlgorithmIdentifier, key: EmbeddedKey<'_>) -> Vec<Attribute> {
    let Some(kind) = algorithm.key_algorithm() else {
        return vec![Attribute::new("Algorithm", algorithm.algorithm().to_string())];
    };
    let mut attributes = vec![Attribute::new("Algorithm", kind.name())];
    match kind {
        KeyAlgorithm::Rsa | KeyAlgorithm::RsaPss => {
            if let Some(bits) = rsa_size(key) {
                attributes.push(size_attribute(bits));
            }
        }
        KeyAlgorithm::Dsa => match algorithm.parameter::<DsaParameters>() {
            Ok(Some(params)) => attributes.push(size_attribute(params.size_bits())),
            Ok(None) => {}
            Err(e) => tracing::debug!(error = %e, "DSA parameters did not decode"),
        },
        KeyAlgorithm::Ec => match algorithm.parameter::<EcParameters>() {
            Ok(Some(params)) => attributes.extend(params.attributes()),
            Ok(None) => {}
            Err(e) => tracing::debug!(error = %e, "EC parameters did not decode"),
        },
        KeyAlgorithm::Ed25519 | KeyAlgorithm::Ed448 | KeyAlgorithm::X25519 | KeyAlgorithm::X448 => {
            if let Some(curve) = kind.implied_curve() {
                attributes.push(Attribute::new("Curve", curve));
            }
        }
    }
    attributes
}

pub(crate) fn size_attribute(bits: usize) -> Attribute {
    Attribute::new("Size", format!("{} bits", bits))
}

fn rsa_size(key: EmbeddedKey<'_>) -> Option<usize> {
    let bytes = match key {
        EmbeddedKey::Private(bytes) | EmbeddedKey::Public(bytes) => bytes,
    };
    let element = match ASN1Object::try_from(bytes) {
        Ok(object) => object.into_element(),
        Err(e) => {
            tracing::debug!(error = %e, "embedded RSA key is not DER");
            return None;
        }
    };
    let size = match key {
        EmbeddedKey::Private(_) => {
            let key: crate::pkcs1::Result<RSAPrivateKey> = element.decode();
            key.map(|k| k.size_bits())
        }
        EmbeddedKey::Public(_) => {
            let key: crate::pkcs1::Result<RSAPublicKey> = element.decode();
            key.map(|k| k.size_bits())
        }
    };
    match size {
        Ok(bits) => Some(bits),
        Err(e) => {
            tracing::debug!(error = %e, "embedded RSA key did not decode");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use mitate_asn1::{Element, ObjectIdentifier};
    use mitate_pkix_types::AlgorithmParameters;
    use mitate_pkix_types::algorithm::RawAlgorithmParameter;
    use rstest::rstest;

    use super::*;

    fn algorithm(dotted: &str) -> AlgorithmIdentifier {
        AlgorithmIdentifier::new(ObjectIdentifier::from_str(dotted).unwrap())
    }

    #[test]
    fn test_unknown_algorithm_is_dotted() {
        assert_eq!(
            vec![Attribute::new("Algorithm", "1.2.3.4")],
            key_attributes(&algorithm("1.2.3.4"), EmbeddedKey::Public(&[]))
        );
    }

    #[rstest]
    #[case(AlgorithmIdentifier::OID_ED25519, "EdDSA", "Ed25519")]
    #[case(AlgorithmIdentifier::OID_ED448, "EdDSA", "Ed448")]
    #[case(AlgorithmIdentifier::OID_X25519, "ECDH", "X25519")]
    #[case(AlgorithmIdentifier::OID_X448, "ECDH", "X448")]
    fn test_implied_curve(#[case] dotted: &str, #[case] name: &str, #[case] curve: &str) {
        assert_eq!(
            vec![Attribute::new("Algorithm", name), Attribute::new("Curve", curve)],
            key_attributes(&algorithm(dotted), EmbeddedKey::Public(&[]))
        );
    }

    #[test]
    fn test_rsa_without_decodable_key_has_no_size() {
        let alg = AlgorithmIdentifier::new_with_params(
            ObjectIdentifier::from_str(AlgorithmIdentifier::OID_RSA_ENCRYPTION).unwrap(),
            AlgorithmParameters::Null,
        );
        assert_eq!(
            vec![Attribute::new("Algorithm", "RSA")],
            key_attributes(&alg, EmbeddedKey::Private(&[0x30, 0x00]))
        );
    }

    #[test]
    fn test_ec_with_bad_parameters_has_no_curve() {
        let alg = AlgorithmIdentifier::new_with_params(
            ObjectIdentifier::from_str(AlgorithmIdentifier::OID_EC_PUBLIC_KEY).unwrap(),
            AlgorithmParameters::Other(RawAlgorithmParameter::new(Element::Boolean(true))),
        );
        assert_eq!(
            vec![Attribute::new("Algorithm", "ECDSA")],
            key_attributes(&alg, EmbeddedKey::Public(&[]))
        );
    }
}
