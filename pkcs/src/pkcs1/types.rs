use mitate::decoder::{DecodableFrom, Decoder};
use mitate::{Describe, Description};
use mitate_asn1::{Element, Integer};

use super::error::{Error, Result};

/*
RFC 8017 - PKCS #1: RSA Cryptography Specifications

RSAPublicKey ::= SEQUENCE {
    modulus           INTEGER,  -- n
    publicExponent    INTEGER   -- e
}

RSAPrivateKey ::= SEQUENCE {
    version           Version,
    modulus           INTEGER,  -- n
    publicExponent    INTEGER,  -- e
    privateExponent   INTEGER,  -- d
    prime1            INTEGER,  -- p
    prime2            INTEGER,  -- q
    exponent1         INTEGER,  -- d mod (p-1)
    exponent2         INTEGER,  -- d mod (q-1)
    coefficient       INTEGER,  -- (inverse of q) mod p
    otherPrimeInfos   OtherPrimeInfos OPTIONAL
}

Version ::= INTEGER { two-prime(0), multi(1) }
*/

/// PKCS#1 RSAPrivateKey version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    TwoPrime = 0,
    Multi = 1,
}

impl TryFrom<i64> for Version {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Version::TwoPrime),
            1 => Ok(Version::Multi),
            _ => Err(Error::InvalidVersion(value)),
        }
    }
}

impl DecodableFrom<Element> for Version {}

impl Decoder<Element, Version> for Element {
    type Error = Error;

    fn decode(&self) -> Result<Version> {
        match self {
            Element::Integer(int) => {
                let value = int.to_i64().ok_or(Error::VersionOutOfRange)?;
                Version::try_from(value)
            }
            _ => Err(Error::ExpectedInteger { field: "version" }),
        }
    }
}

/// PKCS#1 RSA Private Key structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RSAPrivateKey {
    pub version: Version,
    pub modulus: Integer,          // n
    pub public_exponent: Integer,  // e
    pub private_exponent: Integer, // d
    pub prime1: Integer,           // p
    pub prime2: Integer,           // q
    pub exponent1: Integer,        // d mod (p-1)
    pub exponent2: Integer,        // d mod (q-1)
    pub coefficient: Integer,      // (inverse of q) mod p
}

impl RSAPrivateKey {
    pub fn size_bits(&self) -> usize {
        self.modulus.size_bits()
    }
}

fn integer_at<'a>(elements: &'a [Element], idx: usize, field: &'static str) -> Result<&'a Integer> {
    match elements.get(idx) {
        Some(Element::Integer(int)) => Ok(int),
        _ => Err(Error::ExpectedInteger { field }),
    }
}

impl DecodableFrom<Element> for RSAPrivateKey {}

impl Decoder<Element, RSAPrivateKey> for Element {
    type Error = Error;

    fn decode(&self) -> Result<RSAPrivateKey> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence);
        };
        // otherPrimeInfos may only follow a multi-prime version
        let version: Result<Version> = elements.first().ok_or(Error::ExpectedSequence)?.decode();
        let valid_count = match elements.len() {
            9 => true,
            10 => matches!(version, Ok(Version::Multi)),
            _ => false,
        };
        if !valid_count {
            return Err(Error::InvalidElementCount {
                expected: "9 (or 10 for multi-prime)",
                actual: elements.len(),
            });
        }
        Ok(RSAPrivateKey {
            version: version?,
            modulus: integer_at(elements, 1, "modulus")?.clone(),
            public_exponent: integer_at(elements, 2, "publicExponent")?.clone(),
            private_exponent: integer_at(elements, 3, "privateExponent")?.clone(),
            prime1: integer_at(elements, 4, "prime1")?.clone(),
            prime2: integer_at(elements, 5, "prime2")?.clone(),
            exponent1: integer_at(elements, 6, "exponent1")?.clone(),
            exponent2: integer_at(elements, 7, "exponent2")?.clone(),
            coefficient: integer_at(elements, 8, "coefficient")?.clone(),
        })
    }
}

impl Describe for RSAPrivateKey {
    fn describe(&self) -> Description {
        Description::new("PKCS#1 private key")
            .with("Algorithm", "RSA")
            .with("Size", format!("{} bits", self.size_bits()))
    }
}

/// PKCS#1 RSA Public Key structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RSAPublicKey {
    pub modulus: Integer,         // n
    pub public_exponent: Integer, // e
}

impl RSAPublicKey {
    pub fn size_bits(&self) -> usize {
        self.modulus.size_bits()
    }
}

impl DecodableFrom<Element> for RSAPublicKey {}

impl Decoder<Element, RSAPublicKey> for Element {
    type Error = Error;

    fn decode(&self) -> Result<RSAPublicKey> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence);
        };
        if elements.len() != 2 {
            return Err(Error::InvalidElementCount {
                expected: "2",
                actual: elements.len(),
            });
        }
        Ok(RSAPublicKey {
            modulus: integer_at(elements, 0, "modulus")?.clone(),
            public_exponent: integer_at(elements, 1, "publicExponent")?.clone(),
        })
    }
}

impl Describe for RSAPublicKey {
    fn describe(&self) -> Description {
        Description::new("PKCS#1 public key")
            .with("Algorithm", "RSA")
            .with("Size", format!("{} bits", self.size_bits()))
    }
}

#[cfg(test)]
mod tests {
    use mitate_asn1::ASN1Object;
    use rstest::rstest;

    use super::*;

    const RSA_PRIVATE: &[u8] = include_bytes!("../../../testdata/der/rsa-512-pkcs1.key");
    const RSA_PUBLIC: &[u8] = include_bytes!("../../../testdata/der/rsa-512-pkcs1.pub");

    fn element(der: &[u8]) -> Element {
        ASN1Object::try_from(der).unwrap().into_element()
    }

    #[test]
    fn test_decode_rsa_private_key() {
        let key: RSAPrivateKey = element(RSA_PRIVATE).decode().unwrap();
        assert_eq!(Version::TwoPrime, key.version);
        assert_eq!(Integer::from(65537_i64), key.public_exponent);
        assert_eq!(512, key.size_bits());
        assert_eq!(
            "PKCS#1 private key\n  Algorithm: RSA\n  Size: 512 bits\n",
            key.describe().to_string()
        );
    }

    #[test]
    fn test_decode_rsa_public_key() {
        let key: RSAPublicKey = element(RSA_PUBLIC).decode().unwrap();
        assert_eq!(Integer::from(65537_i64), key.public_exponent);
        assert_eq!(
            Description::new("PKCS#1 public key")
                .with("Algorithm", "RSA")
                .with("Size", "512 bits"),
            key.describe()
        );
    }

    #[test]
    fn test_public_key_is_not_private_key() {
        let result: Result<RSAPrivateKey> = element(RSA_PUBLIC).decode();
        assert!(matches!(
            result,
            Err(Error::InvalidElementCount { actual: 2, .. })
        ));
    }

    #[rstest]
    #[case::not_sequence(Element::Null)]
    #[case::three_integers(Element::Sequence(vec![
        Element::Integer(Integer::from(1_i64)),
        Element::Integer(Integer::from(2_i64)),
        Element::Integer(Integer::from(3_i64)),
    ]))]
    #[case::not_integers(Element::Sequence(vec![Element::Null, Element::Null]))]
    fn test_decode_rsa_public_key_rejects(#[case] input: Element) {
        let result: Result<RSAPublicKey> = input.decode();
        assert!(result.is_err());
    }

    #[rstest]
    #[case(0, Some(Version::TwoPrime))]
    #[case(1, Some(Version::Multi))]
    #[case(2, None)]
    fn test_version(#[case] value: i64, #[case] expected: Option<Version>) {
        let result: Result<Version> = Element::Integer(Integer::from(value)).decode();
        assert_eq!(expected, result.ok());
    }
}
