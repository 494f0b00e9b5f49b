//! AlgorithmIdentifier type
//!
//! Defined in [RFC 5280 Section 4.1.1.2](https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.1.2)

use std::fmt;

use mitate::decoder::{DecodableFrom, Decoder};
use mitate_asn1::{Element, ObjectIdentifier};

use crate::OidName;
use crate::error::{Error, Result};
use crate::oid_name::lookup;

pub mod parameters;

pub use parameters::{AlgorithmParameter, RawAlgorithmParameter};

/// Parameters field in AlgorithmIdentifier
///
/// Wrapped in Option:
/// - None: Field not present (OPTIONAL field omitted, e.g. EdDSA)
/// - Some(AlgorithmParameters::Null): Explicit NULL value (common for RSA)
/// - Some(AlgorithmParameters::Other(RawAlgorithmParameter)): Any other ASN.1 element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmParameters {
    /// Explicit NULL (05 00)
    Null,
    /// Any other ASN.1 element wrapped in RawAlgorithmParameter
    Other(RawAlgorithmParameter),
}

/// Algorithm Identifier
///
/// [RFC 5280 Section 4.1.1.2](https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.1.2):
/// ```asn1
/// AlgorithmIdentifier ::= SEQUENCE {
///     algorithm   OBJECT IDENTIFIER,
///     parameters  ANY DEFINED BY algorithm OPTIONAL
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmIdentifier {
    /// Algorithm OID
    pub algorithm: ObjectIdentifier,
    /// Optional parameters
    pub parameters: Option<AlgorithmParameters>,
}

impl AlgorithmIdentifier {
    // Key algorithm OIDs (RFC 3279, RFC 4055, RFC 8410)
    pub const OID_RSA_ENCRYPTION: &'static str = "1.2.840.113549.1.1.1";
    pub const OID_RSASSA_PSS: &'static str = "1.2.840.113549.1.1.10";
    pub const OID_ID_DSA: &'static str = "1.2.840.10040.4.1";
    pub const OID_EC_PUBLIC_KEY: &'static str = "1.2.840.10045.2.1";
    pub const OID_X25519: &'static str = "1.3.101.110";
    pub const OID_X448: &'static str = "1.3.101.111";
    pub const OID_ED25519: &'static str = "1.3.101.112";
    pub const OID_ED448: &'static str = "1.3.101.113";

    // Signature algorithm OIDs (RFC 3279, RFC 4055, RFC 5758)
    pub const OID_MD2_WITH_RSA_ENCRYPTION: &'static str = "1.2.840.113549.1.1.2";
    pub const OID_MD5_WITH_RSA_ENCRYPTION: &'static str = "1.2.840.113549.1.1.4";
    pub const OID_SHA1_WITH_RSA_ENCRYPTION: &'static str = "1.2.840.113549.1.1.5";
    pub const OID_SHA256_WITH_RSA_ENCRYPTION: &'static str = "1.2.840.113549.1.1.11";
    pub const OID_SHA384_WITH_RSA_ENCRYPTION: &'static str = "1.2.840.113549.1.1.12";
    pub const OID_SHA512_WITH_RSA_ENCRYPTION: &'static str = "1.2.840.113549.1.1.13";
    pub const OID_SHA224_WITH_RSA_ENCRYPTION: &'static str = "1.2.840.113549.1.1.14";
    pub const OID_DSA_WITH_SHA1: &'static str = "1.2.840.10040.4.3";
    pub const OID_DSA_WITH_SHA224: &'static str = "2.16.840.1.101.3.4.3.1";
    pub const OID_DSA_WITH_SHA256: &'static str = "2.16.840.1.101.3.4.3.2";
    pub const OID_ECDSA_WITH_SHA1: &'static str = "1.2.840.10045.4.1";
    pub const OID_ECDSA_WITH_SHA224: &'static str = "1.2.840.10045.4.3.1";
    pub const OID_ECDSA_WITH_SHA256: &'static str = "1.2.840.10045.4.3.2";
    pub const OID_ECDSA_WITH_SHA384: &'static str = "1.2.840.10045.4.3.3";
    pub const OID_ECDSA_WITH_SHA512: &'static str = "1.2.840.10045.4.3.4";

    // Hash OIDs, used by RSASSA-PSS parameters
    pub const OID_SHA1: &'static str = "1.3.14.3.2.26";
    pub const OID_SHA224: &'static str = "2.16.840.1.101.3.4.2.4";
    pub const OID_SHA256: &'static str = "2.16.840.1.101.3.4.2.1";
    pub const OID_SHA384: &'static str = "2.16.840.1.101.3.4.2.2";
    pub const OID_SHA512: &'static str = "2.16.840.1.101.3.4.2.3";

    /// Create a new AlgorithmIdentifier with algorithm OID only
    pub fn new(algorithm: ObjectIdentifier) -> Self {
        Self {
            algorithm,
            parameters: None,
        }
    }

    /// Create a new AlgorithmIdentifier with parameters
    pub fn new_with_params(algorithm: ObjectIdentifier, parameters: AlgorithmParameters) -> Self {
        Self {
            algorithm,
            parameters: Some(parameters),
        }
    }

    /// Get the algorithm OID
    pub fn algorithm(&self) -> &ObjectIdentifier {
        &self.algorithm
    }

    /// Get the parameters
    pub fn parameters(&self) -> Option<&AlgorithmParameters> {
        self.parameters.as_ref()
    }

    /// Get typed parameters. `Ok(None)` when the field is absent.
    pub fn parameter<P: AlgorithmParameter>(&self) -> Result<Option<P>> {
        match &self.parameters {
            None => Ok(None),
            Some(AlgorithmParameters::Null) => P::parse_null().map(Some),
            Some(AlgorithmParameters::Other(raw)) => P::parse(raw).map(Some),
        }
    }

    /// The key algorithm this identifier names, if it is one we know.
    pub fn key_algorithm(&self) -> Option<KeyAlgorithm> {
        lookup(KEY_ALGORITHMS, &self.algorithm)
    }

    /// Conventional `HASH-KEY` name of a signature algorithm, or the dotted
    /// OID when it is unknown. RSASSA-PSS is named after its hash parameter.
    pub fn signature_name(&self) -> String {
        if self.algorithm == Self::OID_RSASSA_PSS {
            return match self.parameter::<parameters::PssParameters>() {
                Ok(params) => {
                    let hash = params.map(|p| p.hash).unwrap_or(HashAlgorithm::Sha1);
                    format!("{}-RSAPSS", hash)
                }
                Err(_) => "RSASSA-PSS".to_string(),
            };
        }
        self.oid_name()
            .map(str::to_string)
            .unwrap_or_else(|| self.algorithm.to_string())
    }
}

impl OidName for AlgorithmIdentifier {
    fn oid_name(&self) -> Option<&'static str> {
        lookup(SIGNATURE_ALGORITHMS, &self.algorithm)
            .or_else(|| self.key_algorithm().map(|k| k.name()))
    }
}

impl DecodableFrom<Element> for AlgorithmIdentifier {}

impl Decoder<Element, AlgorithmIdentifier> for Element {
    type Error = Error;

    fn decode(&self) -> Result<AlgorithmIdentifier> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence);
        };
        match elements.as_slice() {
            [] => Err(Error::EmptyAlgorithmIdentifier),
            [Element::ObjectIdentifier(oid)] => Ok(AlgorithmIdentifier::new(oid.clone())),
            [Element::ObjectIdentifier(oid), Element::Null] => Ok(
                AlgorithmIdentifier::new_with_params(oid.clone(), AlgorithmParameters::Null),
            ),
            [Element::ObjectIdentifier(oid), params] => Ok(AlgorithmIdentifier::new_with_params(
                oid.clone(),
                AlgorithmParameters::Other(RawAlgorithmParameter::new(params.clone())),
            )),
            [_] | [_, _] => Err(Error::ExpectedOidForAlgorithm),
            _ => Err(Error::TooManyElements(elements.len())),
        }
    }
}

/// Public key algorithms recognized in key and certificate structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAlgorithm {
    Rsa,
    RsaPss,
    Dsa,
    Ec,
    Ed25519,
    Ed448,
    X25519,
    X448,
}

impl KeyAlgorithm {
    /// Display name used in descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa => "RSA",
            KeyAlgorithm::RsaPss => "RSA-PSS",
            KeyAlgorithm::Dsa => "DSA",
            KeyAlgorithm::Ec => "ECDSA",
            KeyAlgorithm::Ed25519 | KeyAlgorithm::Ed448 => "EdDSA",
            KeyAlgorithm::X25519 | KeyAlgorithm::X448 => "ECDH",
        }
    }

    /// The curve fixed by the algorithm OID itself.
    pub fn implied_curve(&self) -> Option<&'static str> {
        match self {
            KeyAlgorithm::Ed25519 => Some("Ed25519"),
            KeyAlgorithm::Ed448 => Some("Ed448"),
            KeyAlgorithm::X25519 => Some("X25519"),
            KeyAlgorithm::X448 => Some("X448"),
            _ => None,
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

static KEY_ALGORITHMS: &[(&str, KeyAlgorithm)] = &[
    (AlgorithmIdentifier::OID_RSA_ENCRYPTION, KeyAlgorithm::Rsa),
    (AlgorithmIdentifier::OID_RSASSA_PSS, KeyAlgorithm::RsaPss),
    (AlgorithmIdentifier::OID_ID_DSA, KeyAlgorithm::Dsa),
    (AlgorithmIdentifier::OID_EC_PUBLIC_KEY, KeyAlgorithm::Ec),
    (AlgorithmIdentifier::OID_ED25519, KeyAlgorithm::Ed25519),
    (AlgorithmIdentifier::OID_ED448, KeyAlgorithm::Ed448),
    (AlgorithmIdentifier::OID_X25519, KeyAlgorithm::X25519),
    (AlgorithmIdentifier::OID_X448, KeyAlgorithm::X448),
];

static SIGNATURE_ALGORITHMS: &[(&str, &str)] = &[
    (AlgorithmIdentifier::OID_MD2_WITH_RSA_ENCRYPTION, "MD2-RSA"),
    (AlgorithmIdentifier::OID_MD5_WITH_RSA_ENCRYPTION, "MD5-RSA"),
    (AlgorithmIdentifier::OID_SHA1_WITH_RSA_ENCRYPTION, "SHA1-RSA"),
    (AlgorithmIdentifier::OID_SHA224_WITH_RSA_ENCRYPTION, "SHA224-RSA"),
    (AlgorithmIdentifier::OID_SHA256_WITH_RSA_ENCRYPTION, "SHA256-RSA"),
    (AlgorithmIdentifier::OID_SHA384_WITH_RSA_ENCRYPTION, "SHA384-RSA"),
    (AlgorithmIdentifier::OID_SHA512_WITH_RSA_ENCRYPTION, "SHA512-RSA"),
    (AlgorithmIdentifier::OID_DSA_WITH_SHA1, "DSA-SHA1"),
    (AlgorithmIdentifier::OID_DSA_WITH_SHA224, "DSA-SHA224"),
    (AlgorithmIdentifier::OID_DSA_WITH_SHA256, "DSA-SHA256"),
    (AlgorithmIdentifier::OID_ECDSA_WITH_SHA1, "ECDSA-SHA1"),
    (AlgorithmIdentifier::OID_ECDSA_WITH_SHA224, "ECDSA-SHA224"),
    (AlgorithmIdentifier::OID_ECDSA_WITH_SHA256, "ECDSA-SHA256"),
    (AlgorithmIdentifier::OID_ECDSA_WITH_SHA384, "ECDSA-SHA384"),
    (AlgorithmIdentifier::OID_ECDSA_WITH_SHA512, "ECDSA-SHA512"),
    (AlgorithmIdentifier::OID_ED25519, "Ed25519"),
    (AlgorithmIdentifier::OID_ED448, "Ed448"),
];

/// Digest algorithms that can parameterize a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        lookup(HASH_ALGORITHMS, oid)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HashAlgorithm::Sha1 => "SHA1",
            HashAlgorithm::Sha224 => "SHA224",
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha384 => "SHA384",
            HashAlgorithm::Sha512 => "SHA512",
        };
        write!(f, "{}", name)
    }
}

static HASH_ALGORITHMS: &[(&str, HashAlgorithm)] = &[
    (AlgorithmIdentifier::OID_SHA1, HashAlgorithm::Sha1),
    (AlgorithmIdentifier::OID_SHA224, HashAlgorithm::Sha224),
    (AlgorithmIdentifier::OID_SHA256, HashAlgorithm::Sha256),
    (AlgorithmIdentifier::OID_SHA384, HashAlgorithm::Sha384),
    (AlgorithmIdentifier::OID_SHA512, HashAlgorithm::Sha512),
];
