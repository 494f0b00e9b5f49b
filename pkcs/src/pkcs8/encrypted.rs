use mitate::decoder::{DecodableFrom, Decoder};
use mitate::{Describe, Description};
use mitate_asn1::{Element, ObjectIdentifier, OctetString};
use mitate_pkix_types::algorithm::RawAlgorithmParameter;
use mitate_pkix_types::{AlgorithmIdentifier, AlgorithmParameters, lookup};

use super::error::{Error, Result};

/*
RFC 5958 Section 3

EncryptedPrivateKeyInfo ::= SEQUENCE {
    encryptionAlgorithm  EncryptionAlgorithmIdentifier,
    encryptedData        EncryptedData
}

EncryptedData ::= OCTET STRING

RFC 8018 Appendix A.4

PBES2-params ::= SEQUENCE {
    keyDerivationFunc AlgorithmIdentifier {{PBES2-KDFs}},
    encryptionScheme AlgorithmIdentifier {{PBES2-Encs}}
}

PBKDF2-params ::= SEQUENCE {
    salt CHOICE { specified OCTET STRING, otherSource AlgorithmIdentifier },
    iterationCount INTEGER (1..MAX),
    keyLength INTEGER (1..MAX) OPTIONAL,
    prf AlgorithmIdentifier {{PBKDF2-PRFs}} DEFAULT algid-hmacWithSHA1
}
*/

/// Password-based encryption schemes we recognize an encrypted key by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionScheme {
    Pbes2,
    PbeMd2Des,
    PbeMd5Des,
    PbeMd5Rc2,
    PbeSha1Des,
    PbeSha1Rc2,
    PbeSha1Rc4_128,
    PbeSha1Rc4_40,
    PbeSha1TripleDes,
    PbeSha1TwoKeyTripleDes,
    PbeSha1Rc2_128,
    PbeSha1Rc2_40,
}

impl EncryptionScheme {
    pub const OID_PBES2: &'static str = "1.2.840.113549.1.5.13";
    pub const OID_PBE_MD2_DES: &'static str = "1.2.840.113549.1.5.1";
    pub const OID_PBE_MD5_DES: &'static str = "1.2.840.113549.1.5.3";
    pub const OID_PBE_MD5_RC2: &'static str = "1.2.840.113549.1.5.6";
    pub const OID_PBE_SHA1_DES: &'static str = "1.2.840.113549.1.5.10";
    pub const OID_PBE_SHA1_RC2: &'static str = "1.2.840.113549.1.5.11";
    pub const OID_PKCS12_SHA1_RC4_128: &'static str = "1.2.840.113549.1.12.1.1";
    pub const OID_PKCS12_SHA1_RC4_40: &'static str = "1.2.840.113549.1.12.1.2";
    pub const OID_PKCS12_SHA1_3DES: &'static str = "1.2.840.113549.1.12.1.3";
    pub const OID_PKCS12_SHA1_2DES: &'static str = "1.2.840.113549.1.12.1.4";
    pub const OID_PKCS12_SHA1_RC2_128: &'static str = "1.2.840.113549.1.12.1.5";
    pub const OID_PKCS12_SHA1_RC2_40: &'static str = "1.2.840.113549.1.12.1.6";

    pub fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        lookup(ENCRYPTION_SCHEMES, oid).map(|(scheme, _)| scheme)
    }

    pub fn name(&self) -> &'static str {
        ENCRYPTION_SCHEMES
            .iter()
            .find(|(_, (scheme, _))| scheme == self)
            .map(|(_, (_, name))| *name)
            .unwrap_or("PBE")
    }
}

static ENCRYPTION_SCHEMES: &[(&str, (EncryptionScheme, &str))] = &[
    (EncryptionScheme::OID_PBES2, (EncryptionScheme::Pbes2, "PBES2")),
    (EncryptionScheme::OID_PBE_MD2_DES, (EncryptionScheme::PbeMd2Des, "PBE-MD2-DES")),
    (EncryptionScheme::OID_PBE_MD5_DES, (EncryptionScheme::PbeMd5Des, "PBE-MD5-DES")),
    (EncryptionScheme::OID_PBE_MD5_RC2, (EncryptionScheme::PbeMd5Rc2, "PBE-MD5-RC2-64")),
    (EncryptionScheme::OID_PBE_SHA1_DES, (EncryptionScheme::PbeSha1Des, "PBE-SHA1-DES")),
    (EncryptionScheme::OID_PBE_SHA1_RC2, (EncryptionScheme::PbeSha1Rc2, "PBE-SHA1-RC2-64")),
    (EncryptionScheme::OID_PKCS12_SHA1_RC4_128, (EncryptionScheme::PbeSha1Rc4_128, "PBE-SHA1-RC4-128")),
    (EncryptionScheme::OID_PKCS12_SHA1_RC4_40, (EncryptionScheme::PbeSha1Rc4_40, "PBE-SHA1-RC4-40")),
    (EncryptionScheme::OID_PKCS12_SHA1_3DES, (EncryptionScheme::PbeSha1TripleDes, "PBE-SHA1-3DES")),
    (EncryptionScheme::OID_PKCS12_SHA1_2DES, (EncryptionScheme::PbeSha1TwoKeyTripleDes, "PBE-SHA1-2DES")),
    (EncryptionScheme::OID_PKCS12_SHA1_RC2_128, (EncryptionScheme::PbeSha1Rc2_128, "PBE-SHA1-RC2-128")),
    (EncryptionScheme::OID_PKCS12_SHA1_RC2_40, (EncryptionScheme::PbeSha1Rc2_40, "PBE-SHA1-RC2-40")),
];

const OID_PBKDF2: &str = "1.2.840.113549.1.5.12";
const OID_SCRYPT: &str = "1.3.6.1.4.1.11591.4.11";

static PRFS: &[(&str, &str)] = &[
    ("1.2.840.113549.2.7", "HMAC-SHA1"),
    ("1.2.840.113549.2.8", "HMAC-SHA224"),
    ("1.2.840.113549.2.9", "HMAC-SHA256"),
    ("1.2.840.113549.2.10", "HMAC-SHA384"),
    ("1.2.840.113549.2.11", "HMAC-SHA512"),
];

static CIPHERS: &[(&str, &str)] = &[
    ("1.3.14.3.2.7", "DES-CBC"),
    ("1.2.840.113549.3.2", "RC2-CBC"),
    ("1.2.840.113549.3.7", "DES-EDE3-CBC"),
    ("2.16.840.1.101.3.4.1.2", "AES-128-CBC"),
    ("2.16.840.1.101.3.4.1.6", "AES-128-GCM"),
    ("2.16.840.1.101.3.4.1.22", "AES-192-CBC"),
    ("2.16.840.1.101.3.4.1.26", "AES-192-GCM"),
    ("2.16.840.1.101.3.4.1.42", "AES-256-CBC"),
    ("2.16.840.1.101.3.4.1.46", "AES-256-GCM"),
];

/// PBES2 parameters, reduced to what a description shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pbes2Parameters {
    pub key_derivation: AlgorithmIdentifier,
    pub encryption_scheme: AlgorithmIdentifier,
}

impl Pbes2Parameters {
    /// `PBKDF2 (HMAC-SHA256)`, `scrypt`, or the dotted OID of anything else.
    pub fn key_derivation_name(&self) -> String {
        let kdf = self.key_derivation.algorithm();
        if *kdf == OID_PBKDF2 {
            let prf = match self.key_derivation.parameters() {
                Some(AlgorithmParameters::Other(raw)) => pbkdf2_prf(raw),
                _ => None,
            };
            // prf DEFAULT hmacWithSHA1
            format!("PBKDF2 ({})", prf.unwrap_or_else(|| "HMAC-SHA1".to_string()))
        } else if *kdf == OID_SCRYPT {
            "scrypt".to_string()
        } else {
            kdf.to_string()
        }
    }

    pub fn cipher_name(&self) -> String {
        let oid = self.encryption_scheme.algorithm();
        lookup(CIPHERS, oid)
            .map(str::to_string)
            .unwrap_or_else(|| oid.to_string())
    }
}

fn pbkdf2_prf(raw: &RawAlgorithmParameter) -> Option<String> {
    let Element::Sequence(fields) = raw.element() else {
        return None;
    };
    let prf = match fields.last() {
        Some(last @ Element::Sequence(_)) if fields.len() > 2 => last,
        _ => return None,
    };
    let prf: mitate_pkix_types::Result<AlgorithmIdentifier> = prf.decode();
    let prf = prf.ok()?;
    Some(
        lookup(PRFS, prf.algorithm())
            .map(str::to_string)
            .unwrap_or_else(|| prf.algorithm().to_string()),
    )
}

impl DecodableFrom<Element> for Pbes2Parameters {}

impl Decoder<Element, Pbes2Parameters> for Element {
    type Error = Error;

    fn decode(&self) -> Result<Pbes2Parameters> {
        let Element::Sequence(elements) = self else {
            return Err(Error::InvalidPbes2Parameters("expected SEQUENCE"));
        };
        let [key_derivation, encryption_scheme] = elements.as_slice() else {
            return Err(Error::InvalidPbes2Parameters("expected 2 elements"));
        };
        Ok(Pbes2Parameters {
            key_derivation: key_derivation.decode()?,
            encryption_scheme: encryption_scheme.decode()?,
        })
    }
}

/// Encrypted PKCS#8 private key. Only the envelope is read; the key itself
/// stays encrypted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedPrivateKeyInfo {
    pub encryption_algorithm: AlgorithmIdentifier,
    pub scheme: EncryptionScheme,
    pub encrypted_data: OctetString,
}

impl EncryptedPrivateKeyInfo {
    pub fn pbes2_parameters(&self) -> Result<Pbes2Parameters> {
        match self.encryption_algorithm.parameters() {
            Some(AlgorithmParameters::Other(raw)) => raw.element().decode(),
            _ => Err(Error::InvalidPbes2Parameters("missing")),
        }
    }
}

impl DecodableFrom<Element> for EncryptedPrivateKeyInfo {}

impl Decoder<Element, EncryptedPrivateKeyInfo> for Element {
    type Error = Error;

    fn decode(&self) -> Result<EncryptedPrivateKeyInfo> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence);
        };
        let [algorithm, encrypted_data] = elements.as_slice() else {
            return Err(Error::InvalidElementCount(elements.len()));
        };
        let encryption_algorithm: AlgorithmIdentifier = algorithm.decode()?;
        // Any SEQUENCE { AlgorithmIdentifier, OCTET STRING } fits the shape,
        // so the scheme has to be one we know.
        let scheme = EncryptionScheme::from_oid(encryption_algorithm.algorithm()).ok_or_else(
            || Error::UnknownEncryptionScheme(encryption_algorithm.algorithm().to_string()),
        )?;
        let Element::OctetString(encrypted_data) = encrypted_data else {
            return Err(Error::ExpectedOctetString("encryptedData"));
        };
        Ok(EncryptedPrivateKeyInfo {
            encryption_algorithm,
            scheme,
            encrypted_data: encrypted_data.clone(),
        })
    }
}

impl Describe for EncryptedPrivateKeyInfo {
    fn describe(&self) -> Description {
        let mut description =
            Description::new("PKCS#8 encrypted private key").with("Encryption", self.scheme.name());
        if self.scheme == EncryptionScheme::Pbes2 {
            match self.pbes2_parameters() {
                Ok(params) => {
                    description.push("Key derivation", params.key_derivation_name());
                    description.push("Cipher", params.cipher_name());
                }
                Err(e) => tracing::debug!(error = %e, "PBES2 parameters did not decode"),
            }
        }
        description
    }
}
