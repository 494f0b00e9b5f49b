//! Elliptic Curve Parameters
//!
//! Defined in [RFC 3279 Section 2.3.5](https://datatracker.ietf.org/doc/html/rfc3279#section-2.3.5)
//! and [RFC 5480 Section 2.1.1](https://datatracker.ietf.org/doc/html/rfc5480#section-2.1.1).
//!
//! Explicit domain parameters carry no name. [`ExplicitCurve::infer`] guesses
//! one from the field, and the guess is always reported as inferred.

use std::fmt;

use mitate::Attribute;
use mitate::decoder::{DecodableFrom, Decoder};
use mitate_asn1::{Element, Integer, ObjectIdentifier};

use super::{AlgorithmParameter, RawAlgorithmParameter, expect_integer};
use crate::OidName;
use crate::error::{Error, Result};

/// Named elliptic curves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedCurve {
    /// P-192 (secp192r1, prime192v1)
    Secp192r1,
    /// P-224 (secp224r1)
    Secp224r1,
    /// P-256 (secp256r1, prime256v1)
    Secp256r1,
    /// P-384 (secp384r1)
    Secp384r1,
    /// P-521 (secp521r1)
    Secp521r1,
    Secp256k1,
    BrainpoolP256r1,
    BrainpoolP384r1,
    BrainpoolP512r1,
    /// K-163
    Sect163k1,
    /// B-163
    Sect163r2,
    /// K-233
    Sect233k1,
    /// B-233
    Sect233r1,
    /// K-283
    Sect283k1,
    /// B-283
    Sect283r1,
    /// K-409
    Sect409k1,
    /// B-409
    Sect409r1,
    /// K-571
    Sect571k1,
    /// B-571
    Sect571r1,
}

impl NamedCurve {
    pub const OID_SECP192R1: &'static str = "1.2.840.10045.3.1.1";
    pub const OID_SECP224R1: &'static str = "1.3.132.0.33";
    pub const OID_SECP256R1: &'static str = "1.2.840.10045.3.1.7";
    pub const OID_SECP384R1: &'static str = "1.3.132.0.34";
    pub const OID_SECP521R1: &'static str = "1.3.132.0.35";
    pub const OID_SECP256K1: &'static str = "1.3.132.0.10";
    pub const OID_BRAINPOOL_P256R1: &'static str = "1.3.36.3.3.2.8.1.1.7";
    pub const OID_BRAINPOOL_P384R1: &'static str = "1.3.36.3.3.2.8.1.1.11";
    pub const OID_BRAINPOOL_P512R1: &'static str = "1.3.36.3.3.2.8.1.1.13";
    pub const OID_SECT163K1: &'static str = "1.3.132.0.1";
    pub const OID_SECT163R2: &'static str = "1.3.132.0.15";
    pub const OID_SECT233K1: &'static str = "1.3.132.0.26";
    pub const OID_SECT233R1: &'static str = "1.3.132.0.27";
    pub const OID_SECT283K1: &'static str = "1.3.132.0.16";
    pub const OID_SECT283R1: &'static str = "1.3.132.0.17";
    pub const OID_SECT409K1: &'static str = "1.3.132.0.36";
    pub const OID_SECT409R1: &'static str = "1.3.132.0.37";
    pub const OID_SECT571K1: &'static str = "1.3.132.0.38";
    pub const OID_SECT571R1: &'static str = "1.3.132.0.39";

    /// Every known curve, in inference preference order.
    pub const ALL: [NamedCurve; 19] = [
        NamedCurve::Secp192r1,
        NamedCurve::Secp224r1,
        NamedCurve::Secp256r1,
        NamedCurve::Secp384r1,
        NamedCurve::Secp521r1,
        NamedCurve::Secp256k1,
        NamedCurve::BrainpoolP256r1,
        NamedCurve::BrainpoolP384r1,
        NamedCurve::BrainpoolP512r1,
        NamedCurve::Sect163k1,
        NamedCurve::Sect163r2,
        NamedCurve::Sect233k1,
        NamedCurve::Sect233r1,
        NamedCurve::Sect283k1,
        NamedCurve::Sect283r1,
        NamedCurve::Sect409k1,
        NamedCurve::Sect409r1,
        NamedCurve::Sect571k1,
        NamedCurve::Sect571r1,
    ];

    pub fn oid_str(&self) -> &'static str {
        match self {
            NamedCurve::Secp192r1 => Self::OID_SECP192R1,
            NamedCurve::Secp224r1 => Self::OID_SECP224R1,
            NamedCurve::Secp256r1 => Self::OID_SECP256R1,
            NamedCurve::Secp384r1 => Self::OID_SECP384R1,
            NamedCurve::Secp521r1 => Self::OID_SECP521R1,
            NamedCurve::Secp256k1 => Self::OID_SECP256K1,
            NamedCurve::BrainpoolP256r1 => Self::OID_BRAINPOOL_P256R1,
            NamedCurve::BrainpoolP384r1 => Self::OID_BRAINPOOL_P384R1,
            NamedCurve::BrainpoolP512r1 => Self::OID_BRAINPOOL_P512R1,
            NamedCurve::Sect163k1 => Self::OID_SECT163K1,
            NamedCurve::Sect163r2 => Self::OID_SECT163R2,
            NamedCurve::Sect233k1 => Self::OID_SECT233K1,
            NamedCurve::Sect233r1 => Self::OID_SECT233R1,
            NamedCurve::Sect283k1 => Self::OID_SECT283K1,
            NamedCurve::Sect283r1 => Self::OID_SECT283R1,
            NamedCurve::Sect409k1 => Self::OID_SECT409K1,
            NamedCurve::Sect409r1 => Self::OID_SECT409R1,
            NamedCurve::Sect571k1 => Self::OID_SECT571K1,
            NamedCurve::Sect571r1 => Self::OID_SECT571R1,
        }
    }

    /// Name with its common aliases, e.g. `P-256 (secp256r1, prime256v1)`.
    pub fn display_name(&self) -> &'static str {
        match self {
            NamedCurve::Secp192r1 => "P-192 (secp192r1, prime192v1)",
            NamedCurve::Secp224r1 => "P-224 (secp224r1)",
            NamedCurve::Secp256r1 => "P-256 (secp256r1, prime256v1)",
            NamedCurve::Secp384r1 => "P-384 (secp384r1)",
            NamedCurve::Secp521r1 => "P-521 (secp521r1)",
            NamedCurve::Secp256k1 => "secp256k1",
            NamedCurve::BrainpoolP256r1 => "brainpoolP256r1",
            NamedCurve::BrainpoolP384r1 => "brainpoolP384r1",
            NamedCurve::BrainpoolP512r1 => "brainpoolP512r1",
            NamedCurve::Sect163k1 => "K-163 (sect163k1)",
            NamedCurve::Sect163r2 => "B-163 (sect163r2)",
            NamedCurve::Sect233k1 => "K-233 (sect233k1)",
            NamedCurve::Sect233r1 => "B-233 (sect233r1)",
            NamedCurve::Sect283k1 => "K-283 (sect283k1)",
            NamedCurve::Sect283r1 => "B-283 (sect283r1)",
            NamedCurve::Sect409k1 => "K-409 (sect409k1)",
            NamedCurve::Sect409r1 => "B-409 (sect409r1)",
            NamedCurve::Sect571k1 => "K-571 (sect571k1)",
            NamedCurve::Sect571r1 => "B-571 (sect571r1)",
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            NamedCurve::Secp192r1
            | NamedCurve::Secp224r1
            | NamedCurve::Secp256r1
            | NamedCurve::Secp384r1
            | NamedCurve::Secp521r1
            | NamedCurve::Secp256k1
            | NamedCurve::BrainpoolP256r1
            | NamedCurve::BrainpoolP384r1
            | NamedCurve::BrainpoolP512r1 => FieldType::Prime,
            _ => FieldType::CharacteristicTwo,
        }
    }

    /// Bit length of the prime, or the degree m of a binary field.
    pub fn field_size(&self) -> u64 {
        match self {
            NamedCurve::Sect163k1 | NamedCurve::Sect163r2 => 163,
            NamedCurve::Secp192r1 => 192,
            NamedCurve::Secp224r1 => 224,
            NamedCurve::Sect233k1 | NamedCurve::Sect233r1 => 233,
            NamedCurve::Secp256r1 | NamedCurve::Secp256k1 | NamedCurve::BrainpoolP256r1 => 256,
            NamedCurve::Sect283k1 | NamedCurve::Sect283r1 => 283,
            NamedCurve::Secp384r1 | NamedCurve::BrainpoolP384r1 => 384,
            NamedCurve::Sect409k1 | NamedCurve::Sect409r1 => 409,
            NamedCurve::BrainpoolP512r1 => 512,
            NamedCurve::Secp521r1 => 521,
            NamedCurve::Sect571k1 | NamedCurve::Sect571r1 => 571,
        }
    }

    /// Koblitz curves over binary fields have b = 1.
    pub fn is_koblitz(&self) -> bool {
        matches!(
            self,
            NamedCurve::Sect163k1
                | NamedCurve::Sect233k1
                | NamedCurve::Sect283k1
                | NamedCurve::Sect409k1
                | NamedCurve::Sect571k1
        )
    }

    // Lowercase hex, no leading zeros, to compare against Integer::to_hex.
    fn prime_hex(&self) -> Option<&'static str> {
        match self {
            NamedCurve::Secp192r1 => Some("fffffffffffffffffffffffffffffffeffffffffffffffff"),
            NamedCurve::Secp224r1 => Some("ffffffffffffffffffffffffffffffff000000000000000000000001"),
            NamedCurve::Secp256r1 => {
                Some("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff")
            }
            NamedCurve::Secp384r1 => Some(
                "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
            ),
            NamedCurve::Secp521r1 => Some(
                "1ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            ),
            NamedCurve::Secp256k1 => {
                Some("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f")
            }
            NamedCurve::BrainpoolP256r1 => {
                Some("a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377")
            }
            NamedCurve::BrainpoolP384r1 => Some(
                "8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b412b1da197fb71123acd3a729901d1a71874700133107ec53",
            ),
            NamedCurve::BrainpoolP512r1 => Some(
                "aadd9db8dbe9c48b3fd4e6ae33c9fc07cb308db3b3c9d20ed6639cca703308717d4d9b009bc66842aecda12ae6a380e62881ff2f2d82c68528aa6056583a48f3",
            ),
            _ => None,
        }
    }

    /// Best guess for a prime field: the curve with exactly this prime,
    /// otherwise the first known prime curve of the same size.
    pub fn infer_prime(p: &Integer) -> Option<Self> {
        let hex = p.to_hex();
        let bits = p.bit_len();
        Self::ALL
            .iter()
            .find(|c| c.prime_hex() == Some(hex.as_str()))
            .or_else(|| {
                Self::ALL
                    .iter()
                    .find(|c| c.field_type() == FieldType::Prime && c.field_size() == bits)
            })
            .copied()
    }

    /// Best guess for a binary field of degree `m`.
    pub fn infer_characteristic_two(m: u64, koblitz: bool) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|c| {
                c.field_type() == FieldType::CharacteristicTwo
                    && c.field_size() == m
                    && c.is_koblitz() == koblitz
            })
            .copied()
    }
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl OidName for NamedCurve {
    fn oid_name(&self) -> Option<&'static str> {
        Some(match self {
            NamedCurve::Secp192r1 => "secp192r1",
            NamedCurve::Secp224r1 => "secp224r1",
            NamedCurve::Secp256r1 => "secp256r1",
            NamedCurve::Secp384r1 => "secp384r1",
            NamedCurve::Secp521r1 => "secp521r1",
            NamedCurve::Secp256k1 => "secp256k1",
            NamedCurve::BrainpoolP256r1 => "brainpoolP256r1",
            NamedCurve::BrainpoolP384r1 => "brainpoolP384r1",
            NamedCurve::BrainpoolP512r1 => "brainpoolP512r1",
            NamedCurve::Sect163k1 => "sect163k1",
            NamedCurve::Sect163r2 => "sect163r2",
            NamedCurve::Sect233k1 => "sect233k1",
            NamedCurve::Sect233r1 => "sect233r1",
            NamedCurve::Sect283k1 => "sect283k1",
            NamedCurve::Sect283r1 => "sect283r1",
            NamedCurve::Sect409k1 => "sect409k1",
            NamedCurve::Sect409r1 => "sect409r1",
            NamedCurve::Sect571k1 => "sect571k1",
            NamedCurve::Sect571r1 => "sect571r1",
        })
    }
}

impl TryFrom<&ObjectIdentifier> for NamedCurve {
    type Error = Error;

    fn try_from(oid: &ObjectIdentifier) -> Result<Self> {
        Self::ALL
            .iter()
            .find(|c| oid == &c.oid_str())
            .copied()
            .ok_or_else(|| Error::UnknownNamedCurve(oid.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Prime,
    CharacteristicTwo,
}

impl FieldType {
    pub const OID_PRIME_FIELD: &'static str = "1.2.840.10045.1.1";
    pub const OID_CHARACTERISTIC_TWO_FIELD: &'static str = "1.2.840.10045.1.2";
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Prime => write!(f, "prime field"),
            FieldType::CharacteristicTwo => write!(f, "characteristic-two field"),
        }
    }
}

/// Specified (explicit) curve domain, reduced to what inference needs.
///
/// ```asn1
/// ECParameters ::= SEQUENCE {
///     version   INTEGER { ecpVer1(1) },
///     fieldID   FieldID,
///     curve     Curve,
///     base      ECPoint,
///     order     INTEGER,
///     cofactor  INTEGER OPTIONAL
/// }
/// FieldID ::= SEQUENCE { fieldType OBJECT IDENTIFIER, parameters ANY }
/// Curve ::= SEQUENCE { a FieldElement, b FieldElement, seed BIT STRING OPTIONAL }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplicitCurve {
    Prime { p: Integer },
    CharacteristicTwo { m: u64, b: Vec<u8> },
}

impl ExplicitCurve {
    pub fn field_type(&self) -> FieldType {
        match self {
            ExplicitCurve::Prime { .. } => FieldType::Prime,
            ExplicitCurve::CharacteristicTwo { .. } => FieldType::CharacteristicTwo,
        }
    }

    pub fn infer(&self) -> Option<NamedCurve> {
        match self {
            ExplicitCurve::Prime { p } => NamedCurve::infer_prime(p),
            ExplicitCurve::CharacteristicTwo { m, b } => {
                let koblitz = matches!(b.split_last(), Some((&1, rest)) if rest.iter().all(|x| *x == 0));
                NamedCurve::infer_characteristic_two(*m, koblitz)
            }
        }
    }

    pub fn attributes(&self) -> Vec<Attribute> {
        let mut attributes = vec![Attribute::new("Field type", self.field_type().to_string())];
        attributes.push(match self {
            ExplicitCurve::Prime { p } => Attribute::new("Prime size", format!("{} bits", p.bit_len())),
            ExplicitCurve::CharacteristicTwo { m, .. } => {
                Attribute::new("Field size", format!("{} bits", m))
            }
        });
        if let Some(curve) = self.infer() {
            attributes.push(Attribute::new("Curve (inferred)", curve.display_name()));
        }
        attributes
    }
}

impl DecodableFrom<Element> for ExplicitCurve {}

impl Decoder<Element, ExplicitCurve> for Element {
    type Error = Error;

    fn decode(&self) -> Result<ExplicitCurve> {
        let Element::Sequence(fields) = self else {
            return Err(Error::InvalidEcParameter("specifiedCurve must be a SEQUENCE"));
        };
        let [_version, Element::Sequence(field_id), Element::Sequence(curve), ..] = fields.as_slice()
        else {
            return Err(Error::InvalidEcParameter("malformed specifiedCurve"));
        };
        let [Element::ObjectIdentifier(field_type), field_params] = field_id.as_slice() else {
            return Err(Error::InvalidEcParameter("malformed FieldID"));
        };

        if field_type == &FieldType::OID_PRIME_FIELD {
            let p = expect_integer(field_params, Error::InvalidEcParameter("prime must be an INTEGER"))?;
            return Ok(ExplicitCurve::Prime { p: p.clone() });
        }
        if field_type == &FieldType::OID_CHARACTERISTIC_TWO_FIELD {
            let m = match field_params {
                Element::Sequence(params) => params.first(),
                _ => None,
            }
            .and_then(|m| match m {
                Element::Integer(m) => m.to_u64(),
                _ => None,
            })
            .ok_or(Error::InvalidEcParameter("missing field degree m"))?;
            let b = match curve.get(1) {
                Some(Element::OctetString(b)) => b.as_bytes().to_vec(),
                _ => return Err(Error::InvalidEcParameter("missing curve coefficient b")),
            };
            return Ok(ExplicitCurve::CharacteristicTwo { m, b });
        }
        Err(Error::InvalidEcParameter("unknown field type"))
    }
}

/// Elliptic Curve Parameters
///
/// ```asn1
/// EcpkParameters ::= CHOICE {
///     ecParameters  ECParameters,
///     namedCurve    OBJECT IDENTIFIER,
///     implicitlyCA  NULL
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EcParameters {
    Named(NamedCurve),
    /// A curve OID we have no name for.
    UnknownNamed(ObjectIdentifier),
    Explicit(ExplicitCurve),
    ImplicitlyCa,
}

impl EcParameters {
    /// Curve attributes for a description: `Curve` for named curves, the
    /// field details plus `Curve (inferred)` for explicit ones.
    pub fn attributes(&self) -> Vec<Attribute> {
        match self {
            EcParameters::Named(curve) => vec![Attribute::new("Curve", curve.display_name())],
            EcParameters::UnknownNamed(oid) => vec![Attribute::new("Curve", oid.to_string())],
            EcParameters::Explicit(curve) => curve.attributes(),
            EcParameters::ImplicitlyCa => vec![],
        }
    }
}

impl OidName for EcParameters {
    fn oid_name(&self) -> Option<&'static str> {
        match self {
            EcParameters::Named(curve) => curve.oid_name(),
            _ => None,
        }
    }
}

impl DecodableFrom<Element> for EcParameters {}

impl Decoder<Element, EcParameters> for Element {
    type Error = Error;

    fn decode(&self) -> Result<EcParameters> {
        match self {
            Element::ObjectIdentifier(oid) => Ok(NamedCurve::try_from(oid)
                .map(EcParameters::Named)
                .unwrap_or_else(|_| EcParameters::UnknownNamed(oid.clone()))),
            Element::Null => Ok(EcParameters::ImplicitlyCa),
            Element::Sequence(_) => {
                let curve: ExplicitCurve = self.decode()?;
                Ok(EcParameters::Explicit(curve))
            }
            _ => Err(Error::InvalidEcParameter(
                "must be a namedCurve, specifiedCurve or implicitlyCA",
            )),
        }
    }
}

impl AlgorithmParameter for EcParameters {
    fn parse(raw: &RawAlgorithmParameter) -> Result<Self> {
        raw.element().decode()
    }

    fn parse_null() -> Result<Self> {
        Ok(EcParameters::ImplicitlyCa)
    }
}
