use mitate::decoder::{DecodableFrom, Decoder};
use mitate_asn1::{ASN1Object, Element, OctetString};

use crate::error::Error;

mod authority_key_identifier;
mod basic_constraints;
pub mod error;
mod extended_key_usage;
mod general_name;
mod key_usage;
mod subject_alt_name;
mod subject_key_identifier;

pub use authority_key_identifier::AuthorityKeyIdentifier;
pub use basic_constraints::BasicConstraints;
pub use extended_key_usage::ExtendedKeyUsage;
pub use general_name::GeneralName;
pub use key_usage::KeyUsage;
pub use subject_alt_name::SubjectAltName;
pub use subject_key_identifier::SubjectKeyIdentifier;

/*
RFC 5280 Section 4.1.2.9

Extensions  ::=  SEQUENCE SIZE (1..MAX) OF Extension

Extension  ::=  SEQUENCE  {
    extnID      OBJECT IDENTIFIER,
    critical    BOOLEAN DEFAULT FALSE,
    extnValue   OCTET STRING
}
*/

/// Collection of X.509 v3 extensions ([RFC 5280 Section 4.1.2.9](https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.2.9)).
///
/// Values are kept encoded and only parsed when asked for through
/// [`Extensions::extension`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extensions {
    extensions: Vec<mitate_pkix_types::Extension>,
}

impl Extensions {
    pub fn new(extensions: Vec<mitate_pkix_types::Extension>) -> Self {
        Self { extensions }
    }

    pub fn extensions(&self) -> &[mitate_pkix_types::Extension] {
        &self.extensions
    }

    /// Get and parse a specific extension by type
    pub fn extension<T: Extension>(&self) -> Result<Option<T>, Error> {
        self.extensions
            .iter()
            .find(|ext| *ext.oid() == T::OID)
            .map(|ext| T::parse(ext.value()).map_err(Error::from))
            .transpose()
    }
}

impl DecodableFrom<Element> for Extensions {}

impl Decoder<Element, Extensions> for Element {
    type Error = Error;

    fn decode(&self) -> Result<Extensions, Self::Error> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequenceInExtensions);
        };
        if elements.is_empty() {
            return Err(Error::ExtensionsEmpty);
        }
        let extensions = elements
            .iter()
            .map(|elem| elem.decode())
            .collect::<mitate_pkix_types::Result<Vec<mitate_pkix_types::Extension>>>()?;
        Ok(Extensions { extensions })
    }
}

/// Short name of a known extnID, used when logging.
pub fn extension_name(oid: &str) -> Option<&'static str> {
    EXTENSION_NAMES
        .iter()
        .find(|(known, _)| *known == oid)
        .map(|(_, name)| *name)
}

static EXTENSION_NAMES: &[(&str, &str)] = &[
    (SubjectKeyIdentifier::OID, "subjectKeyIdentifier"),
    (KeyUsage::OID, "keyUsage"),
    (SubjectAltName::OID, "subjectAltName"),
    (BasicConstraints::OID, "basicConstraints"),
    (AuthorityKeyIdentifier::OID, "authorityKeyIdentifier"),
    (ExtendedKeyUsage::OID, "extKeyUsage"),
];

/// Trait for typed X.509 extensions.
///
/// Implementors parse themselves from the extnValue OCTET STRING.
pub trait Extension: Sized {
    /// The extnID this type is stored under.
    const OID: &'static str;

    fn parse(value: &OctetString) -> error::Result<Self>;
}

/// Parses the DER carried inside an extnValue.
pub(crate) fn parse_value(value: &OctetString, kind: error::Kind) -> error::Result<Element> {
    ASN1Object::try_from(value.as_bytes())
        .map(ASN1Object::into_element)
        .map_err(|e| error::Error::InvalidValue(kind, e))
}
