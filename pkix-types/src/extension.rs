//! PKIX Extension type
//!
//! RFC 5280 Section 4.1.2.9
//!
//! ```asn1
//! Extension  ::=  SEQUENCE  {
//!     extnID      OBJECT IDENTIFIER,
//!     critical    BOOLEAN DEFAULT FALSE,
//!     extnValue   OCTET STRING
//!                 -- contains the DER encoding of an ASN.1 value
//!                 -- corresponding to the extension type identified
//!                 -- by extnID
//! }
//! ```

use mitate::decoder::{DecodableFrom, Decoder};
use mitate_asn1::{ASN1Object, Element, ObjectIdentifier, OctetString};

use crate::error::{Error, Result};

/// A single extension with its value still DER-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    id: ObjectIdentifier,
    critical: bool,
    value: OctetString,
}

impl Extension {
    pub fn new(id: ObjectIdentifier, critical: bool, value: OctetString) -> Self {
        Self {
            id,
            critical,
            value,
        }
    }

    /// Get the extension ID (OID)
    pub fn oid(&self) -> &ObjectIdentifier {
        &self.id
    }

    pub fn is_critical(&self) -> bool {
        self.critical
    }

    /// Get the raw extension value (DER-encoded ASN.1)
    pub fn value(&self) -> &OctetString {
        &self.value
    }

    /// Decode extnValue into an element tree.
    pub fn parse_value(&self) -> Result<Element> {
        let object = ASN1Object::try_from(self.value.as_bytes())?;
        Ok(object.into_element())
    }
}

impl DecodableFrom<Element> for Extension {}

impl Decoder<Element, Extension> for Element {
    type Error = Error;

    fn decode(&self) -> Result<Extension> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExtensionExpectedSequence);
        };
        let (id, critical, value) = match elements.as_slice() {
            [id, value] => (id, None, value),
            [id, critical, value] => (id, Some(critical), value),
            _ => return Err(Error::ExtensionInvalidElementCount(elements.len())),
        };
        let Element::ObjectIdentifier(id) = id else {
            return Err(Error::ExtensionExpectedOidForExtnId);
        };
        let critical = match critical {
            None => false,
            Some(Element::Boolean(critical)) => *critical,
            Some(_) => return Err(Error::ExtensionInvalidCriticalOrValue),
        };
        let Element::OctetString(value) = value else {
            return Err(Error::ExtensionExpectedOctetString);
        };
        Ok(Extension::new(id.clone(), critical, value.clone()))
    }
}
