//! Name and related types
//!
//! Defined in RFC 5280 Section 4.1.2.4
//!
//! ```asn1
//! Name ::= CHOICE { -- only one possibility for now --
//!     rdnSequence  RDNSequence
//! }
//!
//! RDNSequence ::= SEQUENCE OF RelativeDistinguishedName
//!
//! RelativeDistinguishedName ::= SET OF AttributeTypeAndValue
//!
//! AttributeTypeAndValue ::= SEQUENCE {
//!     type     AttributeType,
//!     value    AttributeValue
//! }
//! ```
//!
//! [`Name`] displays as an RFC 4514 string: RDNs last to first, joined by
//! `,`, with special characters escaped. Values that are not character
//! strings print as `#` followed by the hex of their DER encoding.

use std::fmt;

use mitate::decoder::{DecodableFrom, Decoder};
use mitate_asn1::{Element, ObjectIdentifier};

use crate::OidName;
use crate::error::{Error, Result};
use crate::oid_name::lookup;

/// X.509 Distinguished Name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub rdn_sequence: Vec<RelativeDistinguishedName>,
}

impl Name {
    pub fn new(rdn_sequence: Vec<RelativeDistinguishedName>) -> Self {
        Self { rdn_sequence }
    }

    pub fn rdn_sequence(&self) -> &[RelativeDistinguishedName] {
        &self.rdn_sequence
    }

    /// Values of every attribute of the given type, in encoding order.
    pub fn values_of(&self, attribute_type: &str) -> Vec<&str> {
        self.rdn_sequence
            .iter()
            .flat_map(|rdn| rdn.attributes.iter())
            .filter(|attr| attr.attribute_type == attribute_type)
            .filter_map(|attr| attr.attribute_value.as_str())
            .collect()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self
            .rdn_sequence
            .iter()
            .rev()
            .map(|rdn| rdn.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{}", formatted)
    }
}

impl DecodableFrom<Element> for Name {}

impl Decoder<Element, Name> for Element {
    type Error = Error;

    fn decode(&self) -> Result<Name> {
        match self {
            Element::Sequence(elements) => {
                let rdn_sequence = elements
                    .iter()
                    .map(|elem| elem.decode())
                    .collect::<Result<Vec<RelativeDistinguishedName>>>()?;
                Ok(Name { rdn_sequence })
            }
            _ => Err(Error::NameExpectedSequence),
        }
    }
}

/// Relative Distinguished Name (RDN)
///
/// Usually a single attribute; several make a multi-valued RDN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeDistinguishedName {
    pub attributes: Vec<AttributeTypeAndValue>,
}

impl RelativeDistinguishedName {
    pub fn new(attributes: Vec<AttributeTypeAndValue>) -> Self {
        Self { attributes }
    }
}

impl fmt::Display for RelativeDistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self
            .attributes
            .iter()
            .map(|attr| attr.to_string())
            .collect::<Vec<_>>()
            .join("+");
        write!(f, "{}", formatted)
    }
}

impl DecodableFrom<Element> for RelativeDistinguishedName {}

impl Decoder<Element, RelativeDistinguishedName> for Element {
    type Error = Error;

    fn decode(&self) -> Result<RelativeDistinguishedName> {
        let Element::Set(elements) = self else {
            return Err(Error::RdnExpectedSet);
        };
        if elements.is_empty() {
            return Err(Error::RdnEmpty);
        }
        let attributes = elements
            .iter()
            .map(|elem| elem.decode())
            .collect::<Result<Vec<AttributeTypeAndValue>>>()?;
        Ok(RelativeDistinguishedName { attributes })
    }
}

/// One `type=value` pair of an RDN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTypeAndValue {
    pub attribute_type: ObjectIdentifier,
    pub attribute_value: AttributeValue,
}

impl AttributeTypeAndValue {
    pub const OID_COMMON_NAME: &'static str = "2.5.4.3";
    pub const OID_SERIAL_NUMBER: &'static str = "2.5.4.5";
    pub const OID_COUNTRY_NAME: &'static str = "2.5.4.6";
    pub const OID_LOCALITY_NAME: &'static str = "2.5.4.7";
    pub const OID_STATE_OR_PROVINCE_NAME: &'static str = "2.5.4.8";
    pub const OID_STREET_ADDRESS: &'static str = "2.5.4.9";
    pub const OID_ORGANIZATION_NAME: &'static str = "2.5.4.10";
    pub const OID_ORGANIZATIONAL_UNIT_NAME: &'static str = "2.5.4.11";
    pub const OID_DOMAIN_COMPONENT: &'static str = "0.9.2342.19200300.100.1.25";
    pub const OID_USER_ID: &'static str = "0.9.2342.19200300.100.1.1";
    pub const OID_EMAIL_ADDRESS: &'static str = "1.2.840.113549.1.9.1";

    pub fn new(attribute_type: ObjectIdentifier, attribute_value: impl Into<String>) -> Self {
        Self {
            attribute_type,
            attribute_value: AttributeValue::Text(attribute_value.into()),
        }
    }
}

impl OidName for AttributeTypeAndValue {
    fn oid_name(&self) -> Option<&'static str> {
        lookup(ATTRIBUTE_SHORT_NAMES, &self.attribute_type)
    }
}

impl fmt::Display for AttributeTypeAndValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.oid_name() {
            Some(name) => write!(f, "{}={}", name, self.attribute_value),
            None => write!(f, "{}={}", self.attribute_type, self.attribute_value),
        }
    }
}

impl DecodableFrom<Element> for AttributeTypeAndValue {}

impl Decoder<Element, AttributeTypeAndValue> for Element {
    type Error = Error;

    fn decode(&self) -> Result<AttributeTypeAndValue> {
        let Element::Sequence(elements) = self else {
            return Err(Error::AttributeTypeAndValueExpectedSequence);
        };
        let [attribute_type, attribute_value] = elements.as_slice() else {
            return Err(Error::AttributeTypeAndValueInvalidElementCount);
        };
        let Element::ObjectIdentifier(attribute_type) = attribute_type else {
            return Err(Error::AttributeTypeAndValueExpectedOid);
        };
        let attribute_value = match attribute_value.as_str() {
            Some(text) => AttributeValue::Text(text.to_string()),
            None => AttributeValue::Encoded(attribute_value.to_der()),
        };
        Ok(AttributeTypeAndValue {
            attribute_type: attribute_type.clone(),
            attribute_value,
        })
    }
}

/// Value of an attribute: text for the character string types, the DER
/// encoding for anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    Encoded(Vec<u8>),
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            AttributeValue::Encoded(_) => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(text) => write!(f, "{}", escape(text)),
            AttributeValue::Encoded(der) => {
                write!(f, "#")?;
                der.iter().try_for_each(|b| write!(f, "{:02x}", b))
            }
        }
    }
}

static ATTRIBUTE_SHORT_NAMES: &[(&str, &str)] = &[
    (AttributeTypeAndValue::OID_COMMON_NAME, "CN"),
    (AttributeTypeAndValue::OID_COUNTRY_NAME, "C"),
    (AttributeTypeAndValue::OID_LOCALITY_NAME, "L"),
    (AttributeTypeAndValue::OID_STATE_OR_PROVINCE_NAME, "ST"),
    (AttributeTypeAndValue::OID_STREET_ADDRESS, "STREET"),
    (AttributeTypeAndValue::OID_ORGANIZATION_NAME, "O"),
    (AttributeTypeAndValue::OID_ORGANIZATIONAL_UNIT_NAME, "OU"),
    (AttributeTypeAndValue::OID_SERIAL_NUMBER, "SERIALNUMBER"),
    (AttributeTypeAndValue::OID_DOMAIN_COMPONENT, "DC"),
    (AttributeTypeAndValue::OID_USER_ID, "UID"),
    (AttributeTypeAndValue::OID_EMAIL_ADDRESS, "emailAddress"),
];

/// RFC 4514 section 2.4 escaping.
fn escape(value: &str) -> String {
    let last = value.chars().count().saturating_sub(1);
    let mut escaped = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        let special = matches!(c, ',' | '+' | '"' | '\\' | '<' | '>' | ';')
            || (i == 0 && matches!(c, '#' | ' '))
            || (i == last && c == ' ');
        if special {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
