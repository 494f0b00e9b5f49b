//! Typed ASN.1 values over a parsed DER tree.
//!
//! [`ASN1Object`] is decoded from a [`Der`] value and exposes every node as an
//! [`Element`]. Primitive content octets are validated against DER's rules
//! for their type (minimal INTEGERs, complete OID subidentifiers, well formed
//! times) while structure is preserved: SEQUENCE, SET and constructed
//! context-specific values keep their children in order.

use std::{fmt::Display, str::FromStr};

use chrono::NaiveDateTime;
use mitate::decoder::{DecodableFrom, Decoder};
use mitate_der::{Der, Tag, Tlv, UniversalTag, base128};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};

pub mod error;
mod time;

pub use error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ASN1Object {
    element: Element,
}

impl ASN1Object {
    pub fn new(element: Element) -> Self {
        ASN1Object { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn into_element(self) -> Element {
        self.element
    }
}

impl DecodableFrom<Der> for ASN1Object {}

impl Decoder<Der, ASN1Object> for Der {
    type Error = Error;

    fn decode(&self) -> Result<ASN1Object> {
        let element = Element::try_from(self.root())?;
        Ok(ASN1Object { element })
    }
}

impl TryFrom<&[u8]> for ASN1Object {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        let der: Der = value.decode()?;
        der.decode()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Boolean(bool),
    Integer(Integer),
    BitString(BitString),
    OctetString(OctetString),
    Null,
    ObjectIdentifier(ObjectIdentifier),
    UTF8String(String),
    Sequence(Vec<Element>),
    Set(Vec<Element>),
    NumericString(String),
    PrintableString(String),
    TeletexString(String),
    IA5String(String),
    VisibleString(String),
    UniversalString(String),
    BMPString(String),
    UTCTime(NaiveDateTime),
    GeneralizedTime(NaiveDateTime),
    ContextSpecific(Tagged),
    Unimplemented(Tlv),
}

impl Element {
    /// Short type name for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Boolean(_) => "BOOLEAN",
            Element::Integer(_) => "INTEGER",
            Element::BitString(_) => "BIT STRING",
            Element::OctetString(_) => "OCTET STRING",
            Element::Null => "NULL",
            Element::ObjectIdentifier(_) => "OBJECT IDENTIFIER",
            Element::UTF8String(_) => "UTF8String",
            Element::Sequence(_) => "SEQUENCE",
            Element::Set(_) => "SET",
            Element::NumericString(_) => "NumericString",
            Element::PrintableString(_) => "PrintableString",
            Element::TeletexString(_) => "TeletexString",
            Element::IA5String(_) => "IA5String",
            Element::VisibleString(_) => "VisibleString",
            Element::UniversalString(_) => "UniversalString",
            Element::BMPString(_) => "BMPString",
            Element::UTCTime(_) => "UTCTime",
            Element::GeneralizedTime(_) => "GeneralizedTime",
            Element::ContextSpecific(_) => "context-specific",
            Element::Unimplemented(_) => "unimplemented",
        }
    }

    /// Text of any of the character string types.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::UTF8String(s)
            | Element::NumericString(s)
            | Element::PrintableString(s)
            | Element::TeletexString(s)
            | Element::IA5String(s)
            | Element::VisibleString(s)
            | Element::UniversalString(s)
            | Element::BMPString(s) => Some(s),
            _ => None,
        }
    }

    /// Either time type; UTCTime and GeneralizedTime are interchangeable in
    /// certificate validity.
    pub fn as_time(&self) -> Option<&NaiveDateTime> {
        match self {
            Element::UTCTime(t) | Element::GeneralizedTime(t) => Some(t),
            _ => None,
        }
    }

    /// DER encoding of the value.
    pub fn to_der(&self) -> Vec<u8> {
        Tlv::from(self).to_der()
    }
}

impl TryFrom<&Tlv> for Element {
    type Error = Error;

    fn try_from(tlv: &Tlv) -> Result<Self> {
        match tlv.tag() {
            Tag::Universal { tag, .. } => match (tag, tlv.data(), tlv.tlvs()) {
                (UniversalTag::Sequence, _, Some(tlvs)) => Ok(Element::Sequence(children(tlvs)?)),
                (UniversalTag::Set, _, Some(tlvs)) => Ok(Element::Set(children(tlvs)?)),
                (tag, Some(data), _) => primitive(*tag, data, tlv),
                _ => Ok(Element::Unimplemented(tlv.clone())),
            },
            Tag::ContextSpecific { slot, .. } => {
                let body = match (tlv.data(), tlv.tlvs()) {
                    (_, Some(tlvs)) => TaggedBody::Constructed(children(tlvs)?),
                    (Some(data), None) => TaggedBody::Primitive(data.to_vec()),
                    (None, None) => TaggedBody::Primitive(Vec::new()),
                };
                Ok(Element::ContextSpecific(Tagged { slot: *slot, body }))
            }
            Tag::Application { .. } | Tag::Private { .. } => {
                Ok(Element::Unimplemented(tlv.clone()))
            }
        }
    }
}

fn children(tlvs: &[Tlv]) -> Result<Vec<Element>> {
    tlvs.iter().map(Element::try_from).collect()
}

fn primitive(tag: UniversalTag, data: &[u8], tlv: &Tlv) -> Result<Element> {
    let element = match tag {
        UniversalTag::Boolean => match data {
            [0x00] => Element::Boolean(false),
            [0xff] => Element::Boolean(true),
            _ => return Err(Error::InvalidBoolean),
        },
        UniversalTag::Integer => Element::Integer(Integer::try_from(data)?),
        UniversalTag::BitString => Element::BitString(BitString::try_from(data)?),
        UniversalTag::OctetString => Element::OctetString(OctetString::from(data)),
        UniversalTag::Null => {
            if !data.is_empty() {
                return Err(Error::InvalidNull);
            }
            Element::Null
        }
        UniversalTag::ObjectIdentifier => {
            Element::ObjectIdentifier(ObjectIdentifier::try_from(data)?)
        }
        UniversalTag::UTF8String => Element::UTF8String(
            String::from_utf8(data.to_vec()).map_err(|_| Error::Utf8StringInvalidUtf8)?,
        ),
        UniversalTag::NumericString => {
            if !data.iter().all(|&b| b.is_ascii_digit() || b == b' ') {
                return Err(Error::NumericStringInvalidEncoding);
            }
            Element::NumericString(String::from_utf8_lossy(data).into_owned())
        }
        UniversalTag::PrintableString => Element::PrintableString(
            String::from_utf8(data.to_vec()).map_err(|_| Error::PrintableStringInvalidEncoding)?,
        ),
        // T.61 in theory, Latin-1 in practice.
        UniversalTag::TeletexString => {
            Element::TeletexString(data.iter().map(|&b| char::from(b)).collect())
        }
        UniversalTag::IA5String => {
            if !data.is_ascii() {
                return Err(Error::Ia5StringInvalidEncoding);
            }
            Element::IA5String(String::from_utf8_lossy(data).into_owned())
        }
        UniversalTag::VisibleString => {
            if !data.is_ascii() {
                return Err(Error::VisibleStringInvalidEncoding);
            }
            Element::VisibleString(String::from_utf8_lossy(data).into_owned())
        }
        UniversalTag::UniversalString => Element::UniversalString(parse_universal_string(data)?),
        UniversalTag::BMPString => Element::BMPString(parse_bmp_string(data)?),
        UniversalTag::UTCTime => Element::UTCTime(time::parse_utc_time(data)?),
        UniversalTag::GeneralizedTime => {
            Element::GeneralizedTime(time::parse_generalized_time(data)?)
        }
        _ => Element::Unimplemented(tlv.clone()),
    };
    Ok(element)
}

fn parse_bmp_string(data: &[u8]) -> Result<String> {
    if data.len() % 2 != 0 {
        return Err(Error::BmpStringOddLength(data.len()));
    }
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|_| Error::BmpStringConversionFailed)
}

// UCS-4, big endian.
fn parse_universal_string(data: &[u8]) -> Result<String> {
    if data.len() % 4 != 0 {
        return Err(Error::UniversalStringInvalidLength(data.len()));
    }
    data.chunks_exact(4)
        .map(|quad| {
            let code = u32::from_be_bytes([quad[0], quad[1], quad[2], quad[3]]);
            char::from_u32(code).ok_or(Error::UniversalStringInvalidCodePoint(code))
        })
        .collect()
}

impl From<&Element> for Tlv {
    fn from(element: &Element) -> Self {
        let primitive = |tag, data: Vec<u8>| Tlv::new_primitive(Tag::universal_of(tag), data);
        let constructed = |tag, elements: &[Element]| {
            Tlv::new_constructed(Tag::universal_of(tag), elements.iter().map(Tlv::from).collect())
        };
        match element {
            Element::Boolean(b) => {
                primitive(UniversalTag::Boolean, vec![if *b { 0xff } else { 0x00 }])
            }
            Element::Integer(i) => {
                primitive(UniversalTag::Integer, i.as_bigint().to_signed_bytes_be())
            }
            Element::BitString(bs) => {
                let mut data = Vec::with_capacity(bs.as_bytes().len() + 1);
                data.push(bs.unused_bits());
                data.extend_from_slice(bs.as_bytes());
                primitive(UniversalTag::BitString, data)
            }
            Element::OctetString(os) => primitive(UniversalTag::OctetString, os.as_bytes().to_vec()),
            Element::Null => primitive(UniversalTag::Null, Vec::new()),
            Element::ObjectIdentifier(oid) => primitive(UniversalTag::ObjectIdentifier, oid.to_der()),
            Element::UTF8String(s) => primitive(UniversalTag::UTF8String, s.as_bytes().to_vec()),
            Element::Sequence(elements) => constructed(UniversalTag::Sequence, elements.as_slice()),
            Element::Set(elements) => constructed(UniversalTag::Set, elements.as_slice()),
            Element::NumericString(s) => {
                primitive(UniversalTag::NumericString, s.as_bytes().to_vec())
            }
            Element::PrintableString(s) => {
                primitive(UniversalTag::PrintableString, s.as_bytes().to_vec())
            }
            // Decoding maps each octet to one char below U+0100.
            Element::TeletexString(s) => {
                primitive(UniversalTag::TeletexString, s.chars().map(|c| c as u8).collect())
            }
            Element::IA5String(s) => primitive(UniversalTag::IA5String, s.as_bytes().to_vec()),
            Element::VisibleString(s) => {
                primitive(UniversalTag::VisibleString, s.as_bytes().to_vec())
            }
            Element::UniversalString(s) => primitive(
                UniversalTag::UniversalString,
                s.chars().flat_map(|c| u32::from(c).to_be_bytes()).collect(),
            ),
            Element::BMPString(s) => primitive(
                UniversalTag::BMPString,
                s.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            ),
            Element::UTCTime(t) => {
                primitive(UniversalTag::UTCTime, time::format_utc_time(t).into_bytes())
            }
            Element::GeneralizedTime(t) => primitive(
                UniversalTag::GeneralizedTime,
                time::format_generalized_time(t).into_bytes(),
            ),
            Element::ContextSpecific(tagged) => match tagged.body() {
                TaggedBody::Primitive(data) => Tlv::new_primitive(
                    Tag::ContextSpecific { slot: tagged.slot(), constructed: false },
                    data.clone(),
                ),
                TaggedBody::Constructed(elements) => Tlv::new_constructed(
                    Tag::ContextSpecific { slot: tagged.slot(), constructed: true },
                    elements.iter().map(Tlv::from).collect(),
                ),
            },
            Element::Unimplemented(tlv) => tlv.clone(),
        }
    }
}

/// Content of a context-specific tag.
///
/// Primitive (IMPLICIT) values keep their raw octets since only the
/// surrounding schema knows the underlying type. Constructed values keep
/// their decoded children; an EXPLICIT tag has exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagged {
    slot: u32,
    body: TaggedBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaggedBody {
    Primitive(Vec<u8>),
    Constructed(Vec<Element>),
}

impl Tagged {
    pub fn new(slot: u32, body: TaggedBody) -> Self {
        Tagged { slot, body }
    }

    pub fn slot(&self) -> u32 {
        self.slot
    }

    pub fn body(&self) -> &TaggedBody {
        &self.body
    }

    pub fn data(&self) -> Option<&[u8]> {
        match &self.body {
            TaggedBody::Primitive(data) => Some(data),
            TaggedBody::Constructed(_) => None,
        }
    }

    pub fn elements(&self) -> Option<&[Element]> {
        match &self.body {
            TaggedBody::Constructed(elements) => Some(elements),
            TaggedBody::Primitive(_) => None,
        }
    }

    /// The single element wrapped by an EXPLICIT tag.
    pub fn explicit(&self) -> Option<&Element> {
        match self.elements() {
            Some([element]) => Some(element),
            _ => None,
        }
    }
}

// ASN.1 INTEGER is arbitrary sized and signed.
// DER requires the shortest two's complement encoding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Integer {
    inner: BigInt,
}

impl Integer {
    pub fn as_bigint(&self) -> &BigInt {
        &self.inner
    }

    pub fn to_u32(&self) -> Option<u32> {
        self.inner.to_u32()
    }

    pub fn to_i64(&self) -> Option<i64> {
        self.inner.to_i64()
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.inner.to_u64()
    }

    pub fn is_negative(&self) -> bool {
        self.inner.is_negative()
    }

    /// Size in bits as conventionally reported for RSA moduli and DSA primes:
    /// the encoded length after dropping a single sign-padding zero octet.
    pub fn size_bits(&self) -> usize {
        let bytes = self.inner.to_signed_bytes_be();
        let len = match bytes.as_slice() {
            [0x00, _, ..] => bytes.len() - 1,
            _ => bytes.len(),
        };
        len * 8
    }

    /// Number of significant bits of the magnitude.
    pub fn bit_len(&self) -> u64 {
        self.inner.bits()
    }

    /// Lowercase hex without leading zeros, `-` prefixed when negative.
    pub fn to_hex(&self) -> String {
        format!("{:x}", self.inner)
    }
}

impl TryFrom<&[u8]> for Integer {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        match value {
            [] => return Err(Error::IntegerNoData),
            [0x00, next, ..] if next & 0x80 == 0 => return Err(Error::IntegerNonMinimal),
            [0xff, next, ..] if next & 0x80 != 0 => return Err(Error::IntegerNonMinimal),
            _ => {}
        }
        Ok(Integer {
            inner: BigInt::from_signed_bytes_be(value),
        })
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer {
            inner: BigInt::from(value),
        }
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectIdentifier {
    inner: Vec<u64>,
}

impl ObjectIdentifier {
    pub fn arcs(&self) -> &[u64] {
        &self.inner
    }

    /// Content octets: the first two arcs share one subidentifier.
    pub fn to_der(&self) -> Vec<u8> {
        let (first, rest) = match self.inner.as_slice() {
            [arc1, arc2, rest @ ..] => (arc1 * 40 + arc2, rest),
            [arc1] => (arc1 * 40, &[][..]),
            [] => return Vec::new(),
        };
        std::iter::once(first)
            .chain(rest.iter().copied())
            .flat_map(base128)
            .collect()
    }
}

impl TryFrom<&[u8]> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::ObjectIdentifierNoData);
        }

        let mut subids = Vec::new();
        let mut val = 0u64;
        let mut start = true;
        for &b in value {
            if start && b == 0x80 {
                return Err(Error::ObjectIdentifierNonMinimal);
            }
            if val > (u64::MAX >> 7) {
                return Err(Error::ObjectIdentifierComponentTooLarge);
            }
            val = (val << 7) | u64::from(b & 0x7f);
            start = b & 0x80 == 0;
            if start {
                subids.push(val);
                val = 0;
            }
        }
        if !start {
            // The last octet still had its continuation bit set.
            return Err(Error::ObjectIdentifierIncompleteEncoding);
        }

        // The first subidentifier packs two arcs: arc1 * 40 + arc2.
        let first = subids[0];
        let (arc1, arc2) = match first {
            0..40 => (0, first),
            40..80 => (1, first - 40),
            _ => (2, first - 80),
        };
        let mut inner = Vec::with_capacity(subids.len() + 1);
        inner.push(arc1);
        inner.push(arc2);
        inner.extend_from_slice(&subids[1..]);
        Ok(ObjectIdentifier { inner })
    }
}

impl Display for ObjectIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self
            .inner
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{}", s)
    }
}

impl FromStr for ObjectIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .split('.')
            .map(|s| s.parse::<u64>().map_err(Error::ObjectIdentifierInvalidComponent))
            .collect::<Result<Vec<u64>>>()?;
        if inner.len() < 2 {
            return Err(Error::ObjectIdentifierTooFewComponents);
        }
        Ok(ObjectIdentifier { inner })
    }
}

impl PartialEq<&str> for ObjectIdentifier {
    fn eq(&self, other: &&str) -> bool {
        let mut parts = other.split('.');
        self.inner
            .iter()
            .all(|arc| parts.next().and_then(|p| p.parse::<u64>().ok()) == Some(*arc))
            && parts.next().is_none()
    }
}

impl PartialEq<ObjectIdentifier> for &str {
    fn eq(&self, other: &ObjectIdentifier) -> bool {
        other == self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString {
    unused: u8,
    data: Vec<u8>,
}

impl BitString {
    pub fn new(unused: u8, data: Vec<u8>) -> Self {
        BitString { unused, data }
    }

    /// Returns the number of unused bits in the last byte
    pub fn unused_bits(&self) -> u8 {
        self.unused
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the total number of bits (excluding unused bits)
    pub fn bit_len(&self) -> usize {
        if self.data.is_empty() {
            0
        } else {
            self.data.len() * 8 - self.unused as usize
        }
    }

    /// Named-bit lookup: bit 0 is the most significant bit of the first
    /// octet. Bits past the end read as unset.
    pub fn is_set(&self, bit: usize) -> bool {
        if bit >= self.bit_len() {
            return false;
        }
        self.data[bit / 8] & (0x80 >> (bit % 8)) != 0
    }
}

impl AsRef<[u8]> for BitString {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl TryFrom<&[u8]> for BitString {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        match value {
            [] => Err(Error::BitStringNoData),
            [unused, ..] if *unused > 7 => Err(Error::BitStringUnusedBitsOutOfRange(*unused)),
            [unused] if *unused != 0 => Err(Error::BitStringUnusedBitsOnEmpty(*unused)),
            [unused, data @ ..] => Ok(BitString {
                unused: *unused,
                data: data.to_vec(),
            }),
        }
    }
}

impl TryFrom<&BitString> for ASN1Object {
    type Error = Error;

    fn try_from(value: &BitString) -> Result<Self> {
        ASN1Object::try_from(value.as_bytes())
    }
}

impl Display for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = (0..self.bit_len())
            .map(|i| if self.is_set(i) { '1' } else { '0' })
            .collect();
        write!(f, "{}", bits)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OctetString {
    inner: Vec<u8>,
}

impl OctetString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.inner
    }
}

impl TryFrom<&OctetString> for ASN1Object {
    type Error = Error;

    fn try_from(value: &OctetString) -> Result<Self> {
        ASN1Object::try_from(value.as_bytes())
    }
}

impl AsRef<[u8]> for OctetString {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<Vec<u8>> for OctetString {
    fn from(value: Vec<u8>) -> Self {
        OctetString { inner: value }
    }
}

impl From<&[u8]> for OctetString {
    fn from(value: &[u8]) -> Self {
        OctetString {
            inner: value.to_vec(),
        }
    }
}

impl Display for OctetString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self
            .inner
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<String>();
        write!(f, "{}", s)
    }
}
