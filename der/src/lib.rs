//! Strict DER tag-length-value parser.
//!
//! Splits a byte buffer into a tree of [`Tlv`] nodes. Only canonical DER is
//! accepted: definite, minimally encoded lengths, minimal high tag numbers,
//! and exactly one top-level value with nothing after it. Anything else is a
//! typed [`Error`] so callers can treat it as "not DER".

use std::fmt::{self, Display};

use mitate::decoder::{DecodableFrom, Decoder};
use nom::{IResult, Parser};

pub mod error;

pub use error::{Error, Result};

/// Deepest nesting of constructed values accepted before parsing aborts.
pub const MAX_NESTING_DEPTH: usize = 64;

pub const TAG_CONSTRUCTED: u8 = 0x20;
const TAG_CLASS_MASK: u8 = 0xc0;
const TAG_NUMBER_MASK: u8 = 0x1f;
const LENGTH_LONG_FORM: u8 = 0x80;

/// A single, complete DER value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Der {
    root: Tlv,
}

impl Der {
    pub fn new(root: Tlv) -> Self {
        Der { root }
    }

    pub fn root(&self) -> &Tlv {
        &self.root
    }

    pub fn into_root(self) -> Tlv {
        self.root
    }

    /// Total number of bytes the value occupies.
    pub fn consumed(&self) -> usize {
        self.root.encoded_len()
    }

    /// Parses one value from the front of `input`, returning it with the
    /// number of bytes consumed. Bytes after the value are left alone.
    pub fn parse_prefix(input: &[u8]) -> Result<(Tlv, usize)> {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }
        let (_, tlv) = Tlv::parse(input, 1)?;
        let consumed = tlv.encoded_len();
        Ok((tlv, consumed))
    }
}

impl DecodableFrom<&[u8]> for Der {}

impl Decoder<&[u8], Der> for &[u8] {
    type Error = Error;

    fn decode(&self) -> Result<Der> {
        let (root, consumed) = Der::parse_prefix(self)?;
        if consumed != self.len() {
            return Err(Error::TrailingData(self.len() - consumed));
        }
        Ok(Der { root })
    }
}

impl DecodableFrom<Vec<u8>> for Der {}

impl Decoder<Vec<u8>, Der> for Vec<u8> {
    type Error = Error;

    fn decode(&self) -> Result<Der> {
        self.as_slice().decode()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TagClass {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

impl From<u8> for TagClass {
    fn from(value: u8) -> Self {
        match value & TAG_CLASS_MASK {
            0x00 => TagClass::Universal,
            0x40 => TagClass::Application,
            0x80 => TagClass::ContextSpecific,
            _ => TagClass::Private,
        }
    }
}

/// Universal tag numbers with a meaning in X.509 and key formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UniversalTag {
    EndOfContents,
    Boolean,
    Integer,
    BitString,
    OctetString,
    Null,
    ObjectIdentifier,
    Enumerated,
    UTF8String,
    Sequence,
    Set,
    NumericString,
    PrintableString,
    TeletexString,
    IA5String,
    UTCTime,
    GeneralizedTime,
    VisibleString,
    UniversalString,
    BMPString,
    Unimplemented(u32),
}

impl From<u32> for UniversalTag {
    fn from(value: u32) -> Self {
        match value {
            0 => UniversalTag::EndOfContents,
            1 => UniversalTag::Boolean,
            2 => UniversalTag::Integer,
            3 => UniversalTag::BitString,
            4 => UniversalTag::OctetString,
            5 => UniversalTag::Null,
            6 => UniversalTag::ObjectIdentifier,
            10 => UniversalTag::Enumerated,
            12 => UniversalTag::UTF8String,
            16 => UniversalTag::Sequence,
            17 => UniversalTag::Set,
            18 => UniversalTag::NumericString,
            19 => UniversalTag::PrintableString,
            20 => UniversalTag::TeletexString,
            22 => UniversalTag::IA5String,
            23 => UniversalTag::UTCTime,
            24 => UniversalTag::GeneralizedTime,
            26 => UniversalTag::VisibleString,
            28 => UniversalTag::UniversalString,
            30 => UniversalTag::BMPString,
            n => UniversalTag::Unimplemented(n),
        }
    }
}

impl From<UniversalTag> for u32 {
    fn from(value: UniversalTag) -> Self {
        match value {
            UniversalTag::EndOfContents => 0,
            UniversalTag::Boolean => 1,
            UniversalTag::Integer => 2,
            UniversalTag::BitString => 3,
            UniversalTag::OctetString => 4,
            UniversalTag::Null => 5,
            UniversalTag::ObjectIdentifier => 6,
            UniversalTag::Enumerated => 10,
            UniversalTag::UTF8String => 12,
            UniversalTag::Sequence => 16,
            UniversalTag::Set => 17,
            UniversalTag::NumericString => 18,
            UniversalTag::PrintableString => 19,
            UniversalTag::TeletexString => 20,
            UniversalTag::IA5String => 22,
            UniversalTag::UTCTime => 23,
            UniversalTag::GeneralizedTime => 24,
            UniversalTag::VisibleString => 26,
            UniversalTag::UniversalString => 28,
            UniversalTag::BMPString => 30,
            UniversalTag::Unimplemented(n) => n,
        }
    }
}

impl Display for UniversalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniversalTag::EndOfContents => write!(f, "END OF CONTENTS"),
            UniversalTag::Boolean => write!(f, "BOOLEAN"),
            UniversalTag::Integer => write!(f, "INTEGER"),
            UniversalTag::BitString => write!(f, "BIT STRING"),
            UniversalTag::OctetString => write!(f, "OCTET STRING"),
            UniversalTag::Null => write!(f, "NULL"),
            UniversalTag::ObjectIdentifier => write!(f, "OBJECT IDENTIFIER"),
            UniversalTag::Enumerated => write!(f, "ENUMERATED"),
            UniversalTag::UTF8String => write!(f, "UTF8String"),
            UniversalTag::Sequence => write!(f, "SEQUENCE"),
            UniversalTag::Set => write!(f, "SET"),
            UniversalTag::NumericString => write!(f, "NumericString"),
            UniversalTag::PrintableString => write!(f, "PrintableString"),
            UniversalTag::TeletexString => write!(f, "TeletexString"),
            UniversalTag::IA5String => write!(f, "IA5String"),
            UniversalTag::UTCTime => write!(f, "UTCTime"),
            UniversalTag::GeneralizedTime => write!(f, "GeneralizedTime"),
            UniversalTag::VisibleString => write!(f, "VisibleString"),
            UniversalTag::UniversalString => write!(f, "UniversalString"),
            UniversalTag::BMPString => write!(f, "BMPString"),
            UniversalTag::Unimplemented(n) => write!(f, "[UNIVERSAL {}]", n),
        }
    }
}

/// Identifier octets of a value: class, constructed bit and number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Universal { tag: UniversalTag, constructed: bool },
    ContextSpecific { slot: u32, constructed: bool },
    Application { number: u32, constructed: bool },
    Private { number: u32, constructed: bool },
}

impl Tag {
    fn new(class: TagClass, constructed: bool, number: u32) -> Self {
        match class {
            TagClass::Universal => Tag::Universal {
                tag: UniversalTag::from(number),
                constructed,
            },
            TagClass::Application => Tag::Application {
                number,
                constructed,
            },
            TagClass::ContextSpecific => Tag::ContextSpecific {
                slot: number,
                constructed,
            },
            TagClass::Private => Tag::Private {
                number,
                constructed,
            },
        }
    }

    pub fn class(&self) -> TagClass {
        match self {
            Tag::Universal { .. } => TagClass::Universal,
            Tag::ContextSpecific { .. } => TagClass::ContextSpecific,
            Tag::Application { .. } => TagClass::Application,
            Tag::Private { .. } => TagClass::Private,
        }
    }

    pub fn is_constructed(&self) -> bool {
        match self {
            Tag::Universal { constructed, .. }
            | Tag::ContextSpecific { constructed, .. }
            | Tag::Application { constructed, .. }
            | Tag::Private { constructed, .. } => *constructed,
        }
    }

    /// Returns the universal tag, or `None` for the other classes.
    pub fn universal(&self) -> Option<UniversalTag> {
        match self {
            Tag::Universal { tag, .. } => Some(*tag),
            _ => None,
        }
    }

    /// Universal tag with the form DER requires for it.
    pub fn universal_of(tag: UniversalTag) -> Self {
        let constructed = matches!(tag, UniversalTag::Sequence | UniversalTag::Set);
        Tag::Universal { tag, constructed }
    }

    fn number(&self) -> u32 {
        match self {
            Tag::Universal { tag, .. } => u32::from(*tag),
            Tag::ContextSpecific { slot, .. } => *slot,
            Tag::Application { number, .. } | Tag::Private { number, .. } => *number,
        }
    }

    /// Identifier octets, using the high tag number form above 30.
    pub fn to_der(&self) -> Vec<u8> {
        let class = match self.class() {
            TagClass::Universal => 0x00,
            TagClass::Application => 0x40,
            TagClass::ContextSpecific => 0x80,
            TagClass::Private => 0xc0,
        };
        let form = if self.is_constructed() { TAG_CONSTRUCTED } else { 0 };
        let number = self.number();
        if number < u32::from(TAG_NUMBER_MASK) {
            // fits in the low five bits
            return vec![class | form | number as u8];
        }
        let mut octets = vec![class | form | TAG_NUMBER_MASK];
        octets.extend(base128(u64::from(number)));
        octets
    }

    // DER fixes the encoding form of every universal type this parser names.
    fn check_form(&self) -> Result<()> {
        let Tag::Universal { tag, constructed } = self else {
            return Ok(());
        };
        match tag {
            UniversalTag::EndOfContents => Err(Error::EndOfContents),
            UniversalTag::Sequence | UniversalTag::Set if !constructed => Err(
                Error::InvalidConstructedBit(tag.to_string(), "constructed"),
            ),
            UniversalTag::Sequence | UniversalTag::Set | UniversalTag::Unimplemented(_) => Ok(()),
            _ if *constructed => Err(Error::InvalidConstructedBit(tag.to_string(), "primitive")),
            _ => Ok(()),
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Universal { tag, .. } => write!(f, "{}", tag),
            Tag::ContextSpecific { slot, .. } => write!(f, "[{}]", slot),
            Tag::Application { number, .. } => write!(f, "[APPLICATION {}]", number),
            Tag::Private { number, .. } => write!(f, "[PRIVATE {}]", number),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Tlv(Vec<Tlv>),
    Data(Vec<u8>),
}

/// A parsed tag-length-value triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv {
    tag: Tag,
    header_len: usize,
    length: usize,
    value: Value,
}

impl Tlv {
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Content length as declared in the length octets.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Identifier and length octets plus content.
    pub fn encoded_len(&self) -> usize {
        self.header_len + self.length
    }

    /// Content octets of a primitive value.
    pub fn data(&self) -> Option<&[u8]> {
        match &self.value {
            Value::Data(data) => Some(data),
            Value::Tlv(_) => None,
        }
    }

    /// Children of a constructed value.
    pub fn tlvs(&self) -> Option<&[Tlv]> {
        match &self.value {
            Value::Tlv(tlvs) => Some(tlvs),
            Value::Data(_) => None,
        }
    }

    pub fn new_primitive(tag: Tag, data: Vec<u8>) -> Self {
        let length = data.len();
        Tlv {
            header_len: tag.to_der().len() + encode_length(length).len(),
            tag,
            length,
            value: Value::Data(data),
        }
    }

    pub fn new_constructed(tag: Tag, tlvs: Vec<Tlv>) -> Self {
        let length = tlvs.iter().map(Tlv::encoded_len).sum();
        Tlv {
            header_len: tag.to_der().len() + encode_length(length).len(),
            tag,
            length,
            value: Value::Tlv(tlvs),
        }
    }

    /// Serializes the value back to DER.
    ///
    /// Parsing only accepts canonical encodings, so a parsed value
    /// serializes to the octets it was read from.
    pub fn to_der(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.write_der(&mut out);
        out
    }

    fn write_der(&self, out: &mut Vec<u8>) {
        out.extend(self.tag.to_der());
        out.extend(encode_length(self.length));
        match &self.value {
            Value::Data(data) => out.extend_from_slice(data),
            Value::Tlv(tlvs) => tlvs.iter().for_each(|tlv| tlv.write_der(out)),
        }
    }

    fn parse(input: &[u8], depth: usize) -> IResult<&[u8], Tlv, Error> {
        if depth > MAX_NESTING_DEPTH {
            return Err(nom::Err::Failure(Error::NestingTooDeep(MAX_NESTING_DEPTH)));
        }
        let start = input.len();
        let (input, tag) = parse_tag(input)?;
        tag.check_form().map_err(nom::Err::Failure)?;
        let (input, length) = parse_length(input)?;
        if length > input.len() {
            return Err(nom::Err::Failure(Error::LengthExceedsInput {
                length,
                remaining: input.len(),
            }));
        }
        let header_len = start - input.len();
        let (input, content) = take_bytes(input, length)?;

        let value = if tag.is_constructed() {
            // Children must fill the content exactly; the slice bound makes
            // an overlong child fail with LengthExceedsInput.
            let mut tlvs = Vec::new();
            let mut rest = content;
            while !rest.is_empty() {
                let (r, tlv) = Self::parse(rest, depth + 1)?;
                rest = r;
                tlvs.push(tlv);
            }
            Value::Tlv(tlvs)
        } else {
            Value::Data(content.to_vec())
        };

        Ok((
            input,
            Tlv {
                tag,
                header_len,
                length,
                value,
            },
        ))
    }
}

fn encode_length(length: usize) -> Vec<u8> {
    if length < usize::from(LENGTH_LONG_FORM) {
        return vec![length as u8];
    }
    let bytes: Vec<u8> = length
        .to_be_bytes()
        .into_iter()
        .skip_while(|b| *b == 0)
        .collect();
    let mut octets = vec![LENGTH_LONG_FORM | bytes.len() as u8];
    octets.extend(bytes);
    octets
}

/// Base-128 digits, most significant first, continuation bit on all but
/// the last.
pub fn base128(mut value: u64) -> Vec<u8> {
    let mut digits = vec![(value & 0x7f) as u8];
    value >>= 7;
    while value > 0 {
        digits.push((value & 0x7f) as u8 | 0x80);
        value >>= 7;
    }
    digits.reverse();
    digits
}

fn take_u8(input: &[u8]) -> IResult<&[u8], u8, Error> {
    nom::number::complete::be_u8(input)
}

fn take_bytes(input: &[u8], n: usize) -> IResult<&[u8], &[u8], Error> {
    nom::bytes::complete::take(n).parse(input)
}

fn parse_tag(input: &[u8]) -> IResult<&[u8], Tag, Error> {
    let (mut input, first) = take_u8(input)?;
    let class = TagClass::from(first);
    let constructed = first & TAG_CONSTRUCTED == TAG_CONSTRUCTED;
    let low = first & TAG_NUMBER_MASK;
    if low != TAG_NUMBER_MASK {
        return Ok((input, Tag::new(class, constructed, u32::from(low))));
    }

    // High tag number form: base-128, most significant group first.
    let mut number: u32 = 0;
    let mut leading = true;
    loop {
        let (rest, b) = take_u8(input)?;
        input = rest;
        if leading && b == 0x80 {
            return Err(nom::Err::Failure(Error::NonMinimalTag));
        }
        leading = false;
        if number > (u32::MAX >> 7) {
            return Err(nom::Err::Failure(Error::TagNumberTooLarge));
        }
        number = (number << 7) | u32::from(b & 0x7f);
        if b & 0x80 == 0 {
            break;
        }
    }
    if number < u32::from(TAG_NUMBER_MASK) {
        return Err(nom::Err::Failure(Error::NonMinimalTag));
    }
    Ok((input, Tag::new(class, constructed, number)))
}

fn parse_length(input: &[u8]) -> IResult<&[u8], usize, Error> {
    let (input, n) = take_u8(input)?;
    if n & LENGTH_LONG_FORM == 0 {
        // short form: 0-127
        return Ok((input, usize::from(n)));
    }
    match n {
        0x80 => return Err(nom::Err::Failure(Error::IndefiniteLength)),
        0xff => return Err(nom::Err::Failure(Error::ReservedLength)),
        _ => {}
    }

    // long form
    // The low 7 bits count the length octets that follow.
    let count = usize::from(n & 0x7f);
    if count > 8 {
        return Err(nom::Err::Failure(Error::LengthTooLarge));
    }
    let (input, bs) = take_bytes(input, count)?;
    if bs.first() == Some(&0) {
        return Err(nom::Err::Failure(Error::NonMinimalLength));
    }
    let length = bs.iter().fold(0u64, |n, &b| (n << 8) | u64::from(b));
    if length < u64::from(LENGTH_LONG_FORM) {
        return Err(nom::Err::Failure(Error::NonMinimalLength));
    }
    let length = usize::try_from(length).map_err(|_| nom::Err::Failure(Error::LengthTooLarge))?;
    Ok((input, length))
}

#[cfg(test)]
mod tests {
    use mitate::decoder::Decoder;
    use rstest::rstest;

    use crate::{
        Der, Error, MAX_NESTING_DEPTH, Tag, TagClass, Tlv, UniversalTag, Value, parse_length,
        parse_tag,
    };

    fn wrap(tag: u8, content: &[u8]) -> Vec<u8> {
        let mut out = vec![tag];
        let len = content.len();
        if len < 0x80 {
            out.push(len as u8);
        } else {
            let bytes: Vec<u8> = len
                .to_be_bytes()
                .into_iter()
                .skip_while(|b| *b == 0)
                .collect();
            out.push(0x80 | bytes.len() as u8);
            out.extend(bytes);
        }
        out.extend_from_slice(content);
        out
    }

    fn nested_sequences(levels: usize) -> Vec<u8> {
        (1..levels).fold(vec![0x30, 0x00], |inner, _| wrap(0x30, &inner))
    }

    #[rstest(input, expected,
        case(vec![0x02], Tag::Universal { tag: UniversalTag::Integer, constructed: false }),
        case(vec![0x30, 0x01], Tag::Universal { tag: UniversalTag::Sequence, constructed: true }),
        case(vec![0xa0], Tag::ContextSpecific { slot: 0, constructed: true }),
        case(vec![0x81], Tag::ContextSpecific { slot: 1, constructed: false }),
        case(vec![0x61], Tag::Application { number: 1, constructed: true }),
        case(vec![0xdf, 0x1f], Tag::Private { number: 31, constructed: false }),
        case(vec![0x9f, 0x81, 0x00], Tag::ContextSpecific { slot: 128, constructed: false }),
    )]
    fn test_parse_tag(input: Vec<u8>, expected: Tag) {
        let (_, actual) = parse_tag(&input).unwrap();
        assert_eq!(expected, actual);
    }

    #[rstest(input, expected,
        case(vec![0x1f, 0x1e], Error::NonMinimalTag),
        case(vec![0x1f, 0x80, 0x20], Error::NonMinimalTag),
        case(vec![0x1f, 0x90, 0x80, 0x80, 0x80, 0x80, 0x00], Error::TagNumberTooLarge),
        case(vec![0x1f, 0x81], Error::Truncated),
    )]
    fn test_parse_tag_rejects(input: Vec<u8>, expected: Error) {
        let err = parse_tag(&input).unwrap_err();
        assert_eq!(expected, Error::from(err));
    }

    #[rstest(input, expected,
        case(vec![0x02], 0x02),
        case(vec![0x7f], 0x7f),
        case(vec![0x81, 0x80], 0x80),
        case(vec![0x82, 0x02, 0x10], 256 * 0x02 + 0x10),
        case(vec![0x83, 0x01, 0x00, 0x00], 256 * 256),
        case(vec![0x82, 0xff, 0xff], 256 * 0xff + 0xff),
    )]
    fn test_parse_length(input: Vec<u8>, expected: usize) {
        let (_, actual) = parse_length(&input).unwrap();
        assert_eq!(expected, actual);
    }

    #[rstest(input, expected,
        case(vec![0x80], Error::IndefiniteLength),
        case(vec![0xff], Error::ReservedLength),
        case(vec![0x81, 0x7f], Error::NonMinimalLength),
        case(vec![0x82, 0x00, 0x80], Error::NonMinimalLength),
        case(vec![0x89, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], Error::LengthTooLarge),
        case(vec![0x82, 0x01], Error::Truncated),
        case(vec![], Error::Truncated),
    )]
    fn test_parse_length_rejects(input: Vec<u8>, expected: Error) {
        let err = parse_length(&input).unwrap_err();
        assert_eq!(expected, Error::from(err));
    }

    #[rstest(input, expected_tag, expected_data,
        case(vec![0x02, 0x01, 0x01], UniversalTag::Integer, vec![0x01]),
        case(vec![0x05, 0x00], UniversalTag::Null, vec![]),
        case(vec![0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0b], UniversalTag::ObjectIdentifier, vec![0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0b]),
        case(vec![0x0c, 0x04, 0xf0, 0x9f, 0x98, 0x8e], UniversalTag::UTF8String, vec![0xf0, 0x9f, 0x98, 0x8e]),
        case(vec![0x03, 0x04, 0x06, 0x6e, 0x5d, 0xc0], UniversalTag::BitString, vec![0x06, 0x6e, 0x5d, 0xc0]),
    )]
    fn test_decode_primitive(input: Vec<u8>, expected_tag: UniversalTag, expected_data: Vec<u8>) {
        let der: Der = input.decode().unwrap();
        let root = der.root();
        assert_eq!(Some(expected_tag), root.tag().universal());
        assert_eq!(Some(expected_data.as_slice()), root.data());
        assert_eq!(input.len(), der.consumed());
    }

    #[test]
    fn test_decode_structured() {
        let input: &[u8] = &[0x30, 0x09, 0x02, 0x01, 0x07, 0x02, 0x01, 0x08, 0xa1, 0x03, 0x02, 0x01, 0x09];
        let err = input.decode().unwrap_err();
        assert_eq!(
            Error::LengthExceedsInput {
                length: 3,
                remaining: 1
            },
            err
        );

        let input: &[u8] = &[0x30, 0x0b, 0x02, 0x01, 0x07, 0x02, 0x01, 0x08, 0xa1, 0x03, 0x02, 0x01, 0x09];
        let der: Der = input.decode().unwrap();
        let tlvs = der.root().tlvs().unwrap();
        assert_eq!(3, tlvs.len());
        assert_eq!(Some([0x08u8].as_slice()), tlvs[1].data());
        assert_eq!(
            &Tag::ContextSpecific {
                slot: 1,
                constructed: true
            },
            tlvs[2].tag()
        );
        let inner = tlvs[2].tlvs().unwrap();
        assert_eq!(
            Tlv {
                tag: Tag::Universal {
                    tag: UniversalTag::Integer,
                    constructed: false
                },
                header_len: 2,
                length: 1,
                value: Value::Data(vec![0x09]),
            },
            inner[0]
        );
    }

    #[rstest(input, expected,
        case(vec![], Error::EmptyInput),
        case(vec![0x02, 0x01, 0x01, 0x00], Error::TrailingData(1)),
        case(vec![0x02, 0x05, 0x01], Error::LengthExceedsInput { length: 5, remaining: 1 }),
        case(vec![0x30, 0x80, 0x02, 0x01, 0x01, 0x00, 0x00], Error::IndefiniteLength),
        case(vec![0x00, 0x00], Error::EndOfContents),
        case(vec![0x10, 0x00], Error::InvalidConstructedBit("SEQUENCE".to_string(), "constructed")),
        case(vec![0x22, 0x03, 0x02, 0x01, 0x01], Error::InvalidConstructedBit("INTEGER".to_string(), "primitive")),
        case(vec![0x02], Error::Truncated),
    )]
    fn test_decode_rejects(input: Vec<u8>, expected: Error) {
        let err = input.decode().unwrap_err();
        assert_eq!(expected, err);
    }

    #[test]
    fn test_nesting_limit() {
        let ok: Der = nested_sequences(MAX_NESTING_DEPTH).decode().unwrap();
        assert_eq!(Some(UniversalTag::Sequence), ok.root().tag().universal());

        let err = nested_sequences(MAX_NESTING_DEPTH + 1).decode().unwrap_err();
        assert_eq!(Error::NestingTooDeep(MAX_NESTING_DEPTH), err);
    }

    #[test]
    fn test_parse_prefix_reports_consumed() {
        let (tlv, consumed) = Der::parse_prefix(&[0x05, 0x00, 0xde, 0xad]).unwrap();
        assert_eq!(2, consumed);
        assert_eq!(Some(UniversalTag::Null), tlv.tag().universal());
    }

    #[test]
    fn test_decode_certificate() {
        let input = include_bytes!("../../testdata/der/github.com.cer").as_slice();
        let der: Der = input.decode().unwrap();
        assert_eq!(input.len(), der.consumed());
        let outer = der.root().tlvs().unwrap();
        assert_eq!(3, outer.len());
        let tbs = outer[0].tlvs().unwrap();
        assert_eq!(TagClass::ContextSpecific, tbs[0].tag().class());
    }

    #[rstest(tag, expected,
        case(Tag::Universal { tag: UniversalTag::Sequence, constructed: true }, "SEQUENCE"),
        case(Tag::Universal { tag: UniversalTag::Unimplemented(8), constructed: true }, "[UNIVERSAL 8]"),
        case(Tag::ContextSpecific { slot: 0, constructed: true }, "[0]"),
        case(Tag::Application { number: 2, constructed: false }, "[APPLICATION 2]"),
    )]
    fn test_tag_display(tag: Tag, expected: &str) {
        assert_eq!(expected, tag.to_string());
    }

    #[rstest(input,
        case(vec![0x05, 0x00]),
        case(vec![0xa0, 0x03, 0x02, 0x01, 0x02]),
        case(vec![0x9f, 0x1f, 0x01, 0xff]),
        case(vec![0x9f, 0x81, 0x00, 0x00]),
        case(wrap(0x04, &[0x5a; 200])),
    )]
    fn test_to_der_reproduces_input(input: Vec<u8>) {
        let der: Der = input.decode().unwrap();
        assert_eq!(input, der.root().to_der());
    }

    #[test]
    fn test_certificate_to_der() {
        let input = include_bytes!("../../testdata/der/github.com.cer").as_slice();
        let der: Der = input.decode().unwrap();
        assert_eq!(input, der.root().to_der().as_slice());
    }

    #[test]
    fn test_new_constructed_lengths() {
        let int = Tlv::new_primitive(Tag::universal_of(UniversalTag::Integer), vec![0x05]);
        let seq = Tlv::new_constructed(Tag::universal_of(UniversalTag::Sequence), vec![int]);
        assert_eq!(3, seq.length());
        assert_eq!(5, seq.encoded_len());
        assert_eq!(vec![0x30, 0x03, 0x02, 0x01, 0x05], seq.to_der());
    }

    #[rstest(value, expected,
        case(0, vec![0x00]),
        case(127, vec![0x7f]),
        case(128, vec![0x81, 0x00]),
        case(113549, vec![0x86, 0xf7, 0x0d]),
    )]
    fn test_base128(value: u64, expected: Vec<u8>) {
        assert_eq!(expected, crate::base128(value));
    }
}
