//! Error types for ASN.1 value decoding.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while turning DER content octets into typed values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    // Boolean errors
    #[error("BOOLEAN: content must be a single 0x00 or 0xff octet")]
    InvalidBoolean,

    // Null errors
    #[error("NULL: content must be empty")]
    InvalidNull,

    // Integer errors
    #[error("INTEGER: no data")]
    IntegerNoData,
    #[error("INTEGER: not minimally encoded")]
    IntegerNonMinimal,

    // ObjectIdentifier errors
    #[error("OBJECT IDENTIFIER: no data")]
    ObjectIdentifierNoData,
    #[error("OBJECT IDENTIFIER: incomplete encoding")]
    ObjectIdentifierIncompleteEncoding,
    #[error("OBJECT IDENTIFIER: subidentifier has a leading 0x80 octet")]
    ObjectIdentifierNonMinimal,
    #[error("OBJECT IDENTIFIER: component does not fit in 64 bits")]
    ObjectIdentifierComponentTooLarge,
    #[error("OBJECT IDENTIFIER: too few components (need at least 2)")]
    ObjectIdentifierTooFewComponents,
    #[error("OBJECT IDENTIFIER: invalid component: {0}")]
    ObjectIdentifierInvalidComponent(ParseIntError),

    // BitString errors
    #[error("BIT STRING: no data")]
    BitStringNoData,
    #[error("BIT STRING: unused bits {0} out of range (must be 0-7)")]
    BitStringUnusedBitsOutOfRange(u8),
    #[error("BIT STRING: empty string declares {0} unused bits")]
    BitStringUnusedBitsOnEmpty(u8),

    // String type errors
    #[error("UTF8String: invalid UTF-8")]
    Utf8StringInvalidUtf8,
    #[error("PrintableString: invalid encoding")]
    PrintableStringInvalidEncoding,
    #[error("IA5String: invalid encoding")]
    Ia5StringInvalidEncoding,
    #[error("VisibleString: invalid encoding")]
    VisibleStringInvalidEncoding,
    #[error("NumericString: only digits and space are allowed")]
    NumericStringInvalidEncoding,
    #[error("UniversalString: byte length {0} is not a multiple of 4")]
    UniversalStringInvalidLength(usize),
    #[error("UniversalString: invalid code point {0:#x}")]
    UniversalStringInvalidCodePoint(u32),
    #[error("BMPString: odd byte length {0}")]
    BmpStringOddLength(usize),
    #[error("BMPString: conversion to String failed")]
    BmpStringConversionFailed,

    // Time errors
    #[error("UTCTime: invalid format")]
    UtcTimeInvalidFormat,
    #[error("GeneralizedTime: invalid format")]
    GeneralizedTimeInvalidFormat,

    // DER errors
    #[error("invalid DER encoding: {0}")]
    FailedToDecodeDer(#[from] mitate_der::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
