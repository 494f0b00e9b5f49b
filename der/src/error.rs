use nom::error::{ErrorKind, ParseError};
use thiserror::Error;

/// Errors raised while splitting bytes into DER tag-length-value triples.
///
/// Every variant is a structural rejection: the bytes are not a single,
/// canonical DER value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("empty input")]
    EmptyInput,
    #[error("input ends in the middle of a value")]
    Truncated,

    // Tag errors
    #[error("high tag number form used for a number below 31")]
    NonMinimalTag,
    #[error("tag number does not fit in 32 bits")]
    TagNumberTooLarge,
    #[error("end-of-contents marker outside an indefinite length value")]
    EndOfContents,
    #[error("{0} must use the {1} encoding")]
    InvalidConstructedBit(String, &'static str),

    // Length errors
    #[error("indefinite length is not allowed in DER")]
    IndefiniteLength,
    #[error("length is not minimally encoded")]
    NonMinimalLength,
    #[error("reserved length octet 0xff")]
    ReservedLength,
    #[error("length does not fit in memory")]
    LengthTooLarge,
    #[error("length {length} exceeds the {remaining} remaining bytes")]
    LengthExceedsInput { length: usize, remaining: usize },

    #[error("{0} trailing bytes after the top-level value")]
    TrailingData(usize),
    #[error("values nested deeper than {0} levels")]
    NestingTooDeep(usize),

    #[error("parser error {0:?}")]
    Parser(ErrorKind),
}

pub type Result<T> = std::result::Result<T, Error>;

impl ParseError<&[u8]> for Error {
    fn from_error_kind(_input: &[u8], kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Eof => Error::Truncated,
            kind => Error::Parser(kind),
        }
    }

    fn append(_input: &[u8], _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl From<nom::Err<Error>> for Error {
    fn from(err: nom::Err<Error>) -> Self {
        match err {
            nom::Err::Incomplete(_) => Error::Truncated,
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
        }
    }
}
