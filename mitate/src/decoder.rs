//! Decoder trait for type-safe conversions.
//!
//! Every stage of an inspection converts one representation into the next:
//! raw bytes become a DER tree, the DER tree becomes typed ASN.1 elements,
//! and elements become key or certificate structures. Each arrow is a
//! `Decoder<T, D>` implementation on the source type.
//!
//! # Design Pattern
//!
//! 1. `Decoder<T, D>` - Performs the actual conversion
//! 2. `DecodableFrom<T>` - Marker trait constraining valid conversions
//!
//! Only pairs that are explicitly marked can be converted, so a typo such as
//! decoding a certificate straight from a byte slice fails at compile time.
//!
//! ```no_run
//! use mitate::decoder::{DecodableFrom, Decoder};
//!
//! struct Hex(String);
//! struct Bytes(Vec<u8>);
//!
//! #[derive(Debug)]
//! struct OddLength;
//!
//! impl DecodableFrom<Hex> for Bytes {}
//!
//! impl Decoder<Hex, Bytes> for Hex {
//!     type Error = OddLength;
//!
//!     fn decode(&self) -> Result<Bytes, Self::Error> {
//!         if self.0.len() % 2 != 0 {
//!             return Err(OddLength);
//!         }
//!         Ok(Bytes(self.0.as_bytes().to_vec()))
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// Implemented by the source type. The destination must implement
/// `DecodableFrom<T>`.
///
/// ```ignore
/// use mitate::decoder::Decoder;
/// use mitate_der::Der;
///
/// let bytes: &[u8] = &[0x30, 0x00];
/// let der: Der = bytes.decode()?;
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if `self` does not have the shape `D` expects.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
pub trait DecodableFrom<T> {}
