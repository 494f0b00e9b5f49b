//! # mitate
//!
//! Core traits and the output model shared by every mitate crate.
//!
//! ## Overview
//!
//! An inspection walks unknown bytes through a chain of conversions:
//! ```text
//! bytes → Der → ASN1Object → PrivateKeyInfo / Certificate / ... → Description
//! ```
//!
//! Each arrow is a [`decoder::Decoder`] implementation. The marker trait
//! [`decoder::DecodableFrom`] restricts which pairs may be converted, so an
//! impossible conversion is a compile error rather than a runtime surprise.
//!
//! Every recognized artifact is summarized as a [`Description`], the uniform
//! tree handed to a presentation layer.
//!
//! ## Example
//!
//! ```ignore
//! use mitate::decoder::Decoder;
//! use mitate_asn1::ASN1Object;
//! use mitate_der::Der;
//!
//! let bytes: &[u8] = &[0x30, 0x03, 0x02, 0x01, 0x01];
//! let der: Der = bytes.decode()?;
//! let asn1: ASN1Object = der.decode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod description;

pub use description::{Attribute, Describe, Description};
