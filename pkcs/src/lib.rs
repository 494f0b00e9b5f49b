//! Key structures an inspected DER blob may turn out to be.
//!
//! Each structure decodes from an [`Element`](mitate_asn1::Element) through
//! [`Decoder`](mitate::decoder::Decoder) and summarizes itself through
//! [`Describe`](mitate::Describe):
//!
//! - [`pkcs8::OneAsymmetricKey`] and [`pkcs8::EncryptedPrivateKeyInfo`]
//! - [`public_key::PkixPublicKey`]
//! - [`dsa::DsaPrivateKey`]
//! - [`pkcs1::RSAPrivateKey`] and [`pkcs1::RSAPublicKey`]
//! - [`sec1::ECPrivateKey`]

pub mod dsa;
pub mod error;
pub mod key_attributes;
pub mod pkcs1;
pub mod pkcs8;
pub mod public_key;
pub mod sec1;

pub use error::{Error, Result};
pub use public_key::PkixPublicKey;
