//! SEC1 - Elliptic Curve Private Key Structure
//!
//! The ECPrivateKey structure of
//! [RFC 5915](https://datatracker.ietf.org/doc/html/rfc5915), as written by
//! `openssl ec -outform DER`.

pub mod error;
mod types;

pub use error::{Error, Result};
pub use types::ECPrivateKey;
