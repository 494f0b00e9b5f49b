//! OpenSSL's traditional DSA private key structure.

pub mod error;
mod types;

pub use error::{Error, Result};
pub use types::DsaPrivateKey;
