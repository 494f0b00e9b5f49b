//! PKCS#8 private key structures
//!
//! - [`OneAsymmetricKey`] (PrivateKeyInfo): RFC 5958 / RFC 5208
//! - [`EncryptedPrivateKeyInfo`]: RFC 5958 section 3, with the PBES1/PBES2
//!   schemes of RFC 8018 and the PKCS#12 PBE schemes of RFC 7292.

mod encrypted;
pub mod error;
mod types;

pub use encrypted::{EncryptedPrivateKeyInfo, EncryptionScheme, Pbes2Parameters};
pub use error::{Error, Result};
pub use types::{OneAsymmetricKey, Version};
