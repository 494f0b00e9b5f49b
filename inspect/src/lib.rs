//! Inspection of unknown bytes.
//!
//! [`inspect`] runs the [`Format`] classifiers in order (binary DER, base64
//! DER, JWT, UUID) and describes the input with the first one that matches.
//! DER is further matched against the known key and certificate shapes:
//!
//! 1. PKCS#8 private key
//! 2. PKCS#8 encrypted private key
//! 3. PKIX public key
//! 4. DSA private key
//! 5. PKCS#1 private key
//! 6. PKCS#1 public key
//! 7. EC private key (SEC1)
//! 8. X.509v3 certificate
//!
//! Input that matches nothing is still described, so inspection never fails.
//!
//! ```no_run
//! let description = mitate_inspect::inspect(b"f81d4fae-7dec-11d0-a765-00a0c91e6bf6");
//! assert_eq!("UUID", description.description);
//! ```

pub mod classify;
pub mod error;
pub mod fallback;
pub mod identifier;
pub mod jwt;
pub mod recognize;

pub use classify::Format;
pub use error::{Error, Result};
pub use jwt::Jwt;
pub use recognize::recognize;

use mitate::Description;

/// Describes `data`, whatever it is.
pub fn inspect(data: &[u8]) -> Description {
    for format in Format::ALL {
        tracing::trace!(format = format.name(), "trying classifier");
        match format.describe(data) {
            Ok(description) => return description,
            Err(e) => tracing::debug!(format = format.name(), error = %e, "classifier rejected input"),
        }
    }
    fallback::unrecognized(data)
}
