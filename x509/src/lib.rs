//! X.509v3 certificates
//!
//! [`Certificate`] decodes the RFC 5280 structure from an ASN.1 element and
//! describes it: subject, issuer, serial, validity, the usual extensions and
//! the embedded public key as a child description.
//!
//! ```no_run
//! use mitate::Describe;
//! use mitate::decoder::Decoder;
//! use mitate_asn1::ASN1Object;
//! use mitate_x509::Certificate;
//!
//! let der = std::fs::read("github.com.cer").unwrap();
//! let object = ASN1Object::try_from(der.as_slice()).unwrap();
//! let cert: Certificate = object.element().decode().unwrap();
//! println!("{}", cert.describe());
//! ```

pub mod error;
pub mod extensions;
mod types;

pub use error::{Error, Result};
pub use types::{Certificate, TBSCertificate, Validity, Version};
