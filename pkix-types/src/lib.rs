//! PKIX (Public Key Infrastructure using X.509) Common Types
//!
//! Building blocks shared by key and certificate structures: algorithm
//! identifiers and their OID tables, elliptic curve parameters, distinguished
//! names, extensions and SubjectPublicKeyInfo.
//!
//! These types are defined in various RFCs including:
//! - RFC 5280: Internet X.509 Public Key Infrastructure Certificate and CRL Profile
//! - RFC 3279 / RFC 5480: algorithm and curve parameters
//! - RFC 4514: string representation of distinguished names

pub mod algorithm;
pub mod error;
pub mod extension;
pub mod name;
pub mod oid_name;
pub mod subject_public_key_info;

pub use algorithm::{AlgorithmIdentifier, AlgorithmParameters, HashAlgorithm, KeyAlgorithm};
pub use error::{Error, Result};
pub use extension::Extension;
pub use name::{AttributeTypeAndValue, AttributeValue, Name, RelativeDistinguishedName};
pub use oid_name::{OidName, lookup};
pub use subject_public_key_info::SubjectPublicKeyInfo;
