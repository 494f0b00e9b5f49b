//! RSASSA-PSS Parameters
//!
//! Defined in [RFC 4055 Section 3.1](https://datatracker.ietf.org/doc/html/rfc4055#section-3.1)

use mitate::decoder::Decoder;
use mitate_asn1::Element;

use super::{AlgorithmParameter, RawAlgorithmParameter};
use crate::algorithm::{AlgorithmIdentifier, HashAlgorithm};
use crate::error::{Error, Result};

/// RSASSA-PSS parameters, reduced to the hash.
///
/// ```asn1
/// RSASSA-PSS-params ::= SEQUENCE {
///     hashAlgorithm      [0] HashAlgorithm DEFAULT sha1,
///     maskGenAlgorithm   [1] MaskGenAlgorithm DEFAULT mgf1SHA1,
///     saltLength         [2] INTEGER DEFAULT 20,
///     trailerField       [3] TrailerField DEFAULT trailerFieldBC
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PssParameters {
    pub hash: HashAlgorithm,
}

impl AlgorithmParameter for PssParameters {
    fn parse(raw: &RawAlgorithmParameter) -> Result<Self> {
        let Element::Sequence(fields) = raw.element() else {
            return Err(Error::InvalidPssParameter("expected SEQUENCE"));
        };
        let hash_field = fields.iter().find_map(|field| match field {
            Element::ContextSpecific(tagged) if tagged.slot() == 0 => Some(tagged),
            _ => None,
        });
        let Some(tagged) = hash_field else {
            return Ok(Self {
                hash: HashAlgorithm::Sha1,
            });
        };
        let element = tagged
            .explicit()
            .ok_or(Error::InvalidPssParameter("hashAlgorithm must be explicitly tagged"))?;
        let algorithm: AlgorithmIdentifier = element.decode()?;
        let hash = HashAlgorithm::from_oid(&algorithm.algorithm)
            .ok_or(Error::InvalidPssParameter("unknown hash algorithm"))?;
        Ok(Self { hash })
    }

    fn parse_null() -> Result<Self> {
        Ok(Self {
            hash: HashAlgorithm::Sha1,
        })
    }
}
