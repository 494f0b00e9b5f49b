//! Format classifiers.
//!
//! Each [`Format`] is a predicate over raw bytes. A parse failure while
//! probing is a negative answer, never an error for the caller.

use mitate::Description;
use mitate::decoder::Decoder;
use mitate_der::Der;
use mitate_pem::decode_any_base64;

use crate::error::Result;
use crate::jwt::Jwt;
use crate::recognize::{Encoding, describe_der};

/// Input formats in the order the orchestrator tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One DER value covering the whole buffer.
    Der,
    /// Base64 text (optionally PEM armored) whose decoded bytes are DER.
    Base64Der,
    /// Compact-serialized JSON Web Token.
    Jwt,
    /// Textual UUID.
    Uuid,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Der, Format::Base64Der, Format::Jwt, Format::Uuid];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Der => "DER",
            Format::Base64Der => "base64 DER",
            Format::Jwt => "JWT",
            Format::Uuid => "UUID",
        }
    }

    /// Whether `data` looks like this format.
    pub fn matches(&self, data: &[u8]) -> bool {
        let outcome = match self {
            Format::Der => binary_der(data).map(|_| ()),
            Format::Base64Der => base64_der(data).map(|_| ()),
            Format::Jwt => Jwt::try_from(data).map(|_| ()),
            Format::Uuid => crate::identifier::parse(data).map(|_| ()),
        };
        match outcome {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(format = self.name(), error = %e, "classifier rejected input");
                false
            }
        }
    }

    /// Classifies and decodes `data` in one pass.
    pub(crate) fn describe(&self, data: &[u8]) -> Result<Description> {
        match self {
            Format::Der => Ok(describe_der(&binary_der(data)?, Encoding::Binary)),
            Format::Base64Der => Ok(describe_der(&base64_der(data)?, Encoding::Base64)),
            Format::Jwt => Ok(Jwt::try_from(data)?.describe()),
            Format::Uuid => Ok(crate::identifier::describe(&crate::identifier::parse(data)?)),
        }
    }
}

// Trailing bytes after the top-level value are rejected by the decoder.
fn binary_der(data: &[u8]) -> Result<Der> {
    let der: Der = data.decode()?;
    Ok(der)
}

fn base64_der(data: &[u8]) -> Result<Der> {
    let decoded = decode_any_base64(data)?;
    let der: Der = decoded.decode()?;
    Ok(der)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const RSA_PUB: &[u8] = include_bytes!("../../testdata/der/rsa-512.pub");
    const GITHUB_CER: &[u8] = include_bytes!("../../testdata/der/github.com.cer");
    const GITHUB_PEM: &[u8] = include_bytes!("../../testdata/b64/github.com.pem");
    const EC_KEY_B64: &[u8] = include_bytes!("../../testdata/b64/prime256v1.key.b64");
    const ED25519_B64URL: &[u8] = include_bytes!("../../testdata/b64/ed25519.pub.b64url");
    const TOKEN: &[u8] = include_bytes!("../../testdata/token.jwt");
    const UUID_V1: &[u8] = include_bytes!("../../testdata/uuid-v1.txt");

    fn matching(data: &[u8]) -> Vec<Format> {
        Format::ALL.into_iter().filter(|f| f.matches(data)).collect()
    }

    #[rstest]
    #[case::der_key(RSA_PUB, vec![Format::Der])]
    #[case::der_cert(GITHUB_CER, vec![Format::Der])]
    #[case::pem(GITHUB_PEM, vec![Format::Base64Der])]
    #[case::base64(EC_KEY_B64, vec![Format::Base64Der])]
    #[case::base64url(ED25519_B64URL, vec![Format::Base64Der])]
    #[case::jwt(TOKEN, vec![Format::Jwt])]
    #[case::uuid(UUID_V1, vec![Format::Uuid])]
    #[case::empty(b"", vec![])]
    #[case::text(b"hello world\n", vec![])]
    fn test_classifiers_are_exclusive(#[case] data: &[u8], #[case] expected: Vec<Format>) {
        assert_eq!(expected, matching(data));
    }

    #[rstest]
    #[case::trailing_byte(&[0x30, 0x03, 0x02, 0x01, 0x05, 0x00])]
    #[case::truncated(&[0x30, 0x03, 0x02, 0x01])]
    #[case::indefinite_length(&[0x30, 0x80, 0x02, 0x01, 0x05, 0x00, 0x00])]
    #[case::non_minimal_length(&[0x30, 0x81, 0x03, 0x02, 0x01, 0x05])]
    fn test_der_near_miss_is_not_der(#[case] data: &[u8]) {
        assert!(!Format::Der.matches(data));
    }

    #[test]
    fn test_base64_trailing_data_is_not_der() {
        // base64 of 30 03 02 01 05 00
        assert!(!Format::Base64Der.matches(b"MAMCAQUA"));
        assert!(Format::Base64Der.matches(b"MAMCAQU="));
    }

    #[test]
    fn test_unwrapped_bytes_are_binary_der() {
        let decoded = decode_any_base64(EC_KEY_B64).unwrap();
        assert!(Format::Der.matches(&decoded));
        assert!(!Format::Base64Der.matches(&decoded));
    }
}
