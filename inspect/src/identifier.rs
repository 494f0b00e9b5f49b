//! Textual UUIDs (RFC 9562), the structured identifiers mitate recognizes.

use chrono::{DateTime, SecondsFormat};
use mitate::Description;
use uuid::{Uuid, Variant};

use crate::error::{Error, Result};

/// Parses the hyphenated, simple, braced or `urn:uuid:` form, ignoring
/// surrounding whitespace.
pub fn parse(data: &[u8]) -> Result<Uuid> {
    let text = std::str::from_utf8(data).map_err(|_| Error::NotText)?;
    Ok(Uuid::parse_str(text.trim())?)
}

pub fn describe(uuid: &Uuid) -> Description {
    let description = Description::new("UUID");
    if uuid.is_nil() {
        return description.with("Version", "nil");
    }
    if uuid.as_u128() == u128::MAX {
        return description.with("Version", "max");
    }
    let mut description = description
        .with("Version", version_name(uuid.get_version_num()))
        .with("Variant", variant_name(uuid.get_variant()));
    description.push_opt("Timestamp", timestamp(uuid));
    description
}

fn version_name(version: usize) -> String {
    let name = match version {
        1 => "time-based",
        2 => "DCE security",
        3 => "name-based, MD5",
        4 => "random",
        5 => "name-based, SHA-1",
        6 => "reordered time-based",
        7 => "Unix-time-ordered",
        8 => "custom",
        _ => "unknown",
    };
    format!("{} ({})", version, name)
}

fn variant_name(variant: Variant) -> &'static str {
    match variant {
        Variant::NCS => "NCS",
        Variant::RFC4122 => "RFC 4122",
        Variant::Microsoft => "Microsoft",
        _ => "future",
    }
}

// Versions 1, 6 and 7 carry a timestamp.
fn timestamp(uuid: &Uuid) -> Option<String> {
    let (secs, nanos) = uuid.get_timestamp()?.to_unix();
    let secs = i64::try_from(secs).ok()?;
    let time = DateTime::from_timestamp(secs, nanos)?;
    Some(time.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const UUID_V1: &[u8] = include_bytes!("../../testdata/uuid-v1.txt");

    #[test]
    fn test_describe_v1() {
        let uuid = parse(UUID_V1).unwrap();
        assert_eq!(
            "UUID\n  Version: 1 (time-based)\n  Variant: RFC 4122\n  Timestamp: 1997-02-03T17:43:12.216875Z\n",
            describe(&uuid).to_string()
        );
    }

    #[test]
    fn test_describe_v7() {
        let uuid = parse(b"01890a5d-ac96-774b-bcce-b302099a8057").unwrap();
        assert_eq!(
            Description::new("UUID")
                .with("Version", "7 (Unix-time-ordered)")
                .with("Variant", "RFC 4122")
                .with("Timestamp", "2023-06-30T03:34:18.518Z"),
            describe(&uuid)
        );
    }

    #[test]
    fn test_describe_v4_has_no_timestamp() {
        let uuid = parse(b"936da01f-9abd-4d9d-80c7-02af85c822a8").unwrap();
        assert_eq!(
            Description::new("UUID")
                .with("Version", "4 (random)")
                .with("Variant", "RFC 4122"),
            describe(&uuid)
        );
    }

    #[rstest]
    #[case::nil("00000000-0000-0000-0000-000000000000", "nil")]
    #[case::max("ffffffff-ffff-ffff-ffff-ffffffffffff", "max")]
    fn test_describe_special(#[case] input: &str, #[case] expected: &str) {
        let uuid = parse(input.as_bytes()).unwrap();
        assert_eq!(Description::new("UUID").with("Version", expected), describe(&uuid));
    }

    #[rstest]
    #[case::ncs("936da01f-9abd-4d9d-00c7-02af85c822a8", "NCS")]
    #[case::microsoft("936da01f-9abd-4d9d-c0c7-02af85c822a8", "Microsoft")]
    #[case::future("936da01f-9abd-4d9d-e0c7-02af85c822a8", "future")]
    fn test_variant(#[case] input: &str, #[case] expected: &str) {
        let uuid = parse(input.as_bytes()).unwrap();
        assert_eq!(Some(expected), describe(&uuid).attribute("Variant"));
    }

    #[rstest]
    #[case::hyphenated("f81d4fae-7dec-11d0-a765-00a0c91e6bf6")]
    #[case::simple("f81d4fae7dec11d0a76500a0c91e6bf6")]
    #[case::braced("{f81d4fae-7dec-11d0-a765-00a0c91e6bf6}")]
    #[case::urn("urn:uuid:f81d4fae-7dec-11d0-a765-00a0c91e6bf6")]
    #[case::upper("F81D4FAE-7DEC-11D0-A765-00A0C91E6BF6")]
    #[case::whitespace("  f81d4fae-7dec-11d0-a765-00a0c91e6bf6\r\n")]
    fn test_parse_forms(#[case] input: &str) {
        assert_eq!(
            parse(UUID_V1).unwrap(),
            parse(input.as_bytes()).unwrap()
        );
    }

    #[rstest]
    #[case::short("f81d4fae-7dec-11d0-a765")]
    #[case::not_hex("g81d4fae-7dec-11d0-a765-00a0c91e6bf6")]
    #[case::misplaced_hyphen("f81d4fa-e7dec-11d0-a765-00a0c91e6bf6")]
    #[case::empty("")]
    fn test_parse_rejects(#[case] input: &str) {
        assert!(parse(input.as_bytes()).is_err());
    }
}
