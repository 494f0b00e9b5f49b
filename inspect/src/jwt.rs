//! JSON Web Token (RFC 7519) in compact serialization.
//!
//! Only the structure is decoded. The signature is never verified and time
//! claims are never checked against the clock.

use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use chrono::{DateTime, SecondsFormat};
use mitate::Description;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Claims whose numeric value is seconds since the Unix epoch.
const TIME_CLAIMS: [&str; 3] = ["exp", "nbf", "iat"];

/// Header parameters shown before the claims.
const HEADER_FIELDS: [(&str, &str); 4] = [
    ("alg", "Algorithm"),
    ("typ", "Type"),
    ("cty", "Content type"),
    ("kid", "Key id"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Jwt {
    header: Map<String, Value>,
    claims: Map<String, Value>,
    signed: bool,
}

impl Jwt {
    pub fn header(&self) -> &Map<String, Value> {
        &self.header
    }

    /// Payload claims in token order.
    pub fn claims(&self) -> &Map<String, Value> {
        &self.claims
    }

    /// Whether the signature segment is non-empty.
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    pub fn describe(&self) -> Description {
        let mut description = Description::new("JSON Web Token");
        for (field, name) in HEADER_FIELDS {
            description.push_opt(name, self.header.get(field).map(render));
        }
        for (name, value) in &self.claims {
            description.push(name, render_claim(name, value));
        }
        description.with("Signature", if self.signed { "present" } else { "absent" })
    }
}

impl FromStr for Jwt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let segments: Vec<&str> = s.trim().split('.').collect();
        let &[header, payload, signature] = segments.as_slice() else {
            return Err(Error::JwtSegmentCount(segments.len()));
        };
        Ok(Jwt {
            header: decode_object(header, "header")?,
            claims: decode_object(payload, "payload")?,
            signed: !signature.is_empty(),
        })
    }
}

impl TryFrom<&[u8]> for Jwt {
    type Error = Error;

    fn try_from(data: &[u8]) -> Result<Self> {
        std::str::from_utf8(data).map_err(|_| Error::NotText)?.parse()
    }
}

fn decode_object(segment: &str, name: &'static str) -> Result<Map<String, Value>> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| URL_SAFE.decode(segment))
        .map_err(|source| Error::JwtBase64 {
            segment: name,
            source,
        })?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|source| Error::JwtJson {
        segment: name,
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::JwtNotObject(name)),
    }
}

// Strings are shown raw, anything else as compact JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_claim(name: &str, value: &Value) -> String {
    let rendered = render(value);
    if !TIME_CLAIMS.contains(&name) {
        return rendered;
    }
    match value
        .as_i64()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
    {
        Some(time) => format!(
            "{} ({})",
            rendered,
            time.to_rfc3339_opts(SecondsFormat::Secs, true)
        ),
        None => rendered,
    }
}
