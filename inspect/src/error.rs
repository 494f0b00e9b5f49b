use thiserror::Error;

/// Reasons a classifier or recognizer turned an input down.
///
/// None of these reach the caller of [`crate::inspect`]; they are logged and
/// the next format is tried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("DER error: {0}")]
    Der(#[from] mitate_der::Error),

    #[error("ASN.1 error: {0}")]
    Asn1(#[from] mitate_asn1::Error),

    #[error("base64 error: {0}")]
    Pem(#[from] mitate_pem::error::Error),

    #[error("PKCS#1 error: {0}")]
    Pkcs1(#[from] mitate_pkcs::pkcs1::Error),

    #[error("PKCS#8 error: {0}")]
    Pkcs8(#[from] mitate_pkcs::pkcs8::Error),

    #[error("SEC1 error: {0}")]
    Sec1(#[from] mitate_pkcs::sec1::Error),

    #[error("DSA error: {0}")]
    Dsa(#[from] mitate_pkcs::dsa::Error),

    #[error("PKCS error: {0}")]
    Pkcs(#[from] mitate_pkcs::Error),

    #[error("X.509 error: {0}")]
    X509(#[from] mitate_x509::Error),

    #[error("input is not UTF-8 text")]
    NotText,

    #[error("JWT: expected 3 segments, found {0}")]
    JwtSegmentCount(usize),

    #[error("JWT: {segment} is not base64url: {source}")]
    JwtBase64 {
        segment: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    #[error("JWT: {segment} is not JSON: {source}")]
    JwtJson {
        segment: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("JWT: {0} is not a JSON object")]
    JwtNotObject(&'static str),

    #[error("UUID error: {0}")]
    Uuid(#[from] uuid::Error),

    #[error("no known artifact shape matched")]
    UnrecognizedShape,
}

pub type Result<T> = std::result::Result<T, Error>;
