use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("ASN.1 error: {0}")]
    Asn1(#[from] mitate_asn1::error::Error),

    #[error("PKCS#1 error: {0}")]
    Pkcs1(#[from] crate::pkcs1::Error),

    #[error("PKCS#8 error: {0}")]
    Pkcs8(#[from] crate::pkcs8::Error),

    #[error("SEC1 error: {0}")]
    Sec1(#[from] crate::sec1::Error),

    #[error("DSA error: {0}")]
    Dsa(#[from] crate::dsa::Error),

    #[error(transparent)]
    PKIXTypes(#[from] mitate_pkix_types::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
