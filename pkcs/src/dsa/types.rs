use mitate::decoder::{DecodableFrom, Decoder};
use mitate::{Describe, Description};
use mitate_asn1::{Element, Integer};

use super::error::{Error, Result};
use crate::key_attributes::size_attribute;

/*
DSAPrivateKey ::= SEQUENCE {
    version  INTEGER,  -- 0
    p        INTEGER,
    q        INTEGER,
    g        INTEGER,
    y        INTEGER,  -- public key
    x        INTEGER   -- private key
}
*/

/// DSA private key as written by `openssl dsa -outform DER`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsaPrivateKey {
    pub p: Integer,
    pub q: Integer,
    pub g: Integer,
    pub y: Integer,
    pub x: Integer,
}

impl DsaPrivateKey {
    pub fn size_bits(&self) -> usize {
        self.p.size_bits()
    }
}

impl DecodableFrom<Element> for DsaPrivateKey {}

impl Decoder<Element, DsaPrivateKey> for Element {
    type Error = Error;

    fn decode(&self) -> Result<DsaPrivateKey> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence);
        };
        let [version, p, q, g, y, x] = elements.as_slice() else {
            return Err(Error::InvalidElementCount(elements.len()));
        };
        match version {
            Element::Integer(v) if v.to_i64() == Some(0) => {}
            Element::Integer(_) => return Err(Error::InvalidVersion),
            _ => return Err(Error::ExpectedInteger("version")),
        }
        let int = |element: &Element, field: &'static str| match element {
            Element::Integer(value) => Ok(value.clone()),
            _ => Err(Error::ExpectedInteger(field)),
        };
        Ok(DsaPrivateKey {
            p: int(p, "p")?,
            q: int(q, "q")?,
            g: int(g, "g")?,
            y: int(y, "y")?,
            x: int(x, "x")?,
        })
    }
}

impl Describe for DsaPrivateKey {
    fn describe(&self) -> Description {
        Description::new("DSA private key")
            .with("Algorithm", "DSA")
            .with_attributes([size_attribute(self.size_bits())])
    }
}

#[cfg(test)]
mod tests {
    use mitate_asn1::ASN1Object;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_decode_dsa_private_key() {
        let der = include_bytes!("../../../testdata/der/dsa-1024-dsa.key");
        let element = ASN1Object::try_from(der.as_slice()).unwrap().into_element();
        let key: DsaPrivateKey = element.decode().unwrap();
        assert_eq!(1024, key.size_bits());
        assert_eq!(
            "DSA private key\n  Algorithm: DSA\n  Size: 1024 bits\n",
            key.describe().to_string()
        );
    }

    fn ints(values: &[i64]) -> Element {
        Element::Sequence(values.iter().map(|v| Element::Integer(Integer::from(*v))).collect())
    }

    #[rstest]
    #[case::not_sequence(Element::Null)]
    #[case::five_integers(ints(&[0, 1, 2, 3, 4]))]
    #[case::seven_integers(ints(&[0, 1, 2, 3, 4, 5, 6]))]
    #[case::bad_version(ints(&[1, 1, 2, 3, 4, 5]))]
    #[case::not_integer(Element::Sequence(vec![
        Element::Integer(Integer::from(0_i64)),
        Element::Null,
        Element::Null,
        Element::Null,
        Element::Null,
        Element::Null,
    ]))]
    fn test_decode_dsa_private_key_rejects(#[case] input: Element) {
        let result: Result<DsaPrivateKey> = input.decode();
        assert!(result.is_err());
    }
}
