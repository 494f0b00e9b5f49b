//! Descriptions for inputs that match no known artifact.

use mitate::Description;
use mitate_der::Der;

use crate::recognize::Encoding;

/// Outline of valid DER that is not a known key or certificate.
pub fn asn1(der: &Der, encoding: Encoding) -> Description {
    let description = match encoding {
        Encoding::Binary => "ASN.1 DER data",
        Encoding::Base64 => "base64-encoded ASN.1 DER data",
    };
    Description::new(description)
        .with("Top-level type", der.root().tag().to_string())
        .with("Size", format!("{} bytes", der.consumed()))
}

pub fn unrecognized(data: &[u8]) -> Description {
    Description::new("unrecognized data")
        .with("Size", format!("{} bytes", data.len()))
        .with("Entropy", format!("{:.2} bits/byte", entropy(data)))
}

/// Shannon entropy of the byte distribution, in bits per byte.
pub fn entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut counts = [0usize; 256];
    for byte in data {
        counts[*byte as usize] += 1;
    }
    let len = data.len() as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / len;
            p * (1.0 / p).log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use mitate::decoder::Decoder;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty(b"", "0.00")]
    #[case::constant(b"aaaa", "0.00")]
    #[case::two_symbols(b"abab", "1.00")]
    #[case::four_symbols(&[0, 1, 2, 3], "2.00")]
    fn test_entropy(#[case] data: &[u8], #[case] expected: &str) {
        assert_eq!(expected, format!("{:.2}", entropy(data)));
    }

    #[test]
    fn test_entropy_of_every_byte_value() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!("8.00", format!("{:.2}", entropy(&data)));
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(
            "unrecognized data\n  Size: 4 bytes\n  Entropy: 2.00 bits/byte\n",
            unrecognized(&[0x00, 0x01, 0x02, 0xff]).to_string()
        );
    }

    #[rstest]
    #[case::context(&[0xa0, 0x00], "[0]")]
    #[case::set(&[0x31, 0x00], "SET")]
    #[case::application(&[0x61, 0x00], "[APPLICATION 1]")]
    fn test_asn1_top_level_type(#[case] bytes: &[u8], #[case] expected: &str) {
        let der: Der = bytes.decode().unwrap();
        assert_eq!(
            Some(expected),
            asn1(&der, Encoding::Binary).attribute("Top-level type")
        );
    }
}
