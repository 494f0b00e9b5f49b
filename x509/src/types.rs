use chrono::NaiveDateTime;
use mitate::decoder::{DecodableFrom, Decoder};
use mitate::{Describe, Description};
use mitate_asn1::{BitString, Element, Integer};
use mitate_pkcs::PkixPublicKey;
use mitate_pkix_types::{AlgorithmIdentifier, Name, SubjectPublicKeyInfo};

use crate::error::{Error, Result};
use crate::extensions::{
    AuthorityKeyIdentifier, BasicConstraints, ExtendedKeyUsage, Extension, Extensions, KeyUsage,
    SubjectAltName, SubjectKeyIdentifier, extension_name,
};

/*
https://datatracker.ietf.org/doc/html/rfc5280#section-4.1

Certificate  ::=  SEQUENCE  {
    tbsCertificate       TBSCertificate,
    signatureAlgorithm   AlgorithmIdentifier,
    signatureValue       BIT STRING
}

TBSCertificate  ::=  SEQUENCE  {
     version         [0]  EXPLICIT Version DEFAULT v1,
     serialNumber         CertificateSerialNumber,
     signature            AlgorithmIdentifier,
     issuer               Name,
     validity             Validity,
     subject              Name,
     subjectPublicKeyInfo SubjectPublicKeyInfo,
     issuerUniqueID  [1]  IMPLICIT UniqueIdentifier OPTIONAL,
     subjectUniqueID [2]  IMPLICIT UniqueIdentifier OPTIONAL,
     extensions      [3]  EXPLICIT Extensions OPTIONAL
}

Version  ::=  INTEGER  {  v1(0), v2(1), v3(2)  }

Validity ::= SEQUENCE {
    notBefore      Time,
    notAfter       Time
}
*/

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
pub struct Certificate {
    tbs_certificate: TBSCertificate,
    signature_algorithm: AlgorithmIdentifier,
    signature_value: BitString,
}

impl Certificate {
    pub fn tbs_certificate(&self) -> &TBSCertificate {
        &self.tbs_certificate
    }

    pub fn signature_algorithm(&self) -> &AlgorithmIdentifier {
        &self.signature_algorithm
    }

    pub fn signature_value(&self) -> &BitString {
        &self.signature_value
    }

    /// Get and parse a specific extension by type
    pub fn extension<T: Extension>(&self) -> Result<Option<T>> {
        self.tbs_certificate.extensions.extension::<T>()
    }

    /// Like [`Certificate::extension`], but an extension that fails to
    /// parse is logged and treated as absent.
    fn extension_or_skip<T: Extension>(&self) -> Option<T> {
        match self.extension::<T>() {
            Ok(ext) => ext,
            Err(e) => {
                tracing::debug!(
                    extension = extension_name(T::OID).unwrap_or(T::OID),
                    error = %e,
                    "skipping extension that did not decode"
                );
                None
            }
        }
    }

    pub fn is_ca(&self) -> bool {
        self.extension_or_skip::<BasicConstraints>()
            .is_some_and(|bc| bc.ca)
    }
}

impl DecodableFrom<Element> for Certificate {}

impl Decoder<Element, Certificate> for Element {
    type Error = Error;

    fn decode(&self) -> Result<Certificate> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence("Certificate"));
        };
        let [tbs, signature_algorithm, signature_value] = elements.as_slice() else {
            return Err(Error::InvalidElementCount {
                structure: "Certificate",
                actual: elements.len(),
            });
        };
        let tbs_certificate: TBSCertificate = tbs.decode()?;
        let signature_algorithm: AlgorithmIdentifier = signature_algorithm.decode()?;
        let Element::BitString(signature_value) = signature_value else {
            return Err(Error::ExpectedSignatureValue);
        };
        Ok(Certificate {
            tbs_certificate,
            signature_algorithm,
            signature_value: signature_value.clone(),
        })
    }
}

impl Describe for Certificate {
    fn describe(&self) -> Description {
        let tbs = &self.tbs_certificate;
        let label = if self.is_ca() {
            "x.509v3 CA certificate"
        } else {
            "x.509v3 end-entity certificate"
        };
        let mut description = Description::new(label).with("Serial", tbs.serial_number.to_hex());

        let ski = self.extension_or_skip::<SubjectKeyIdentifier>();
        let aki = self
            .extension_or_skip::<AuthorityKeyIdentifier>()
            .and_then(|aki| aki.key_identifier);
        description.push_opt("Subject", non_empty(tbs.subject.to_string()));
        description.push_opt("Subject key id", ski.map(|ski| ski.key_identifier.to_string()));
        description.push_opt("Issuer", non_empty(tbs.issuer.to_string()));
        description.push_opt("Authority key id", aki.map(|id| id.to_string()));
        description.push("Not before", tbs.validity.not_before.format(DATE_FORMAT).to_string());
        description.push("Not after", tbs.validity.not_after.format(DATE_FORMAT).to_string());

        if let Some(ku) = self.extension_or_skip::<KeyUsage>() {
            description.push_opt("Key usage", non_empty(ku.names().join(", ")));
        }
        if let Some(eku) = self.extension_or_skip::<ExtendedKeyUsage>() {
            description.push_opt("Extended key usage", non_empty(eku.names().join(", ")));
        }
        if let Some(san) = self.extension_or_skip::<SubjectAltName>() {
            description.push_opt("SANs", non_empty(san.dns_names().join(", ")));
            description.push_opt("Email SANs", non_empty(san.email_addresses().join(", ")));
            description.push_opt("IP SANs", non_empty(san.ip_addresses().join(", ")));
            description.push_opt("URI SANs", non_empty(san.uris().join(", ")));
        }
        description.push("Signature algorithm", self.signature_algorithm.signature_name());

        let public_key = match &tbs.subject_public_key_info {
            Some(spki) => PkixPublicKey::from(spki.clone()).describe().relabel("Public key"),
            None => Description::new("Public key").with("Status", "unavailable"),
        };
        description.add_child(public_key);
        description
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Version {
    V1 = 0,
    V2 = 1,
    V3 = 2,
}

impl DecodableFrom<Element> for Version {}

impl Decoder<Element, Version> for Element {
    type Error = Error;

    fn decode(&self) -> Result<Version> {
        let Element::Integer(i) = self else {
            return Err(Error::InvalidVersion("expected Integer for Version"));
        };
        match i.to_i64() {
            Some(0) => Ok(Version::V1),
            Some(1) => Ok(Version::V2),
            Some(2) => Ok(Version::V3),
            _ => Err(Error::InvalidVersion("version must be 0, 1, or 2")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    pub not_before: NaiveDateTime,
    pub not_after: NaiveDateTime,
}

impl DecodableFrom<Element> for Validity {}

impl Decoder<Element, Validity> for Element {
    type Error = Error;

    fn decode(&self) -> Result<Validity> {
        let Element::Sequence(elements) = self else {
            return Err(Error::InvalidValidity("expected Sequence"));
        };
        let [not_before, not_after] = elements.as_slice() else {
            return Err(Error::InvalidValidity("expected 2 elements in sequence"));
        };
        let not_before = not_before
            .as_time()
            .ok_or(Error::InvalidValidity("notBefore is not a Time"))?;
        let not_after = not_after
            .as_time()
            .ok_or(Error::InvalidValidity("notAfter is not a Time"))?;
        Ok(Validity {
            not_before: *not_before,
            not_after: *not_after,
        })
    }
}

/// The fields of a v3 TBSCertificate that are described.
///
/// A SubjectPublicKeyInfo that doesn't decode is kept as `None` so the rest
/// of the certificate can still be described.
#[derive(Debug, Clone)]
pub struct TBSCertificate {
    pub version: Version,
    pub serial_number: Integer,
    pub signature: AlgorithmIdentifier,
    pub issuer: Name,
    pub validity: Validity,
    pub subject: Name,
    pub subject_public_key_info: Option<SubjectPublicKeyInfo>,
    pub extensions: Extensions,
}

impl DecodableFrom<Element> for TBSCertificate {}

impl Decoder<Element, TBSCertificate> for Element {
    type Error = Error;

    fn decode(&self) -> Result<TBSCertificate> {
        let Element::Sequence(elements) = self else {
            return Err(Error::ExpectedSequence("TBSCertificate"));
        };
        let [version, serial, signature, issuer, validity, subject, spki, optional @ ..] =
            elements.as_slice()
        else {
            return Err(Error::InvalidElementCount {
                structure: "TBSCertificate",
                actual: elements.len(),
            });
        };

        // DEFAULT v1 means only v2/v3 carry the tag; only v3 is accepted
        let version: Version = match version {
            Element::ContextSpecific(tagged) if tagged.slot() == 0 => {
                tagged.explicit().ok_or(Error::MissingVersion)?.decode()?
            }
            _ => return Err(Error::MissingVersion),
        };
        if version != Version::V3 {
            return Err(Error::NotV3);
        }

        let Element::Integer(serial_number) = serial else {
            return Err(Error::ExpectedSerialNumber);
        };
        let signature: AlgorithmIdentifier = signature.decode()?;
        let issuer: Name = issuer.decode()?;
        let validity: Validity = validity.decode()?;
        let subject: Name = subject.decode()?;
        let spki: mitate_pkix_types::Result<SubjectPublicKeyInfo> = spki.decode();
        let subject_public_key_info = match spki {
            Ok(spki) => Some(spki),
            Err(e) => {
                tracing::debug!(error = %e, "subjectPublicKeyInfo did not decode");
                None
            }
        };

        let mut extensions = Extensions::default();
        let mut last_slot = 0;
        for element in optional {
            let Element::ContextSpecific(tagged) = element else {
                return Err(Error::UnexpectedElement(element.kind()));
            };
            if tagged.slot() <= last_slot || tagged.slot() > 3 {
                return Err(Error::UnexpectedElement(element.kind()));
            }
            last_slot = tagged.slot();
            if tagged.slot() == 3 {
                let inner = tagged.explicit().ok_or(Error::ExpectedSequenceInExtensions)?;
                let decoded: Result<Extensions> = inner.decode();
                match decoded {
                    Ok(decoded) => extensions = decoded,
                    Err(e) => tracing::debug!(error = %e, "extensions did not decode"),
                }
            }
        }

        Ok(TBSCertificate {
            version,
            serial_number: serial_number.clone(),
            signature,
            issuer,
            validity,
            subject,
            subject_public_key_info,
            extensions,
        })
    }
}

#[cfg(test)]
mod tests {
    use mitate_asn1::{ASN1Object, Tagged, TaggedBody};
    use rstest::rstest;

    use super::*;

    // openssl look-alike of the 2023 github.com certificate, not the real one.
    // Fields match; the key identifiers do not.
    const GITHUB: &[u8] = include_bytes!("../../testdata/der/github.com.cer");
    const DIGICERT_CA: &[u8] = include_bytes!("../../testdata/der/digicert-ca.cer");
    const LOCALHOST: &[u8] = include_bytes!("../../testdata/der/localhost-rsa.cer");
    // Subject and issuer carry serialNumber as a NumericString.
    const NUMERIC_SERIAL: &[u8] = include_bytes!("../../testdata/der/numeric-serial.cer");

    fn element(der: &[u8]) -> Element {
        ASN1Object::try_from(der).unwrap().into_element()
    }

    fn certificate(der: &[u8]) -> Certificate {
        element(der).decode().unwrap()
    }

    #[test]
    fn test_describe_github() {
        let expected = "\
x.509v3 end-entity certificate
  Serial: cd0a8bec632cfe645eca0a9b084fb1c
  Subject: CN=github.com,O=GitHub\\, Inc.,L=San Francisco,ST=California,C=US
  Subject key id: 4ea073f4fbec4a025fd94d3b263bde3e168c51a8
  Issuer: CN=DigiCert TLS Hybrid ECC SHA384 2020 CA1,O=DigiCert Inc,C=US
  Authority key id: 5ed7be0dd0f0880570194588feb570295dbf91cc
  Not before: 2023-02-14
  Not after: 2024-03-14
  Key usage: digitalSignature
  Extended key usage: serverAuth, clientAuth
  SANs: github.com, www.github.com
  Signature algorithm: ECDSA-SHA384
  Public key
    Algorithm: ECDSA
    Curve: P-256 (secp256r1, prime256v1)
";
        assert_eq!(expected, certificate(GITHUB).describe().to_string());
    }

    #[test]
    fn test_describe_ca() {
        let cert = certificate(DIGICERT_CA);
        assert!(cert.is_ca());
        let bc = cert.extension::<BasicConstraints>().unwrap().unwrap();
        assert_eq!(Some(0), bc.path_len_constraint);

        let described = cert.describe();
        assert_eq!("x.509v3 CA certificate", described.description);
        assert_eq!(Some("7f5"), described.attribute("Serial"));
        assert_eq!(described.attribute("Subject"), described.attribute("Issuer"));
        assert_eq!(Some("2026-10-19"), described.attribute("Not before"));
        assert_eq!(Some("2036-10-16"), described.attribute("Not after"));
        assert_eq!(
            Some("digitalSignature, keyCertSign, cRLSign"),
            described.attribute("Key usage")
        );
        assert_eq!(None, described.attribute("Extended key usage"));
        assert_eq!(None, described.attribute("SANs"));
        assert_eq!(
            Description::new("Public key")
                .with("Algorithm", "ECDSA")
                .with("Curve", "P-384 (secp384r1)"),
            described.children[0]
        );
    }

    #[test]
    fn test_describe_localhost() {
        let described = certificate(LOCALHOST).describe();
        assert_eq!("x.509v3 CA certificate", described.description);
        assert_eq!(Some("ff10"), described.attribute("Serial"));
        assert_eq!(
            Some("CN=localhost,OU=Test Unit,O=Test Org,L=Chiyoda,ST=Tokyo,C=JP"),
            described.attribute("Subject")
        );
        assert_eq!(
            Some("digitalSignature, keyEncipherment"),
            described.attribute("Key usage")
        );
        assert_eq!(Some("localhost"), described.attribute("SANs"));
        assert_eq!(Some("admin@example.com"), described.attribute("Email SANs"));
        assert_eq!(Some("127.0.0.1"), described.attribute("IP SANs"));
        assert_eq!(None, described.attribute("URI SANs"));
        assert_eq!(Some("SHA256-RSA"), described.attribute("Signature algorithm"));
        assert_eq!(Some("2048 bits"), described.children[0].attribute("Size"));
    }

    #[test]
    fn test_describe_numeric_string_name() {
        let described = certificate(NUMERIC_SERIAL).describe();
        assert_eq!("x.509v3 CA certificate", described.description);
        assert_eq!(
            Some("SERIALNUMBER=1234,CN=example.com,C=US"),
            described.attribute("Subject")
        );
        assert_eq!(described.attribute("Subject"), described.attribute("Issuer"));
        assert_eq!(Some("ECDSA-SHA256"), described.attribute("Signature algorithm"));
    }

    /// Replaces the first attribute value of the subject Name.
    fn with_subject_value(cert: Element, value: Element) -> Element {
        let Element::Sequence(mut outer) = cert else {
            panic!("certificate is a SEQUENCE");
        };
        let Element::Sequence(tbs) = &mut outer[0] else {
            panic!("tbsCertificate is a SEQUENCE");
        };
        let Element::Sequence(rdns) = &mut tbs[5] else {
            panic!("subject is a SEQUENCE");
        };
        let Element::Set(attributes) = &mut rdns[0] else {
            panic!("RDN is a SET");
        };
        let Element::Sequence(pair) = &mut attributes[0] else {
            panic!("AttributeTypeAndValue is a SEQUENCE");
        };
        pair[1] = value;
        Element::Sequence(outer)
    }

    #[test]
    fn test_describe_non_string_name_value() {
        let value = Element::Integer(Integer::from(1_i64));
        let cert: Certificate = with_subject_value(element(NUMERIC_SERIAL), value)
            .decode()
            .unwrap();
        assert_eq!(
            Some("SERIALNUMBER=1234,CN=example.com,C=#020101"),
            cert.describe().attribute("Subject")
        );
    }

    #[test]
    fn test_attribute_order() {
        let names: Vec<String> = certificate(LOCALHOST)
            .describe()
            .attributes
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(
            vec![
                "Serial",
                "Subject",
                "Subject key id",
                "Issuer",
                "Authority key id",
                "Not before",
                "Not after",
                "Key usage",
                "SANs",
                "Email SANs",
                "IP SANs",
                "Signature algorithm",
            ],
            names
        );
    }

    /// Replaces the SubjectPublicKeyInfo of a decoded certificate tree.
    fn with_spki(cert: Element, spki: Element) -> Element {
        let Element::Sequence(mut outer) = cert else {
            panic!("certificate is a SEQUENCE");
        };
        let Element::Sequence(tbs) = &mut outer[0] else {
            panic!("tbsCertificate is a SEQUENCE");
        };
        tbs[6] = spki;
        Element::Sequence(outer)
    }

    #[test]
    fn test_undecodable_public_key_is_unavailable() {
        let cert: Certificate = with_spki(element(GITHUB), Element::Null).decode().unwrap();
        let described = cert.describe();
        assert_eq!(Some("github.com, www.github.com"), described.attribute("SANs"));
        assert_eq!(
            vec![Description::new("Public key").with("Status", "unavailable")],
            described.children
        );
    }

    fn with_version(cert: Element, version: Element) -> Element {
        let Element::Sequence(mut outer) = cert else {
            panic!("certificate is a SEQUENCE");
        };
        let Element::Sequence(tbs) = &mut outer[0] else {
            panic!("tbsCertificate is a SEQUENCE");
        };
        tbs[0] = version;
        Element::Sequence(outer)
    }

    #[rstest]
    #[case::v1(Element::ContextSpecific(Tagged::new(
        0,
        TaggedBody::Constructed(vec![Element::Integer(Integer::from(0_i64))])
    )))]
    #[case::untagged(Element::Integer(Integer::from(2_i64)))]
    #[case::wrong_slot(Element::ContextSpecific(Tagged::new(
        1,
        TaggedBody::Constructed(vec![Element::Integer(Integer::from(2_i64))])
    )))]
    fn test_rejects_non_v3(#[case] version: Element) {
        let result: Result<Certificate> = with_version(element(GITHUB), version).decode();
        assert!(result.is_err());
    }

    #[rstest]
    #[case::not_sequence(Element::Null)]
    #[case::two_elements(Element::Sequence(vec![Element::Null, Element::Null]))]
    fn test_decode_rejects(#[case] input: Element) {
        let result: Result<Certificate> = input.decode();
        assert!(result.is_err());
    }
}
