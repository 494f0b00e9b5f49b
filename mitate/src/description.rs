//! Uniform, human-readable description tree.
//!
//! Every successful inspection ends in a [`Description`]: a summary line,
//! ordered `Name: Value` attributes, and child descriptions for artifacts
//! embedded in other artifacts (the public key inside a certificate).
//!
//! Text rendering:
//!
//! ```text
//! x.509v3 end-entity certificate
//!   Serial: cd0a8bec632cfe645eca0a9b084fb1c
//!   Subject: CN=github.com,O=GitHub\, Inc.
//!   Public key
//!     Algorithm: ECDSA
//!     Curve: P-256 (secp256r1, prime256v1)
//! ```

use std::fmt;

use serde::Serialize;

/// A single `Name: Value` pair. Both sides are display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Description of one inspected artifact.
///
/// Attribute order is insertion order and is what the presentation layer
/// prints; it is never sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Description>,
}

impl Description {
    pub fn new(description: impl Into<String>) -> Self {
        Description {
            description: description.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`Description::push`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Appends an attribute after the existing ones.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push(Attribute::new(name, value));
    }

    /// Appends an attribute only when a value is present.
    pub fn push_opt(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    pub fn extend(&mut self, attributes: impl IntoIterator<Item = Attribute>) {
        self.attributes.extend(attributes);
    }

    /// Builder form of [`Description::extend`].
    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.extend(attributes);
        self
    }

    pub fn add_child(&mut self, child: Description) {
        self.children.push(child);
    }

    /// Returns the value of the first attribute called `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Replaces the summary line, keeping attributes and children.
    pub fn relabel(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = " ".repeat(indent);
        writeln!(f, "{}{}", pad, self.description)?;
        for attr in &self.attributes {
            writeln!(f, "{}  {}: {}", pad, attr.name, attr.value)?;
        }
        for child in &self.children {
            child.write_indented(f, indent + 2)?;
        }
        Ok(())
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// Types that know how to summarize themselves as a [`Description`].
pub trait Describe {
    fn describe(&self) -> Description;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Attribute, Description};

    fn certificate() -> Description {
        let mut cert = Description::new("x.509v3 end-entity certificate")
            .with("Serial", "cd0a8bec632cfe645eca0a9b084fb1c")
            .with("SANs", "github.com, www.github.com");
        cert.add_child(
            Description::new("Public key")
                .with("Algorithm", "ECDSA")
                .with("Curve", "P-256 (secp256r1, prime256v1)"),
        );
        cert
    }

    #[test]
    fn test_render_nested() {
        let expected = "x.509v3 end-entity certificate\n  Serial: cd0a8bec632cfe645eca0a9b084fb1c\n  SANs: github.com, www.github.com\n  Public key\n    Algorithm: ECDSA\n    Curve: P-256 (secp256r1, prime256v1)\n";
        assert_eq!(expected, certificate().to_string());
    }

    #[test]
    fn test_render_grandchild_indent() {
        let mut inner = Description::new("b").with("k", "v");
        inner.add_child(Description::new("c"));
        let mut outer = Description::new("a");
        outer.add_child(inner);
        assert_eq!("a\n  b\n    k: v\n    c\n", outer.to_string());
    }

    #[test]
    fn test_attribute_order_is_insertion_order() {
        let desc = Description::new("x")
            .with("Zeta", "1")
            .with("Alpha", "2")
            .with("Mu", "3");
        let names: Vec<_> = desc.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(vec!["Zeta", "Alpha", "Mu"], names);
    }

    #[rstest]
    #[case(Some("2023-02-14"), 1)]
    #[case(None, 0)]
    fn test_push_opt(#[case] value: Option<&str>, #[case] expected: usize) {
        let mut desc = Description::new("x");
        desc.push_opt("Not before", value);
        assert_eq!(expected, desc.attributes.len());
    }

    #[test]
    fn test_attribute_lookup_and_relabel() {
        let desc = certificate().children.remove(0).relabel("PKIX public key");
        assert_eq!("PKIX public key", desc.description);
        assert_eq!(Some("ECDSA"), desc.attribute("Algorithm"));
        assert_eq!(None, desc.attribute("Size"));
        assert!(desc.is_leaf());
        assert!(!certificate().is_leaf());
    }

    #[test]
    fn test_serialize_skips_empty_collections() {
        let desc = Description {
            description: "UUID".to_string(),
            attributes: vec![Attribute::new("Version", "4 (random)")],
            children: vec![],
        };
        let json = serde_json::to_string(&desc).unwrap();
        assert_eq!(
            r#"{"description":"UUID","attributes":[{"name":"Version","value":"4 (random)"}]}"#,
            json
        );
    }
}
