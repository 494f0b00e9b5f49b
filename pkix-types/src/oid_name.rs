//! Trait for types that have OIDs with conventional names

/// Trait for types that have OIDs with conventional/standard names
///
/// For example, an EC parameter with OID `1.2.840.10045.3.1.7` has the conventional name `secp256r1`.
pub trait OidName {
    /// Returns the conventional name for this type's OID, if it has one
    fn oid_name(&self) -> Option<&'static str>;
}

/// Looks `oid` up in a static `(dotted OID, value)` table.
pub fn lookup<T: Copy>(
    table: &[(&'static str, T)],
    oid: &mitate_asn1::ObjectIdentifier,
) -> Option<T> {
    table
        .iter()
        .find(|(dotted, _)| oid == dotted)
        .map(|(_, value)| *value)
}
