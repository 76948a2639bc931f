//! Object identifier (OID) value type.
//!
//! An object identifier names a node in the ITU-T X.660 registration tree
//! as a sequence of non-negative integers, written in text as
//! dotted-decimal form (e.g. `2.5.29.19` for the basicConstraints
//! certificate extension).
//!
//! This crate provides the immutable, value-comparable `ObjectIdentifier`
//! used as a lookup key by the extension registry. Only the text syntax is
//! handled here; DER encoding of OIDs is out of scope.

pub mod error;

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use error::Error;

/// An object identifier: a sequence of non-negative integer arcs.
///
/// Compared by structural value equality and usable as a hash map key.
/// Immutable after construction; parse one with [`FromStr`]:
///
/// ```
/// use std::str::FromStr;
/// use oid::ObjectIdentifier;
///
/// let oid = ObjectIdentifier::from_str("2.5.29.19").unwrap();
/// assert_eq!(oid.arcs(), &[2, 5, 29, 19]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectIdentifier {
    arcs: Vec<u64>,
}

impl ObjectIdentifier {
    /// The integer components, in order.
    pub fn arcs(&self) -> &[u64] {
        &self.arcs
    }
}

impl FromStr for ObjectIdentifier {
    type Err = Error;

    /// Parse the dotted-decimal form: one or more non-negative decimal
    /// integers separated by periods, with no empty component and the
    /// first component restricted to 0, 1, or 2 per the standard OID arc
    /// rules.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::EmptyString);
        }
        let mut arcs = Vec::new();
        for component in s.split('.') {
            if component.is_empty() {
                return Err(Error::EmptyComponent);
            }
            // Only plain decimal digits; rejects signs and whitespace that
            // u64::from_str would otherwise tolerate in part.
            if !component.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::InvalidComponent(component.to_string()));
            }
            let arc = component
                .parse::<u64>()
                .map_err(|_| Error::InvalidComponent(component.to_string()))?;
            arcs.push(arc);
        }
        if arcs[0] > 2 {
            return Err(Error::InvalidFirstArc(arcs[0]));
        }
        Ok(ObjectIdentifier { arcs })
    }
}

impl Display for ObjectIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self.arcs.first() {
            Some(n) => self.arcs[1..]
                .iter()
                .fold(n.to_string(), |s, n| s + "." + &n.to_string()),
            None => String::new(),
        };
        write!(f, "{}", s)
    }
}

impl Serialize for ObjectIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ObjectIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ObjectIdentifier::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq<&str> for ObjectIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl PartialEq<ObjectIdentifier> for &str {
    fn eq(&self, other: &ObjectIdentifier) -> bool {
        *self == other.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest(
        input,
        expected,
        case("2.5.29.19", vec![2, 5, 29, 19]),
        case("1.3.6.1.5.5.7.48.1.5", vec![1, 3, 6, 1, 5, 5, 7, 48, 1, 5]),
        case("2.16.840.1.113730.1.1", vec![2, 16, 840, 1, 113730, 1, 1]),
        case("0.0", vec![0, 0]),
        case("2", vec![2]),
    )]
    fn test_from_str_success(input: &str, expected: Vec<u64>) {
        let oid = ObjectIdentifier::from_str(input).unwrap();
        assert_eq!(oid.arcs(), expected.as_slice());
    }

    #[rstest(
        input,
        // empty string
        case(""),
        // empty components
        case("2..19"),
        case(".2.5"),
        case("2.5.29.19."),
        // non-decimal components
        case("2.5.a.19"),
        case("2.5.-1.19"),
        case("2. 5.29"),
        case("2.5.+7"),
        // component out of u64 range
        case("2.5.99999999999999999999999"),
        // first arc outside {0, 1, 2}
        case("3.5.29.19"),
    )]
    fn test_from_str_failure(input: &str) {
        assert!(ObjectIdentifier::from_str(input).is_err());
    }

    #[rstest(
        input,
        expected,
        case("", Error::EmptyString),
        case("2..19", Error::EmptyComponent),
        case("2.5.a.19", Error::InvalidComponent("a".to_string())),
        case("3.5.29.19", Error::InvalidFirstArc(3)),
    )]
    fn test_from_str_error_kind(input: &str, expected: Error) {
        let err = ObjectIdentifier::from_str(input).unwrap_err();
        assert_eq!(format!("{}", err), format!("{}", expected));
    }

    #[rstest(
        input,
        case("2.5.29.19"),
        case("1.3.6.1.5.5.7.1.1"),
        case("2.16.840.1.113730.1.1"),
    )]
    fn test_display_roundtrip(input: &str) {
        let oid = ObjectIdentifier::from_str(input).unwrap();
        assert_eq!(oid.to_string(), input);
        assert_eq!(oid, input);
        assert_eq!(input, oid);
    }

    #[rstest(
        input,
        expected_json,
        case("2.5.29.19", r#""2.5.29.19""#),
        case("1.3.6.1.5.5.7.48.1.5", r#""1.3.6.1.5.5.7.48.1.5""#),
    )]
    fn test_serde_roundtrip(input: &str, expected_json: &str) {
        let oid = ObjectIdentifier::from_str(input).unwrap();
        let json = serde_json::to_string(&oid).unwrap();
        assert_eq!(json, expected_json);
        let deserialized: ObjectIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, oid);
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        let result: Result<ObjectIdentifier, _> = serde_json::from_str(r#""2.5.a.19""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_usable_as_map_key() {
        let mut map = HashMap::new();
        map.insert(ObjectIdentifier::from_str("2.5.29.19").unwrap(), "basicConstraints");
        let key = ObjectIdentifier::from_str("2.5.29.19").unwrap();
        assert_eq!(map.get(&key), Some(&"basicConstraints"));
    }
}
