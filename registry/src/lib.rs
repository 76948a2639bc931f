//! Extension OID Registry
//!
//! Certificate, CRL, and PKCS#10 parsing needs to go from the raw OID found
//! in an extension to the handler that can decode its value, and
//! configuration and diagnostic surfaces resolve the other way, from a
//! hierarchical friendly name like `X509.info.extensions.BasicConstraints`
//! to the OID and handler. This crate keeps that two-way mapping.
//!
//! A [`Registry`] is populated with the well-known PKIX catalog (see
//! [`bootstrap`]) and may be extended at runtime with vendor extensions via
//! [`Registry::register`]. Entries are never updated or removed. Most
//! callers use the process-wide instance from [`global`]; tests and
//! embedders that want isolation construct their own.
//!
//! ```
//! use registry::global;
//! use std::str::FromStr;
//! use oid::ObjectIdentifier;
//!
//! let oid = ObjectIdentifier::from_str("2.5.29.19").unwrap();
//! assert_eq!(
//!     global().lookup_name_by_oid(&oid).as_deref(),
//!     Some("X509.info.extensions.BasicConstraints"),
//! );
//! ```

pub mod bootstrap;
pub mod error;

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use oid::ObjectIdentifier;
use parking_lot::RwLock;

pub use bootstrap::global;
pub use error::RegistrationError;

/// One registered extension: the immutable (OID, friendly name, handler)
/// triple. Both indices hold the same `Arc`, so they can never disagree
/// about an entry's facets.
struct Entry<H> {
    oid: ObjectIdentifier,
    name: String,
    handler: H,
}

struct Indices<H> {
    by_oid: HashMap<ObjectIdentifier, Arc<Entry<H>>>,
    by_name: HashMap<String, Arc<Entry<H>>>,
}

/// Two-way index from extension OIDs and friendly names to handler tags.
///
/// `H` is the handler tag stored for each entry; the registry never
/// inspects or invokes it. The bootstrap catalog uses
/// [`pkix::ExtensionKind`]; embedders registering vendor extensions can use
/// any cloneable tag.
///
/// All mutation goes through [`Registry::register`] inside a single write
/// critical section, so a reader observes either the pre-registration state
/// or the fully inserted entry, never one index without the other. Lookups
/// take the read lock only and many may run concurrently.
pub struct Registry<H> {
    indices: RwLock<Indices<H>>,
}

impl<H: Clone> Registry<H> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            indices: RwLock::new(Indices {
                by_oid: HashMap::new(),
                by_name: HashMap::new(),
            }),
        }
    }

    /// Register an extension under `name` and the dotted-decimal
    /// `oid_text`.
    ///
    /// `oid_text` is parsed up front; malformed text is rejected with
    /// [`RegistrationError::InvalidOidFormat`] before any state is touched.
    /// Both indices are then checked before either is modified, the OID
    /// index first, so a registration colliding on both facets reports
    /// [`RegistrationError::DuplicateOid`]. On any failure the registry is
    /// left exactly as it was.
    pub fn register(
        &self,
        name: impl Into<String>,
        oid_text: &str,
        handler: H,
    ) -> Result<(), RegistrationError> {
        let oid = ObjectIdentifier::from_str(oid_text).map_err(|source| {
            RegistrationError::InvalidOidFormat {
                oid: oid_text.to_string(),
                source,
            }
        })?;
        let name = name.into();

        let mut indices = self.indices.write();
        if indices.by_oid.contains_key(&oid) {
            return Err(RegistrationError::DuplicateOid(oid));
        }
        if indices.by_name.contains_key(&name) {
            return Err(RegistrationError::DuplicateName(name));
        }
        let entry = Arc::new(Entry {
            oid: oid.clone(),
            name: name.clone(),
            handler,
        });
        indices.by_oid.insert(oid, entry.clone());
        indices.by_name.insert(name, entry);
        Ok(())
    }

    /// The friendly name registered for `oid`, if any.
    pub fn lookup_name_by_oid(&self, oid: &ObjectIdentifier) -> Option<String> {
        self.indices.read().by_oid.get(oid).map(|e| e.name.clone())
    }

    /// The OID registered under `name`, if any.
    pub fn lookup_oid_by_name(&self, name: &str) -> Option<ObjectIdentifier> {
        self.indices.read().by_name.get(name).map(|e| e.oid.clone())
    }

    /// The handler tag registered under `name`, if any.
    pub fn lookup_handler_by_name(&self, name: &str) -> Option<H> {
        self.indices
            .read()
            .by_name
            .get(name)
            .map(|e| e.handler.clone())
    }

    /// The handler tag registered for `oid`, if any.
    pub fn lookup_handler_by_oid(&self, oid: &ObjectIdentifier) -> Option<H> {
        self.indices
            .read()
            .by_oid
            .get(oid)
            .map(|e| e.handler.clone())
    }

    /// Number of registered extensions.
    pub fn len(&self) -> usize {
        self.indices.read().by_oid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H: Clone> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn oid(text: &str) -> ObjectIdentifier {
        ObjectIdentifier::from_str(text).unwrap()
    }

    #[test]
    fn test_register_roundtrip() {
        let registry = Registry::new();
        registry
            .register("custom.example", "1.3.6.1.4.1.99999.1", "example-handler")
            .unwrap();

        assert_eq!(
            registry.lookup_oid_by_name("custom.example").unwrap(),
            "1.3.6.1.4.1.99999.1"
        );
        assert_eq!(
            registry.lookup_name_by_oid(&oid("1.3.6.1.4.1.99999.1")),
            Some("custom.example".to_string())
        );
        assert_eq!(
            registry.lookup_handler_by_name("custom.example"),
            Some("example-handler")
        );
        assert_eq!(
            registry.lookup_handler_by_oid(&oid("1.3.6.1.4.1.99999.1")),
            Some("example-handler")
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_oid_rejected_without_mutation() {
        let registry = Registry::new();
        registry.register("custom.first", "2.5.29.200", "first").unwrap();

        let err = registry
            .register("custom.second", "2.5.29.200", "second")
            .unwrap_err();
        assert!(matches!(err, RegistrationError::DuplicateOid(_)));

        // Observable state is unchanged from before the failed call.
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.lookup_name_by_oid(&oid("2.5.29.200")),
            Some("custom.first".to_string())
        );
        assert_eq!(registry.lookup_handler_by_oid(&oid("2.5.29.200")), Some("first"));
        assert_eq!(registry.lookup_oid_by_name("custom.second"), None);
        assert_eq!(registry.lookup_handler_by_name("custom.second"), None);
    }

    #[test]
    fn test_duplicate_name_rejected_without_mutation() {
        let registry = Registry::new();
        registry.register("custom.shared", "2.5.29.201", "first").unwrap();

        let err = registry
            .register("custom.shared", "2.5.29.202", "second")
            .unwrap_err();
        assert!(matches!(err, RegistrationError::DuplicateName(_)));

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.lookup_oid_by_name("custom.shared").unwrap(),
            "2.5.29.201"
        );
        assert_eq!(registry.lookup_handler_by_name("custom.shared"), Some("first"));
        assert_eq!(registry.lookup_name_by_oid(&oid("2.5.29.202")), None);
        assert_eq!(registry.lookup_handler_by_oid(&oid("2.5.29.202")), None);
    }

    #[test]
    fn test_oid_checked_before_name() {
        let registry = Registry::new();
        registry.register("custom.both", "2.5.29.203", "first").unwrap();

        // Colliding on both facets reports the OID collision.
        let err = registry
            .register("custom.both", "2.5.29.203", "second")
            .unwrap_err();
        assert!(matches!(err, RegistrationError::DuplicateOid(_)));
    }

    #[rstest(
        oid_text,
        case("2.5.a.19"),
        case(""),
        case("2..19"),
        case(".2.5"),
        case("2.5.29.19."),
        case("3.5.29.19"),
        case("2.5.-7"),
    )]
    fn test_malformed_oid_rejected_without_mutation(oid_text: &str) {
        let registry = Registry::new();
        let err = registry.register("custom.x", oid_text, "handler").unwrap_err();
        assert!(matches!(err, RegistrationError::InvalidOidFormat { .. }));
        assert!(registry.is_empty());
        assert_eq!(registry.lookup_oid_by_name("custom.x"), None);
    }

    #[test]
    fn test_unknown_lookups_return_none() {
        let registry: Registry<&str> = Registry::new();
        assert_eq!(registry.lookup_name_by_oid(&oid("1.2.3.4")), None);
        assert_eq!(registry.lookup_oid_by_name("never.registered"), None);
        assert_eq!(registry.lookup_handler_by_name("never.registered"), None);
        assert_eq!(registry.lookup_handler_by_oid(&oid("1.2.3.4")), None);
    }

    #[test]
    fn test_concurrent_readers_and_writers() {
        let registry = Arc::new(Registry::new());
        let mut handles = Vec::new();

        for i in 0..8 {
            let registry = Arc::clone(&registry);
            handles.push(std::thread::spawn(move || {
                let name = format!("custom.thread{}", i);
                let oid_text = format!("1.3.6.1.4.1.99999.{}", i);
                registry.register(name.clone(), &oid_text, i).unwrap();
                // Readers in other threads may interleave here; this
                // thread's own entry must already be fully visible.
                assert_eq!(registry.lookup_handler_by_name(&name), Some(i));
            }));
        }
        for i in 0..8 {
            let registry = Arc::clone(&registry);
            handles.push(std::thread::spawn(move || {
                let oid_text = format!("1.3.6.1.4.1.99999.{}", i);
                let parsed = ObjectIdentifier::from_str(&oid_text).unwrap();
                // Either the entry is not registered yet or both indices
                // agree on it; a one-sided insert is never observable.
                let name = registry.lookup_name_by_oid(&parsed);
                if let Some(name) = name {
                    assert_eq!(registry.lookup_oid_by_name(&name), Some(parsed));
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.len(), 8);
    }
}
