//! Error types for extension registration.

use oid::ObjectIdentifier;
use thiserror::Error;

/// Errors returned by [`Registry::register`](crate::Registry::register).
///
/// A lookup miss is not an error: unrecognized extensions are routine, so
/// the lookup operations return `None` instead.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The OID text did not match the dotted-decimal syntax.
    #[error("invalid object identifier '{oid}'")]
    InvalidOidFormat {
        oid: String,
        #[source]
        source: oid::Error,
    },
    /// An entry already claims this OID.
    #[error("object identifier already exists: {0}")]
    DuplicateOid(ObjectIdentifier),
    /// An entry already claims this friendly name.
    #[error("name already exists: {0}")]
    DuplicateName(String),
}
