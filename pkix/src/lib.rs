//! Well-Known PKIX Certificate/CRL Extension Catalog
//!
//! RFC 5280 Section 4.2 defines the standard certificate extensions and
//! Section 5.2 the CRL extensions. This crate supplies the fixed catalog
//! consumed by the `registry` crate at bootstrap: the dotted-decimal OID
//! constants ([`oids`]) and the closed [`ExtensionKind`] tag enum naming
//! the decode/encode capability for each well-known extension.

pub mod kind;
pub mod oids;

pub use kind::ExtensionKind;
