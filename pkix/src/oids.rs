//! Dotted-decimal OID constants for the well-known PKIX extensions.
//!
//! Certificate and CRL extensions live under the id-ce arc
//! `joint-iso-itu-t(2) ds(5) certificateExtension(29)`; the access
//! description extensions come from the PKIX private extension arc
//! id-pe (`1.3.6.1.5.5.7.1`).

// id-ce arc (2.5.29)
pub const SUBJECT_KEY_IDENTIFIER: &str = "2.5.29.14";
pub const KEY_USAGE: &str = "2.5.29.15";
pub const PRIVATE_KEY_USAGE: &str = "2.5.29.16";
pub const SUBJECT_ALTERNATIVE_NAME: &str = "2.5.29.17";
pub const ISSUER_ALTERNATIVE_NAME: &str = "2.5.29.18";
pub const BASIC_CONSTRAINTS: &str = "2.5.29.19";
pub const CRL_NUMBER: &str = "2.5.29.20";
pub const CRL_REASON_CODE: &str = "2.5.29.21";
pub const DELTA_CRL_INDICATOR: &str = "2.5.29.27";
pub const ISSUING_DISTRIBUTION_POINT: &str = "2.5.29.28";
pub const CERTIFICATE_ISSUER: &str = "2.5.29.29";
pub const NAME_CONSTRAINTS: &str = "2.5.29.30";
pub const CRL_DISTRIBUTION_POINTS: &str = "2.5.29.31";
pub const CERTIFICATE_POLICIES: &str = "2.5.29.32";
pub const POLICY_MAPPINGS: &str = "2.5.29.33";
pub const AUTHORITY_KEY_IDENTIFIER: &str = "2.5.29.35";
pub const POLICY_CONSTRAINTS: &str = "2.5.29.36";
pub const EXTENDED_KEY_USAGE: &str = "2.5.29.37";
pub const FRESHEST_CRL: &str = "2.5.29.46";
pub const INHIBIT_ANY_POLICY: &str = "2.5.29.54";

// id-pe arc (1.3.6.1.5.5.7.1)
pub const AUTHORITY_INFO_ACCESS: &str = "1.3.6.1.5.5.7.1.1";
pub const SUBJECT_INFO_ACCESS: &str = "1.3.6.1.5.5.7.1.11";

// id-pkix-ocsp arc (1.3.6.1.5.5.7.48.1)
pub const OCSP_NO_CHECK: &str = "1.3.6.1.5.5.7.48.1.5";

// Netscape vendor arc (2.16.840.1.113730.1)
pub const NETSCAPE_CERT_TYPE: &str = "2.16.840.1.113730.1.1";
