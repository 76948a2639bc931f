//! Bootstrap catalog of well-known PKIX extensions.
//!
//! [`WELL_KNOWN`] is plain data consumed by a single loop in
//! [`Registry::well_known`]; every row goes through the same
//! [`Registry::register`] path as a runtime registration. Friendly names
//! follow the `X509.info.extensions.<Name>` hierarchy used by configuration
//! and diagnostic surfaces.

use once_cell::sync::Lazy;
use pkix::{ExtensionKind, oids};

use crate::Registry;

/// (friendly name, OID text, handler tag) for every well-known certificate
/// and CRL extension.
const WELL_KNOWN: &[(&str, &str, ExtensionKind)] = &[
    (
        "X509.info.extensions.SubjectKeyIdentifier",
        oids::SUBJECT_KEY_IDENTIFIER,
        ExtensionKind::SubjectKeyIdentifier,
    ),
    (
        "X509.info.extensions.KeyUsage",
        oids::KEY_USAGE,
        ExtensionKind::KeyUsage,
    ),
    (
        "X509.info.extensions.PrivateKeyUsage",
        oids::PRIVATE_KEY_USAGE,
        ExtensionKind::PrivateKeyUsage,
    ),
    (
        "X509.info.extensions.SubjectAlternativeName",
        oids::SUBJECT_ALTERNATIVE_NAME,
        ExtensionKind::SubjectAlternativeName,
    ),
    (
        "X509.info.extensions.IssuerAlternativeName",
        oids::ISSUER_ALTERNATIVE_NAME,
        ExtensionKind::IssuerAlternativeName,
    ),
    (
        "X509.info.extensions.BasicConstraints",
        oids::BASIC_CONSTRAINTS,
        ExtensionKind::BasicConstraints,
    ),
    (
        "X509.info.extensions.CRLNumber",
        oids::CRL_NUMBER,
        ExtensionKind::CrlNumber,
    ),
    (
        "X509.info.extensions.CRLReasonCode",
        oids::CRL_REASON_CODE,
        ExtensionKind::CrlReasonCode,
    ),
    (
        "X509.info.extensions.NameConstraints",
        oids::NAME_CONSTRAINTS,
        ExtensionKind::NameConstraints,
    ),
    (
        "X509.info.extensions.PolicyMappings",
        oids::POLICY_MAPPINGS,
        ExtensionKind::PolicyMappings,
    ),
    (
        "X509.info.extensions.AuthorityKeyIdentifier",
        oids::AUTHORITY_KEY_IDENTIFIER,
        ExtensionKind::AuthorityKeyIdentifier,
    ),
    (
        "X509.info.extensions.PolicyConstraints",
        oids::POLICY_CONSTRAINTS,
        ExtensionKind::PolicyConstraints,
    ),
    (
        "X509.info.extensions.NetscapeCertType",
        oids::NETSCAPE_CERT_TYPE,
        ExtensionKind::NetscapeCertType,
    ),
    (
        "X509.info.extensions.CertificatePolicies",
        oids::CERTIFICATE_POLICIES,
        ExtensionKind::CertificatePolicies,
    ),
    (
        "X509.info.extensions.ExtendedKeyUsage",
        oids::EXTENDED_KEY_USAGE,
        ExtensionKind::ExtendedKeyUsage,
    ),
    (
        "X509.info.extensions.InhibitAnyPolicy",
        oids::INHIBIT_ANY_POLICY,
        ExtensionKind::InhibitAnyPolicy,
    ),
    (
        "X509.info.extensions.CRLDistributionPoints",
        oids::CRL_DISTRIBUTION_POINTS,
        ExtensionKind::CrlDistributionPoints,
    ),
    (
        "X509.info.extensions.CertificateIssuer",
        oids::CERTIFICATE_ISSUER,
        ExtensionKind::CertificateIssuer,
    ),
    (
        "X509.info.extensions.SubjectInfoAccess",
        oids::SUBJECT_INFO_ACCESS,
        ExtensionKind::SubjectInfoAccess,
    ),
    (
        "X509.info.extensions.AuthorityInfoAccess",
        oids::AUTHORITY_INFO_ACCESS,
        ExtensionKind::AuthorityInfoAccess,
    ),
    (
        "X509.info.extensions.IssuingDistributionPoint",
        oids::ISSUING_DISTRIBUTION_POINT,
        ExtensionKind::IssuingDistributionPoint,
    ),
    (
        "X509.info.extensions.DeltaCRLIndicator",
        oids::DELTA_CRL_INDICATOR,
        ExtensionKind::DeltaCrlIndicator,
    ),
    (
        "X509.info.extensions.FreshestCRL",
        oids::FRESHEST_CRL,
        ExtensionKind::FreshestCrl,
    ),
    (
        "X509.info.extensions.OCSPNoCheck",
        oids::OCSP_NO_CHECK,
        ExtensionKind::OcspNoCheck,
    ),
];

static GLOBAL: Lazy<Registry<ExtensionKind>> = Lazy::new(Registry::well_known);

/// The process-wide registry, populated with the well-known catalog before
/// first use and alive for the process lifetime.
pub fn global() -> &'static Registry<ExtensionKind> {
    &GLOBAL
}

impl Registry<ExtensionKind> {
    /// A fresh registry holding exactly the well-known PKIX catalog.
    ///
    /// # Panics
    /// A duplicate OID or name inside the fixed table is a defect in the
    /// table itself rather than a runtime condition, so it aborts startup
    /// instead of surfacing as a [`crate::RegistrationError`].
    pub fn well_known() -> Self {
        let registry = Registry::new();
        for (name, oid_text, kind) in WELL_KNOWN {
            if let Err(err) = registry.register(*name, oid_text, *kind) {
                panic!("well-known extension table is inconsistent at {name} ({oid_text}): {err}");
            }
        }
        registry
    }
}
