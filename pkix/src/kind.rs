//! Closed set of well-known extension kinds.

use serde::{Deserialize, Serialize};

use crate::oids;

/// Tag naming the decode/encode capability for a well-known certificate or
/// CRL extension.
///
/// The registry stores this tag and hands it back to the parsing pipeline;
/// it never inspects or invokes it. Runtime-registered vendor extensions
/// carry their own handler values, so this enum stays closed over the
/// bootstrap catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtensionKind {
    AuthorityKeyIdentifier,
    SubjectKeyIdentifier,
    KeyUsage,
    PrivateKeyUsage,
    SubjectAlternativeName,
    IssuerAlternativeName,
    BasicConstraints,
    CrlNumber,
    CrlReasonCode,
    DeltaCrlIndicator,
    IssuingDistributionPoint,
    CertificateIssuer,
    NameConstraints,
    CrlDistributionPoints,
    CertificatePolicies,
    PolicyMappings,
    PolicyConstraints,
    ExtendedKeyUsage,
    FreshestCrl,
    InhibitAnyPolicy,
    AuthorityInfoAccess,
    SubjectInfoAccess,
    OcspNoCheck,
    NetscapeCertType,
}

impl ExtensionKind {
    /// Every well-known kind, in id-ce/id-pe/vendor catalog order.
    pub const ALL: [ExtensionKind; 24] = [
        ExtensionKind::AuthorityKeyIdentifier,
        ExtensionKind::SubjectKeyIdentifier,
        ExtensionKind::KeyUsage,
        ExtensionKind::PrivateKeyUsage,
        ExtensionKind::SubjectAlternativeName,
        ExtensionKind::IssuerAlternativeName,
        ExtensionKind::BasicConstraints,
        ExtensionKind::CrlNumber,
        ExtensionKind::CrlReasonCode,
        ExtensionKind::DeltaCrlIndicator,
        ExtensionKind::IssuingDistributionPoint,
        ExtensionKind::CertificateIssuer,
        ExtensionKind::NameConstraints,
        ExtensionKind::CrlDistributionPoints,
        ExtensionKind::CertificatePolicies,
        ExtensionKind::PolicyMappings,
        ExtensionKind::PolicyConstraints,
        ExtensionKind::ExtendedKeyUsage,
        ExtensionKind::FreshestCrl,
        ExtensionKind::InhibitAnyPolicy,
        ExtensionKind::AuthorityInfoAccess,
        ExtensionKind::SubjectInfoAccess,
        ExtensionKind::OcspNoCheck,
        ExtensionKind::NetscapeCertType,
    ];

    /// The dotted-decimal OID for this extension.
    pub const fn oid(&self) -> &'static str {
        match self {
            ExtensionKind::AuthorityKeyIdentifier => oids::AUTHORITY_KEY_IDENTIFIER,
            ExtensionKind::SubjectKeyIdentifier => oids::SUBJECT_KEY_IDENTIFIER,
            ExtensionKind::KeyUsage => oids::KEY_USAGE,
            ExtensionKind::PrivateKeyUsage => oids::PRIVATE_KEY_USAGE,
            ExtensionKind::SubjectAlternativeName => oids::SUBJECT_ALTERNATIVE_NAME,
            ExtensionKind::IssuerAlternativeName => oids::ISSUER_ALTERNATIVE_NAME,
            ExtensionKind::BasicConstraints => oids::BASIC_CONSTRAINTS,
            ExtensionKind::CrlNumber => oids::CRL_NUMBER,
            ExtensionKind::CrlReasonCode => oids::CRL_REASON_CODE,
            ExtensionKind::DeltaCrlIndicator => oids::DELTA_CRL_INDICATOR,
            ExtensionKind::IssuingDistributionPoint => oids::ISSUING_DISTRIBUTION_POINT,
            ExtensionKind::CertificateIssuer => oids::CERTIFICATE_ISSUER,
            ExtensionKind::NameConstraints => oids::NAME_CONSTRAINTS,
            ExtensionKind::CrlDistributionPoints => oids::CRL_DISTRIBUTION_POINTS,
            ExtensionKind::CertificatePolicies => oids::CERTIFICATE_POLICIES,
            ExtensionKind::PolicyMappings => oids::POLICY_MAPPINGS,
            ExtensionKind::PolicyConstraints => oids::POLICY_CONSTRAINTS,
            ExtensionKind::ExtendedKeyUsage => oids::EXTENDED_KEY_USAGE,
            ExtensionKind::FreshestCrl => oids::FRESHEST_CRL,
            ExtensionKind::InhibitAnyPolicy => oids::INHIBIT_ANY_POLICY,
            ExtensionKind::AuthorityInfoAccess => oids::AUTHORITY_INFO_ACCESS,
            ExtensionKind::SubjectInfoAccess => oids::SUBJECT_INFO_ACCESS,
            ExtensionKind::OcspNoCheck => oids::OCSP_NO_CHECK,
            ExtensionKind::NetscapeCertType => oids::NETSCAPE_CERT_TYPE,
        }
    }

    /// The short attribute name, e.g. `BasicConstraints`.
    ///
    /// This matches the last segment of the registry friendly name
    /// `X509.info.extensions.<Name>`.
    pub const fn name(&self) -> &'static str {
        match self {
            ExtensionKind::AuthorityKeyIdentifier => "AuthorityKeyIdentifier",
            ExtensionKind::SubjectKeyIdentifier => "SubjectKeyIdentifier",
            ExtensionKind::KeyUsage => "KeyUsage",
            ExtensionKind::PrivateKeyUsage => "PrivateKeyUsage",
            ExtensionKind::SubjectAlternativeName => "SubjectAlternativeName",
            ExtensionKind::IssuerAlternativeName => "IssuerAlternativeName",
            ExtensionKind::BasicConstraints => "BasicConstraints",
            ExtensionKind::CrlNumber => "CRLNumber",
            ExtensionKind::CrlReasonCode => "CRLReasonCode",
            ExtensionKind::DeltaCrlIndicator => "DeltaCRLIndicator",
            ExtensionKind::IssuingDistributionPoint => "IssuingDistributionPoint",
            ExtensionKind::CertificateIssuer => "CertificateIssuer",
            ExtensionKind::NameConstraints => "NameConstraints",
            ExtensionKind::CrlDistributionPoints => "CRLDistributionPoints",
            ExtensionKind::CertificatePolicies => "CertificatePolicies",
            ExtensionKind::PolicyMappings => "PolicyMappings",
            ExtensionKind::PolicyConstraints => "PolicyConstraints",
            ExtensionKind::ExtendedKeyUsage => "ExtendedKeyUsage",
            ExtensionKind::FreshestCrl => "FreshestCRL",
            ExtensionKind::InhibitAnyPolicy => "InhibitAnyPolicy",
            ExtensionKind::AuthorityInfoAccess => "AuthorityInfoAccess",
            ExtensionKind::SubjectInfoAccess => "SubjectInfoAccess",
            ExtensionKind::OcspNoCheck => "OCSPNoCheck",
            ExtensionKind::NetscapeCertType => "NetscapeCertType",
        }
    }
}
