//! Classifying certificates by validation level
//!
//! Policy OIDs decide when a known one is present. Otherwise the subject is
//! inspected: CAs rarely mark DV certificates explicitly, but a subject that
//! names nothing beyond the domain gives them away.
//! See <http://unmitigatedrisk.com/?p=203>.

use crate::error::{Error, Result};
use crate::level::ValidationLevel;
use crate::oids::{DOMAIN_VALIDATION_OIDS, EXTENDED_VALIDATION_OIDS, ORGANIZATION_VALIDATION_OIDS};
use const_oid::db::rfc4519::{
    COMMON_NAME, LOCALITY_NAME, ORGANIZATIONAL_UNIT_NAME, ORGANIZATION_NAME, POSTAL_CODE,
};
use const_oid::db::rfc2256::STATE_OR_PROVINCE_NAME;
use const_oid::ObjectIdentifier;
use der::{Decode, Tag, Tagged};
use x509_cert::ext::pkix::CertificatePolicies;
use x509_cert::name::Name;
use x509_cert::Certificate;

/// The strongest level any of `policies` indicates
///
/// An EV policy wins outright; otherwise the maximum of OV and DV matches.
pub fn level_for_policies<'a>(
    policies: impl IntoIterator<Item = &'a ObjectIdentifier>,
) -> ValidationLevel {
    let mut level = ValidationLevel::Unknown;
    for oid in policies {
        if EXTENDED_VALIDATION_OIDS.contains(oid) {
            return ValidationLevel::EV;
        } else if ORGANIZATION_VALIDATION_OIDS.contains(oid) {
            level = level.max(ValidationLevel::OV);
        } else if DOMAIN_VALIDATION_OIDS.contains(oid) {
            level = level.max(ValidationLevel::DV);
        }
    }
    level
}

/// Classify a parsed certificate
pub fn validation_level(cert: &Certificate) -> Result<ValidationLevel> {
    let policies: Vec<ObjectIdentifier> = match cert.tbs_certificate.get::<CertificatePolicies>() {
        Ok(Some((_, policies))) => policies
            .0
            .into_iter()
            .map(|info| info.policy_identifier)
            .collect(),
        Ok(None) => Vec::new(),
        Err(e) => {
            return Err(Error::Certificate(format!(
                "failed to decode certificate policies: {}",
                e
            )))
        }
    };

    let level = level_for_policies(&policies);
    if level != ValidationLevel::Unknown {
        return Ok(level);
    }

    let level = level_from_names(&cert.tbs_certificate.subject, &cert.tbs_certificate.issuer);
    tracing::debug!("no known policy OID, subject heuristic says {}", level);
    Ok(level)
}

/// Classify a DER-encoded certificate
pub fn validation_level_der(der: &[u8]) -> Result<ValidationLevel> {
    let cert = Certificate::from_der(der)?;
    validation_level(&cert)
}

fn level_from_names(subject: &Name, issuer: &Name) -> ValidationLevel {
    let organization = attribute_values(subject, ORGANIZATION_NAME);
    let unit = attribute_values(subject, ORGANIZATIONAL_UNIT_NAME);
    let common_name = attribute_values(subject, COMMON_NAME).pop().unwrap_or_default();

    let names_only_domain = organization.first() == Some(&common_name)
        || unit
            .first()
            .is_some_and(|ou| ou.contains("Domain Control Validated"));

    if names_only_domain {
        let has_address = [LOCALITY_NAME, STATE_OR_PROVINCE_NAME, POSTAL_CODE]
            .into_iter()
            .any(|oid| !attribute_values(subject, oid).is_empty());
        if has_address {
            ValidationLevel::Unknown
        } else {
            ValidationLevel::DV
        }
    } else if organization.first().map(String::as_str) == Some("Persona Not Validated")
        && attribute_values(issuer, COMMON_NAME)
            .last()
            .is_some_and(|cn| cn.contains("StartCom"))
    {
        ValidationLevel::DV
    } else {
        ValidationLevel::Unknown
    }
}

/// String values of every `oid` attribute in `name`, in encoding order
fn attribute_values(name: &Name, oid: ObjectIdentifier) -> Vec<String> {
    name.0
        .iter()
        .flat_map(|rdn| rdn.0.iter())
        .filter(|atv| atv.oid == oid)
        .filter_map(|atv| match atv.value.tag() {
            Tag::Utf8String | Tag::PrintableString | Tag::Ia5String | Tag::TeletexString => {
                Some(String::from_utf8_lossy(atv.value.value()).into_owned())
            }
            _ => None,
        })
        .collect()
}
