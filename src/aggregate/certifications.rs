//! Certification summaries for the status cards and expiration banner.

use crate::models::{Certification, CertificationStatus, CertificationType};

use super::tally::Tally;

/// Counts certifications per status.
///
/// Unrecognized statuses count under [`CertificationStatus::Unknown`].
///
/// # Example
///
/// ```
/// use staff_engine::aggregate::count_by_status;
/// use staff_engine::models::{Certification, CertificationStatus, CertificationType};
/// use chrono::NaiveDate;
///
/// let make = |status| Certification {
///     id: "c".to_string(),
///     cert_type: CertificationType::Cpr,
///     issue_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     expiration_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     status,
///     document_url: None,
/// };
/// let certs = vec![
///     make(CertificationStatus::Active),
///     make(CertificationStatus::Expired),
///     make(CertificationStatus::Active),
/// ];
///
/// let counts = count_by_status(&certs);
/// assert_eq!(counts.get(&CertificationStatus::Active), 2);
/// assert_eq!(counts.total(), 3);
/// ```
pub fn count_by_status<'a, I>(certifications: I) -> Tally<CertificationStatus>
where
    I: IntoIterator<Item = &'a Certification>,
{
    certifications.into_iter().map(|cert| cert.status).collect()
}

/// Counts certifications per type.
pub fn count_by_type<'a, I>(certifications: I) -> Tally<CertificationType>
where
    I: IntoIterator<Item = &'a Certification>,
{
    certifications
        .into_iter()
        .map(|cert| cert.cert_type)
        .collect()
}

/// Returns the certifications that are expiring soon or expired, in input
/// order. These drive the expiration warning banner.
pub fn expiring_or_expired<'a, I>(certifications: I) -> Vec<&'a Certification>
where
    I: IntoIterator<Item = &'a Certification>,
{
    certifications
        .into_iter()
        .filter(|cert| cert.status.needs_attention())
        .collect()
}

/// Number of certifications that are expiring soon or expired.
pub fn needs_attention_count<'a, I>(certifications: I) -> usize
where
    I: IntoIterator<Item = &'a Certification>,
{
    certifications
        .into_iter()
        .filter(|cert| cert.status.needs_attention())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_cert(
        id: &str,
        cert_type: CertificationType,
        status: CertificationStatus,
    ) -> Certification {
        Certification {
            id: id.to_string(),
            cert_type,
            issue_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            expiration_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            status,
            document_url: None,
        }
    }

    fn mixed() -> Vec<Certification> {
        vec![
            make_cert("c1", CertificationType::Cpr, CertificationStatus::Active),
            make_cert("c2", CertificationType::FirstAid, CertificationStatus::Expired),
            make_cert("c3", CertificationType::Cpr, CertificationStatus::ExpiringSoon),
            make_cert("c4", CertificationType::BackgroundCheck, CertificationStatus::Unknown),
        ]
    }

    #[test]
    fn test_unknown_status_has_own_bucket() {
        let counts = count_by_status(&mixed());
        assert_eq!(counts.get(&CertificationStatus::Unknown), 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_count_by_type() {
        let counts = count_by_type(&mixed());
        assert_eq!(counts.get(&CertificationType::Cpr), 2);
        assert_eq!(counts.get(&CertificationType::FoodHandlersPermit), 0);
    }

    #[test]
    fn test_expiring_or_expired_keeps_order() {
        let certs = mixed();
        let flagged: Vec<&str> = expiring_or_expired(&certs)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(flagged, vec!["c2", "c3"]);
        assert_eq!(needs_attention_count(&certs), 2);
    }
}
