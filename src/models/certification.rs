//! Certification model and related types.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// The kinds of training or credential a certification records.
    pub enum CertificationType {
        /// Cardiopulmonary resuscitation.
        Cpr => "CPR",
        /// First aid.
        FirstAid => "First Aid",
        /// Child Development Associate credential.
        ChildDevelopmentAssociate => "Child Development Associate (CDA)",
        /// Criminal background check.
        BackgroundCheck => "Background Check",
        /// Food handler's permit.
        FoodHandlersPermit => "Food Handler's Permit",
        /// Early childhood education qualification.
        EarlyChildhoodEducation => "Early Childhood Education",
    }
}

labelled_enum! {
    /// Validity of a certification relative to a reference time.
    pub enum CertificationStatus {
        /// Valid beyond the warning window.
        Active => "Active",
        /// Valid, but expires within the warning window.
        ExpiringSoon => "Expiring Soon",
        /// No longer valid.
        Expired => "Expired",
    }
}

impl CertificationStatus {
    /// Returns true for statuses that should raise the expiration warning.
    pub fn needs_attention(self) -> bool {
        matches!(
            self,
            CertificationStatus::ExpiringSoon | CertificationStatus::Expired
        )
    }
}

/// A certification held by a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    /// Unique identifier for the certification.
    pub id: String,
    /// What the certification is for.
    #[serde(rename = "type")]
    pub cert_type: CertificationType,
    /// The date the certification was issued.
    pub issue_date: NaiveDate,
    /// The date the certification expires.
    pub expiration_date: NaiveDate,
    /// Status as recorded in the dataset. May disagree with the dates.
    pub status: CertificationStatus,
    /// Optional link to the scanned document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
}

impl Certification {
    /// Returns the instant the certification stops being valid: midnight at
    /// the start of the expiration date.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_engine::models::{Certification, CertificationStatus, CertificationType};
    /// use chrono::NaiveDate;
    ///
    /// let cert = Certification {
    ///     id: "cert_001".to_string(),
    ///     cert_type: CertificationType::Cpr,
    ///     issue_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
    ///     expiration_date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
    ///     status: CertificationStatus::Active,
    ///     document_url: None,
    /// };
    /// assert_eq!(cert.expires_at().to_string(), "2026-03-15 00:00:00");
    /// ```
    pub fn expires_at(&self) -> NaiveDateTime {
        self.expiration_date.and_time(NaiveTime::MIN)
    }
}
