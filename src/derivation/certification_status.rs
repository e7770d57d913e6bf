//! Certification status derivation.
//!
//! This module turns a certification's expiration date into a status
//! relative to a caller-supplied "now", and applies the configured policy for
//! reconciling that derived status with the status stored in the dataset.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{Certification, CertificationStatus, Staff};

/// Which certification status the engine trusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Use the status recorded in the dataset as-is.
    Stored,
    /// Recompute the status from the expiration date, ignoring the stored one.
    #[default]
    Derived,
}

/// Derives a certification status from its expiration instant.
///
/// # Rules
///
/// - `expiration <= now` → [`CertificationStatus::Expired`]
/// - `expiration <= now + warning_window_days` → [`CertificationStatus::ExpiringSoon`]
/// - otherwise → [`CertificationStatus::Active`]
///
/// An expiration exactly at `now` is expired; one exactly at the end of the
/// warning window is still expiring soon. The function never reads the wall
/// clock, so results depend only on its arguments.
///
/// # Examples
///
/// ```
/// use staff_engine::derivation::derive_certification_status;
/// use staff_engine::models::CertificationStatus;
/// use chrono::{Duration, NaiveDateTime};
///
/// let now = NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// assert_eq!(
///     derive_certification_status(now - Duration::days(10), now, 30),
///     CertificationStatus::Expired
/// );
/// assert_eq!(
///     derive_certification_status(now + Duration::days(10), now, 30),
///     CertificationStatus::ExpiringSoon
/// );
/// assert_eq!(
///     derive_certification_status(now + Duration::days(60), now, 30),
///     CertificationStatus::Active
/// );
/// ```
pub fn derive_certification_status(
    expiration: NaiveDateTime,
    now: NaiveDateTime,
    warning_window_days: i64,
) -> CertificationStatus {
    if expiration <= now {
        return CertificationStatus::Expired;
    }

    // A window too large to represent reaches past every possible expiration.
    let within_window = Duration::try_days(warning_window_days)
        .and_then(|window| now.checked_add_signed(window))
        .is_none_or(|window_end| expiration <= window_end);

    if within_window {
        CertificationStatus::ExpiringSoon
    } else {
        CertificationStatus::Active
    }
}

/// Returns the status the engine should report for a certification under the
/// given policy.
pub fn effective_status(
    certification: &Certification,
    policy: StatusPolicy,
    now: NaiveDateTime,
    warning_window_days: i64,
) -> CertificationStatus {
    match policy {
        StatusPolicy::Stored => certification.status,
        StatusPolicy::Derived => {
            derive_certification_status(certification.expires_at(), now, warning_window_days)
        }
    }
}

/// A certification whose stored status disagrees with its dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMismatch {
    /// The owning staff member.
    pub staff_id: String,
    /// The certification.
    pub certification_id: String,
    /// Status recorded in the dataset.
    pub stored: CertificationStatus,
    /// Status derived from the expiration date.
    pub derived: CertificationStatus,
}

/// Lists every certification whose stored status differs from the status
/// derived from its expiration date.
pub fn status_mismatches(
    staff: &[Staff],
    now: NaiveDateTime,
    warning_window_days: i64,
) -> Vec<StatusMismatch> {
    let mut mismatches = Vec::new();

    for member in staff {
        for certification in &member.certifications {
            let derived =
                derive_certification_status(certification.expires_at(), now, warning_window_days);
            if derived != certification.status {
                warn!(
                    staff_id = %member.id,
                    certification_id = %certification.id,
                    stored = %certification.status,
                    derived = %derived,
                    "Stored certification status disagrees with expiration date"
                );
                mismatches.push(StatusMismatch {
                    staff_id: member.id.clone(),
                    certification_id: certification.id.clone(),
                    stored: certification.status,
                    derived,
                });
            }
        }
    }

    mismatches
}
