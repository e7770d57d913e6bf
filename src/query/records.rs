//! Queryable record types: staff members and flattened certification rows.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::derivation::{StatusPolicy, effective_status};
use crate::models::{Certification, CertificationStatus, Staff};

use super::field::{FieldValue, Queryable};

impl Queryable for Staff {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "email",
        "phone",
        "role",
        "hireDate",
        "status",
        "avatar",
        "certifications",
    ];

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "id" => FieldValue::text(&self.id),
            "name" => FieldValue::text(&self.name),
            "email" => FieldValue::text(&self.email),
            "phone" => FieldValue::text(&self.phone),
            "role" => FieldValue::text(self.role.as_str()),
            "hireDate" => FieldValue::Date(self.hire_date),
            "status" => FieldValue::text(self.status.as_str()),
            "avatar" => FieldValue::optional_text(self.avatar.as_deref()),
            "certifications" => FieldValue::Count(self.certifications.len()),
            _ => FieldValue::Missing,
        }
    }
}

/// One row of the certifications table: a certification joined with the
/// staff member holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationRow {
    /// The holder's id.
    pub staff_id: String,
    /// The holder's name.
    pub staff_name: String,
    /// The holder's avatar reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_avatar: Option<String>,
    /// The certification, with `status` set to the effective status.
    pub certification: Certification,
    /// The status as recorded in the dataset.
    pub stored_status: CertificationStatus,
}

impl Queryable for CertificationRow {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "staffId",
        "staffName",
        "type",
        "issueDate",
        "expirationDate",
        "status",
        "documentUrl",
    ];

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "id" => FieldValue::text(&self.certification.id),
            "staffId" => FieldValue::text(&self.staff_id),
            "staffName" => FieldValue::text(&self.staff_name),
            "type" => FieldValue::text(self.certification.cert_type.as_str()),
            "issueDate" => FieldValue::Date(self.certification.issue_date),
            "expirationDate" => FieldValue::Date(self.certification.expiration_date),
            "status" => FieldValue::text(self.certification.status.as_str()),
            "documentUrl" => FieldValue::optional_text(self.certification.document_url.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}

/// Flattens every staff member's certifications into table rows, staff
/// order first and then each member's certification order.
///
/// Each row's status is resolved under `policy`; the recorded status is kept
/// in [`CertificationRow::stored_status`].
pub fn certification_rows(
    staff: &[Staff],
    policy: StatusPolicy,
    now: NaiveDateTime,
    warning_window_days: i64,
) -> Vec<CertificationRow> {
    staff
        .iter()
        .flat_map(|member| {
            member.certifications.iter().map(move |cert| {
                let mut certification = cert.clone();
                certification.status = effective_status(cert, policy, now, warning_window_days);
                CertificationRow {
                    staff_id: member.id.clone(),
                    staff_name: member.name.clone(),
                    staff_avatar: member.avatar.clone(),
                    certification,
                    stored_status: cert.status,
                }
            })
        })
        .collect()
}
