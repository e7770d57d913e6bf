//! Table column descriptors and badge tones.
//!
//! A [`Column`] is plain data: the record field it shows, a header, whether
//! the table may sort by it, and a formatting function. Column keys use the
//! same names as [`Queryable::FIELDS`](crate::query::Queryable::FIELDS), so a
//! sortable column's key can be handed straight to a
//! [`SortSpec`](crate::query::SortSpec).
//!
//! Status-like enums expose `tone()`, the colour family their badge is drawn
//! in.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{
    AttendanceStatus, CertificationStatus, CertificationType, Role, ShiftType, Staff, StaffStatus,
};
use crate::query::CertificationRow;

/// Badge colour family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Brand colour.
    Primary,
    /// Secondary brand colour.
    Secondary,
    /// Healthy or complete.
    Success,
    /// Needs attention soon.
    Warning,
    /// Needs attention now.
    Error,
    /// Informational.
    Info,
    /// No particular meaning.
    Neutral,
}

impl StaffStatus {
    /// Badge tone for this status.
    pub fn tone(self) -> Tone {
        match self {
            StaffStatus::Active => Tone::Success,
            StaffStatus::OnLeave => Tone::Warning,
            StaffStatus::Inactive => Tone::Error,
            StaffStatus::Unknown => Tone::Neutral,
        }
    }
}

impl CertificationStatus {
    /// Badge tone for this status.
    pub fn tone(self) -> Tone {
        match self {
            CertificationStatus::Active => Tone::Success,
            CertificationStatus::ExpiringSoon => Tone::Warning,
            CertificationStatus::Expired => Tone::Error,
            CertificationStatus::Unknown => Tone::Neutral,
        }
    }
}

impl AttendanceStatus {
    /// Badge tone for this status.
    pub fn tone(self) -> Tone {
        match self {
            AttendanceStatus::Present => Tone::Success,
            AttendanceStatus::Late => Tone::Warning,
            AttendanceStatus::Absent => Tone::Error,
            AttendanceStatus::SickLeave => Tone::Info,
            AttendanceStatus::Unknown => Tone::Neutral,
        }
    }
}

impl Role {
    /// Badge tone for this role.
    pub fn tone(self) -> Tone {
        match self {
            Role::Director => Tone::Primary,
            Role::LeadTeacher => Tone::Secondary,
            Role::AssistantTeacher => Tone::Success,
            Role::Admin => Tone::Info,
            Role::SupportStaff | Role::Unknown => Tone::Neutral,
        }
    }
}

impl CertificationType {
    /// Badge tone for this certification type.
    pub fn tone(self) -> Tone {
        match self {
            CertificationType::Cpr => Tone::Error,
            CertificationType::FirstAid => Tone::Warning,
            CertificationType::ChildDevelopmentAssociate => Tone::Primary,
            CertificationType::BackgroundCheck => Tone::Info,
            CertificationType::FoodHandlersPermit => Tone::Secondary,
            CertificationType::EarlyChildhoodEducation => Tone::Success,
            CertificationType::Unknown => Tone::Neutral,
        }
    }
}

impl ShiftType {
    /// Badge tone for this shift type.
    pub fn tone(self) -> Tone {
        match self {
            ShiftType::Morning => Tone::Primary,
            ShiftType::Afternoon => Tone::Secondary,
            ShiftType::FullDay => Tone::Success,
            ShiftType::Unknown => Tone::Neutral,
        }
    }
}

/// One column of a table over records of type `T`.
pub struct Column<T> {
    /// Record field shown in the column.
    pub key: &'static str,
    /// Header text.
    pub header: &'static str,
    /// Whether the table may be sorted by this column.
    pub sortable: bool,
    /// Renders the cell text.
    pub format: fn(&T) -> String,
    /// Badge tone for the cell, for columns drawn as badges.
    pub tone: Option<fn(&T) -> Tone>,
}

// Derives would require `T: Clone`, which function pointers do not need.
impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("badge", &self.tone.is_some())
            .finish()
    }
}

impl<T> Column<T> {
    /// A sortable plain-text column.
    pub fn new(key: &'static str, header: &'static str, format: fn(&T) -> String) -> Self {
        Self {
            key,
            header,
            sortable: true,
            format,
            tone: None,
        }
    }

    /// Draws the column's cells as badges in the given tone.
    pub fn badge(mut self, tone: fn(&T) -> Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    /// Excludes the column from sorting.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Renders `record`'s cell text.
    pub fn render(&self, record: &T) -> String {
        (self.format)(record)
    }

    /// Returns `record`'s badge tone, if the column is drawn as badges.
    pub fn tone_of(&self, record: &T) -> Option<Tone> {
        self.tone.map(|tone| tone(record))
    }
}

/// Renders a date the way every table shows it, `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Columns of the staff directory table.
pub fn staff_columns() -> Vec<Column<Staff>> {
    vec![
        Column::new("name", "Staff Member", |s: &Staff| s.name.clone()),
        Column::new("role", "Role", |s: &Staff| s.role.to_string()).badge(|s| s.role.tone()),
        Column::new("certifications", "Certifications", |s: &Staff| {
            format!("{} certs", s.certifications.len())
        })
        .badge(|_| Tone::Info),
        Column::new("status", "Status", |s: &Staff| s.status.to_string())
            .badge(|s| s.status.tone()),
        Column::new("phone", "Contact", |s: &Staff| s.phone.clone()),
        Column::new("hireDate", "Hire Date", |s: &Staff| format_date(s.hire_date)),
    ]
}

/// Columns of the certifications table.
pub fn certification_columns() -> Vec<Column<CertificationRow>> {
    vec![
        Column::new("staffName", "Staff Member", |r: &CertificationRow| r.staff_name.clone()),
        Column::new("type", "Certification Type", |r: &CertificationRow| {
            r.certification.cert_type.to_string()
        })
        .badge(|r| r.certification.cert_type.tone()),
        Column::new("issueDate", "Issue Date", |r: &CertificationRow| {
            format_date(r.certification.issue_date)
        }),
        Column::new("expirationDate", "Expiration Date", |r: &CertificationRow| {
            format_date(r.certification.expiration_date)
        }),
        Column::new("status", "Status", |r: &CertificationRow| {
            r.certification.status.to_string()
        })
        .badge(|r| r.certification.status.tone()),
        Column::new("documentUrl", "Document", |r: &CertificationRow| {
            r.certification
                .document_url
                .clone()
                .unwrap_or_else(|| "-".to_string())
        })
        .unsortable(),
    ]
}

/// Renders one table row: each column's cell text, in column order.
pub fn render_row<T>(columns: &[Column<T>], record: &T) -> Vec<String> {
    columns.iter().map(|column| column.render(record)).collect()
}
