//! Record filtering.
//!
//! Filters are plain enum values so a set of active filters can be compared,
//! hashed and used as part of a cache key. Every filter in a [`FilterSet`]
//! must match for a record to pass.

use serde::{Deserialize, Serialize};

use crate::models::{CertificationStatus, CertificationType, Role, Staff, StaffStatus};

use super::records::CertificationRow;

/// A test a record either passes or fails.
pub trait Predicate<T: ?Sized> {
    /// Returns true if the record passes.
    fn matches(&self, record: &T) -> bool;
}

/// Returns the records passing `predicate`, in input order.
pub fn filter<'a, T, I, P>(records: I, predicate: P) -> Vec<&'a T>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    P: Fn(&T) -> bool,
{
    records
        .into_iter()
        .filter(|record| predicate(*record))
        .collect()
}

/// A conjunction of filters. An empty set passes every record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSet<F> {
    filters: Vec<F>,
}

impl<F> Default for FilterSet<F> {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
        }
    }
}

impl<F> FilterSet<F> {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter, returning the extended set.
    pub fn and(mut self, filter: F) -> Self {
        self.filters.push(filter);
        self
    }

    /// Adds a filter in place.
    pub fn push(&mut self, filter: F) {
        self.filters.push(filter);
    }

    /// Returns the active filters.
    pub fn filters(&self) -> &[F] {
        &self.filters
    }

    /// Returns true if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<F> FromIterator<F> for FilterSet<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

impl<T, F> Predicate<T> for FilterSet<F>
where
    F: Predicate<T>,
{
    fn matches(&self, record: &T) -> bool {
        self.filters.iter().all(|filter| filter.matches(record))
    }
}

/// Filters available on the staff directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum StaffFilter {
    /// Employment status equals the given status.
    Status(StaffStatus),
    /// Role equals the given role.
    Role(Role),
    /// Holds at least one certification of the given type.
    HasCertification(CertificationType),
}

impl Predicate<Staff> for StaffFilter {
    fn matches(&self, staff: &Staff) -> bool {
        match self {
            StaffFilter::Status(status) => staff.status == *status,
            StaffFilter::Role(role) => staff.role == *role,
            StaffFilter::HasCertification(cert_type) => staff
                .certifications
                .iter()
                .any(|cert| cert.cert_type == *cert_type),
        }
    }
}

/// Filters available on the certifications table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum CertificationFilter {
    /// Effective status equals the given status.
    Status(CertificationStatus),
    /// Certification type equals the given type.
    Type(CertificationType),
    /// Belongs to the given staff member.
    StaffId(String),
    /// Expiring soon or expired.
    NeedsAttention,
}

impl Predicate<CertificationRow> for CertificationFilter {
    fn matches(&self, row: &CertificationRow) -> bool {
        match self {
            CertificationFilter::Status(status) => row.certification.status == *status,
            CertificationFilter::Type(cert_type) => row.certification.cert_type == *cert_type,
            CertificationFilter::StaffId(staff_id) => row.staff_id == *staff_id,
            CertificationFilter::NeedsAttention => row.certification.status.needs_attention(),
        }
    }
}
