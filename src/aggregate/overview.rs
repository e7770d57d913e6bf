//! The overview page summary.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::EngineConfig;
use crate::derivation::on_duty_today;
use crate::models::{CertificationStatus, DashboardStats, Staff};
use crate::query::certification_rows;
use crate::snapshot::Snapshot;

use super::certifications::count_by_status;
use super::staff::{RoleShare, role_distribution, share_percent};
use super::tally::Tally;

/// Everything the overview page shows, computed from one snapshot.
///
/// Figures derived here come from the snapshot itself. [`DashboardStats`]
/// carries figures the engine cannot derive (open positions, attendance rate,
/// staff-to-child ratio) and is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSummary<'a> {
    /// Number of staff in the snapshot.
    pub total_staff: usize,
    /// Staff on duty today, in snapshot order.
    pub on_duty: Vec<&'a Staff>,
    /// Certification counts per effective status.
    pub certification_counts: Tally<CertificationStatus>,
    /// Certifications expiring soon or expired, under the configured window
    /// and status policy.
    pub certifications_expiring: usize,
    /// Role distribution chart data.
    pub roles: Vec<RoleShare>,
    /// Externally supplied figures.
    pub stats: DashboardStats,
}

impl<'a> OverviewSummary<'a> {
    /// Builds the summary for `snapshot` as of `now`.
    pub fn build(
        snapshot: &'a Snapshot,
        stats: &DashboardStats,
        now: NaiveDateTime,
        config: &EngineConfig,
    ) -> Self {
        let staff = snapshot.staff();
        let rows = certification_rows(
            staff,
            config.status_policy,
            now,
            config.warning_window_days,
        );
        let certification_counts = count_by_status(rows.iter().map(|row| &row.certification));
        let certifications_expiring = certification_counts.get(&CertificationStatus::ExpiringSoon)
            + certification_counts.get(&CertificationStatus::Expired);

        Self {
            total_staff: staff.len(),
            on_duty: on_duty_today(staff, now),
            certification_counts,
            certifications_expiring,
            roles: role_distribution(staff),
            stats: stats.clone(),
        }
    }

    /// Number of staff on duty today.
    pub fn on_duty_count(&self) -> usize {
        self.on_duty.len()
    }

    /// Percentage of staff on duty, rounded to a whole number.
    pub fn coverage_percent(&self) -> Decimal {
        coverage_percent(self.on_duty.len(), self.total_staff)
    }
}

/// `round(on_duty / total * 100)`, or zero when `total` is zero.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use staff_engine::aggregate::coverage_percent;
///
/// assert_eq!(coverage_percent(7, 9), Decimal::from(78));
/// assert_eq!(coverage_percent(0, 0), Decimal::ZERO);
/// ```
pub fn coverage_percent(on_duty: usize, total: usize) -> Decimal {
    share_percent(on_duty, total)
}
