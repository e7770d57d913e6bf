//! Externally supplied dashboard figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary figures supplied alongside the dataset.
///
/// The engine does not derive these; they are passed through verbatim to the
/// overview and report views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Headcount.
    pub total_staff: u32,
    /// Staff working today.
    pub staff_on_duty: u32,
    /// Certifications expiring within the warning window.
    pub certifications_expiring: u32,
    /// Unfilled positions.
    pub open_positions: u32,
    /// Attendance rate as a percentage (e.g., 94.5).
    pub attendance_rate: Decimal,
    /// Children per staff member, rendered as `N:1`.
    pub staff_to_child_ratio: Decimal,
}

impl DashboardStats {
    /// Formats the staff-to-child ratio the way the report cards show it.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_engine::models::DashboardStats;
    /// use rust_decimal::Decimal;
    ///
    /// let stats = DashboardStats {
    ///     staff_to_child_ratio: Decimal::new(4, 0),
    ///     ..Default::default()
    /// };
    /// assert_eq!(stats.ratio_label(), "4:1");
    /// ```
    pub fn ratio_label(&self) -> String {
        format!("{}:1", self.staff_to_child_ratio.normalize())
    }
}
