//! Aggregation for the staff engine.
//!
//! This module turns snapshots into the figures the dashboards display:
//! grouped counts, the expiration banner's subset, attendance views joined
//! with staff names, the role distribution chart and the overview summary.

mod attendance;
mod certifications;
mod overview;
mod staff;
mod tally;

pub use attendance::{
    AttendanceRow, StaffHours, UNKNOWN_STAFF_NAME, attendance_rows, count_by_attendance_status,
    hours_by_staff, staff_name_or_unknown,
};
pub use certifications::{
    count_by_status, count_by_type, expiring_or_expired, needs_attention_count,
};
pub use overview::{OverviewSummary, coverage_percent};
pub use staff::{RoleShare, count_by_role, count_by_staff_status, role_distribution};
pub use tally::Tally;
