//! Attendance record model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// How a staff member attended on a given day.
    pub enum AttendanceStatus {
        /// Arrived on time.
        Present => "Present",
        /// Arrived late.
        Late => "Late",
        /// Did not attend.
        Absent => "Absent",
        /// Off sick.
        SickLeave => "Sick Leave",
    }
}

/// One day of attendance for one staff member.
///
/// `staff_id` is a weak reference: it may not resolve to a staff member in
/// the snapshot, in which case views render the name as "Unknown".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The staff member this record belongs to.
    pub staff_id: String,
    /// The day attended.
    pub date: NaiveDate,
    /// Wall-clock check-in time, kept as written.
    pub check_in: String,
    /// Wall-clock check-out time, if the staff member checked out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    /// Hours worked that day.
    pub hours_worked: Decimal,
    /// Attendance status.
    pub status: AttendanceStatus,
}
