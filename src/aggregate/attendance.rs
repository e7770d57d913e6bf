//! Attendance views joined with the staff list.
//!
//! Attendance records refer to staff by id only. Lookups that miss do not
//! fail: the record is shown against the name `"Unknown"`.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::models::{AttendanceRecord, AttendanceStatus, Staff};

use super::tally::Tally;

/// Name shown for attendance records whose staff member cannot be found.
pub const UNKNOWN_STAFF_NAME: &str = "Unknown";

/// An attendance record with its staff member's display details.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRow<'a> {
    /// The underlying record.
    pub record: &'a AttendanceRecord,
    /// The staff member's name, or [`UNKNOWN_STAFF_NAME`].
    pub staff_name: &'a str,
    /// The staff member's avatar, if known.
    pub staff_avatar: Option<&'a str>,
}

/// Hours worked by one staff member across the given records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffHours {
    /// Staff id the records referred to.
    pub staff_id: String,
    /// The staff member's name, or [`UNKNOWN_STAFF_NAME`].
    pub staff_name: String,
    /// Sum of `hours_worked`.
    pub hours: Decimal,
}

fn find_staff<'a>(staff: &'a [Staff], id: &str) -> Option<&'a Staff> {
    let found = staff.iter().find(|member| member.id == id);
    if found.is_none() {
        debug!(staff_id = %id, "Attendance record refers to unknown staff member");
    }
    found
}

/// Returns the name of the staff member with `id`, or `"Unknown"`.
///
/// # Example
///
/// ```
/// use staff_engine::aggregate::staff_name_or_unknown;
///
/// assert_eq!(staff_name_or_unknown(&[], "42"), "Unknown");
/// ```
pub fn staff_name_or_unknown<'a>(staff: &'a [Staff], id: &str) -> &'a str {
    find_staff(staff, id)
        .map(|member| member.name.as_str())
        .unwrap_or(UNKNOWN_STAFF_NAME)
}

/// Joins each attendance record with its staff member, keeping record order.
pub fn attendance_rows<'a>(
    records: &'a [AttendanceRecord],
    staff: &'a [Staff],
) -> Vec<AttendanceRow<'a>> {
    records
        .iter()
        .map(|record| {
            let member = find_staff(staff, &record.staff_id);
            AttendanceRow {
                record,
                staff_name: member.map_or(UNKNOWN_STAFF_NAME, |m| m.name.as_str()),
                staff_avatar: member.and_then(|m| m.avatar.as_deref()),
            }
        })
        .collect()
}

/// Counts attendance records per status.
pub fn count_by_attendance_status<'a, I>(records: I) -> Tally<AttendanceStatus>
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    records.into_iter().map(|record| record.status).collect()
}

/// Sums hours worked per staff member, in the order staff ids first appear
/// in `records`.
pub fn hours_by_staff(records: &[AttendanceRecord], staff: &[Staff]) -> Vec<StaffHours> {
    let mut totals: Vec<StaffHours> = Vec::new();

    for record in records {
        match totals.iter_mut().find(|t| t.staff_id == record.staff_id) {
            Some(total) => total.hours += record.hours_worked,
            None => totals.push(StaffHours {
                staff_id: record.staff_id.clone(),
                staff_name: staff_name_or_unknown(staff, &record.staff_id).to_string(),
                hours: record.hours_worked,
            }),
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmergencyContact, Role, Schedule, StaffStatus};
    use chrono::NaiveDate;

    fn make_staff(id: &str, name: &str) -> Staff {
        Staff {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            phone: "555-0100".to_string(),
            role: Role::LeadTeacher,
            hire_date: NaiveDate::from_ymd_opt(2021, 8, 1).unwrap(),
            status: StaffStatus::Active,
            avatar: Some(format!("/avatars/{id}.png")),
            certifications: Vec::new(),
            schedule: Schedule::default(),
            emergency_contact: EmergencyContact {
                name: "Contact".to_string(),
                phone: "555-0199".to_string(),
                relationship: "Parent".to_string(),
            },
        }
    }

    fn make_record(
        id: &str,
        staff_id: &str,
        hours: Decimal,
        status: AttendanceStatus,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id: id.to_string(),
            staff_id: staff_id.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            check_in: "7:00 AM".to_string(),
            check_out: Some("3:30 PM".to_string()),
            hours_worked: hours,
            status,
        }
    }

    #[test]
    fn test_missing_staff_degrades_to_unknown() {
        let staff = vec![make_staff("1", "Sarah Johnson")];
        let records = vec![
            make_record("a1", "1", Decimal::new(85, 1), AttendanceStatus::Present),
            make_record("a2", "99", Decimal::new(80, 1), AttendanceStatus::Late),
        ];

        let rows = attendance_rows(&records, &staff);
        assert_eq!(rows[0].staff_name, "Sarah Johnson");
        assert_eq!(rows[0].staff_avatar, Some("/avatars/1.png"));
        assert_eq!(rows[1].staff_name, "Unknown");
        assert_eq!(rows[1].staff_avatar, None);
    }

    #[test]
    fn test_hours_by_staff_first_seen_order() {
        let staff = vec![make_staff("1", "Sarah Johnson"), make_staff("2", "Mike Chen")];
        let records = vec![
            make_record("a1", "2", Decimal::new(80, 1), AttendanceStatus::Present),
            make_record("a2", "1", Decimal::new(75, 1), AttendanceStatus::Present),
            make_record("a3", "2", Decimal::new(45, 1), AttendanceStatus::Late),
        ];

        let hours = hours_by_staff(&records, &staff);
        assert_eq!(hours.len(), 2);
        assert_eq!(hours[0].staff_name, "Mike Chen");
        assert_eq!(hours[0].hours, Decimal::new(125, 1));
        assert_eq!(hours[1].staff_id, "1");
        assert_eq!(hours[1].hours, Decimal::new(75, 1));
    }

    #[test]
    fn test_count_by_attendance_status() {
        let records = vec![
            make_record("a1", "1", Decimal::ZERO, AttendanceStatus::SickLeave),
            make_record("a2", "1", Decimal::new(8, 0), AttendanceStatus::Present),
            make_record("a3", "2", Decimal::new(8, 0), AttendanceStatus::Present),
        ];

        let counts = count_by_attendance_status(&records);
        assert_eq!(counts.get(&AttendanceStatus::Present), 2);
        assert_eq!(counts.get(&AttendanceStatus::SickLeave), 1);
        assert_eq!(counts.total(), 3);
    }
}
