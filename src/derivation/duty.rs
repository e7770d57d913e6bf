//! On-duty derivation.

use chrono::NaiveDateTime;

use crate::models::Staff;
use crate::schedule::CANONICAL_WEEK;

/// Returns true if the staff member counts as on duty today.
///
/// A staff member is on duty when their status is Active and at least one
/// shift anywhere in their weekly schedule is still Scheduled. The weekday of
/// `now` is not consulted: this matches the overview page, which lists anyone
/// with a scheduled shift this week under "today".
pub fn is_on_duty_today(staff: &Staff, _now: NaiveDateTime) -> bool {
    staff.is_active()
        && CANONICAL_WEEK
            .iter()
            .flat_map(|weekday| staff.schedule.day(*weekday))
            .any(|shift| shift.is_scheduled())
}

/// Filters a staff list down to those on duty today, preserving order.
pub fn on_duty_today(staff: &[Staff], now: NaiveDateTime) -> Vec<&Staff> {
    staff
        .iter()
        .filter(|member| is_on_duty_today(member, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        EmergencyContact, Role, Schedule, Shift, ShiftStatus, ShiftType, StaffStatus,
    };
    use chrono::{NaiveDate, Weekday};

    fn make_now() -> NaiveDateTime {
        // A Thursday.
        NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn make_staff(id: &str, status: StaffStatus, schedule: Schedule) -> Staff {
        Staff {
            id: id.to_string(),
            name: format!("Staff {}", id),
            email: format!("staff{}@example.com", id),
            phone: "(555) 000-0000".to_string(),
            role: Role::LeadTeacher,
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            status,
            avatar: None,
            certifications: vec![],
            schedule,
            emergency_contact: EmergencyContact {
                name: "Contact".to_string(),
                phone: "(555) 000-0001".to_string(),
                relationship: "Friend".to_string(),
            },
        }
    }

    fn schedule_with(weekday: Weekday, status: ShiftStatus) -> Schedule {
        let mut schedule = Schedule::default();
        schedule.day_mut(weekday).push(Shift {
            id: "s1".to_string(),
            shift_type: ShiftType::Morning,
            start_time: "7:00 AM".to_string(),
            end_time: "12:00 PM".to_string(),
            room: "Preschool Room".to_string(),
            status,
        });
        schedule
    }

    #[test]
    fn test_active_with_scheduled_shift_is_on_duty() {
        let staff = make_staff(
            "1",
            StaffStatus::Active,
            schedule_with(Weekday::Thu, ShiftStatus::Scheduled),
        );
        assert!(is_on_duty_today(&staff, make_now()));
    }

    #[test]
    fn test_scheduled_shift_on_other_weekday_still_counts() {
        // now is a Thursday; the only shift is on Monday.
        let staff = make_staff(
            "1",
            StaffStatus::Active,
            schedule_with(Weekday::Mon, ShiftStatus::Scheduled),
        );
        assert!(is_on_duty_today(&staff, make_now()));
    }

    #[test]
    fn test_inactive_staff_is_never_on_duty() {
        let on_leave = make_staff(
            "1",
            StaffStatus::OnLeave,
            schedule_with(Weekday::Thu, ShiftStatus::Scheduled),
        );
        assert!(!is_on_duty_today(&on_leave, make_now()));
    }

    #[test]
    fn test_only_completed_shifts_is_not_on_duty() {
        let staff = make_staff(
            "1",
            StaffStatus::Active,
            schedule_with(Weekday::Thu, ShiftStatus::Completed),
        );
        assert!(!is_on_duty_today(&staff, make_now()));
    }

    #[test]
    fn test_on_duty_today_preserves_order() {
        let staff = vec![
            make_staff(
                "1",
                StaffStatus::Active,
                schedule_with(Weekday::Fri, ShiftStatus::Scheduled),
            ),
            make_staff("2", StaffStatus::Active, Schedule::default()),
            make_staff(
                "3",
                StaffStatus::Active,
                schedule_with(Weekday::Mon, ShiftStatus::Scheduled),
            ),
        ];

        let ids: Vec<&str> = on_duty_today(&staff, make_now())
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
