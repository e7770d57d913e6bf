//! Staff headcounts and the role distribution chart.

use rust_decimal::prelude::*;
use serde::Serialize;

use crate::models::{Role, Staff, StaffStatus};

use super::tally::Tally;

/// One slice of the role distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleShare {
    /// The role this slice represents.
    pub role: Role,
    /// Staff members holding the role.
    pub count: usize,
    /// Share of all staff, as a whole percentage.
    pub percent: Decimal,
}

/// Counts staff per role. Unrecognized roles count under [`Role::Unknown`].
pub fn count_by_role<'a, I>(staff: I) -> Tally<Role>
where
    I: IntoIterator<Item = &'a Staff>,
{
    staff.into_iter().map(|member| member.role).collect()
}

/// Counts staff per employment status.
pub fn count_by_staff_status<'a, I>(staff: I) -> Tally<StaffStatus>
where
    I: IntoIterator<Item = &'a Staff>,
{
    staff.into_iter().map(|member| member.status).collect()
}

/// Computes each role's share of the staff list.
///
/// Only roles that occur are returned, in role order. Percentages are rounded
/// half away from zero to whole numbers, so they need not sum to exactly 100.
///
/// # Example
///
/// ```
/// use staff_engine::aggregate::role_distribution;
///
/// let shares = role_distribution(&[]);
/// assert!(shares.is_empty());
/// ```
pub fn role_distribution(staff: &[Staff]) -> Vec<RoleShare> {
    let tally = count_by_role(staff);
    let total = tally.total();

    tally
        .iter()
        .map(|(role, count)| RoleShare {
            role: *role,
            count,
            percent: share_percent(count, total),
        })
        .collect()
}

/// `part / total * 100`, rounded to a whole number. Zero when `total` is zero.
pub(crate) fn share_percent(part: usize, total: usize) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(total))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmergencyContact, Schedule};
    use chrono::NaiveDate;

    fn make_staff(id: &str, role: Role, status: StaffStatus) -> Staff {
        Staff {
            id: id.to_string(),
            name: format!("Staff {id}"),
            email: format!("staff{id}@example.com"),
            phone: "555-0100".to_string(),
            role,
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            status,
            avatar: None,
            certifications: Vec::new(),
            schedule: Schedule::default(),
            emergency_contact: EmergencyContact {
                name: "Contact".to_string(),
                phone: "555-0199".to_string(),
                relationship: "Spouse".to_string(),
            },
        }
    }

    #[test]
    fn test_count_by_role_and_status() {
        let staff = vec![
            make_staff("1", Role::Director, StaffStatus::Active),
            make_staff("2", Role::LeadTeacher, StaffStatus::Active),
            make_staff("3", Role::LeadTeacher, StaffStatus::OnLeave),
        ];

        let roles = count_by_role(&staff);
        assert_eq!(roles.get(&Role::LeadTeacher), 2);
        assert_eq!(roles.total(), 3);

        let statuses = count_by_staff_status(&staff);
        assert_eq!(statuses.get(&StaffStatus::Active), 2);
        assert_eq!(statuses.get(&StaffStatus::Inactive), 0);
    }

    #[test]
    fn test_role_distribution_rounds_percent() {
        let staff = vec![
            make_staff("1", Role::Director, StaffStatus::Active),
            make_staff("2", Role::LeadTeacher, StaffStatus::Active),
            make_staff("3", Role::LeadTeacher, StaffStatus::Active),
        ];

        let shares = role_distribution(&staff);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].role, Role::Director);
        assert_eq!(shares[0].percent, Decimal::from(33));
        assert_eq!(shares[1].role, Role::LeadTeacher);
        assert_eq!(shares[1].count, 2);
        assert_eq!(shares[1].percent, Decimal::from(67));
    }

    #[test]
    fn test_share_percent_midpoint_rounds_up() {
        assert_eq!(share_percent(1, 8), Decimal::from(13));
        assert_eq!(share_percent(0, 0), Decimal::ZERO);
    }
}
