//! Staff model and related types.
//!
//! This module defines the Staff struct together with the Role and
//! StaffStatus enums for representing people in the staff directory.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Certification, Schedule};

labelled_enum! {
    /// The position a staff member holds.
    pub enum Role {
        /// Centre director.
        Director => "Director",
        /// Lead classroom teacher.
        LeadTeacher => "Lead Teacher",
        /// Assistant classroom teacher.
        AssistantTeacher => "Assistant Teacher",
        /// Administrative staff.
        Admin => "Admin",
        /// Kitchen, cleaning and other support roles.
        SupportStaff => "Support Staff",
    }
}

labelled_enum! {
    /// Employment status of a staff member.
    pub enum StaffStatus {
        /// Currently working.
        Active => "Active",
        /// Temporarily away.
        OnLeave => "On Leave",
        /// No longer working.
        Inactive => "Inactive",
    }
}

/// Who to call in an emergency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    /// Contact's name.
    pub name: String,
    /// Contact's phone number.
    pub phone: String,
    /// Relationship to the staff member (e.g., "Spouse").
    pub relationship: String,
}

/// Represents a member of staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Work email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Position held.
    pub role: Role,
    /// The date the staff member was hired.
    pub hire_date: NaiveDate,
    /// Employment status.
    pub status: StaffStatus,
    /// Optional avatar image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Certifications held, in the order they were recorded.
    #[serde(default)]
    pub certifications: Vec<Certification>,
    /// Weekly shift schedule.
    #[serde(default)]
    pub schedule: Schedule,
    /// Emergency contact details.
    pub emergency_contact: EmergencyContact,
}

impl Staff {
    /// Returns true if the staff member's status is Active.
    pub fn is_active(&self) -> bool {
        self.status == StaffStatus::Active
    }

    /// Returns the first character of the name, used as the avatar fallback.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_engine::models::Staff;
    ///
    /// let json = r#"{
    ///     "id": "1",
    ///     "name": "Sarah Johnson",
    ///     "email": "sarah.johnson@example.com",
    ///     "phone": "(555) 123-4567",
    ///     "role": "Director",
    ///     "hireDate": "2019-08-15",
    ///     "status": "Active",
    ///     "emergencyContact": {"name": "Mark Johnson", "phone": "(555) 123-4568", "relationship": "Spouse"}
    /// }"#;
    /// let staff: Staff = serde_json::from_str(json).unwrap();
    /// assert_eq!(staff.initial(), Some('S'));
    /// ```
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}
