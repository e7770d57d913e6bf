//! Time-off request model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// Why time off was requested.
    pub enum TimeOffType {
        /// Planned holiday.
        Vacation => "Vacation",
        /// Illness.
        SickLeave => "Sick Leave",
        /// Personal reasons.
        Personal => "Personal",
        /// Emergency.
        Emergency => "Emergency",
    }
}

labelled_enum! {
    /// Where a time-off request is in its approval flow.
    pub enum TimeOffStatus {
        /// Awaiting a decision.
        Pending => "Pending",
        /// Granted.
        Approved => "Approved",
        /// Refused.
        Denied => "Denied",
    }
}

/// A request for time off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The staff member requesting time off.
    pub staff_id: String,
    /// First day off (inclusive).
    pub start_date: NaiveDate,
    /// Last day off (inclusive).
    pub end_date: NaiveDate,
    /// Why time off was requested.
    #[serde(rename = "type")]
    pub request_type: TimeOffType,
    /// Approval status.
    pub status: TimeOffStatus,
    /// Free-text reason.
    pub reason: String,
    /// The date the request was submitted.
    pub submitted_date: NaiveDate,
}

impl TimeOffRequest {
    /// Checks whether a date falls within the requested period, inclusive of
    /// both ends.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
