//! Schedule and shift models.
//!
//! A [`Schedule`] always carries all seven weekdays. Days missing from
//! serialized input deserialize as empty shift lists.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// The part of the day a shift covers.
    pub enum ShiftType {
        /// Morning session.
        Morning => "Morning",
        /// Afternoon session.
        Afternoon => "Afternoon",
        /// The whole day.
        FullDay => "Full Day",
    }
}

labelled_enum! {
    /// Whether a shift is upcoming, worked, or missed.
    pub enum ShiftStatus {
        /// Planned and not yet worked.
        Scheduled => "Scheduled",
        /// Worked.
        Completed => "Completed",
        /// Missed.
        Absent => "Absent",
    }
}

/// A single shift on a weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The part of the day covered.
    #[serde(rename = "type")]
    pub shift_type: ShiftType,
    /// Wall-clock start time, kept as written (e.g., "7:00 AM").
    pub start_time: String,
    /// Wall-clock end time, kept as written.
    pub end_time: String,
    /// The room the shift is worked in.
    pub room: String,
    /// Shift status.
    pub status: ShiftStatus,
}

impl Shift {
    /// Returns true if the shift is still scheduled.
    pub fn is_scheduled(&self) -> bool {
        self.status == ShiftStatus::Scheduled
    }
}

/// A staff member's weekly schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    /// Monday's shifts.
    pub monday: Vec<Shift>,
    /// Tuesday's shifts.
    pub tuesday: Vec<Shift>,
    /// Wednesday's shifts.
    pub wednesday: Vec<Shift>,
    /// Thursday's shifts.
    pub thursday: Vec<Shift>,
    /// Friday's shifts.
    pub friday: Vec<Shift>,
    /// Saturday's shifts.
    pub saturday: Vec<Shift>,
    /// Sunday's shifts.
    pub sunday: Vec<Shift>,
}

impl Schedule {
    /// Returns the shifts for a weekday, in recorded order.
    pub fn day(&self, weekday: Weekday) -> &[Shift] {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    /// Returns a mutable reference to the shifts for a weekday.
    pub fn day_mut(&mut self, weekday: Weekday) -> &mut Vec<Shift> {
        match weekday {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    /// Returns true if no day has any shift.
    pub fn is_empty(&self) -> bool {
        [
            &self.monday,
            &self.tuesday,
            &self.wednesday,
            &self.thursday,
            &self.friday,
            &self.saturday,
            &self.sunday,
        ]
        .iter()
        .all(|shifts| shifts.is_empty())
    }
}
