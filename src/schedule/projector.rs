//! Projections of a weekly schedule into day-keyed and summary views.

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::error::EngineResult;
use crate::models::{Schedule, Shift, ShiftType};

use super::week::{CANONICAL_WEEK, WeekStart, parse_weekday, week_dates};

/// Placeholder shown when a staff member has no scheduled shift types.
pub const NOT_SCHEDULED_LABEL: &str = "Not scheduled";

/// Placeholder shown when a staff member has no scheduled rooms.
pub const NO_ROOMS_LABEL: &str = "-";

/// Looks up the shifts for a weekday given by name.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::UnknownWeekday`] if `weekday` is not
/// one of the seven canonical weekday names. A valid day with no shifts
/// returns an empty slice.
///
/// # Example
///
/// ```
/// use staff_engine::models::Schedule;
/// use staff_engine::schedule::shifts_for_day;
///
/// let schedule = Schedule::default();
/// assert!(shifts_for_day(&schedule, "Tuesday").unwrap().is_empty());
/// assert!(shifts_for_day(&schedule, "Someday").is_err());
/// ```
pub fn shifts_for_day<'a>(schedule: &'a Schedule, weekday: &str) -> EngineResult<&'a [Shift]> {
    Ok(schedule.day(parse_weekday(weekday)?))
}

/// Flattens a schedule into one sequence, day by day in the given week
/// order, keeping each day's shift order.
pub fn flatten_schedule(schedule: &Schedule, week_start: WeekStart) -> Vec<&Shift> {
    week_start
        .days()
        .into_iter()
        .flat_map(|weekday| schedule.day(weekday))
        .collect()
}

/// What a staff member is scheduled for, and where.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduledSummary {
    /// Shift types of every scheduled shift, Monday first.
    pub types: Vec<ShiftType>,
    /// Rooms of every scheduled shift, Monday first.
    pub rooms: Vec<String>,
}

impl ScheduledSummary {
    /// Returns true if nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Comma-separated shift types, or "Not scheduled".
    pub fn types_label(&self) -> String {
        if self.types.is_empty() {
            return NOT_SCHEDULED_LABEL.to_string();
        }
        self.types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Comma-separated rooms, or "-".
    pub fn rooms_label(&self) -> String {
        if self.rooms.is_empty() {
            return NO_ROOMS_LABEL.to_string();
        }
        self.rooms.join(", ")
    }
}

/// Collects the type and room of every Scheduled shift across the week.
///
/// Completed and absent shifts are skipped. Duplicates are kept, one entry
/// per shift.
///
/// # Example
///
/// ```
/// use staff_engine::models::Schedule;
/// use staff_engine::schedule::scheduled_types_and_rooms;
///
/// let summary = scheduled_types_and_rooms(&Schedule::default());
/// assert_eq!(summary.types_label(), "Not scheduled");
/// assert_eq!(summary.rooms_label(), "-");
/// ```
pub fn scheduled_types_and_rooms(schedule: &Schedule) -> ScheduledSummary {
    let mut summary = ScheduledSummary::default();

    for shift in CANONICAL_WEEK
        .iter()
        .flat_map(|weekday| schedule.day(*weekday))
        .filter(|shift| shift.is_scheduled())
    {
        summary.types.push(shift.shift_type);
        summary.rooms.push(shift.room.clone());
    }

    summary
}

/// One column of the weekly schedule grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySchedule<'a> {
    /// The weekday.
    pub weekday: Weekday,
    /// The calendar date of that weekday in the displayed week.
    pub date: NaiveDate,
    /// Shifts on that weekday.
    pub shifts: &'a [Shift],
}

/// Pairs each date of a displayed week with that weekday's shifts.
///
/// The schedule repeats weekly, so the same shifts appear whichever week
/// offset is shown; only the dates change.
///
/// # Errors
///
/// Returns [`EngineError::WeekOutOfRange`](crate::error::EngineError::WeekOutOfRange)
/// when the offset leaves the representable calendar.
pub fn week_grid(
    schedule: &Schedule,
    today: NaiveDate,
    week_offset: i64,
    week_start: WeekStart,
) -> EngineResult<Vec<DaySchedule<'_>>> {
    let dates = week_dates(today, week_offset, week_start)?;

    Ok(week_start
        .days()
        .into_iter()
        .zip(dates.days)
        .map(|(weekday, date)| DaySchedule {
            weekday,
            date,
            shifts: schedule.day(weekday),
        })
        .collect())
}
