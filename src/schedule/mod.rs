//! Schedule projection for the staff engine.
//!
//! This module derives day-keyed views from a staff member's weekly shift
//! schedule: single-day lookup, flattening in a configurable week order,
//! scheduled type/room summaries and dated week grids.

mod projector;
mod week;

pub use projector::{
    DaySchedule, NO_ROOMS_LABEL, NOT_SCHEDULED_LABEL, ScheduledSummary, flatten_schedule,
    scheduled_types_and_rooms, shifts_for_day, week_grid,
};
pub use week::{CANONICAL_WEEK, WeekDates, WeekStart, parse_weekday, week_dates, weekday_name};
