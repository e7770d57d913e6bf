//! Weekday naming, week ordering and week date ranges.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The seven weekdays, Monday first. Schedule keys follow this order.
pub const CANONICAL_WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Which day a week begins on.
///
/// The directory dialog lists days Monday first; the schedule grid starts
/// on Sunday. Views pick one through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    /// Monday through Sunday.
    #[default]
    Monday,
    /// Sunday through Saturday.
    Sunday,
}

impl WeekStart {
    /// Returns the first weekday of the week.
    pub fn first_day(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    /// Returns all seven weekdays in this week's order.
    ///
    /// # Example
    ///
    /// ```
    /// use staff_engine::schedule::WeekStart;
    /// use chrono::Weekday;
    ///
    /// let days = WeekStart::Sunday.days();
    /// assert_eq!(days[0], Weekday::Sun);
    /// assert_eq!(days[6], Weekday::Sat);
    /// ```
    pub fn days(self) -> [Weekday; 7] {
        let first = self.first_day().num_days_from_monday() as usize;
        std::array::from_fn(|i| CANONICAL_WEEK[(first + i) % 7])
    }

    /// Number of days between the start of the week and `weekday`.
    fn offset_of(self, weekday: Weekday) -> i64 {
        match self {
            WeekStart::Monday => i64::from(weekday.num_days_from_monday()),
            WeekStart::Sunday => i64::from(weekday.num_days_from_sunday()),
        }
    }
}

/// Returns the canonical English name of a weekday (e.g., "Monday").
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parses a canonical weekday name.
///
/// Only the seven full English names are accepted, in any letter case, so
/// both the display form ("Tuesday") and the schedule key form ("tuesday")
/// resolve. Abbreviations are rejected.
///
/// # Errors
///
/// Returns [`EngineError::UnknownWeekday`] for any other input.
///
/// # Example
///
/// ```
/// use staff_engine::schedule::parse_weekday;
/// use chrono::Weekday;
///
/// assert_eq!(parse_weekday("Tuesday").unwrap(), Weekday::Tue);
/// assert_eq!(parse_weekday("tuesday").unwrap(), Weekday::Tue);
/// assert!(parse_weekday("Tue").is_err());
/// ```
pub fn parse_weekday(name: &str) -> EngineResult<Weekday> {
    CANONICAL_WEEK
        .iter()
        .copied()
        .find(|weekday| weekday_name(*weekday).eq_ignore_ascii_case(name))
        .ok_or_else(|| EngineError::UnknownWeekday {
            key: name.to_string(),
        })
}

/// The seven dates of one calendar week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDates {
    /// First day of the week.
    pub start: NaiveDate,
    /// Last day of the week.
    pub end: NaiveDate,
    /// Every day of the week, in order.
    pub days: [NaiveDate; 7],
}

/// Computes the dates of the week containing `today`, shifted by
/// `week_offset` whole weeks (negative for past weeks).
///
/// # Errors
///
/// Returns [`EngineError::WeekOutOfRange`] when the shifted week falls
/// outside the dates chrono can represent.
///
/// # Example
///
/// ```
/// use staff_engine::schedule::{week_dates, WeekStart};
/// use chrono::NaiveDate;
///
/// // 2026-01-15 is a Thursday.
/// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
///
/// let week = week_dates(today, 0, WeekStart::Sunday).unwrap();
/// assert_eq!(week.start, NaiveDate::from_ymd_opt(2026, 1, 11).unwrap());
/// assert_eq!(week.end, NaiveDate::from_ymd_opt(2026, 1, 17).unwrap());
///
/// let next = week_dates(today, 1, WeekStart::Monday).unwrap();
/// assert_eq!(next.start, NaiveDate::from_ymd_opt(2026, 1, 19).unwrap());
///
/// assert!(week_dates(today, i64::MAX, WeekStart::Monday).is_err());
/// ```
pub fn week_dates(
    today: NaiveDate,
    week_offset: i64,
    week_start: WeekStart,
) -> EngineResult<WeekDates> {
    let out_of_range = || EngineError::WeekOutOfRange { week_offset };

    let start = today
        .checked_sub_signed(Duration::days(week_start.offset_of(today.weekday())))
        .zip(Duration::try_weeks(week_offset))
        .and_then(|(current_start, shift)| current_start.checked_add_signed(shift))
        .ok_or_else(out_of_range)?;
    let end = start
        .checked_add_signed(Duration::days(6))
        .ok_or_else(out_of_range)?;

    Ok(WeekDates {
        start,
        end,
        days: std::array::from_fn(|i| start + Duration::days(i as i64)),
    })
}
