//! Day-of-week and time-of-day combination.
//!
//! [`DayOfWeekTime`] describes a moment in a recurring week, such as
//! "Monday at 12:30", as seen on a wall clock. It stores no date, offset or
//! timezone, so it cannot identify an instant on the time-line by itself.
//!
//! # Arithmetic
//! Duration and period arithmetic anchors the value to a reference week that
//! starts on Monday 2001-01-01, shifts the resulting date-time with ordinary
//! proleptic-Gregorian rules, then keeps only the weekday and time of the
//! result. Crossing midnight or a week boundary wraps around the week.
//! Amounts are first reduced to an equivalent shift of less than a week
//! (durations, days) or 400 years (months), so every amount has a result.
//!
//! Day shifts ([`DayOfWeekTime::plus_days`]) never touch the time and reduce
//! to modular weekday arithmetic.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};

use super::field::{time_field, TemporalField};
use super::weekday;
use super::Period;
use crate::clock::{Clock, SystemClock};
use crate::error::{Result, WeekTimeError};

/// First day of 2001, a common year starting on Monday.
const BASELINE: NaiveDate = match NaiveDate::from_ymd_opt(2001, 1, 1) {
    Some(date) => date,
    None => panic!("baseline date out of range"),
};

const SECONDS_PER_WEEK: i64 = 7 * 86_400;

/// A day-of-week and time-of-day without date or timezone.
///
/// Immutable value: every operation returns a new instance. Equality,
/// hashing and ordering consider the weekday first, then the time.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, Weekday};
/// use u_weektime::models::DayOfWeekTime;
///
/// let standup = DayOfWeekTime::of_hm(Weekday::Mon, 13, 37).unwrap();
/// let earlier = standup.minus_duration(TimeDelta::hours(14));
///
/// assert_eq!(earlier, DayOfWeekTime::of_hm(Weekday::Sun, 23, 37).unwrap());
/// assert!(earlier > standup); // Sunday sorts after Monday
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DayOfWeekTimeRepr", into = "DayOfWeekTimeRepr")]
pub struct DayOfWeekTime {
    day_of_week: Weekday,
    time: NaiveTime,
}

/// Serialized form; either part may be missing in untrusted input.
#[derive(Serialize, Deserialize)]
struct DayOfWeekTimeRepr {
    day_of_week: Option<Weekday>,
    time: Option<NaiveTime>,
}

impl DayOfWeekTime {
    /// Creates a value from a weekday and a time.
    pub fn of(day_of_week: Weekday, time: NaiveTime) -> Self {
        Self { day_of_week, time }
    }

    /// Creates a value from parts that may be absent.
    ///
    /// # Errors
    /// [`WeekTimeError::MissingArgument`] naming the first absent part,
    /// checking `day_of_week` before `time`.
    pub fn from_parts(day_of_week: Option<Weekday>, time: Option<NaiveTime>) -> Result<Self> {
        let day_of_week = day_of_week.ok_or(WeekTimeError::MissingArgument {
            argument: "day_of_week",
        })?;
        let time = time.ok_or(WeekTimeError::MissingArgument { argument: "time" })?;
        Ok(Self::of(day_of_week, time))
    }

    /// Creates a value from a weekday, an hour and a minute.
    ///
    /// Seconds and fractions of a second are zero.
    ///
    /// # Errors
    /// [`WeekTimeError::OutOfRange`] if `hour` is not in 0-23 or `minute`
    /// is not in 0-59.
    pub fn of_hm(day_of_week: Weekday, hour: u32, minute: u32) -> Result<Self> {
        TemporalField::HourOfDay.check_valid_value(i64::from(hour))?;
        TemporalField::MinuteOfHour.check_valid_value(i64::from(minute))?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            WeekTimeError::out_of_range(TemporalField::MinuteOfHour, i64::from(minute))
        })?;
        Ok(Self::of(day_of_week, time))
    }

    /// Takes the weekday and time-of-day of a full date-time.
    pub fn from_date_time(date_time: &NaiveDateTime) -> Self {
        Self::of(date_time.weekday(), date_time.time())
    }

    /// The current weekday and time from the system clock.
    pub fn now() -> Self {
        Self::now_from(&SystemClock)
    }

    /// The current weekday and time from `clock`.
    pub fn now_from<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::from_date_time(&clock.now())
    }

    /// The day-of-week.
    #[inline]
    pub fn day_of_week(&self) -> Weekday {
        self.day_of_week
    }

    /// The time-of-day.
    #[inline]
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    // ================================
    // Field queries
    // ================================

    /// Whether [`get_long`](Self::get_long) can answer `field`.
    ///
    /// Supported: every time-of-day field plus [`TemporalField::DayOfWeek`].
    pub fn is_supported(&self, field: TemporalField) -> bool {
        field == TemporalField::DayOfWeek || field.is_time_based()
    }

    /// Reads `field` as an `i64`.
    ///
    /// `DayOfWeek` yields the ISO value (Monday = 1 .. Sunday = 7); time
    /// fields are read from the stored time.
    ///
    /// # Errors
    /// [`WeekTimeError::UnsupportedField`] for any other field.
    pub fn get_long(&self, field: TemporalField) -> Result<i64> {
        match field {
            TemporalField::DayOfWeek => Ok(weekday::iso_value(self.day_of_week)),
            _ => time_field(&self.time, field).ok_or(WeekTimeError::UnsupportedField { field }),
        }
    }

    /// Valid values for a supported field.
    ///
    /// # Errors
    /// [`WeekTimeError::UnsupportedField`] if the field is not supported.
    pub fn range(&self, field: TemporalField) -> Result<RangeInclusive<i64>> {
        if self.is_supported(field) {
            Ok(field.range())
        } else {
            Err(WeekTimeError::UnsupportedField { field })
        }
    }

    // ================================
    // Arithmetic
    // ================================

    /// Adds an exact duration, wrapping around the week.
    pub fn plus_duration(&self, duration: TimeDelta) -> Self {
        Self::from_date_time(&(self.anchor() + week_remainder(duration)))
    }

    /// Subtracts an exact duration, wrapping around the week.
    pub fn minus_duration(&self, duration: TimeDelta) -> Self {
        Self::from_date_time(&(self.anchor() - week_remainder(duration)))
    }

    /// Adds a calendar period, wrapping around the week.
    ///
    /// Month lengths are taken from the calendar around the reference week
    /// (January 2001), so one month moves a Monday to a Thursday.
    pub fn plus_period(&self, period: &Period) -> Self {
        let (months, days) = period.cycle_shift(1);
        Self::from_date_time(&(self.anchor() + months + days))
    }

    /// Subtracts a calendar period, wrapping around the week.
    pub fn minus_period(&self, period: &Period) -> Self {
        let (months, days) = period.cycle_shift(-1);
        Self::from_date_time(&(self.anchor() + months + days))
    }

    /// Moves the weekday forward by `days`, keeping the time.
    ///
    /// Negative amounts move backwards. Multiples of seven return an equal
    /// value.
    pub fn plus_days(&self, days: i64) -> Self {
        match days % 7 {
            0 => *self,
            net => Self::of(weekday::plus(self.day_of_week, net), self.time),
        }
    }

    /// Moves the weekday backward by `days`, keeping the time.
    pub fn minus_days(&self, days: i64) -> Self {
        match days % 7 {
            0 => *self,
            net => Self::of(weekday::minus(self.day_of_week, net), self.time),
        }
    }

    /// This value placed in the reference week.
    fn anchor(&self) -> NaiveDateTime {
        let offset = Days::new(u64::from(self.day_of_week.num_days_from_monday()));
        (BASELINE + offset).and_time(self.time)
    }
}

/// Reduces `duration` to whole seconds modulo one week, keeping the
/// sub-second part, so the result lies in `(-1s, 1 week + 1s)`.
fn week_remainder(duration: TimeDelta) -> TimeDelta {
    let seconds = duration.num_seconds().rem_euclid(SECONDS_PER_WEEK);
    TimeDelta::seconds(seconds) + TimeDelta::nanoseconds(i64::from(duration.subsec_nanos()))
}

impl From<NaiveDateTime> for DayOfWeekTime {
    fn from(date_time: NaiveDateTime) -> Self {
        Self::from_date_time(&date_time)
    }
}

impl PartialOrd for DayOfWeekTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DayOfWeekTime {
    fn cmp(&self, other: &Self) -> Ordering {
        weekday::iso_value(self.day_of_week)
            .cmp(&weekday::iso_value(other.day_of_week))
            .then_with(|| self.time.cmp(&other.time))
    }
}

impl TryFrom<DayOfWeekTimeRepr> for DayOfWeekTime {
    type Error = WeekTimeError;

    fn try_from(repr: DayOfWeekTimeRepr) -> Result<Self> {
        Self::from_parts(repr.day_of_week, repr.time)
    }
}

impl From<DayOfWeekTime> for DayOfWeekTimeRepr {
    fn from(value: DayOfWeekTime) -> Self {
        Self {
            day_of_week: Some(value.day_of_week),
            time: Some(value.time),
        }
    }
}
