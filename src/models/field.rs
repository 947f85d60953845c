//! Temporal field kinds and time-of-day field queries.
//!
//! [`TemporalField`] is the closed set of ISO-8601 field kinds a temporal
//! value may be asked about. Only some of them apply to a given value type:
//! a [`DayOfWeekTime`](super::DayOfWeekTime) answers the time-of-day fields
//! plus [`TemporalField::DayOfWeek`] and rejects the rest.
//!
//! # Value ranges
//! Ranges are the ISO-8601 outer bounds of each field, independent of any
//! particular value (e.g. `DayOfMonth` is always `1..=31`).

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MICRO: i64 = 1_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const SECONDS_PER_DAY: i64 = 86_400;
const NANOS_PER_DAY: i64 = SECONDS_PER_DAY * NANOS_PER_SECOND;
const MAX_YEAR: i64 = 999_999_999;

/// A field of a date-time, such as hour-of-day or day-of-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TemporalField {
    /// Nanosecond within the second (0-999,999,999).
    NanoOfSecond,
    /// Nanosecond within the day.
    NanoOfDay,
    /// Microsecond within the second (0-999,999).
    MicroOfSecond,
    /// Microsecond within the day.
    MicroOfDay,
    /// Millisecond within the second (0-999).
    MilliOfSecond,
    /// Millisecond within the day.
    MilliOfDay,
    /// Second within the minute (0-59).
    SecondOfMinute,
    /// Second within the day (0-86,399).
    SecondOfDay,
    /// Minute within the hour (0-59).
    MinuteOfHour,
    /// Minute within the day (0-1,439).
    MinuteOfDay,
    /// Hour within the AM/PM half (0-11).
    HourOfAmPm,
    /// Clock hour within the AM/PM half (1-12).
    ClockHourOfAmPm,
    /// Hour within the day (0-23).
    HourOfDay,
    /// Clock hour within the day (1-24).
    ClockHourOfDay,
    /// AM (0) or PM (1).
    AmPmOfDay,
    /// ISO day-of-week, Monday (1) to Sunday (7).
    DayOfWeek,
    /// Day-of-week aligned to the first day of the month (1-7).
    AlignedDayOfWeekInMonth,
    /// Day-of-week aligned to the first day of the year (1-7).
    AlignedDayOfWeekInYear,
    /// Day within the month (1-31).
    DayOfMonth,
    /// Day within the year (1-366).
    DayOfYear,
    /// Days since 1970-01-01.
    EpochDay,
    /// Week within the month, aligned to its first day (1-5).
    AlignedWeekOfMonth,
    /// Week within the year, aligned to its first day (1-53).
    AlignedWeekOfYear,
    /// Month within the year (1-12).
    MonthOfYear,
    /// Months since year 0.
    ProlepticMonth,
    /// Year within the era.
    YearOfEra,
    /// Proleptic year.
    Year,
    /// Era: BCE (0) or CE (1).
    Era,
    /// Seconds since 1970-01-01T00:00Z.
    InstantSeconds,
    /// Offset from UTC in seconds.
    OffsetSeconds,
}

impl TemporalField {
    /// The field name, e.g. `"HourOfDay"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::NanoOfSecond => "NanoOfSecond",
            Self::NanoOfDay => "NanoOfDay",
            Self::MicroOfSecond => "MicroOfSecond",
            Self::MicroOfDay => "MicroOfDay",
            Self::MilliOfSecond => "MilliOfSecond",
            Self::MilliOfDay => "MilliOfDay",
            Self::SecondOfMinute => "SecondOfMinute",
            Self::SecondOfDay => "SecondOfDay",
            Self::MinuteOfHour => "MinuteOfHour",
            Self::MinuteOfDay => "MinuteOfDay",
            Self::HourOfAmPm => "HourOfAmPm",
            Self::ClockHourOfAmPm => "ClockHourOfAmPm",
            Self::HourOfDay => "HourOfDay",
            Self::ClockHourOfDay => "ClockHourOfDay",
            Self::AmPmOfDay => "AmPmOfDay",
            Self::DayOfWeek => "DayOfWeek",
            Self::AlignedDayOfWeekInMonth => "AlignedDayOfWeekInMonth",
            Self::AlignedDayOfWeekInYear => "AlignedDayOfWeekInYear",
            Self::DayOfMonth => "DayOfMonth",
            Self::DayOfYear => "DayOfYear",
            Self::EpochDay => "EpochDay",
            Self::AlignedWeekOfMonth => "AlignedWeekOfMonth",
            Self::AlignedWeekOfYear => "AlignedWeekOfYear",
            Self::MonthOfYear => "MonthOfYear",
            Self::ProlepticMonth => "ProlepticMonth",
            Self::YearOfEra => "YearOfEra",
            Self::Year => "Year",
            Self::Era => "Era",
            Self::InstantSeconds => "InstantSeconds",
            Self::OffsetSeconds => "OffsetSeconds",
        }
    }

    /// Whether this field is a component of a time-of-day.
    pub fn is_time_based(self) -> bool {
        matches!(
            self,
            Self::NanoOfSecond
                | Self::NanoOfDay
                | Self::MicroOfSecond
                | Self::MicroOfDay
                | Self::MilliOfSecond
                | Self::MilliOfDay
                | Self::SecondOfMinute
                | Self::SecondOfDay
                | Self::MinuteOfHour
                | Self::MinuteOfDay
                | Self::HourOfAmPm
                | Self::ClockHourOfAmPm
                | Self::HourOfDay
                | Self::ClockHourOfDay
                | Self::AmPmOfDay
        )
    }

    /// Whether this field is a component of a calendar date.
    pub fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::DayOfWeek
                | Self::AlignedDayOfWeekInMonth
                | Self::AlignedDayOfWeekInYear
                | Self::DayOfMonth
                | Self::DayOfYear
                | Self::EpochDay
                | Self::AlignedWeekOfMonth
                | Self::AlignedWeekOfYear
                | Self::MonthOfYear
                | Self::ProlepticMonth
                | Self::YearOfEra
                | Self::Year
                | Self::Era
        )
    }

    /// Outer bounds of valid values for this field.
    pub fn range(self) -> RangeInclusive<i64> {
        match self {
            Self::NanoOfSecond => 0..=NANOS_PER_SECOND - 1,
            Self::NanoOfDay => 0..=NANOS_PER_DAY - 1,
            Self::MicroOfSecond => 0..=NANOS_PER_SECOND / NANOS_PER_MICRO - 1,
            Self::MicroOfDay => 0..=NANOS_PER_DAY / NANOS_PER_MICRO - 1,
            Self::MilliOfSecond => 0..=NANOS_PER_SECOND / NANOS_PER_MILLI - 1,
            Self::MilliOfDay => 0..=NANOS_PER_DAY / NANOS_PER_MILLI - 1,
            Self::SecondOfMinute => 0..=59,
            Self::SecondOfDay => 0..=SECONDS_PER_DAY - 1,
            Self::MinuteOfHour => 0..=59,
            Self::MinuteOfDay => 0..=24 * 60 - 1,
            Self::HourOfAmPm => 0..=11,
            Self::ClockHourOfAmPm => 1..=12,
            Self::HourOfDay => 0..=23,
            Self::ClockHourOfDay => 1..=24,
            Self::AmPmOfDay => 0..=1,
            Self::DayOfWeek | Self::AlignedDayOfWeekInMonth | Self::AlignedDayOfWeekInYear => {
                1..=7
            }
            Self::DayOfMonth => 1..=31,
            Self::DayOfYear => 1..=366,
            Self::EpochDay => -365_243_219_162..=365_241_780_471,
            Self::AlignedWeekOfMonth => 1..=5,
            Self::AlignedWeekOfYear => 1..=53,
            Self::MonthOfYear => 1..=12,
            Self::ProlepticMonth => -MAX_YEAR * 12..=MAX_YEAR * 12 + 11,
            Self::YearOfEra => 1..=MAX_YEAR + 1,
            Self::Year => -MAX_YEAR..=MAX_YEAR,
            Self::Era => 0..=1,
            Self::InstantSeconds => i64::MIN..=i64::MAX,
            Self::OffsetSeconds => -18 * 3600..=18 * 3600,
        }
    }

    /// Checks that `value` lies within [`range`](Self::range).
    pub fn check_valid_value(self, value: i64) -> crate::error::Result<i64> {
        if self.range().contains(&value) {
            Ok(value)
        } else {
            Err(crate::error::WeekTimeError::out_of_range(self, value))
        }
    }
}

impl fmt::Display for TemporalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reads a time-of-day field from `time`.
///
/// Returns `None` for fields that are not time-based. A leap-second
/// nanosecond value is folded into the second it extends.
pub fn time_field(time: &NaiveTime, field: TemporalField) -> Option<i64> {
    let nano = i64::from(time.nanosecond()) % NANOS_PER_SECOND;
    let second_of_day = i64::from(time.num_seconds_from_midnight());
    let nano_of_day = second_of_day * NANOS_PER_SECOND + nano;
    let hour = i64::from(time.hour());
    let minute = i64::from(time.minute());

    let value = match field {
        TemporalField::NanoOfSecond => nano,
        TemporalField::NanoOfDay => nano_of_day,
        TemporalField::MicroOfSecond => nano / NANOS_PER_MICRO,
        TemporalField::MicroOfDay => nano_of_day / NANOS_PER_MICRO,
        TemporalField::MilliOfSecond => nano / NANOS_PER_MILLI,
        TemporalField::MilliOfDay => nano_of_day / NANOS_PER_MILLI,
        TemporalField::SecondOfMinute => i64::from(time.second()),
        TemporalField::SecondOfDay => second_of_day,
        TemporalField::MinuteOfHour => minute,
        TemporalField::MinuteOfDay => hour * 60 + minute,
        TemporalField::HourOfAmPm => hour % 12,
        TemporalField::ClockHourOfAmPm => match hour % 12 {
            0 => 12,
            h => h,
        },
        TemporalField::HourOfDay => hour,
        TemporalField::ClockHourOfDay => match hour {
            0 => 24,
            h => h,
        },
        TemporalField::AmPmOfDay => hour / 12,
        _ => return None,
    };
    Some(value)
}
