//! ISO-8601 helpers over [`chrono::Weekday`].
//!
//! `chrono::Weekday` is cyclic but carries no total order and no modular
//! arithmetic by arbitrary amounts. These helpers supply both, with Monday as
//! the first day of the week.

use chrono::Weekday;

/// Weekdays in ISO order, indexed by days from Monday.
const ISO_WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// ISO-8601 numeric value: Monday = 1 .. Sunday = 7.
#[inline]
pub fn iso_value(day: Weekday) -> i64 {
    i64::from(day.number_from_monday())
}

/// Returns the weekday `days` after `day`, wrapping around the week.
///
/// Negative amounts move backwards.
pub fn plus(day: Weekday, days: i64) -> Weekday {
    let offset = i64::from(day.num_days_from_monday()) + days.rem_euclid(7);
    ISO_WEEK[offset.rem_euclid(7) as usize]
}

/// Returns the weekday `days` before `day`, wrapping around the week.
pub fn minus(day: Weekday, days: i64) -> Weekday {
    // Reduce first so negating cannot overflow on i64::MIN.
    plus(day, -(days % 7))
}
