//! Weekly time models.
//!
//! Provides the value types for recurring weekly schedule entries and the
//! calendar pieces they are built from.
//!
//! # Types
//!
//! | Type | Meaning | Example |
//! |------|---------|---------|
//! | DayOfWeekTime | Weekday + wall-clock time | Monday 12:30 |
//! | Period | Calendar amount | 1 month, 3 days |
//! | TemporalField | Queryable field kind | HourOfDay |

mod day_of_week_time;
pub mod field;
mod period;
pub mod weekday;

pub use day_of_week_time::DayOfWeekTime;
pub use field::TemporalField;
pub use period::Period;
