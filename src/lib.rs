//! Day-of-week time values for the U-Engine ecosystem.
//!
//! Provides [`DayOfWeekTime`], an immutable "weekday at wall-clock time"
//! value for recurring weekly schedule entries, with calendar-aware
//! arithmetic that wraps correctly across midnight and week boundaries.
//!
//! # Modules
//!
//! - **`models`**: Value types — `DayOfWeekTime`, `Period`, `TemporalField`,
//!   and weekday helpers over `chrono::Weekday`
//! - **`clock`**: Injectable wall-clock sources (`SystemClock`, `FixedClock`)
//! - **`error`**: `WeekTimeError` and its `ErrorKind` categories
//!
//! # Time Model
//!
//! Values carry no date, offset or timezone. Weekdays follow ISO-8601
//! (Monday = 1 .. Sunday = 7) and order Monday first. Times are
//! `chrono::NaiveTime` in `[00:00, 24:00)`.
//!
//! # Example
//!
//! ```
//! use chrono::Weekday;
//! use u_weektime::{DayOfWeekTime, Period, TemporalField};
//!
//! let entry = DayOfWeekTime::of_hm(Weekday::Mon, 13, 37).unwrap();
//!
//! assert_eq!(entry.plus_days(12), DayOfWeekTime::of_hm(Weekday::Sat, 13, 37).unwrap());
//! assert_eq!(
//!     entry.minus_period(&Period::of_days(16)),
//!     DayOfWeekTime::of_hm(Weekday::Sat, 13, 37).unwrap()
//! );
//! assert_eq!(entry.get_long(TemporalField::DayOfWeek).unwrap(), 1);
//! assert!(entry.get_long(TemporalField::DayOfMonth).is_err());
//! ```

pub mod clock;
pub mod error;
pub mod models;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ErrorKind, Result, WeekTimeError};
pub use models::{DayOfWeekTime, Period, TemporalField};
