//! Calendar-based amounts of time.
//!
//! A [`Period`] is measured in years, months and days. Unlike a
//! [`TimeDelta`](chrono::TimeDelta), its length depends on where it is
//! applied: one month after January 31st lands on the last day of February.
//!
//! # Application order
//! Years and months are combined into a total month count and applied first
//! (clamping to the end of the month), then days.

use chrono::{Days, Months, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Months in 400 Gregorian years. The cycle is 146,097 days, a whole number
/// of weeks, so shifting by it preserves both calendar position and weekday.
const MONTHS_PER_CYCLE: i64 = 4800;

/// An amount of calendar time in years, months and days.
///
/// Components are independent and may be negative.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_weektime::models::Period;
///
/// let start = NaiveDate::from_ymd_opt(2001, 1, 31).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let end = Period::of_months(1).add_to(start).unwrap();
/// assert_eq!(end.date(), NaiveDate::from_ymd_opt(2001, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    /// The zero period.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Creates a period from its components.
    pub const fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// A period of whole years.
    pub const fn of_years(years: i32) -> Self {
        Self::new(years, 0, 0)
    }

    /// A period of whole months.
    pub const fn of_months(months: i32) -> Self {
        Self::new(0, months, 0)
    }

    /// A period of whole weeks, stored as days.
    ///
    /// Returns `None` if the day count overflows.
    pub fn of_weeks(weeks: i32) -> Option<Self> {
        weeks.checked_mul(7).map(Self::of_days)
    }

    /// A period of days.
    pub const fn of_days(days: i32) -> Self {
        Self::new(0, 0, days)
    }

    /// Years component.
    #[inline]
    pub fn years(&self) -> i32 {
        self.years
    }

    /// Months component.
    #[inline]
    pub fn months(&self) -> i32 {
        self.months
    }

    /// Days component.
    #[inline]
    pub fn days(&self) -> i32 {
        self.days
    }

    /// Whether all components are zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Whether any component is negative.
    pub fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    /// Years and months as a single month count.
    pub fn total_months(&self) -> i64 {
        i64::from(self.years) * 12 + i64::from(self.months)
    }

    /// Sets the years component.
    pub fn with_years(mut self, years: i32) -> Self {
        self.years = years;
        self
    }

    /// Sets the months component.
    pub fn with_months(mut self, months: i32) -> Self {
        self.months = months;
        self
    }

    /// Sets the days component.
    pub fn with_days(mut self, days: i32) -> Self {
        self.days = days;
        self
    }

    /// The period with every component negated.
    ///
    /// Returns `None` if a component is `i32::MIN`.
    pub fn negated(&self) -> Option<Self> {
        Some(Self::new(
            self.years.checked_neg()?,
            self.months.checked_neg()?,
            self.days.checked_neg()?,
        ))
    }

    /// Adds this period to a date-time.
    ///
    /// Returns `None` if the result is outside the supported date range.
    pub fn add_to(&self, date_time: NaiveDateTime) -> Option<NaiveDateTime> {
        shift(date_time, self.total_months(), i64::from(self.days))
    }

    /// Subtracts this period from a date-time.
    ///
    /// Returns `None` if the result is outside the supported date range.
    pub fn subtract_from(&self, date_time: NaiveDateTime) -> Option<NaiveDateTime> {
        shift(date_time, -self.total_months(), -i64::from(self.days))
    }

    /// A forward shift with the same effect on weekday and time-of-day as
    /// moving by this period in `direction` (`1` or `-1`).
    ///
    /// Months are reduced modulo the 400-year cycle and days modulo a week,
    /// so the shift never exceeds 400 years plus six days.
    pub(crate) fn cycle_shift(&self, direction: i64) -> (Months, Days) {
        let months = (direction * self.total_months()).rem_euclid(MONTHS_PER_CYCLE);
        let days = (direction * i64::from(self.days)).rem_euclid(7);
        (Months::new(months as u32), Days::new(days as u64))
    }
}

/// Shifts by whole months, then by days.
fn shift(date_time: NaiveDateTime, months: i64, days: i64) -> Option<NaiveDateTime> {
    let month_count = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    let shifted = if months >= 0 {
        date_time.checked_add_months(month_count)?
    } else {
        date_time.checked_sub_months(month_count)?
    };

    let day_count = Days::new(days.unsigned_abs());
    if days >= 0 {
        shifted.checked_add_days(day_count)
    } else {
        shifted.checked_sub_days(day_count)
    }
}
