//! Wall-clock sources.
//!
//! [`DayOfWeekTime::now_from`](crate::models::DayOfWeekTime::now_from) reads
//! the current local date-time through the [`Clock`] trait, so schedules can
//! be evaluated against a [`FixedClock`] in tests and simulations.

use chrono::{Local, NaiveDateTime};

/// A source of the current local date-time.
pub trait Clock: Send + Sync {
    /// Returns the current wall-clock date-time, without timezone.
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        tracing::trace!(%now, "read system clock");
        now
    }
}

/// Clock that always returns the same date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    /// Creates a clock frozen at `instant`.
    pub fn new(instant: NaiveDateTime) -> Self {
        Self { instant }
    }

    /// Moves the frozen instant.
    pub fn with_instant(mut self, instant: NaiveDateTime) -> Self {
        self.instant = instant;
        self
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
