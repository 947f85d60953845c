//! Error types for the u-weektime crate.
//!
//! Every fallible operation returns [`WeekTimeError`]. Callers that only care
//! about the failure class can match on [`WeekTimeError::kind`].

use serde::{Deserialize, Serialize};

use crate::models::TemporalField;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WeekTimeError>;

/// Failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A required argument was absent or outside its valid range.
    InvalidArgument,
    /// A field outside the supported set was queried.
    UnsupportedField,
}

/// Error type for all fallible operations in the u-weektime crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekTimeError {
    /// Returned when a required argument is absent.
    #[error("missing required argument: {argument}")]
    MissingArgument {
        /// Name of the absent argument.
        argument: &'static str,
    },

    /// Returned when a field value is outside its valid range.
    #[error("invalid value for {field}: {value} (valid values {min} - {max})")]
    OutOfRange {
        /// Field the value was meant for.
        field: TemporalField,
        /// The rejected value.
        value: i64,
        /// Smallest valid value.
        min: i64,
        /// Largest valid value.
        max: i64,
    },

    /// Returned when a field outside the supported set is queried.
    #[error("unsupported field: {field}")]
    UnsupportedField {
        /// The queried field.
        field: TemporalField,
    },
}

impl WeekTimeError {
    /// The failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument { .. } | Self::OutOfRange { .. } => ErrorKind::InvalidArgument,
            Self::UnsupportedField { .. } => ErrorKind::UnsupportedField,
        }
    }

    pub(crate) fn out_of_range(field: TemporalField, value: i64) -> Self {
        let range = field.range();
        Self::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_message() {
        let e = WeekTimeError::MissingArgument {
            argument: "day_of_week",
        };
        assert_eq!(e.to_string(), "missing required argument: day_of_week");
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_out_of_range_message() {
        let e = WeekTimeError::out_of_range(TemporalField::HourOfDay, 24);
        assert_eq!(
            e.to_string(),
            "invalid value for HourOfDay: 24 (valid values 0 - 23)"
        );
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_unsupported_field_message() {
        let e = WeekTimeError::UnsupportedField {
            field: TemporalField::DayOfMonth,
        };
        assert_eq!(e.to_string(), "unsupported field: DayOfMonth");
        assert_eq!(e.kind(), ErrorKind::UnsupportedField);
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<WeekTimeError>();
    }
}
