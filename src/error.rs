use chrono::NaiveDate;

use crate::consts::{CENTURY_MAX, CENTURY_MIN, MAX_AGE, YEAR_MIN};

/// Rejected input to one of the date sampling functions.
///
/// Each variant names the violated precondition; the `Display` text is kept
/// stable for callers that match on messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No date lies strictly before the minimum date.
    #[error("The given date is equals to the minimum date {minimum}. It needs to be after it.")]
    AtMinimumDate { minimum: NaiveDate },

    /// No date lies strictly after the maximum date.
    #[error("The given date is equals to the maximum date {maximum}. It needs to be before it.")]
    AtMaximumDate { maximum: NaiveDate },

    /// Lower bound is after the upper bound.
    #[error("The minimum given date is after the maximum given date")]
    InvertedBounds { min: NaiveDate, max: NaiveDate },

    #[error("The given century needs to be between {min} and {max}.", min = CENTURY_MIN, max = CENTURY_MAX)]
    CenturyOutOfRange(i32),

    #[error(
        "The given century cannot have value zero as the Gregorian calendar does not have a zero century."
    )]
    ZeroCentury,

    /// Shifting the reference date back by the age of majority leaves the calendar.
    #[error(
        "The given date cannot have a year where the age of majority year calculated is less than the minimum allowed year {year}",
        year = YEAR_MIN
    )]
    MajorityYearUnderflow { reference: NaiveDate, age_of_majority: u32 },

    #[error("The given age of majority cannot be greater than the maximum age {max}", max = MAX_AGE)]
    AgeOfMajorityTooLarge(u32),

    /// An age of majority of zero leaves no one a minor.
    #[error("The given age of majority needs to be greater than zero for a minor birth date to exist")]
    NoMinorAge,
}
