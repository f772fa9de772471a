use chrono::NaiveDate;
use rand::Rng;

use crate::{
    DATE_MAX, DATE_MIN, FIRST_CE_EPOCH_DAY, LAST_BCE_EPOCH_DAY, ValidationError,
    epoch::{saturating_from_epoch_day, to_epoch_day},
    prelude::*,
    sampler::sample_between,
};

/// A non-empty span of calendar days, both ends inclusive.
/// The first date is never after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{first}/{last}")]
pub struct DateSpan {
    first: NaiveDate,
    last:  NaiveDate,
}

impl DateSpan {
    /// Creates a new span with validation.
    ///
    /// # Errors
    /// Returns `ValidationError::InvertedBounds` if `first` is after `last`.
    pub fn new(first: NaiveDate, last: NaiveDate) -> Result<Self, ValidationError> {
        if first > last {
            return Err(ValidationError::InvertedBounds { min: first, max: last });
        }
        Ok(Self { first, last })
    }

    /// Builds a span from bounds the caller already knows to be ordered.
    pub(crate) fn clamped(first: NaiveDate, last: NaiveDate) -> Self {
        debug_assert!(first <= last, "unordered span {first}/{last}");
        Self { first, last }
    }

    /// Every representable date.
    pub const fn full() -> Self {
        Self {
            first: DATE_MIN,
            last:  DATE_MAX,
        }
    }

    /// Every date up to and including -0001-12-31.
    pub fn bce() -> Self {
        Self::clamped(DATE_MIN, saturating_from_epoch_day(LAST_BCE_EPOCH_DAY))
    }

    /// Every date from 0001-01-01 onwards.
    pub fn ce() -> Self {
        Self::clamped(saturating_from_epoch_day(FIRST_CE_EPOCH_DAY), DATE_MAX)
    }

    /// Every date strictly before `max`.
    ///
    /// # Errors
    /// Returns `ValidationError::AtMinimumDate` if `max` is `DATE_MIN`.
    pub fn before(max: NaiveDate) -> Result<Self, ValidationError> {
        let last = max
            .pred_opt()
            .ok_or(ValidationError::AtMinimumDate { minimum: DATE_MIN })?;
        Ok(Self::clamped(DATE_MIN, last))
    }

    /// Every date strictly after `min`.
    ///
    /// # Errors
    /// Returns `ValidationError::AtMaximumDate` if `min` is `DATE_MAX`.
    pub fn after(min: NaiveDate) -> Result<Self, ValidationError> {
        let first = min
            .succ_opt()
            .ok_or(ValidationError::AtMaximumDate { maximum: DATE_MAX })?;
        Ok(Self::clamped(first, DATE_MAX))
    }

    /// Returns the first date of the span
    pub const fn first(&self) -> NaiveDate {
        self.first
    }

    /// Returns the last date of the span (inclusive)
    pub const fn last(&self) -> NaiveDate {
        self.last
    }

    /// Returns both bounds as a tuple
    pub const fn dates(&self) -> (NaiveDate, NaiveDate) {
        (self.first, self.last)
    }

    /// Checks if the span contains a given date
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.first <= *date && *date <= self.last
    }

    /// Number of days in the span, at least 1.
    pub fn len_days(&self) -> i64 {
        let (low, high) = self.epoch_days();
        high - low
    }

    /// Half-open epoch-day projection `[first, last + 1)` of the span.
    pub fn epoch_days(&self) -> (i64, i64) {
        (to_epoch_day(self.first), to_epoch_day(self.last) + 1)
    }

    /// Draws a date uniformly from the span.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDate {
        let (low, high) = self.epoch_days();
        saturating_from_epoch_day(sample_between(rng, low, high))
    }
}
