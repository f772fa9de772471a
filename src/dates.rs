//! Random date generation under calendar constraints.
//!
//! Every function takes the random source explicitly. Production callers pass
//! [`rand::rng()`]; fixtures pass a seeded generator to get reproducible dates.
//! Inputs are validated before any randomness is drawn, so a rejected call
//! leaves the generator untouched.

use chrono::{Datelike, Local, Months, NaiveDate};
use rand::Rng;

use crate::consts::{DATE_MAX, DATE_MIN, MAX_AGE, MONTHS_PER_YEAR, YEAR_MIN};
use crate::error::ValidationError;
use crate::range::DateSpan;
use crate::types::{AgeOfMajority, Century};

fn rejected(err: ValidationError) -> ValidationError {
    tracing::debug!(%err, "rejected date constraint");
    err
}

/// Current date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `date` shifted back by whole years, or `None` when that leaves the calendar.
/// A leap day lands on February 28 in non-leap target years.
fn years_before(date: NaiveDate, years: u8) -> Option<NaiveDate> {
    date.checked_sub_months(Months::new(u32::from(years) * MONTHS_PER_YEAR))
}

fn majority_year_underflows(reference: NaiveDate, years: u32) -> bool {
    i64::from(reference.year()) - i64::from(years) < i64::from(YEAR_MIN)
}

/// Any representable date.
pub fn random_date<R: Rng + ?Sized>(rng: &mut R) -> NaiveDate {
    DateSpan::full().sample(rng)
}

/// A date on or before -0001-12-31.
pub fn random_bce_date<R: Rng + ?Sized>(rng: &mut R) -> NaiveDate {
    DateSpan::bce().sample(rng)
}

/// A date on or after 0001-01-01.
pub fn random_ce_date<R: Rng + ?Sized>(rng: &mut R) -> NaiveDate {
    DateSpan::ce().sample(rng)
}

/// A date strictly before `max`.
///
/// # Errors
/// Returns `ValidationError::AtMinimumDate` if `max` is `DATE_MIN`.
pub fn random_date_before<R: Rng + ?Sized>(
    rng: &mut R,
    max: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    Ok(DateSpan::before(max).map_err(rejected)?.sample(rng))
}

/// A date strictly after `min`.
///
/// # Errors
/// Returns `ValidationError::AtMaximumDate` if `min` is `DATE_MAX`.
pub fn random_date_after<R: Rng + ?Sized>(
    rng: &mut R,
    min: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    Ok(DateSpan::after(min).map_err(rejected)?.sample(rng))
}

/// A date strictly before today.
///
/// # Errors
/// Returns `ValidationError::AtMinimumDate` if the clock reads `DATE_MIN`.
pub fn random_date_before_now<R: Rng + ?Sized>(rng: &mut R) -> Result<NaiveDate, ValidationError> {
    random_date_before(rng, today())
}

/// A date strictly after today.
///
/// # Errors
/// Returns `ValidationError::AtMaximumDate` if the clock reads `DATE_MAX`.
pub fn random_date_after_now<R: Rng + ?Sized>(rng: &mut R) -> Result<NaiveDate, ValidationError> {
    random_date_after(rng, today())
}

/// A date in `min..=max`.
///
/// # Errors
/// Returns `ValidationError::InvertedBounds` if `min` is after `max`.
pub fn random_date_between<R: Rng + ?Sized>(
    rng: &mut R,
    min: NaiveDate,
    max: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    Ok(DateSpan::new(min, max).map_err(rejected)?.sample(rng))
}

/// A date in the given century (the 21st century is 2001-01-01 to 2100-12-31).
///
/// # Errors
/// Returns `ValidationError::CenturyOutOfRange` outside `CENTURY_MIN..=CENTURY_MAX`
/// and `ValidationError::ZeroCentury` for 0.
pub fn random_date_in_century<R: Rng + ?Sized>(
    rng: &mut R,
    century: i32,
) -> Result<NaiveDate, ValidationError> {
    Ok(Century::new(century).map_err(rejected)?.span().sample(rng))
}

/// A date drawn from `span`.
pub fn random_date_within<R: Rng + ?Sized>(rng: &mut R, span: &DateSpan) -> NaiveDate {
    span.sample(rng)
}

/// Birth dates of everyone who has reached `age_of_majority` on `reference` and is
/// at most `MAX_AGE` years old.
///
/// The oldest bound is clipped to `DATE_MIN` when `MAX_AGE` years before
/// `reference` falls off the calendar.
///
/// # Errors
/// Returns `ValidationError::MajorityYearUnderflow` if the majority year is below
/// `YEAR_MIN` (checked first), then `ValidationError::AgeOfMajorityTooLarge` above
/// `MAX_AGE`.
pub fn adult_birth_dates(age_of_majority: u32, reference: NaiveDate) -> Result<DateSpan, ValidationError> {
    let underflow = ValidationError::MajorityYearUnderflow {
        reference,
        age_of_majority,
    };
    if majority_year_underflows(reference, age_of_majority) {
        return Err(underflow);
    }
    let age = AgeOfMajority::new(age_of_majority)?;

    let youngest = years_before(reference, age.get()).ok_or(underflow)?;
    let oldest = years_before(reference, MAX_AGE).unwrap_or(DATE_MIN);
    Ok(DateSpan::clamped(oldest, youngest))
}

/// Birth dates of everyone born on or before `reference` who has not yet reached
/// `age_of_majority` on it.
///
/// When the majority cutoff falls off the calendar the span starts at `DATE_MIN`
/// instead of failing.
///
/// # Errors
/// Returns `ValidationError::AgeOfMajorityTooLarge` above `MAX_AGE` and
/// `ValidationError::NoMinorAge` for an age of majority of zero.
pub fn minor_birth_dates(age_of_majority: u32, reference: NaiveDate) -> Result<DateSpan, ValidationError> {
    let age = AgeOfMajority::new(age_of_majority)?;
    if age.get() == 0 {
        return Err(ValidationError::NoMinorAge);
    }

    let first = match years_before(reference, age.get()) {
        // cutoff is at least a year before reference
        Some(cutoff) => cutoff.succ_opt().unwrap_or(reference),
        None => DATE_MIN,
    };
    Ok(DateSpan::clamped(first, reference))
}

/// A birth date for an adult on `reference`, see [`adult_birth_dates`].
///
/// # Errors
/// Same as [`adult_birth_dates`].
pub fn random_adult_birth_date<R: Rng + ?Sized>(
    rng: &mut R,
    age_of_majority: u32,
    reference: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    Ok(adult_birth_dates(age_of_majority, reference)
        .map_err(rejected)?
        .sample(rng))
}

/// A birth date for a minor on `reference`, see [`minor_birth_dates`].
///
/// # Errors
/// Same as [`minor_birth_dates`].
pub fn random_minor_birth_date<R: Rng + ?Sized>(
    rng: &mut R,
    age_of_majority: u32,
    reference: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    Ok(minor_birth_dates(age_of_majority, reference)
        .map_err(rejected)?
        .sample(rng))
}

/// A birth date for someone who is an adult today.
///
/// # Errors
/// Same as [`adult_birth_dates`].
pub fn random_adult_birth_date_from_now<R: Rng + ?Sized>(
    rng: &mut R,
    age_of_majority: u32,
) -> Result<NaiveDate, ValidationError> {
    random_adult_birth_date(rng, age_of_majority, today())
}

/// A birth date for someone who is a minor today.
///
/// # Errors
/// Same as [`minor_birth_dates`].
pub fn random_minor_birth_date_from_now<R: Rng + ?Sized>(
    rng: &mut R,
    age_of_majority: u32,
) -> Result<NaiveDate, ValidationError> {
    random_minor_birth_date(rng, age_of_majority, today())
}
