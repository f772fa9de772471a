use crate::consts::{CENTURY_MAX, CENTURY_MIN, DATE_MAX, DATE_MIN, MAX_AGE, YEARS_PER_CENTURY};
use crate::error::ValidationError;
use crate::range::DateSpan;
use chrono::NaiveDate;
use std::fmt;
use std::num::NonZeroI32;

/// A century number guaranteed to be in `CENTURY_MIN..=CENTURY_MAX` and non-zero.
///
/// Century `c` covers the years `(c - 1) * 100 + 1 ..= c * 100`, so the 21st
/// century runs from 2001 to 2100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Century(NonZeroI32);

impl Century {
    /// Creates a new Century, checking the addressable range before rejecting zero
    ///
    /// # Errors
    /// Returns `ValidationError::CenturyOutOfRange` outside `CENTURY_MIN..=CENTURY_MAX`,
    /// then `ValidationError::ZeroCentury` for 0.
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if !(CENTURY_MIN..=CENTURY_MAX).contains(&value) {
            return Err(ValidationError::CenturyOutOfRange(value));
        }
        let non_zero = NonZeroI32::new(value).ok_or(ValidationError::ZeroCentury)?;
        Ok(Self(non_zero))
    }

    /// Returns the century value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0.get()
    }

    /// First year of the century
    pub const fn first_year(self) -> i32 {
        (self.get() - 1) * YEARS_PER_CENTURY + 1
    }

    /// Last year of the century (inclusive)
    pub const fn last_year(self) -> i32 {
        self.get() * YEARS_PER_CENTURY
    }

    /// Every day of the century, from January 1 of its first year to December 31
    /// of its last. The lowest century starts before `DATE_MIN` and is clipped to it.
    pub fn span(self) -> DateSpan {
        let first = NaiveDate::from_ymd_opt(self.first_year(), 1, 1).unwrap_or(DATE_MIN);
        let last = NaiveDate::from_ymd_opt(self.last_year(), 12, 31).unwrap_or(DATE_MAX);
        DateSpan::clamped(first, last)
    }
}

impl TryFrom<i32> for Century {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Century> for i32 {
    fn from(century: Century) -> Self {
        century.0.get()
    }
}

impl fmt::Display for Century {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An age of majority in years, guaranteed to be in `0..=MAX_AGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgeOfMajority(u8);

impl AgeOfMajority {
    /// Creates a new `AgeOfMajority`
    ///
    /// # Errors
    /// Returns `ValidationError::AgeOfMajorityTooLarge` above `MAX_AGE`.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        match u8::try_from(value) {
            Ok(age) if age <= MAX_AGE => Ok(Self(age)),
            _ => Err(ValidationError::AgeOfMajorityTooLarge(value)),
        }
    }

    /// Returns the age in years
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for AgeOfMajority {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AgeOfMajority> for u32 {
    fn from(age: AgeOfMajority) -> Self {
        u32::from(age.0)
    }
}

impl fmt::Display for AgeOfMajority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{YEAR_MAX, YEAR_MIN};
    use crate::test_utils::ymd;

    #[test]
    fn test_century_new_valid() {
        assert!(Century::new(1).is_ok());
        assert!(Century::new(21).is_ok());
        assert!(Century::new(-1).is_ok());
        assert!(Century::new(CENTURY_MIN).is_ok());
        assert!(Century::new(CENTURY_MAX).is_ok());
    }

    #[test]
    fn test_century_new_invalid_zero() {
        assert_eq!(Century::new(0), Err(ValidationError::ZeroCentury));
    }

    #[test]
    fn test_century_new_out_of_range() {
        assert_eq!(
            Century::new(CENTURY_MIN - 1),
            Err(ValidationError::CenturyOutOfRange(CENTURY_MIN - 1))
        );
        assert_eq!(
            Century::new(CENTURY_MAX + 1),
            Err(ValidationError::CenturyOutOfRange(CENTURY_MAX + 1))
        );
    }

    #[test]
    fn test_century_bounds_follow_year_range() {
        assert_eq!(CENTURY_MIN, YEAR_MIN / 100);
        assert_eq!(CENTURY_MAX, YEAR_MAX / 100);
    }

    #[test]
    fn test_century_years() {
        struct TestCase {
            century:    i32,
            first_year: i32,
            last_year:  i32,
        }

        let cases = [
            TestCase {
                century:    1,
                first_year: 1,
                last_year:  100,
            },
            TestCase {
                century:    20,
                first_year: 1901,
                last_year:  2000,
            },
            TestCase {
                century:    21,
                first_year: 2001,
                last_year:  2100,
            },
            TestCase {
                century:    -1,
                first_year: -199,
                last_year:  -100,
            },
        ];

        for case in &cases {
            let century = Century::new(case.century).unwrap();
            assert_eq!(century.first_year(), case.first_year, "century {}", case.century);
            assert_eq!(century.last_year(), case.last_year, "century {}", case.century);
        }
    }

    #[test]
    fn test_century_span() {
        let span = Century::new(21).unwrap().span();
        assert_eq!(span.first(), ymd(2001, 1, 1));
        assert_eq!(span.last(), ymd(2100, 12, 31));
    }

    #[test]
    fn test_lowest_century_span_is_clipped() {
        let span = Century::new(CENTURY_MIN).unwrap().span();
        assert_eq!(span.first(), DATE_MIN);
        assert_eq!(span.last(), ymd(CENTURY_MIN * 100, 12, 31));
    }

    #[test]
    fn test_highest_century_span() {
        let span = Century::new(CENTURY_MAX).unwrap().span();
        assert_eq!(span.first(), ymd((CENTURY_MAX - 1) * 100 + 1, 1, 1));
        assert_eq!(span.last(), ymd(CENTURY_MAX * 100, 12, 31));
    }

    #[test]
    fn test_century_display_and_conversions() {
        let century: Century = 21.try_into().unwrap();
        assert_eq!(century.to_string(), "21");
        let value: i32 = century.into();
        assert_eq!(value, 21);

        let result: Result<Century, _> = 0.try_into();
        assert!(result.is_err());
    }


    #[test]
    fn test_age_of_majority_new() {
        assert_eq!(AgeOfMajority::new(0).unwrap().get(), 0);
        assert_eq!(AgeOfMajority::new(18).unwrap().get(), 18);
        assert_eq!(AgeOfMajority::new(120).unwrap().get(), 120);
        assert_eq!(
            AgeOfMajority::new(121),
            Err(ValidationError::AgeOfMajorityTooLarge(121))
        );
        assert_eq!(
            AgeOfMajority::new(u32::MAX),
            Err(ValidationError::AgeOfMajorityTooLarge(u32::MAX))
        );
    }

    #[test]
    fn test_age_of_majority_ordering() {
        let minor = AgeOfMajority::new(16).unwrap();
        let adult = AgeOfMajority::new(21).unwrap();
        assert!(minor < adult);
        assert_eq!(minor, minor);
    }
}
