//! Projection between calendar dates and epoch days (days since 1970-01-01).

use chrono::{Datelike, NaiveDate};

use crate::consts::{DATE_MAX, DATE_MIN, UNIX_EPOCH_DAYS_FROM_CE};

/// Returns the number of days between 1970-01-01 and `date`, negative before it.
pub fn to_epoch_day(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
}

/// Returns the date `day` days after 1970-01-01, or `None` outside
/// `DATE_MIN..=DATE_MAX`.
pub fn from_epoch_day(day: i64) -> Option<NaiveDate> {
    let days_from_ce = i32::try_from(day.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days_from_ce)
}

/// Like [`from_epoch_day`], clamping out-of-range days to `DATE_MIN` or `DATE_MAX`.
pub fn saturating_from_epoch_day(day: i64) -> NaiveDate {
    from_epoch_day(day).unwrap_or(if day < 0 { DATE_MIN } else { DATE_MAX })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FIRST_CE_EPOCH_DAY, LAST_BCE_EPOCH_DAY};
    use crate::test_utils::ymd;

    #[test]
    fn test_unix_epoch_is_day_zero() {
        assert_eq!(to_epoch_day(ymd(1970, 1, 1)), 0);
        assert_eq!(from_epoch_day(0), Some(ymd(1970, 1, 1)));
    }

    #[test]
    fn test_known_epoch_days() {
        struct TestCase {
            date:        NaiveDate,
            epoch_day:   i64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:        ymd(1969, 12, 31),
                epoch_day:   -1,
                description: "day before the epoch",
            },
            TestCase {
                date:        ymd(2000, 3, 1),
                epoch_day:   11_017,
                description: "after a leap day in a 400-divisible year",
            },
            TestCase {
                date:        ymd(1, 1, 1),
                epoch_day:   FIRST_CE_EPOCH_DAY,
                description: "first day of the Common Era",
            },
            TestCase {
                date:        ymd(-1, 12, 31),
                epoch_day:   LAST_BCE_EPOCH_DAY,
                description: "last day before year zero",
            },
        ];

        for case in &cases {
            assert_eq!(to_epoch_day(case.date), case.epoch_day, "{}", case.description);
            assert_eq!(from_epoch_day(case.epoch_day), Some(case.date), "{}", case.description);
        }
    }

    #[test]
    fn test_extremes_are_representable() {
        assert_eq!(from_epoch_day(to_epoch_day(DATE_MIN)), Some(DATE_MIN));
        assert_eq!(from_epoch_day(to_epoch_day(DATE_MAX)), Some(DATE_MAX));
    }

    #[test]
    fn test_out_of_range_days() {
        assert_eq!(from_epoch_day(to_epoch_day(DATE_MIN) - 1), None);
        assert_eq!(from_epoch_day(to_epoch_day(DATE_MAX) + 1), None);
        assert_eq!(from_epoch_day(i64::MAX), None);
        assert_eq!(from_epoch_day(i64::MIN), None);
    }

    #[test]
    fn test_saturating_conversion() {
        assert_eq!(saturating_from_epoch_day(i64::MIN), DATE_MIN);
        assert_eq!(saturating_from_epoch_day(i64::MAX), DATE_MAX);
        assert_eq!(saturating_from_epoch_day(-1), ymd(1969, 12, 31));
    }
}
