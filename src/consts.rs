use chrono::NaiveDate;

/// Assumed maximum human lifespan in years, the oldest an adult birth date may be
pub const MAX_AGE: u8 = 120;

/// Earliest representable date
pub const DATE_MIN: NaiveDate = NaiveDate::MIN;

/// Latest representable date
pub const DATE_MAX: NaiveDate = NaiveDate::MAX;

/// Year of `DATE_MIN`
pub const YEAR_MIN: i32 = -262_143;

/// Year of `DATE_MAX`
pub const YEAR_MAX: i32 = 262_142;

/// Years covered by a single century
pub const YEARS_PER_CENTURY: i32 = 100;

/// Smallest addressable century
pub const CENTURY_MIN: i32 = YEAR_MIN / YEARS_PER_CENTURY;

/// Largest addressable century
pub const CENTURY_MAX: i32 = YEAR_MAX / YEARS_PER_CENTURY;

/// Epoch day of 0001-01-01, the first day of the Common Era
pub const FIRST_CE_EPOCH_DAY: i64 = -719_162;

/// Epoch day of -0001-12-31, the last day treated as Before Common Era.
/// Year 0 sits between the two eras and belongs to neither.
pub const LAST_BCE_EPOCH_DAY: i64 = -719_529;

/// Days between 0000-12-31 (chrono's day zero of the Common Era) and 1970-01-01
pub(crate) const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Months in a year, used to shift dates by whole years
pub(crate) const MONTHS_PER_YEAR: u32 = 12;
