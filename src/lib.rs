//! Random calendar dates under constraints, for test data generation.
//!
//! Dates are proleptic Gregorian [`chrono::NaiveDate`] values. Each generator
//! projects its constraint onto a span of epoch days, draws one uniformly and
//! converts it back:
//!
//! ```
//! use date_juggler::{random_adult_birth_date, random_date_in_century};
//! use chrono::{Datelike, NaiveDate};
//!
//! let mut rng = rand::rng();
//! let year = random_date_in_century(&mut rng, 21)?.year();
//! assert!((2001..=2100).contains(&year));
//!
//! let reference = NaiveDate::from_ymd_opt(2000, 1, 1).ok_or("bad date")?;
//! let birth = random_adult_birth_date(&mut rng, 18, reference)?;
//! assert!(birth <= NaiveDate::from_ymd_opt(1982, 1, 1).ok_or("bad date")?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod consts;
mod dates;
mod epoch;
mod error;
mod prelude;
mod range;
mod sampler;
mod types;

pub use consts::*;
pub use dates::{
    adult_birth_dates, minor_birth_dates, random_adult_birth_date, random_adult_birth_date_from_now,
    random_bce_date, random_ce_date, random_date, random_date_after, random_date_after_now, random_date_before,
    random_date_before_now, random_date_between, random_date_in_century, random_date_within, random_minor_birth_date,
    random_minor_birth_date_from_now, today,
};
pub use epoch::{from_epoch_day, saturating_from_epoch_day, to_epoch_day};
pub use error::ValidationError;
pub use range::DateSpan;
pub use sampler::sample_between;
pub use types::{AgeOfMajority, Century};

#[cfg(test)]
pub(crate) mod test_utils {
    use chrono::NaiveDate;
    use rand::{SeedableRng, rngs::StdRng};

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
    }

    pub fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(0x5EED_DA7E)
    }
}
