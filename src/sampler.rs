//! Uniform sampling over 64-bit signed integer intervals.

use rand::Rng;

/// Draws an integer uniformly from `[low_inclusive, high_exclusive)`.
///
/// The interval may span the whole `i64` domain; the width is never computed
/// in signed arithmetic, so `i64::MIN..i64::MAX` samples without overflow or bias.
///
/// Callers must pass `low_inclusive < high_exclusive`.
pub fn sample_between<R: Rng + ?Sized>(rng: &mut R, low_inclusive: i64, high_exclusive: i64) -> i64 {
    debug_assert!(
        low_inclusive < high_exclusive,
        "empty sampling interval [{low_inclusive}, {high_exclusive})"
    );
    let value = rng.random_range(low_inclusive..high_exclusive);
    tracing::trace!(low_inclusive, high_exclusive, value, "sampled epoch day");
    value
}
