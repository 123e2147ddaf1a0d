//! Date and timestamp value generators.
//!
//! Instants are drawn from the 32-bit Unix epoch range so every rendered
//! year has four digits, keeping `date` at 10 characters and `date-time` at 25.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};
use rand::Rng;

/// Latest instant drawn: 2038-01-19T03:14:07Z.
const MAX_TIMESTAMP: i64 = i32::MAX as i64;

/// Oldest age produced by [`date_of_birth`], in days (115 years).
const MAX_AGE_DAYS: i64 = 115 * 365;

/// Reference day ages are counted back from.
const BIRTH_REFERENCE: (i32, u32, u32) = (2024, 1, 1);

fn random_instant<R: Rng + ?Sized>(rng: &mut R) -> DateTime<Utc> {
    let ts = rng.gen_range(0..=MAX_TIMESTAMP);
    DateTime::from_timestamp(ts, 0).unwrap_or_default()
}

/// Random calendar date, `YYYY-MM-DD`.
pub fn date<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_instant(rng).format("%Y-%m-%d").to_string()
}

/// Random ISO-8601 timestamp with a UTC offset, `YYYY-MM-DDTHH:MM:SS+hh:mm`.
///
/// With no `timezone`, one is picked at random from the tz database.
pub fn date_time<R: Rng + ?Sized>(rng: &mut R, timezone: Option<Tz>) -> String {
    let timezone = timezone.unwrap_or_else(|| TZ_VARIANTS[rng.gen_range(0..TZ_VARIANTS.len())]);
    random_instant(rng)
        .with_timezone(&timezone)
        .format("%Y-%m-%dT%H:%M:%S%:z")
        .to_string()
}

/// Random birth date for an age between 0 and 115 years.
pub fn date_of_birth<R: Rng + ?Sized>(rng: &mut R) -> String {
    let (year, month, day) = BIRTH_REFERENCE;
    let reference = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();
    let age = Duration::days(rng.gen_range(0..=MAX_AGE_DAYS));
    reference
        .checked_sub_signed(age)
        .unwrap_or(reference)
        .format("%Y-%m-%d")
        .to_string()
}

/// Random Unix timestamp in seconds, as a decimal string.
pub fn unix_time<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(0..=MAX_TIMESTAMP).to_string()
}
