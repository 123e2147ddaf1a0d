//! Exact decimal arithmetic for bound and divisibility checks.
//!
//! Real numbers enter the decimal domain through their shortest round-trip
//! string form, so `0.1` becomes exactly `0.1` rather than the nearest binary
//! fraction. All `multipleOf` and boundary-equality tests go through
//! [`Decimal`]; binary floating-point subtraction or modulo is never used for
//! them.

use crate::error::{GenerationError, Result};
use rust_decimal::Decimal;

/// A numeric input that can be converted to an exact decimal.
pub trait ExactDecimal: Copy + std::fmt::Display {
    /// Convert to an exact decimal.
    ///
    /// Non-finite values are an `InvalidArgument`; finite values beyond the
    /// decimal range or precision are `Unsupported`.
    fn to_exact_decimal(self) -> Result<Decimal>;
}

impl ExactDecimal for i64 {
    fn to_exact_decimal(self) -> Result<Decimal> {
        Ok(Decimal::from(self))
    }
}

impl ExactDecimal for f64 {
    fn to_exact_decimal(self) -> Result<Decimal> {
        if !self.is_finite() {
            return Err(GenerationError::invalid(format!(
                "{self} is not a finite number"
            )));
        }
        real_to_decimal(self).ok_or_else(|| {
            GenerationError::unsupported(format!(
                "{self:e} is outside the exactly representable decimal range"
            ))
        })
    }
}

/// Convert an `f64` to the decimal its shortest round-trip representation spells.
///
/// Returns `None` for non-finite values and for magnitudes or precisions the
/// decimal type cannot hold (about 28 significant digits).
pub fn real_to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    // `Display` for f64 never uses exponent notation and is the shortest
    // string that parses back to the same value.
    Decimal::from_str_exact(&value.to_string()).ok()
}

/// Convert a decimal to the nearest `f64`.
///
/// Goes through the decimal string so the result is correctly rounded; a
/// decimal with at most 15 significant digits survives the round trip through
/// [`real_to_decimal`] unchanged.
pub fn decimal_to_real(value: Decimal) -> Option<f64> {
    value.to_string().parse::<f64>().ok()
}

/// Whether `value` is an exact multiple of `divisor`.
pub fn is_multiple_of(value: Decimal, divisor: Decimal) -> bool {
    if divisor.is_zero() {
        return false;
    }
    value
        .checked_rem(divisor)
        .is_some_and(|remainder| remainder.is_zero())
}

/// `value / divisor` rounded toward negative infinity, computed exactly.
pub fn floor_div(value: Decimal, divisor: Decimal) -> Option<Decimal> {
    let (quotient, remainder) = trunc_div_rem(value, divisor)?;
    if !remainder.is_zero() && value.is_sign_negative() != divisor.is_sign_negative() {
        quotient.checked_sub(Decimal::ONE)
    } else {
        Some(quotient)
    }
}

/// `value / divisor` rounded toward positive infinity, computed exactly.
pub fn ceil_div(value: Decimal, divisor: Decimal) -> Option<Decimal> {
    let (quotient, remainder) = trunc_div_rem(value, divisor)?;
    if !remainder.is_zero() && value.is_sign_negative() == divisor.is_sign_negative() {
        quotient.checked_add(Decimal::ONE)
    } else {
        Some(quotient)
    }
}

/// Truncating quotient and remainder.
///
/// `value - remainder` is an exact multiple of `divisor`, so the division that
/// follows has no rounding error even when `value / divisor` would.
fn trunc_div_rem(value: Decimal, divisor: Decimal) -> Option<(Decimal, Decimal)> {
    if divisor.is_zero() {
        return None;
    }
    let remainder = value.checked_rem(divisor)?;
    let quotient = value.checked_sub(remainder)?.checked_div(divisor)?;
    Some((quotient.trunc(), remainder))
}
