//! Numeric value generation for `integer` and `number` schemas.
//!
//! One procedure serves both modes. Everything that differs between them (the
//! smallest step used to narrow exclusive bounds, the sampler, the cast to the
//! output type) lives in a `ModeOps` record picked by [`NumberMode`].
//!
//! Generation runs in two phases. `resolve_plan` validates the constraints
//! and turns them into a `Plan`: a single value, a range to sample, or a range
//! of multipliers for `multipleOf`. The plan is then drawn from, with every
//! candidate re-checked exactly in the decimal domain.

use crate::search::search;
use rand::{Rng, RngCore};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use schemagen_core::decimal::{
    ceil_div, decimal_to_real, floor_div, is_multiple_of, real_to_decimal,
};
use schemagen_core::{
    DecimalConstraints, GeneratedValue, GenerationError, GeneratorSettings, NumberMode,
    NumericConstraints, Result,
};
use tracing::debug;

/// Largest multiplier drawn when `multipleOf` is the only constraint.
const MAX_FREE_MULTIPLIER: i64 = 9999;

/// Smallest step between two distinct real values.
const REAL_INCREMENT: Decimal = Decimal::from_parts(1, 0, 0, false, 14);

/// Half-width of the range sampled when a real has no bounds.
const REAL_MAGNITUDE: Decimal = Decimal::from_parts(0xA4C6_7FFF, 0x0003_8D7E, 0, false, 0);

/// Per-mode capabilities of the numeric procedure.
struct ModeOps<T> {
    mode: NumberMode,
    /// Step used to move an exclusive bound inward
    min_increment: Decimal,
    /// Representable range of the mode
    limits: (Decimal, Decimal),
    /// Span used in place of a missing bound
    magnitude: Decimal,
    sample: fn(&mut dyn RngCore, Decimal, Decimal) -> Option<Decimal>,
    cast: fn(Decimal) -> Option<T>,
    to_exact: fn(T) -> Option<Decimal>,
}

impl ModeOps<i64> {
    fn integer() -> Self {
        Self {
            mode: NumberMode::Integer,
            min_increment: Decimal::ONE,
            limits: (Decimal::from(i64::MIN), Decimal::from(i64::MAX)),
            magnitude: Decimal::from(i64::MAX),
            sample: sample_integer,
            cast: |value| {
                if value.fract().is_zero() {
                    value.to_i64()
                } else {
                    None
                }
            },
            to_exact: |value| Some(Decimal::from(value)),
        }
    }
}

impl ModeOps<f64> {
    fn real() -> Self {
        Self {
            mode: NumberMode::Real,
            min_increment: REAL_INCREMENT,
            limits: (Decimal::MIN, Decimal::MAX),
            magnitude: REAL_MAGNITUDE,
            sample: sample_real,
            cast: decimal_to_real,
            to_exact: real_to_decimal,
        }
    }
}

fn sample_integer(rng: &mut dyn RngCore, low: Decimal, high: Decimal) -> Option<Decimal> {
    let (low, high) = (low.ceil().to_i64()?, high.floor().to_i64()?);
    (low <= high).then(|| Decimal::from(rng.gen_range(low..=high)))
}

fn sample_real(rng: &mut dyn RngCore, low: Decimal, high: Decimal) -> Option<Decimal> {
    let (low, high) = (decimal_to_real(low)?, decimal_to_real(high)?);
    if low > high {
        return None;
    }
    real_to_decimal(rng.gen_range(low..=high))
}

/// How candidates are drawn once the constraints are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plan {
    /// The bounds admit exactly one value
    Constant(Decimal),
    /// Any value in `[low, high]`
    Range { low: Decimal, high: Decimal },
    /// `k * multiple_of` for an integer `k` in `[low, high]`
    Multiples {
        multiple_of: Decimal,
        low: Decimal,
        high: Decimal,
    },
}

impl Plan {
    fn draw<T, R: Rng>(&self, rng: &mut R, ops: &ModeOps<T>) -> Option<T> {
        let value = match *self {
            Plan::Constant(value) => value,
            Plan::Range { low, high } => (ops.sample)(rng, low, high)?,
            Plan::Multiples {
                multiple_of,
                low,
                high,
            } => {
                let k = rng.gen_range(low.to_i128()?..=high.to_i128()?);
                Decimal::from_i128(k)?.checked_mul(multiple_of)?
            }
        };
        (ops.cast)(value)
    }
}

/// Generate an `integer` honouring `constraints`.
pub fn generate_integer<R: Rng>(
    rng: &mut R,
    constraints: &NumericConstraints<i64>,
    settings: &GeneratorSettings,
) -> Result<i64> {
    generate_with(rng, &ModeOps::integer(), &constraints.to_decimal()?, settings)
}

/// Generate a `number` honouring `constraints`.
pub fn generate_number<R: Rng>(
    rng: &mut R,
    constraints: &NumericConstraints<f64>,
    settings: &GeneratorSettings,
) -> Result<f64> {
    generate_with(rng, &ModeOps::real(), &constraints.to_decimal()?, settings)
}

/// Generate a value of either mode from constraints already in decimal form.
pub fn generate_numeric<R: Rng>(
    rng: &mut R,
    mode: NumberMode,
    constraints: &DecimalConstraints,
    settings: &GeneratorSettings,
) -> Result<GeneratedValue> {
    match mode {
        NumberMode::Integer => generate_with(rng, &ModeOps::integer(), constraints, settings)
            .map(GeneratedValue::Integer),
        NumberMode::Real => {
            generate_with(rng, &ModeOps::real(), constraints, settings).map(GeneratedValue::Number)
        }
    }
}

fn generate_with<T: Copy, R: Rng>(
    rng: &mut R,
    ops: &ModeOps<T>,
    constraints: &DecimalConstraints,
    settings: &GeneratorSettings,
) -> Result<T> {
    let plan = resolve_plan(rng, ops, constraints, settings)?;
    debug!(mode = %ops.mode, ?plan, "numeric plan");

    let attempts = match plan {
        Plan::Constant(_) => 1,
        _ => settings.max_attempts.max(1),
    };
    let accepts = |value: &Option<T>| {
        value
            .and_then(ops.to_exact)
            .is_some_and(|exact| constraints.accepts(exact))
    };

    match search(attempts, || plan.draw(rng, ops), accepts).flatten() {
        Some(value) => Ok(value),
        None if matches!(plan, Plan::Constant(_)) => Err(GenerationError::unsatisfiable(format!(
            "the only admissible value is not representable as {} ({})",
            ops.mode,
            constraints.describe()
        ))),
        None => Err(GenerationError::exhausted(
            attempts,
            format!("no representable {} for {}", ops.mode, constraints.describe()),
        )),
    }
}

/// Validate `constraints` and resolve them into a [`Plan`].
fn resolve_plan<T, R: Rng>(
    rng: &mut R,
    ops: &ModeOps<T>,
    constraints: &DecimalConstraints,
    settings: &GeneratorSettings,
) -> Result<Plan> {
    let multiple_of = constraints.multiple_of;
    if multiple_of.is_some_and(|m| m.is_zero()) {
        return Err(GenerationError::invalid("invalid value for multipleOf: 0"));
    }

    if let (Some(min), Some(max)) = (constraints.minimum, constraints.maximum) {
        if max < min {
            return Err(GenerationError::invalid(format!(
                "maximum ({max}) must be >= minimum ({min})"
            )));
        }
        let exclusions =
            u8::from(constraints.exclusive_minimum) + u8::from(constraints.exclusive_maximum);
        let required = ops.min_increment * Decimal::from(exclusions);
        if max.checked_sub(min).is_some_and(|gap| gap < required) {
            return Err(GenerationError::unsatisfiable(format!(
                "no {} lies strictly between the bounds ({})",
                ops.mode,
                constraints.describe()
            )));
        }
    }

    let (low, high) = effective_bounds(ops, constraints);
    if let (Some(low), Some(high)) = (low, high) {
        if low == high {
            if multiple_of.is_some_and(|m| !is_multiple_of(low, m)) {
                return Err(GenerationError::unsatisfiable(format!(
                    "{low} is the only admissible value and is not a multiple ({})",
                    constraints.describe()
                )));
            }
            return Ok(Plan::Constant(low));
        }
    }

    let Some(multiple_of) = multiple_of else {
        let (low, high) = fill_missing(ops, low, high);
        return Ok(Plan::Range { low, high });
    };

    let bucket = match (constraints.minimum, constraints.maximum) {
        (Some(min), Some(max)) => multiplier_range(
            min,
            constraints.exclusive_minimum,
            max,
            constraints.exclusive_maximum,
            multiple_of,
        )
        .ok_or_else(|| {
            GenerationError::unsatisfiable(format!(
                "no multiple of {multiple_of} lies between the bounds ({})",
                constraints.describe()
            ))
        })?,
        (None, None) => {
            let cap = floor_div(ops.magnitude, multiple_of.abs())
                .map_or(Decimal::from(MAX_FREE_MULTIPLIER), |cap| {
                    cap.min(Decimal::from(MAX_FREE_MULTIPLIER))
                });
            (Decimal::ZERO, cap)
        }
        (Some(_), None) | (None, Some(_)) => {
            synthesize_range(rng, ops, constraints, multiple_of, settings)?
        }
    };

    Ok(Plan::Multiples {
        multiple_of,
        low: bucket.0,
        high: bucket.1,
    })
}

/// Bounds with exclusivity resolved by stepping inward one increment,
/// never crossing the opposite bound.
fn effective_bounds<T>(
    ops: &ModeOps<T>,
    constraints: &DecimalConstraints,
) -> (Option<Decimal>, Option<Decimal>) {
    let mut low = constraints.minimum;
    let mut high = constraints.maximum;

    if constraints.exclusive_minimum {
        low = low.map(|min| {
            let stepped = min.checked_add(ops.min_increment).unwrap_or(min);
            high.map_or(stepped, |max| stepped.min(max))
        });
    }
    if constraints.exclusive_maximum {
        high = high.map(|max| {
            let stepped = max.checked_sub(ops.min_increment).unwrap_or(max);
            low.map_or(stepped, |min| stepped.max(min))
        });
    }
    (low, high)
}

/// Replace a missing bound with one `magnitude` away from the other (or from
/// zero), clamped to the mode's limits.
fn fill_missing<T>(
    ops: &ModeOps<T>,
    low: Option<Decimal>,
    high: Option<Decimal>,
) -> (Decimal, Decimal) {
    let (floor, ceiling) = ops.limits;
    let above = |base: Decimal| {
        base.checked_add(ops.magnitude)
            .map_or(ceiling, |v| v.min(ceiling))
    };
    let below = |base: Decimal| base.checked_sub(ops.magnitude).map_or(floor, |v| v.max(floor));

    match (low, high) {
        (Some(low), Some(high)) => (low, high),
        (Some(low), None) => (low, above(low.max(Decimal::ZERO))),
        (None, Some(high)) => (below(high.min(Decimal::ZERO)), high),
        (None, None) => (below(Decimal::ZERO), above(Decimal::ZERO)),
    }
}

/// The integers `k` for which `k * multiple_of` lies within the bounds.
///
/// The bucket of each bound is found by exact floor or ceiling division; a
/// bound that is itself a multiple is dropped from the range when exclusive.
/// Returns `None` when no multiple fits.
fn multiplier_range(
    min: Decimal,
    exclusive_min: bool,
    max: Decimal,
    exclusive_max: bool,
    multiple_of: Decimal,
) -> Option<(Decimal, Decimal)> {
    let on_min = exclusive_min && is_multiple_of(min, multiple_of);
    let on_max = exclusive_max && is_multiple_of(max, multiple_of);

    let step = |skip: bool| Decimal::from(u8::from(skip));
    let (low, high) = if multiple_of.is_sign_positive() {
        (
            ceil_div(min, multiple_of)?.checked_add(step(on_min))?,
            floor_div(max, multiple_of)?.checked_sub(step(on_max))?,
        )
    } else {
        // dividing by a negative step flips which bound limits which end
        (
            ceil_div(max, multiple_of)?.checked_add(step(on_max))?,
            floor_div(min, multiple_of)?.checked_sub(step(on_min))?,
        )
    };
    (low <= high).then_some((low, high))
}

/// With one bound missing, search for a second bound that leaves at least one
/// multiple in range.
fn synthesize_range<T, R: Rng>(
    rng: &mut R,
    ops: &ModeOps<T>,
    constraints: &DecimalConstraints,
    multiple_of: Decimal,
    settings: &GeneratorSettings,
) -> Result<(Decimal, Decimal)> {
    let (floor, ceiling) = ops.limits;
    let span = multiple_of
        .abs()
        .checked_mul(Decimal::TWO)
        .map_or(ops.magnitude, |double| double.max(Decimal::from(MAX_FREE_MULTIPLIER)))
        .min(ops.magnitude)
        .ceil()
        .to_i128()
        .unwrap_or(i128::from(MAX_FREE_MULTIPLIER));

    for _ in 0..settings.range_synthesis_attempts {
        let extension = Decimal::from_i128(rng.gen_range(0..=span)).unwrap_or(Decimal::ZERO);
        let range = match (constraints.minimum, constraints.maximum) {
            (Some(min), None) => {
                let max = min.checked_add(extension).map_or(ceiling, |v| v.min(ceiling));
                multiplier_range(min, constraints.exclusive_minimum, max, false, multiple_of)
            }
            (None, Some(max)) => {
                let min = max.checked_sub(extension).map_or(floor, |v| v.max(floor));
                multiplier_range(min, false, max, constraints.exclusive_maximum, multiple_of)
            }
            _ => None,
        };
        if let Some(range) = range {
            return Ok(range);
        }
    }

    Err(GenerationError::exhausted(
        settings.range_synthesis_attempts,
        format!(
            "could not find a range holding a multiple of {multiple_of} ({})",
            constraints.describe()
        ),
    ))
}
