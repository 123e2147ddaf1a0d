//! Constraint tuples for numeric and string generation.
//!
//! These are request-scoped value objects: build one per generation call,
//! hand it to the generator, discard it afterwards.

use crate::decimal::ExactDecimal;
use crate::error::{GenerationError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default bounded-search budget for string generation.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1250;

/// Which kind of number a numeric generation call produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberMode {
    /// 64-bit signed integers
    Integer,
    /// IEEE-754 doubles
    Real,
}

impl std::fmt::Display for NumberMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberMode::Integer => write!(f, "integer"),
            NumberMode::Real => write!(f, "number"),
        }
    }
}

/// Constraints for `integer` and `number` values.
///
/// ```rust
/// use schemagen_core::NumericConstraints;
///
/// let constraints = NumericConstraints::between(10, 12)
///     .with_exclusive_minimum(true)
///     .with_exclusive_maximum(true);
/// assert_eq!(constraints.minimum, Some(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericConstraints<T> {
    /// Lower bound
    pub minimum: Option<T>,
    /// Upper bound
    pub maximum: Option<T>,
    /// Whether the lower bound itself is excluded
    pub exclusive_minimum: bool,
    /// Whether the upper bound itself is excluded
    pub exclusive_maximum: bool,
    /// Every value must be an integer multiple of this
    pub multiple_of: Option<T>,
}

impl<T> Default for NumericConstraints<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NumericConstraints<T> {
    /// Unconstrained: any value of the mode is acceptable.
    pub fn new() -> Self {
        Self {
            minimum: None,
            maximum: None,
            exclusive_minimum: false,
            exclusive_maximum: false,
            multiple_of: None,
        }
    }

    /// Inclusive range `[minimum, maximum]`.
    pub fn between(minimum: T, maximum: T) -> Self {
        Self::new().with_minimum(minimum).with_maximum(maximum)
    }

    pub fn with_minimum(mut self, minimum: T) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn with_maximum(mut self, maximum: T) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn with_exclusive_minimum(mut self, exclusive: bool) -> Self {
        self.exclusive_minimum = exclusive;
        self
    }

    pub fn with_exclusive_maximum(mut self, exclusive: bool) -> Self {
        self.exclusive_maximum = exclusive;
        self
    }

    pub fn with_multiple_of(mut self, multiple_of: T) -> Self {
        self.multiple_of = Some(multiple_of);
        self
    }
}

impl<T: ExactDecimal> NumericConstraints<T> {
    /// Convert to the exact decimal form the numeric engine works on.
    ///
    /// Fails with `InvalidArgument` for non-finite inputs and `Unsupported`
    /// for values outside the decimal range or precision.
    pub fn to_decimal(&self) -> Result<DecimalConstraints> {
        Ok(DecimalConstraints {
            minimum: self.minimum.map(ExactDecimal::to_exact_decimal).transpose()?,
            maximum: self.maximum.map(ExactDecimal::to_exact_decimal).transpose()?,
            exclusive_minimum: self.exclusive_minimum,
            exclusive_maximum: self.exclusive_maximum,
            multiple_of: self
                .multiple_of
                .map(ExactDecimal::to_exact_decimal)
                .transpose()?,
        })
    }
}

/// [`NumericConstraints`] with every number held as an exact decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalConstraints {
    pub minimum: Option<Decimal>,
    pub maximum: Option<Decimal>,
    pub exclusive_minimum: bool,
    pub exclusive_maximum: bool,
    pub multiple_of: Option<Decimal>,
}

impl DecimalConstraints {
    /// Whether `value` honours every constraint, tested exactly.
    pub fn accepts(&self, value: Decimal) -> bool {
        let above = match self.minimum {
            Some(min) if self.exclusive_minimum => value > min,
            Some(min) => value >= min,
            None => true,
        };
        let below = match self.maximum {
            Some(max) if self.exclusive_maximum => value < max,
            Some(max) => value <= max,
            None => true,
        };
        let multiple = self
            .multiple_of
            .map_or(true, |m| crate::decimal::is_multiple_of(value, m));
        above && below && multiple
    }

    /// Human-readable summary used in error messages.
    pub fn describe(&self) -> String {
        fn show(value: Option<Decimal>) -> String {
            value.map_or_else(|| "none".to_string(), |v| v.normalize().to_string())
        }
        format!(
            "minimum: {}, maximum: {}, exclusive_min: {}, exclusive_max: {}, multiple_of: {}",
            show(self.minimum),
            show(self.maximum),
            self.exclusive_minimum,
            self.exclusive_maximum,
            show(self.multiple_of),
        )
    }
}

/// Constraints for `string` values.
///
/// `pattern` and `format` are exclusive in effect: when both are set the
/// pattern wins and the format is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringConstraints {
    /// Minimum length (characters for text, bytes for binary formats)
    pub min_length: usize,
    /// Maximum length, unbounded when `None`
    pub max_length: Option<usize>,
    /// Regular expression the value must match
    pub pattern: Option<String>,
    /// Named string format (`date`, `email`, ...)
    pub format: Option<String>,
    /// Budget for every bounded search this request performs
    pub max_attempts: usize,
}

impl Default for StringConstraints {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_length: None,
            pattern: None,
            format: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl StringConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Inclusive length window `[min_length, max_length]`.
    pub fn with_length(self, min_length: usize, max_length: usize) -> Self {
        self.with_min_length(min_length).with_max_length(max_length)
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Reject self-contradictory length bounds.
    pub fn validate(&self) -> Result<()> {
        match self.max_length {
            Some(max) if max < self.min_length => Err(GenerationError::invalid(format!(
                "maxLength ({max}) must be >= minLength ({})",
                self.min_length
            ))),
            _ => Ok(()),
        }
    }

    /// Whether a candidate of `length` falls inside the window.
    pub fn accepts_length(&self, length: usize) -> bool {
        length >= self.min_length && self.max_length.map_or(true, |max| length <= max)
    }

    /// Upper end of the window, falling back to `default_max` (never below
    /// `min_length`) when no maximum is set.
    pub fn length_ceiling(&self, default_max: usize) -> usize {
        self.max_length
            .unwrap_or_else(|| default_max.max(self.min_length))
    }

    /// Human-readable summary used in error messages.
    pub fn describe_length(&self) -> String {
        match self.max_length {
            Some(max) => format!("min_length: {}, max_length: {max}", self.min_length),
            None => format!("min_length: {}, max_length: none", self.min_length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_numeric_builder() {
        let constraints = NumericConstraints::between(1.5, 9.0)
            .with_exclusive_maximum(true)
            .with_multiple_of(0.5);
        assert_eq!(constraints.minimum, Some(1.5));
        assert_eq!(constraints.maximum, Some(9.0));
        assert!(!constraints.exclusive_minimum);
        assert!(constraints.exclusive_maximum);
        assert_eq!(constraints.multiple_of, Some(0.5));
    }

    #[test]
    fn test_to_decimal_rejects_nan() {
        let constraints = NumericConstraints::new().with_minimum(f64::NAN);
        assert!(matches!(
            constraints.to_decimal(),
            Err(GenerationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_decimal_accepts() {
        let constraints = NumericConstraints::between(10.0, 10.00000000001)
            .with_exclusive_minimum(true)
            .to_decimal()
            .unwrap();
        assert!(!constraints.accepts(Decimal::from(10)));
        assert!(constraints.accepts(Decimal::from_str("10.000000000005").unwrap()));
        assert!(constraints.accepts(Decimal::from_str("10.00000000001").unwrap()));

        let multiples = NumericConstraints::new()
            .with_multiple_of(1.33)
            .to_decimal()
            .unwrap();
        assert!(multiples.accepts(Decimal::from_str("3.99").unwrap()));
        assert!(!multiples.accepts(Decimal::from_str("4").unwrap()));
    }

    #[test]
    fn test_string_validate() {
        assert!(StringConstraints::new().with_length(5, 5).validate().is_ok());
        assert!(matches!(
            StringConstraints::new().with_length(6, 5).validate(),
            Err(GenerationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_string_length_window() {
        let constraints = StringConstraints::new().with_min_length(3);
        assert!(!constraints.accepts_length(2));
        assert!(constraints.accepts_length(3));
        assert!(constraints.accepts_length(10_000));
        assert_eq!(constraints.length_ceiling(255), 255);

        let long = StringConstraints::new().with_min_length(300);
        assert_eq!(long.length_ceiling(255), 300);

        let bounded = StringConstraints::new().with_length(3, 8);
        assert!(bounded.accepts_length(8));
        assert!(!bounded.accepts_length(9));
        assert_eq!(bounded.length_ceiling(255), 8);
    }
}
