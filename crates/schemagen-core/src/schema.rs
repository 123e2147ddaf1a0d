//! Scalar schema fragments loaded from JSON or YAML.
//!
//! A [`ScalarSchema`] is the subset of a JSON Schema / OpenAPI schema object
//! that describes a single `integer`, `number` or `string` value. Keywords the
//! generator does not understand (`description`, `example`, ...) are ignored.
//!
//! # Format
//!
//! ```yaml
//! type: number
//! minimum: 0
//! exclusiveMaximum: 100      # OpenAPI 3.0 boolean form is also accepted
//! multipleOf: 0.25
//! ```
//!
//! ```yaml
//! type: string
//! minLength: 8
//! maxLength: 64
//! format: password
//! ```

use crate::constraints::{NumericConstraints, StringConstraints};
use crate::settings::GeneratorSettings;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Error type for schema and settings loading.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A schema for one scalar value, tagged by its `type` keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScalarSchema {
    #[serde(deserialize_with = "integer_schema")]
    Integer(NumericSchema<i64>),
    Number(NumericSchema<f64>),
    String(StringSchema),
}

impl ScalarSchema {
    /// Parse a schema from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a schema from a file; `.json` files are parsed as JSON, anything
    /// else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }
}

/// `exclusiveMinimum` / `exclusiveMaximum` in either of its two spellings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExclusiveBound<T> {
    /// OpenAPI 3.0: a flag modifying `minimum` / `maximum`
    Flag(bool),
    /// JSON Schema draft 6+: the exclusive bound itself
    Value(T),
}

/// Keywords of an `integer` or `number` schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct NumericSchema<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<ExclusiveBound<T>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<ExclusiveBound<T>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<T>,
}

impl<T> Default for NumericSchema<T> {
    fn default() -> Self {
        Self {
            minimum: None,
            maximum: None,
            exclusive_minimum: None,
            exclusive_maximum: None,
            multiple_of: None,
        }
    }
}

impl<T: Copy + PartialOrd> NumericSchema<T> {
    /// Resolve both keyword spellings into one constraint tuple.
    ///
    /// When an inclusive bound and a numeric exclusive bound are both given,
    /// the tighter of the two applies.
    pub fn to_constraints(&self) -> NumericConstraints<T> {
        let (minimum, exclusive_minimum) = match self.exclusive_minimum {
            None => (self.minimum, false),
            Some(ExclusiveBound::Flag(flag)) => (self.minimum, flag),
            Some(ExclusiveBound::Value(bound)) => match self.minimum {
                Some(min) if min > bound => (Some(min), false),
                _ => (Some(bound), true),
            },
        };
        let (maximum, exclusive_maximum) = match self.exclusive_maximum {
            None => (self.maximum, false),
            Some(ExclusiveBound::Flag(flag)) => (self.maximum, flag),
            Some(ExclusiveBound::Value(bound)) => match self.maximum {
                Some(max) if max < bound => (Some(max), false),
                _ => (Some(bound), true),
            },
        };
        NumericConstraints {
            minimum,
            maximum,
            exclusive_minimum,
            exclusive_maximum,
            multiple_of: self.multiple_of,
        }
    }
}

impl<T> ExclusiveBound<T> {
    fn map<U>(self, f: impl FnOnce(T) -> U) -> ExclusiveBound<U> {
        match self {
            ExclusiveBound::Flag(flag) => ExclusiveBound::Flag(flag),
            ExclusiveBound::Value(value) => ExclusiveBound::Value(f(value)),
        }
    }
}

/// An `integer` keyword value. JSON documents often spell these as `10.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Integral(i64);

impl<'de> Deserialize<'de> for Integral {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IntegralVisitor;

        impl Visitor<'_> for IntegralVisitor {
            type Value = Integral;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Integral, E> {
                Ok(Integral(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Integral, E> {
                i64::try_from(value)
                    .map(Integral)
                    .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
            }

            // 2^63 is exactly representable, so the upper check is strict
            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Integral, E> {
                if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
                    Ok(Integral(value as i64))
                } else {
                    Err(E::invalid_value(Unexpected::Float(value), &self))
                }
            }
        }

        deserializer.deserialize_any(IntegralVisitor)
    }
}

fn integer_schema<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<NumericSchema<i64>, D::Error> {
    let schema = NumericSchema::<Integral>::deserialize(deserializer)?;
    let int = |Integral(value)| value;
    Ok(NumericSchema {
        minimum: schema.minimum.map(int),
        maximum: schema.maximum.map(int),
        exclusive_minimum: schema.exclusive_minimum.map(|bound| bound.map(int)),
        exclusive_maximum: schema.exclusive_maximum.map(|bound| bound.map(int)),
        multiple_of: schema.multiple_of.map(int),
    })
}

/// Keywords of a `string` schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringSchema {
    #[serde(default)]
    pub min_length: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl StringSchema {
    /// Build the constraint tuple, taking the search budget from `settings`.
    pub fn to_constraints(&self, settings: &GeneratorSettings) -> StringConstraints {
        StringConstraints {
            min_length: self.min_length,
            max_length: self.max_length,
            pattern: self.pattern.clone(),
            format: self.format.clone(),
            max_attempts: settings.max_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_integer_openapi_flags() {
        let schema = ScalarSchema::from_yaml(
            r#"
type: integer
minimum: 10
maximum: 12
exclusiveMinimum: true
exclusiveMaximum: true
description: ignored
"#,
        )
        .unwrap();

        let ScalarSchema::Integer(numeric) = schema else {
            panic!("Expected integer schema");
        };
        let constraints = numeric.to_constraints();
        assert_eq!(constraints.minimum, Some(10));
        assert_eq!(constraints.maximum, Some(12));
        assert!(constraints.exclusive_minimum);
        assert!(constraints.exclusive_maximum);
        assert_eq!(constraints.multiple_of, None);
    }

    #[test]
    fn test_number_draft6_exclusive_values() {
        let schema = ScalarSchema::from_json(
            r#"{"type": "number", "exclusiveMinimum": 0, "exclusiveMaximum": 2.5, "multipleOf": 0.5}"#,
        )
        .unwrap();

        let ScalarSchema::Number(numeric) = schema else {
            panic!("Expected number schema");
        };
        let constraints = numeric.to_constraints();
        assert_eq!(constraints.minimum, Some(0.0));
        assert_eq!(constraints.maximum, Some(2.5));
        assert!(constraints.exclusive_minimum);
        assert!(constraints.exclusive_maximum);
        assert_eq!(constraints.multiple_of, Some(0.5));
    }

    #[test]
    fn test_tighter_bound_wins() {
        let schema = NumericSchema {
            minimum: Some(5),
            exclusive_minimum: Some(ExclusiveBound::Value(3)),
            maximum: Some(9),
            exclusive_maximum: Some(ExclusiveBound::Value(9)),
            ..Default::default()
        };
        let constraints = schema.to_constraints();
        assert_eq!(constraints.minimum, Some(5));
        assert!(!constraints.exclusive_minimum);
        assert_eq!(constraints.maximum, Some(9));
        assert!(constraints.exclusive_maximum);
    }

    #[test]
    fn test_string_schema() {
        let schema = ScalarSchema::from_yaml(
            r#"
type: string
minLength: 3
maxLength: 8
pattern: "^[0-9]{3}-[0-9]{4}$"
"#,
        )
        .unwrap();

        let ScalarSchema::String(string) = schema else {
            panic!("Expected string schema");
        };
        let settings = GeneratorSettings {
            max_attempts: 10,
            ..Default::default()
        };
        let constraints = string.to_constraints(&settings);
        assert_eq!(constraints.min_length, 3);
        assert_eq!(constraints.max_length, Some(8));
        assert_eq!(constraints.pattern.as_deref(), Some("^[0-9]{3}-[0-9]{4}$"));
        assert_eq!(constraints.format, None);
        assert_eq!(constraints.max_attempts, 10);
    }

    #[test]
    fn test_integer_accepts_integral_floats() {
        let schema = ScalarSchema::from_json(
            r#"{"type": "integer", "minimum": 1.0, "exclusiveMaximum": 9.0, "multipleOf": 2}"#,
        )
        .unwrap();
        assert_eq!(
            schema,
            ScalarSchema::Integer(NumericSchema {
                minimum: Some(1),
                exclusive_maximum: Some(ExclusiveBound::Value(9)),
                multiple_of: Some(2),
                ..Default::default()
            })
        );

        let schema = ScalarSchema::from_yaml("type: integer\nmaximum: -4.0\nexclusiveMaximum: true\n")
            .unwrap();
        let ScalarSchema::Integer(numeric) = schema else {
            panic!("Expected integer schema");
        };
        assert_eq!(numeric.maximum, Some(-4));
        assert_eq!(numeric.exclusive_maximum, Some(ExclusiveBound::Flag(true)));
    }

    #[test]
    fn test_integer_rejects_fractions() {
        for json in [
            r#"{"type": "integer", "minimum": 1.5}"#,
            r#"{"type": "integer", "multipleOf": 0.5}"#,
            r#"{"type": "integer", "maximum": 1e19}"#,
        ] {
            assert!(
                matches!(ScalarSchema::from_json(json), Err(SchemaError::JsonError(_))),
                "{json}"
            );
        }
    }

    #[test]
    fn test_unknown_type() {
        let result = ScalarSchema::from_json(r#"{"type": "object"}"#);
        assert!(matches!(result, Err(SchemaError::JsonError(_))));
    }

    #[test]
    fn test_from_file_by_extension() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"{{"type": "string", "format": "uuid"}}"#).unwrap();
        let schema = ScalarSchema::from_file(json.path()).unwrap();
        assert!(matches!(
            schema,
            ScalarSchema::String(StringSchema { ref format, .. }) if format.as_deref() == Some("uuid")
        ));

        let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(yaml, "type: integer\nmultipleOf: 3").unwrap();
        let schema = ScalarSchema::from_file(yaml.path()).unwrap();
        assert_eq!(
            schema,
            ScalarSchema::Integer(NumericSchema {
                multiple_of: Some(3),
                ..Default::default()
            })
        );
    }
}
