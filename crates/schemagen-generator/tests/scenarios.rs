//! End-to-end generation scenarios through the public `SchemaFaker` API.

use schemagen_core::{
    GeneratedValue, GenerationError, NumericConstraints, ScalarSchema, StringConstraints,
};
use schemagen_generator::SchemaFaker;

#[test]
fn integer_degenerate_range_returns_bound() {
    let mut faker = SchemaFaker::seeded(42);
    let value = faker
        .generate_integer(&NumericConstraints::between(5, 5))
        .unwrap();
    assert_eq!(value, 5);
}

#[test]
fn integer_zero_multiple_is_invalid() {
    let mut faker = SchemaFaker::seeded(42);
    let result = faker.generate_integer(&NumericConstraints::between(0, 100).with_multiple_of(0));
    assert!(matches!(result, Err(GenerationError::InvalidArgument(_))));
}

#[test]
fn integer_open_interval_has_single_member() {
    let mut faker = SchemaFaker::seeded(42);
    let constraints = NumericConstraints::between(10, 12)
        .with_exclusive_minimum(true)
        .with_exclusive_maximum(true);
    for _ in 0..10 {
        assert_eq!(faker.generate_integer(&constraints).unwrap(), 11);
    }
}

#[test]
fn date_outside_window_is_unsatisfiable() {
    let mut faker = SchemaFaker::seeded(42);
    let result = faker.generate_string(
        &StringConstraints::new()
            .with_format("date")
            .with_length(20, 20),
    );
    assert!(matches!(result, Err(GenerationError::Unsatisfiable(_))));
}

#[test]
fn pattern_fits_wide_window() {
    let mut faker = SchemaFaker::seeded(42);
    let constraints = StringConstraints::new()
        .with_pattern(r"^[0-9]{3}-[0-9]{4}$")
        .with_max_length(8);
    let value = faker.generate_string(&constraints).unwrap();
    let text = value.as_text().unwrap();
    assert_eq!(text.len(), 8);
    assert_eq!(&text[3..4], "-");
    assert!(text.chars().filter(char::is_ascii_digit).count() == 7);
}

#[test]
fn pattern_cannot_fit_narrow_window() {
    let mut faker = SchemaFaker::seeded(42);
    let constraints = StringConstraints::new()
        .with_pattern(r"^[0-9]{3}-[0-9]{4}$")
        .with_max_length(7)
        .with_max_attempts(100);
    let result = faker.generate_string(&constraints);
    assert!(matches!(
        result,
        Err(GenerationError::NoExampleFound { attempts: 100, .. })
    ));
    assert!(result.unwrap_err().is_search_exhausted());
}

#[test]
fn real_multiples_between_bounds() {
    let mut faker = SchemaFaker::seeded(42);
    let constraints = NumericConstraints::between(-10.99999, 10.00001).with_multiple_of(2.5);
    let allowed = [-10.0, -7.5, -5.0, -2.5, 0.0, 2.5, 5.0, 7.5, 10.0];
    for _ in 0..100 {
        let value = faker.generate_number(&constraints).unwrap();
        assert!(allowed.contains(&value), "{value}");
    }
}

#[test]
fn schema_documents_drive_generation() {
    let mut faker = SchemaFaker::seeded(42);

    let schema = ScalarSchema::from_yaml(
        r#"
type: number
exclusiveMinimum: 0
exclusiveMaximum: 1
"#,
    )
    .unwrap();
    for value in faker.examples(&schema, 50) {
        let value = value.unwrap().as_f64().unwrap();
        assert!(value > 0.0 && value < 1.0);
    }

    let schema = ScalarSchema::from_json(
        r#"{"type": "string", "format": "byte", "minLength": 4, "maxLength": 12}"#,
    )
    .unwrap();
    for value in faker.examples(&schema, 20) {
        let GeneratedValue::Bytes(bytes) = value.unwrap() else {
            panic!("Expected bytes");
        };
        assert!([4, 8, 12].contains(&bytes.len()));
    }
}

#[test]
fn every_registered_format_generates() {
    let mut faker = SchemaFaker::seeded(42);
    for name in [
        "date", "date-time", "password", "byte", "binary", "email", "uuid", "uri", "hostname",
        "ipv4", "ipv6",
    ] {
        let value = faker
            .generate_string(&StringConstraints::new().with_format(name))
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(!value.is_empty() || name == "byte" || name == "binary" || name == "password");
    }
}
