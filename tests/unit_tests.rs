use clap::Parser;
use schemagen::{generate_to, GeneratorOpts, IntegerOpts, NumberOpts, StringOpts};
use schemagen_core::{ExclusiveBound, NumericSchema, ScalarSchema};
use std::io::Write;

fn seeded(count: usize) -> GeneratorOpts {
    GeneratorOpts {
        count,
        seed: Some(42),
        ..Default::default()
    }
}

fn lines(output: &[u8]) -> Vec<serde_json::Value> {
    std::str::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_integer_opts_to_schema() {
    let keywords = IntegerOpts::try_parse_from([
        "integer",
        "--minimum",
        "-5",
        "--maximum",
        "5",
        "--exclusive-minimum",
        "--multiple-of",
        "2",
    ])
    .unwrap();

    assert_eq!(
        keywords.to_schema(),
        ScalarSchema::Integer(NumericSchema {
            minimum: Some(-5),
            maximum: Some(5),
            exclusive_minimum: Some(ExclusiveBound::Flag(true)),
            exclusive_maximum: None,
            multiple_of: Some(2),
        })
    );
}

#[test]
fn test_generator_opts_defaults() {
    let opts = GeneratorOpts::try_parse_from(["schemagen"]).unwrap();
    assert_eq!(opts.count, 1);
    assert_eq!(opts.seed, None);
}

#[test]
fn test_generate_integers_as_json_lines() {
    let schema = IntegerOpts {
        minimum: Some(10),
        maximum: Some(12),
        exclusive_minimum: true,
        exclusive_maximum: true,
        multiple_of: None,
    }
    .to_schema();

    let mut output = Vec::new();
    let written = generate_to(&schema, &seeded(3), &mut output).unwrap();
    assert_eq!(written, 3);
    assert_eq!(lines(&output), vec![serde_json::json!(11); 3]);
}

#[test]
fn test_generation_is_reproducible() {
    let schema = NumberOpts {
        minimum: Some(-1.0),
        maximum: Some(1.0),
        ..Default::default()
    }
    .to_schema();

    let mut first = Vec::new();
    let mut second = Vec::new();
    generate_to(&schema, &seeded(5), &mut first).unwrap();
    generate_to(&schema, &seeded(5), &mut second).unwrap();
    assert_eq!(first, second);

    for value in lines(&first) {
        let value = value.as_f64().unwrap();
        assert!((-1.0..=1.0).contains(&value));
    }
}

#[test]
fn test_generate_strings() {
    let schema = StringOpts {
        pattern: Some(r"^[0-9]{3}-[0-9]{4}$".to_string()),
        ..Default::default()
    }
    .to_schema();

    let mut output = Vec::new();
    generate_to(&schema, &seeded(4), &mut output).unwrap();
    for value in lines(&output) {
        assert_eq!(value.as_str().unwrap().len(), 8);
    }
}

#[test]
fn test_generation_error_is_reported() {
    let schema = StringOpts {
        format: Some("date".to_string()),
        min_length: 20,
        max_length: Some(20),
        ..Default::default()
    }
    .to_schema();

    let mut output = Vec::new();
    let err = generate_to(&schema, &seeded(1), &mut output).unwrap_err();
    assert!(format!("{err:#}").contains("incompatible with format: date"));
    assert!(output.is_empty());
}

#[test]
fn test_settings_file_and_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_attempts: 7\ndefault_max_length: 12").unwrap();

    let opts = GeneratorOpts {
        settings: Some(file.path().to_path_buf()),
        ..seeded(1)
    };
    let settings = opts.load_settings().unwrap();
    assert_eq!(settings.max_attempts, 7);
    assert_eq!(settings.default_max_length, 12);

    let opts = GeneratorOpts {
        max_attempts: Some(3),
        ..opts
    };
    assert_eq!(opts.load_settings().unwrap().max_attempts, 3);
}

#[test]
fn test_missing_settings_file() {
    let opts = GeneratorOpts {
        settings: Some("/nonexistent/settings.yaml".into()),
        ..Default::default()
    };
    let err = opts.load_settings().unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load settings"));
}
