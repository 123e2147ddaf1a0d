//! schemagen library
//!
//! Command-line options shared by the `schemagen` subcommands, and the glue
//! that turns them into a [`SchemaFaker`] writing JSON lines.
//!
//! # CLI Usage
//!
//! ```bash
//! # Values for a schema file
//! schemagen generate --schema price.yaml --count 10 --seed 42
//!
//! # Inline keywords
//! schemagen integer --minimum 10 --maximum 12 --exclusive-minimum --exclusive-maximum
//! schemagen number --minimum -10.99999 --maximum 10.00001 --multiple-of 2.5 --count 5
//! schemagen string --pattern '^[0-9]{3}-[0-9]{4}$'
//! schemagen string --format date-time
//! ```

use anyhow::Context;
use clap::Parser;
use schemagen_core::{
    ExclusiveBound, GeneratorSettings, NumericSchema, ScalarSchema, StringSchema,
};
use schemagen_generator::SchemaFaker;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Clone, Debug, Default)]
pub struct GeneratorOpts {
    /// Number of values to generate
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output (OS entropy when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// YAML file with generator settings
    #[arg(long, env = "SCHEMAGEN_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Budget for every bounded search, overriding the settings file
    #[arg(long, env = "SCHEMAGEN_MAX_ATTEMPTS")]
    pub max_attempts: Option<usize>,
}

impl GeneratorOpts {
    /// Settings from the settings file (or defaults), with overrides applied.
    pub fn load_settings(&self) -> anyhow::Result<GeneratorSettings> {
        let mut settings = match &self.settings {
            Some(path) => GeneratorSettings::from_file(path)
                .with_context(|| format!("Failed to load settings from {path:?}"))?,
            None => GeneratorSettings::default(),
        };
        if let Some(max_attempts) = self.max_attempts {
            settings.max_attempts = max_attempts;
        }
        Ok(settings)
    }

    pub fn build_faker(&self) -> anyhow::Result<SchemaFaker> {
        let faker = match self.seed {
            Some(seed) => SchemaFaker::seeded(seed),
            None => SchemaFaker::new(),
        };
        Ok(faker.with_settings(self.load_settings()?))
    }
}

/// Keywords of an inline `integer` schema.
#[derive(Parser, Clone, Debug, Default)]
pub struct IntegerOpts {
    #[arg(long, allow_negative_numbers = true)]
    pub minimum: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub maximum: Option<i64>,

    /// Exclude the minimum itself
    #[arg(long)]
    pub exclusive_minimum: bool,

    /// Exclude the maximum itself
    #[arg(long)]
    pub exclusive_maximum: bool,

    #[arg(long, allow_negative_numbers = true)]
    pub multiple_of: Option<i64>,
}

impl IntegerOpts {
    pub fn to_schema(&self) -> ScalarSchema {
        ScalarSchema::Integer(NumericSchema {
            minimum: self.minimum,
            maximum: self.maximum,
            exclusive_minimum: flag(self.exclusive_minimum),
            exclusive_maximum: flag(self.exclusive_maximum),
            multiple_of: self.multiple_of,
        })
    }
}

/// Keywords of an inline `number` schema.
#[derive(Parser, Clone, Debug, Default)]
pub struct NumberOpts {
    #[arg(long, allow_negative_numbers = true)]
    pub minimum: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub maximum: Option<f64>,

    /// Exclude the minimum itself
    #[arg(long)]
    pub exclusive_minimum: bool,

    /// Exclude the maximum itself
    #[arg(long)]
    pub exclusive_maximum: bool,

    #[arg(long, allow_negative_numbers = true)]
    pub multiple_of: Option<f64>,
}

impl NumberOpts {
    pub fn to_schema(&self) -> ScalarSchema {
        ScalarSchema::Number(NumericSchema {
            minimum: self.minimum,
            maximum: self.maximum,
            exclusive_minimum: flag(self.exclusive_minimum),
            exclusive_maximum: flag(self.exclusive_maximum),
            multiple_of: self.multiple_of,
        })
    }
}

fn flag<T>(set: bool) -> Option<ExclusiveBound<T>> {
    set.then_some(ExclusiveBound::Flag(true))
}

/// Keywords of an inline `string` schema.
#[derive(Parser, Clone, Debug, Default)]
pub struct StringOpts {
    #[arg(long, default_value_t = 0)]
    pub min_length: usize,

    #[arg(long)]
    pub max_length: Option<usize>,

    /// Regular expression the value must match
    #[arg(long)]
    pub pattern: Option<String>,

    /// Named format (`date`, `email`, `uuid`, ..., or a named primitive such as `city`)
    #[arg(long)]
    pub format: Option<String>,
}

impl StringOpts {
    pub fn to_schema(&self) -> ScalarSchema {
        ScalarSchema::String(StringSchema {
            min_length: self.min_length,
            max_length: self.max_length,
            pattern: self.pattern.clone(),
            format: self.format.clone(),
        })
    }
}

/// Generate `opts.count` values for `schema`, writing one JSON value per line.
///
/// Stops at the first value that cannot be generated.
pub fn generate_to<W: Write>(
    schema: &ScalarSchema,
    opts: &GeneratorOpts,
    out: &mut W,
) -> anyhow::Result<usize> {
    let mut faker = opts.build_faker()?;
    let mut written = 0;
    for value in faker.examples(schema, opts.count) {
        let value = value.with_context(|| format!("Failed to generate value #{}", written + 1))?;
        serde_json::to_writer(&mut *out, &value.to_json())?;
        writeln!(out)?;
        written += 1;
    }
    info!(written, "generation complete");
    Ok(written)
}
