//! The generator front end.

use crate::generators::{generate_integer, generate_number, generate_numeric, generate_string};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schemagen_core::{
    GeneratedValue, GeneratorSettings, NumberMode, NumericConstraints, Result, ScalarSchema,
    StringConstraints, StringValue,
};
use tracing::debug;

/// Random value generator for scalar schemas.
///
/// Owns its RNG; every call consumes from it, so two fakers built with the
/// same seed and fed the same requests produce the same values.
pub struct SchemaFaker<R = StdRng> {
    rng: R,
    settings: GeneratorSettings,
}

impl SchemaFaker<StdRng> {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for SchemaFaker<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SchemaFaker<R> {
    /// Create a generator drawing from `rng`.
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            settings: GeneratorSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: GeneratorSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// A random `number` honouring `constraints`.
    pub fn generate_number(&mut self, constraints: &NumericConstraints<f64>) -> Result<f64> {
        generate_number(&mut self.rng, constraints, &self.settings)
    }

    /// A random `integer` honouring `constraints`.
    pub fn generate_integer(&mut self, constraints: &NumericConstraints<i64>) -> Result<i64> {
        generate_integer(&mut self.rng, constraints, &self.settings)
    }

    /// A random string (or bytes, for binary formats) honouring `constraints`.
    ///
    /// The search budget is `constraints.max_attempts`.
    pub fn generate_string(&mut self, constraints: &StringConstraints) -> Result<StringValue> {
        generate_string(&mut self.rng, constraints, &self.settings)
    }

    /// A random value for any scalar schema.
    pub fn generate(&mut self, schema: &ScalarSchema) -> Result<GeneratedValue> {
        match schema {
            ScalarSchema::Integer(numeric) => {
                let constraints = numeric.to_constraints().to_decimal()?;
                generate_numeric(&mut self.rng, NumberMode::Integer, &constraints, &self.settings)
            }
            ScalarSchema::Number(numeric) => {
                let constraints = numeric.to_constraints().to_decimal()?;
                generate_numeric(&mut self.rng, NumberMode::Real, &constraints, &self.settings)
            }
            ScalarSchema::String(string) => {
                let constraints = string.to_constraints(&self.settings);
                self.generate_string(&constraints).map(GeneratedValue::from)
            }
        }
    }

    /// Lazily generate `count` values for `schema`.
    pub fn examples<'a>(&'a mut self, schema: &'a ScalarSchema, count: usize) -> ExampleIterator<'a, R> {
        debug!(count, ?schema, "generating examples");
        ExampleIterator {
            faker: self,
            schema,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates values for one schema.
pub struct ExampleIterator<'a, R> {
    faker: &'a mut SchemaFaker<R>,
    schema: &'a ScalarSchema,
    remaining: usize,
}

impl<R: Rng> Iterator for ExampleIterator<'_, R> {
    type Item = Result<GeneratedValue>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.faker.generate(self.schema))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for ExampleIterator<'_, R> {}
