//! String generation: pattern, registered format, named primitive or free text.

use super::format::generate_formatted;
use super::pattern::CompiledPattern;
use super::primitives::{self, NamedPrimitive};
use crate::search::search;
use rand::Rng;
use schemagen_core::{
    Format, GenerationError, GeneratorSettings, Result, StringConstraints, StringValue,
};
use tracing::debug;

/// Free text is only attempted above this minimum length...
const FREE_TEXT_MIN_LENGTH: usize = 5;

/// ...and never for a maximum below this.
const FREE_TEXT_NARROW_MAX: usize = 20;

/// Generate a string honouring `constraints`.
///
/// Resolution order: `pattern`, then a registered `format`, then a named
/// primitive, then free text. An unknown format name falls through to free
/// text.
pub fn generate_string<R: Rng>(
    rng: &mut R,
    constraints: &StringConstraints,
    settings: &GeneratorSettings,
) -> Result<StringValue> {
    constraints.validate()?;

    if let Some(pattern) = &constraints.pattern {
        return generate_from_pattern(rng, pattern, constraints);
    }

    if let Some(name) = constraints.format.as_deref() {
        if let Some(format) = Format::from_name(name) {
            return generate_formatted(rng, format, constraints, settings);
        }
        if let Some(primitive) = primitives::named_primitive(name) {
            return generate_named(rng, name, primitive, constraints);
        }
        debug!(format = name, "unknown format, generating free text");
    }

    generate_free_text(rng, constraints, settings)
}

fn generate_from_pattern<R: Rng>(
    rng: &mut R,
    pattern: &str,
    constraints: &StringConstraints,
) -> Result<StringValue> {
    let compiled = CompiledPattern::new(pattern)?;
    search(
        constraints.max_attempts,
        || compiled.example(rng, constraints.min_length),
        |candidate| {
            constraints.accepts_length(candidate.chars().count()) && compiled.is_match(candidate)
        },
    )
    .map(StringValue::Text)
    .ok_or_else(|| {
        GenerationError::exhausted(
            constraints.max_attempts,
            format!(
                "no match for /{}/ with {}",
                compiled.as_str(),
                constraints.describe_length()
            ),
        )
    })
}

fn generate_named<R: Rng>(
    rng: &mut R,
    name: &str,
    primitive: NamedPrimitive,
    constraints: &StringConstraints,
) -> Result<StringValue> {
    search(
        constraints.max_attempts,
        || primitive(rng),
        |candidate| constraints.accepts_length(candidate.chars().count()),
    )
    .map(StringValue::Text)
    .ok_or_else(|| {
        GenerationError::unsatisfiable(format!(
            "unable to generate any random value that matches format: {name} and {} after {} attempts",
            constraints.describe_length(),
            constraints.max_attempts
        ))
    })
}

fn generate_free_text<R: Rng>(
    rng: &mut R,
    constraints: &StringConstraints,
    settings: &GeneratorSettings,
) -> Result<StringValue> {
    let ceiling = constraints.length_ceiling(settings.default_max_length);

    let wants_text = constraints.min_length > FREE_TEXT_MIN_LENGTH
        && !constraints
            .max_length
            .is_some_and(|max| max < FREE_TEXT_NARROW_MAX);
    if wants_text {
        let text = search(
            constraints.max_attempts,
            || primitives::random_text(rng, ceiling),
            |candidate| constraints.accepts_length(candidate.chars().count()),
        );
        if let Some(text) = text {
            return Ok(StringValue::Text(text));
        }
        debug!(
            length = %constraints.describe_length(),
            "no free text fits, falling back to a random string"
        );
    }

    Ok(StringValue::Text(primitives::random_string(
        rng,
        constraints.min_length,
        ceiling,
    )))
}
