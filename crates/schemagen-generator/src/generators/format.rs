//! Values for the formats in the registry.
//!
//! The registry entry decides which length hint a format's generator accepts;
//! [`draw`] is the closed table from format to generator.

use super::{network, primitives, timestamp, uuid};
use crate::search::try_search;
use rand::Rng;
use schemagen_core::{
    Format, GenerationError, GeneratorSettings, LengthType, Result, StringConstraints, StringValue,
};
use tracing::{debug, warn};

/// The length request passed to a format's generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LengthHint {
    None,
    Exact(usize),
    Window { min: usize, max: usize },
}

/// Draw one value of `format` under `hint`.
fn draw<R: Rng>(rng: &mut R, format: Format, hint: LengthHint) -> Result<StringValue> {
    let value: StringValue = match (format, hint) {
        (Format::Date, LengthHint::None) => timestamp::date(rng).into(),
        (Format::DateTime, LengthHint::None) => timestamp::date_time(rng, None).into(),
        (Format::Uuid, LengthHint::None) => uuid::uuid_v4(rng).into(),
        (Format::Email, LengthHint::None) => network::email(rng).into(),
        (Format::Uri, LengthHint::None) => network::uri(rng).into(),
        (Format::Hostname, LengthHint::None) => network::hostname(rng).into(),
        (Format::Ipv4, LengthHint::None) => network::ipv4(rng).into(),
        (Format::Ipv6, LengthHint::None) => network::ipv6(rng).into(),
        (Format::Password, LengthHint::Exact(length)) => primitives::password(rng, length).into(),
        (Format::Binary, LengthHint::Exact(length)) => {
            primitives::random_bytes(rng, length).into()
        }
        (Format::Byte, LengthHint::Window { min, max }) => {
            primitives::base64_bytes(rng, min, max)?.into()
        }
        (format, hint) => {
            return Err(GenerationError::invalid(format!(
                "format {format} takes no length hint of the form {hint:?}"
            )))
        }
    };
    Ok(value)
}

/// Generate a value of a registered `format` inside the length window.
pub fn generate_formatted<R: Rng>(
    rng: &mut R,
    format: Format,
    constraints: &StringConstraints,
    settings: &GeneratorSettings,
) -> Result<StringValue> {
    constraints.validate()?;
    let spec = format.spec();
    let (min_length, max_length) = (constraints.min_length, constraints.max_length);

    if !spec.validate_constraints(min_length, max_length) {
        return Err(GenerationError::unsatisfiable(format!(
            "constraints ({}) are incompatible with format: {format}",
            constraints.describe_length()
        )));
    }

    let ceiling = constraints.length_ceiling(settings.default_max_length);
    let value = match spec.length_type {
        LengthType::Fixed if spec.always_fits(min_length, max_length) => {
            draw(rng, format, LengthHint::None)?
        }
        LengthType::Fixed => {
            debug!(%format, "searching for a value inside the length window");
            search_unhinted(rng, format, constraints)?.ok_or_else(|| {
                GenerationError::exhausted(
                    constraints.max_attempts,
                    format!(
                        "no {format} value with {}",
                        constraints.describe_length()
                    ),
                )
            })?
        }
        LengthType::VariableSingular => {
            let length = rng.gen_range(min_length..=ceiling);
            draw(rng, format, LengthHint::Exact(length))?
        }
        LengthType::VariableRange => draw(
            rng,
            format,
            LengthHint::Window {
                min: min_length,
                max: ceiling,
            },
        )?,
        LengthType::Unconstrained => search_unhinted(rng, format, constraints)?.ok_or_else(|| {
            GenerationError::unsatisfiable(format!(
                "unable to generate any random value that matches format: {format} and {} after {} attempts",
                constraints.describe_length(),
                constraints.max_attempts
            ))
        })?,
    };

    if constraints.accepts_length(value.len()) {
        Ok(value)
    } else {
        warn!(
            %format,
            length = value.len(),
            window = %constraints.describe_length(),
            "generated value outside the requested window"
        );
        Err(GenerationError::exhausted(
            1,
            format!("{format} value of length {} is outside the window", value.len()),
        ))
    }
}

fn search_unhinted<R: Rng>(
    rng: &mut R,
    format: Format,
    constraints: &StringConstraints,
) -> Result<Option<StringValue>> {
    try_search(
        constraints.max_attempts,
        || draw(rng, format, LengthHint::None),
        |value| constraints.accepts_length(value.len()),
    )
}
