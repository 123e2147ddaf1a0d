//! The string format registry.
//!
//! Maps each known `format` name to how its generator's output length can be
//! influenced and what kind of value it returns. The registry is a closed set
//! of `static` entries; formats outside it are resolved by the generator's
//! named-primitive table instead.

use serde::{Deserialize, Serialize};

/// How the length of a format's output can be influenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthType {
    /// Output length is one of a known set (e.g. always 10)
    Fixed,
    /// The caller can request one exact length
    VariableSingular,
    /// The caller can request an inclusive length window
    VariableRange,
    /// Length is emergent; no hint can be passed in
    Unconstrained,
}

/// Whether a format produces text or raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnKind {
    Text,
    Bytes,
}

/// The lengths a format can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedLengths {
    /// An explicit set of lengths
    Set(&'static [usize]),
    /// A contiguous inclusive run of lengths
    Range { start: usize, end: usize },
}

impl AllowedLengths {
    pub fn contains(&self, length: usize) -> bool {
        match *self {
            AllowedLengths::Set(lengths) => lengths.contains(&length),
            AllowedLengths::Range { start, end } => (start..=end).contains(&length),
        }
    }

    /// Whether at least one allowed length lies in `[min_length, max_length]`.
    pub fn intersects(&self, min_length: usize, max_length: Option<usize>) -> bool {
        let max_length = max_length.unwrap_or(usize::MAX);
        match *self {
            AllowedLengths::Set(lengths) => lengths
                .iter()
                .any(|len| (min_length..=max_length).contains(len)),
            AllowedLengths::Range { start, end } => start <= max_length && end >= min_length,
        }
    }

    /// Whether every allowed length lies in `[min_length, max_length]`.
    pub fn within(&self, min_length: usize, max_length: Option<usize>) -> bool {
        let max_length = max_length.unwrap_or(usize::MAX);
        match *self {
            AllowedLengths::Set(lengths) => lengths
                .iter()
                .all(|len| (min_length..=max_length).contains(len)),
            AllowedLengths::Range { start, end } => start >= min_length && end <= max_length,
        }
    }
}

/// Registry entry for one string format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    pub length_type: LengthType,
    /// For `Fixed` formats, the lengths the output is drawn from. For
    /// `Unconstrained` formats, the lengths the generator is capable of, when
    /// known.
    pub allowed_lengths: Option<AllowedLengths>,
    pub return_kind: ReturnKind,
}

impl FormatSpec {
    /// Whether a value of this format can possibly fit the length window.
    ///
    /// `Unconstrained` formats without declared lengths never produce empty
    /// output, so a window of `[0, 0]` is rejected while `[0, 1]` is accepted.
    pub fn validate_constraints(&self, min_length: usize, max_length: Option<usize>) -> bool {
        match self.length_type {
            LengthType::Fixed => self
                .allowed_lengths
                .is_some_and(|lengths| lengths.intersects(min_length, max_length)),
            LengthType::VariableSingular | LengthType::VariableRange => true,
            LengthType::Unconstrained => match self.allowed_lengths {
                Some(lengths) => lengths.intersects(min_length, max_length),
                None => max_length.map_or(true, |max| max >= 1),
            },
        }
    }

    /// Whether every value of this format is guaranteed to fit the window, so
    /// a single draw needs no length check.
    pub fn always_fits(&self, min_length: usize, max_length: Option<usize>) -> bool {
        self.allowed_lengths
            .is_some_and(|lengths| lengths.within(min_length, max_length))
    }
}

static DATE: FormatSpec = FormatSpec {
    length_type: LengthType::Fixed,
    allowed_lengths: Some(AllowedLengths::Set(&[10])),
    return_kind: ReturnKind::Text,
};

static DATE_TIME: FormatSpec = FormatSpec {
    length_type: LengthType::Fixed,
    allowed_lengths: Some(AllowedLengths::Set(&[25])),
    return_kind: ReturnKind::Text,
};

static PASSWORD: FormatSpec = FormatSpec {
    length_type: LengthType::VariableSingular,
    allowed_lengths: None,
    return_kind: ReturnKind::Text,
};

static BYTE: FormatSpec = FormatSpec {
    length_type: LengthType::VariableRange,
    allowed_lengths: None,
    return_kind: ReturnKind::Bytes,
};

static BINARY: FormatSpec = FormatSpec {
    length_type: LengthType::VariableSingular,
    allowed_lengths: None,
    return_kind: ReturnKind::Bytes,
};

static EMAIL: FormatSpec = FormatSpec {
    length_type: LengthType::Unconstrained,
    allowed_lengths: None,
    return_kind: ReturnKind::Text,
};

static UUID: FormatSpec = FormatSpec {
    length_type: LengthType::Fixed,
    allowed_lengths: Some(AllowedLengths::Set(&[36])),
    return_kind: ReturnKind::Text,
};

static URI: FormatSpec = FormatSpec {
    length_type: LengthType::Unconstrained,
    allowed_lengths: None,
    return_kind: ReturnKind::Text,
};

static HOSTNAME: FormatSpec = FormatSpec {
    length_type: LengthType::Unconstrained,
    allowed_lengths: None,
    return_kind: ReturnKind::Text,
};

// 0.0.0.0 -> 255.255.255.255
static IPV4: FormatSpec = FormatSpec {
    length_type: LengthType::Unconstrained,
    allowed_lengths: Some(AllowedLengths::Range { start: 7, end: 15 }),
    return_kind: ReturnKind::Text,
};

// :: -> 1000:1000:1000:1000:1000:1abc:1007:1def
static IPV6: FormatSpec = FormatSpec {
    length_type: LengthType::Fixed,
    allowed_lengths: Some(AllowedLengths::Range { start: 2, end: 39 }),
    return_kind: ReturnKind::Text,
};

/// A format known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    // Defined by the OpenAPI specification
    Date,
    DateTime,
    Password,
    Byte,
    Binary,
    // Mentioned by the OpenAPI specification as examples
    Email,
    Uuid,
    Uri,
    Hostname,
    Ipv4,
    Ipv6,
}

impl Format {
    /// Every registered format.
    pub const ALL: [Format; 11] = [
        Format::Date,
        Format::DateTime,
        Format::Password,
        Format::Byte,
        Format::Binary,
        Format::Email,
        Format::Uuid,
        Format::Uri,
        Format::Hostname,
        Format::Ipv4,
        Format::Ipv6,
    ];

    /// Look up a format by its schema name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Date => "date",
            Format::DateTime => "date-time",
            Format::Password => "password",
            Format::Byte => "byte",
            Format::Binary => "binary",
            Format::Email => "email",
            Format::Uuid => "uuid",
            Format::Uri => "uri",
            Format::Hostname => "hostname",
            Format::Ipv4 => "ipv4",
            Format::Ipv6 => "ipv6",
        }
    }

    /// The registry entry for this format.
    pub fn spec(self) -> &'static FormatSpec {
        match self {
            Format::Date => &DATE,
            Format::DateTime => &DATE_TIME,
            Format::Password => &PASSWORD,
            Format::Byte => &BYTE,
            Format::Binary => &BINARY,
            Format::Email => &EMAIL,
            Format::Uuid => &UUID,
            Format::Uri => &URI,
            Format::Hostname => &HOSTNAME,
            Format::Ipv4 => &IPV4,
            Format::Ipv6 => &IPV6,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
