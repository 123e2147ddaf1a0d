//! Strings matching a regular expression.
//!
//! The pattern is parsed into its high-level IR with `regex-syntax` and walked
//! once per example: literals are copied, classes sampled, repetitions unrolled
//! and alternations picked at random. Every candidate is then checked with the
//! compiled [`Regex`] before it is accepted.
//!
//! Matching uses search semantics, so a side of the pattern that is not
//! anchored may be padded with printable text to reach a minimum length.

use rand::Rng;
use regex::Regex;
use regex_syntax::hir::{Class, ClassBytes, ClassUnicode, Hir, HirKind, Look, LookSet};
use schemagen_core::{GenerationError, Result};

/// Extra repetitions allowed past the minimum for `*`, `+` and `{n,}`.
const UNBOUNDED_REPEAT_SPAN: u32 = 16;

/// Probability of drawing from the printable ASCII part of a class when it has one.
const PRINTABLE_BIAS: f64 = 0.8;

const PRINTABLE_ASCII: (u32, u32) = (0x20, 0x7e);

/// A pattern ready to produce examples.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    hir: Hir,
    regex: Regex,
    anchored_start: bool,
    anchored_end: bool,
}

impl CompiledPattern {
    /// Parse and compile `pattern`; a malformed pattern is an `InvalidArgument`.
    pub fn new(pattern: &str) -> Result<Self> {
        let invalid = |e: &dyn std::fmt::Display| {
            GenerationError::invalid(format!("invalid pattern /{pattern}/: {e}"))
        };
        let hir = regex_syntax::parse(pattern).map_err(|e| invalid(&e))?;
        let regex = Regex::new(pattern).map_err(|e| invalid(&e))?;
        let properties = hir.properties();
        let anchored_start = anchors_start(properties.look_set_prefix_any());
        let anchored_end = anchors_end(properties.look_set_suffix_any());
        Ok(Self {
            hir,
            regex,
            anchored_start,
            anchored_end,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Search semantics: an unanchored pattern matches anywhere in `candidate`.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// One random string shaped like the pattern, at least `min_length`
    /// characters long when an unanchored side leaves room for padding.
    ///
    /// Usually a match; callers still check with [`Self::is_match`], since
    /// look-arounds and some class draws are not honoured here.
    pub fn example<R: Rng + ?Sized>(&self, rng: &mut R, min_length: usize) -> String {
        let mut out = Vec::new();
        emit(&self.hir, rng, &mut out);
        let core = String::from_utf8_lossy(&out).into_owned();

        let deficit = min_length.saturating_sub(core.chars().count());
        let (before, after) = match (self.anchored_start, self.anchored_end) {
            (true, true) => return core,
            (true, false) => (0, deficit),
            (false, true) => (deficit, 0),
            (false, false) => {
                let before = rng.gen_range(0..=deficit);
                (before, deficit - before)
            }
        };

        let mut padded = padding(rng, before);
        padded.push_str(&core);
        padded.push_str(&padding(rng, after));
        padded
    }
}

fn anchors_start(looks: LookSet) -> bool {
    [Look::Start, Look::StartLF, Look::StartCRLF]
        .into_iter()
        .any(|look| looks.contains(look))
}

fn anchors_end(looks: LookSet) -> bool {
    [Look::End, Look::EndLF, Look::EndCRLF]
        .into_iter()
        .any(|look| looks.contains(look))
}

fn padding<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .filter_map(|_| char::from_u32(rng.gen_range(PRINTABLE_ASCII.0..=PRINTABLE_ASCII.1)))
        .collect()
}

fn emit<R: Rng + ?Sized>(hir: &Hir, rng: &mut R, out: &mut Vec<u8>) {
    match hir.kind() {
        // anchors and word boundaries consume no input
        HirKind::Empty | HirKind::Look(_) => {}
        HirKind::Literal(literal) => out.extend_from_slice(&literal.0),
        HirKind::Class(Class::Unicode(class)) => {
            if let Some(c) = sample_unicode(class, rng) {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
        HirKind::Class(Class::Bytes(class)) => {
            if let Some(byte) = sample_bytes(class, rng) {
                out.push(byte);
            }
        }
        HirKind::Repetition(repetition) => {
            let max = repetition
                .max
                .unwrap_or_else(|| repetition.min.saturating_add(UNBOUNDED_REPEAT_SPAN));
            let count = rng.gen_range(repetition.min..=max.max(repetition.min));
            for _ in 0..count {
                emit(&repetition.sub, rng, out);
            }
        }
        HirKind::Capture(capture) => emit(&capture.sub, rng, out),
        HirKind::Concat(parts) => {
            for part in parts {
                emit(part, rng, out);
            }
        }
        HirKind::Alternation(branches) => {
            if !branches.is_empty() {
                let branch = &branches[rng.gen_range(0..branches.len())];
                emit(branch, rng, out);
            }
        }
    }
}

fn sample_unicode<R: Rng + ?Sized>(class: &ClassUnicode, rng: &mut R) -> Option<char> {
    let ranges: Vec<(u32, u32)> = class
        .ranges()
        .iter()
        .map(|range| (u32::from(range.start()), u32::from(range.end())))
        .collect();
    sample_code_point(&ranges, rng).and_then(char::from_u32)
}

fn sample_bytes<R: Rng + ?Sized>(class: &ClassBytes, rng: &mut R) -> Option<u8> {
    let ranges: Vec<(u32, u32)> = class
        .ranges()
        .iter()
        .map(|range| (u32::from(range.start()), u32::from(range.end())))
        .collect();
    sample_code_point(&ranges, rng).and_then(|point| u8::try_from(point).ok())
}

/// Uniform draw over the union of inclusive `ranges`, biased towards their
/// printable ASCII part.
fn sample_code_point<R: Rng + ?Sized>(ranges: &[(u32, u32)], rng: &mut R) -> Option<u32> {
    let printable: Vec<(u32, u32)> = ranges
        .iter()
        .filter_map(|&(start, end)| {
            let (start, end) = (start.max(PRINTABLE_ASCII.0), end.min(PRINTABLE_ASCII.1));
            (start <= end).then_some((start, end))
        })
        .collect();

    if !printable.is_empty() && rng.gen_bool(PRINTABLE_BIAS) {
        uniform_over(&printable, rng)
    } else {
        uniform_over(ranges, rng)
    }
}

fn uniform_over<R: Rng + ?Sized>(ranges: &[(u32, u32)], rng: &mut R) -> Option<u32> {
    let total: u64 = ranges
        .iter()
        .map(|&(start, end)| u64::from(end - start) + 1)
        .sum();
    if total == 0 {
        return None;
    }

    let mut offset = rng.gen_range(0..total);
    for &(start, end) in ranges {
        let size = u64::from(end - start) + 1;
        if offset < size {
            return u32::try_from(offset).ok().map(|offset| start + offset);
        }
        offset -= size;
    }
    None
}
