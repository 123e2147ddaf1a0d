//! Random primitives the string generator is assembled from.
//!
//! Free functions over any [`Rng`], plus the table of named primitives that
//! back `format` values outside the registry (`currency_code`, `city`, ...).

use super::timestamp;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use fake::faker::address::en::{CityName, CountryCode};
use fake::faker::company::en::CompanyName;
use fake::faker::currency::en::CurrencyCode;
use fake::faker::internet::en::Username;
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use schemagen_core::{GenerationError, Result};

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIALS: &[u8] = b"!@#$%^&*()_+";

/// Below this many characters, text is built from words rather than sentences.
const SENTENCE_THRESHOLD: usize = 25;

fn pick_byte<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> char {
    char::from(alphabet[rng.gen_range(0..alphabet.len())])
}

/// ASCII letters, with a length drawn uniformly from `[min_chars, max_chars]`.
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, min_chars: usize, max_chars: usize) -> String {
    let length = rng.gen_range(min_chars..=max_chars.max(min_chars));
    (0..length).map(|_| pick_byte(rng, LETTERS)).collect()
}

/// Lorem ipsum text of at most `max_chars` characters.
///
/// May come back empty when `max_chars` is too small to hold a single word.
pub fn random_text<R: Rng + ?Sized>(rng: &mut R, max_chars: usize) -> String {
    if max_chars < SENTENCE_THRESHOLD {
        return random_words(rng, max_chars);
    }

    let mut text = String::new();
    loop {
        let sentence: String = Sentence(3..10).fake_with_rng(rng);
        let separator = usize::from(!text.is_empty());
        if text.len() + separator + sentence.len() > max_chars {
            break;
        }
        if separator == 1 {
            text.push(' ');
        }
        text.push_str(&sentence);
    }

    if text.is_empty() {
        random_words(rng, max_chars)
    } else {
        text
    }
}

/// A capitalized run of words ending in a period.
fn random_words<R: Rng + ?Sized>(rng: &mut R, max_chars: usize) -> String {
    let mut text = String::new();
    loop {
        let word: String = Word().fake_with_rng(rng);
        let separator = usize::from(!text.is_empty());
        // one more for the closing period
        if text.len() + separator + word.len() + 1 > max_chars {
            break;
        }
        if separator == 1 {
            text.push(' ');
        }
        text.push_str(&word);
    }

    if text.is_empty() {
        return text;
    }
    let mut chars = text.chars();
    let mut sentence: String = chars
        .next()
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_default();
    sentence.push_str(chars.as_str());
    sentence.push('.');
    sentence
}

/// Exactly `length` random bytes.
pub fn random_bytes<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; length];
    rng.fill_bytes(&mut bytes);
    bytes
}

/// Password of exactly `length` characters.
///
/// From four characters on, it holds at least one lowercase letter, one
/// uppercase letter, one digit and one special character.
pub fn password<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let required = [LOWERCASE, UPPERCASE, DIGITS, SPECIALS];
    let mut chars: Vec<char> = (0..length)
        .map(|i| match required.get(i) {
            Some(alphabet) if length >= required.len() => pick_byte(rng, alphabet),
            _ => {
                let alphabet = [LETTERS, DIGITS, SPECIALS][rng.gen_range(0..3)];
                pick_byte(rng, alphabet)
            }
        })
        .collect();
    chars.shuffle(rng);
    chars.into_iter().collect()
}

/// Standard base64 text, returned as bytes, with an encoded length inside
/// `[min_length, max_length]`.
///
/// Encoded lengths are multiples of 4, so the window is narrowed inward to the
/// nearest multiples; an empty result is `Unsatisfiable`.
pub fn base64_bytes<R: Rng + ?Sized>(
    rng: &mut R,
    min_length: usize,
    max_length: usize,
) -> Result<Vec<u8>> {
    let (low, high) = (min_length.div_ceil(4), max_length / 4);
    if low > high {
        return Err(GenerationError::unsatisfiable(format!(
            "base64 text has a length that is a multiple of 4; none lies in [{min_length}, {max_length}]"
        )));
    }

    let encoded_length = rng.gen_range(low..=high) * 4;
    // 3 raw bytes per 4 characters, the last group padded with up to two '='
    let raw_length = match encoded_length {
        0 => 0,
        len => len / 4 * 3 - rng.gen_range(0..=2),
    };
    let raw = random_bytes(rng, raw_length);
    Ok(STANDARD.encode(raw).into_bytes())
}

/// A primitive resolved from a `format` name outside the registry.
pub type NamedPrimitive = fn(&mut dyn RngCore) -> String;

static NAMED_PRIMITIVES: &[(&str, NamedPrimitive)] = &[
    ("currency_code", |rng: &mut dyn RngCore| CurrencyCode().fake_with_rng(rng)),
    ("color", |rng: &mut dyn RngCore| format!("#{:06x}", rng.gen_range(0..0x100_0000u32))),
    ("date_of_birth", |rng: &mut dyn RngCore| timestamp::date_of_birth(rng)),
    ("unix_time", |rng: &mut dyn RngCore| timestamp::unix_time(rng)),
    ("first_name", |rng: &mut dyn RngCore| FirstName().fake_with_rng(rng)),
    ("last_name", |rng: &mut dyn RngCore| LastName().fake_with_rng(rng)),
    ("name", |rng: &mut dyn RngCore| Name().fake_with_rng(rng)),
    ("user_name", |rng: &mut dyn RngCore| Username().fake_with_rng(rng)),
    ("word", |rng: &mut dyn RngCore| Word().fake_with_rng(rng)),
    ("city", |rng: &mut dyn RngCore| CityName().fake_with_rng(rng)),
    ("country_code", |rng: &mut dyn RngCore| CountryCode().fake_with_rng(rng)),
    ("phone_number", |rng: &mut dyn RngCore| PhoneNumber().fake_with_rng(rng)),
    ("company_name", |rng: &mut dyn RngCore| CompanyName().fake_with_rng(rng)),
];

/// Resolve a named primitive, e.g. `currency_code`.
pub fn named_primitive(name: &str) -> Option<NamedPrimitive> {
    NAMED_PRIMITIVES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, primitive)| *primitive)
}

/// Names accepted by [`named_primitive`].
pub fn named_primitive_names() -> impl Iterator<Item = &'static str> {
    NAMED_PRIMITIVES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_string_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let value = random_string(&mut rng, 3, 8);
            assert!((3..=8).contains(&value.len()));
            assert!(value.bytes().all(|b| b.is_ascii_alphabetic()));
        }
        assert_eq!(random_string(&mut rng, 0, 0), "");
        assert_eq!(random_string(&mut rng, 5, 5).len(), 5);
    }

    #[test]
    fn test_random_text_respects_cap() {
        let mut rng = StdRng::seed_from_u64(42);
        for cap in [6, 12, 24, 25, 60, 255, 1000] {
            for _ in 0..20 {
                let text = random_text(&mut rng, cap);
                assert!(text.chars().count() <= cap, "{cap}: {text}");
            }
        }
    }

    #[test]
    fn test_random_words_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let text = random_words(&mut rng, 24);
        assert!(text.ends_with('.'));
        assert!(text.chars().next().unwrap().is_uppercase());
        assert_eq!(random_words(&mut rng, 1), "");
    }

    #[test]
    fn test_random_bytes() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(random_bytes(&mut rng, 0).len(), 0);
        assert_eq!(random_bytes(&mut rng, 17).len(), 17);
    }

    #[test]
    fn test_password() {
        let mut rng = StdRng::seed_from_u64(42);
        for length in [0, 1, 3, 4, 10, 64] {
            let value = password(&mut rng, length);
            assert_eq!(value.chars().count(), length);
            if length >= 4 {
                assert!(value.bytes().any(|b| b.is_ascii_lowercase()));
                assert!(value.bytes().any(|b| b.is_ascii_uppercase()));
                assert!(value.bytes().any(|b| b.is_ascii_digit()));
                assert!(value.bytes().any(|b| SPECIALS.contains(&b)));
            }
        }
    }

    #[test]
    fn test_base64_bytes() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let value = base64_bytes(&mut rng, 5, 17).unwrap();
            assert!(value.len() == 8 || value.len() == 12 || value.len() == 16);
            assert!(STANDARD.decode(&value).is_ok());
        }
        assert_eq!(base64_bytes(&mut rng, 0, 3).unwrap(), b"");
        assert_eq!(base64_bytes(&mut rng, 8, 8).unwrap().len(), 8);
        assert!(matches!(
            base64_bytes(&mut rng, 5, 7),
            Err(GenerationError::Unsatisfiable(_))
        ));
    }

    #[test]
    fn test_named_primitives() {
        let mut rng = StdRng::seed_from_u64(42);
        for name in named_primitive_names() {
            let primitive = named_primitive(name).unwrap();
            assert!(!primitive(&mut rng).is_empty(), "{name}");
        }
        assert!(named_primitive("date").is_none());

        let currency = named_primitive("currency_code").unwrap()(&mut rng);
        assert_eq!(currency.len(), 3);
        let color = named_primitive("color").unwrap()(&mut rng);
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
    }
}
