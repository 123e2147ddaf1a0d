//! UUID value generator.

use rand::Rng;
use uuid::Uuid;

/// Generate a random UUID v4 in its 36 character hyphenated form.
pub fn uuid_v4<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

    Uuid::from_bytes(bytes).hyphenated().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uuid_v4_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = uuid_v4(&mut rng);
        assert_eq!(value.len(), 36);

        let parsed = Uuid::parse_str(&value).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(value, uuid_v4(&mut rng));
    }

    #[test]
    fn test_uuid_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(uuid_v4(&mut rng1), uuid_v4(&mut rng2));
    }
}
