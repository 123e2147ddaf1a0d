//! Internet-flavoured text: email addresses, host names, URIs and IP addresses.

use fake::faker::internet::en::{DomainSuffix, SafeEmail};
use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::Rng;
use std::net::{Ipv4Addr, Ipv6Addr};

const HOST_PREFIXES: &[&str] = &["db", "srv", "desktop", "laptop", "lt", "email", "web"];
const URI_SCHEMES: &[&str] = &["http", "https"];
const URI_EXTENSIONS: &[&str] = &["html", "htm", "php", "jsp", "asp"];

fn pick<R: Rng + ?Sized>(rng: &mut R, choices: &[&'static str]) -> &'static str {
    choices[rng.gen_range(0..choices.len())]
}

/// `word.suffix`, e.g. `dolores.com`.
fn domain_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let word: String = Word().fake_with_rng(rng);
    let suffix: String = DomainSuffix().fake_with_rng(rng);
    format!("{word}.{suffix}")
}

pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    SafeEmail().fake_with_rng(rng)
}

/// Host name with one subdomain level, e.g. `web-42.dolores.com`.
pub fn hostname<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = pick(rng, HOST_PREFIXES);
    let number = rng.gen_range(0..100);
    format!("{prefix}-{number:02}.{}", domain_name(rng))
}

/// Absolute `http(s)` URI with a short path.
pub fn uri<R: Rng + ?Sized>(rng: &mut R) -> String {
    let scheme = pick(rng, URI_SCHEMES);
    let mut uri = format!("{scheme}://www.{}/", domain_name(rng));
    let depth = rng.gen_range(0..=3);
    let segments: Vec<String> = (0..depth).map(|_| Word().fake_with_rng(rng)).collect();
    uri.push_str(&segments.join("/"));
    if depth > 0 && rng.gen_bool(0.5) {
        uri.push('.');
        uri.push_str(pick(rng, URI_EXTENSIONS));
    }
    uri
}

/// Dotted-quad IPv4 address, 7 to 15 characters.
pub fn ipv4<R: Rng + ?Sized>(rng: &mut R) -> String {
    Ipv4Addr::from(rng.gen::<u32>()).to_string()
}

/// IPv6 address in canonical compressed form, 2 to 39 characters.
pub fn ipv6<R: Rng + ?Sized>(rng: &mut R) -> String {
    Ipv6Addr::from(rng.gen::<u128>()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_email() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let value = email(&mut rng);
            let (local, domain) = value.split_once('@').unwrap();
            assert!(!local.is_empty());
            assert!(domain.contains('.'));
        }
    }

    #[test]
    fn test_hostname() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let value = hostname(&mut rng);
            assert_eq!(value.split('.').count(), 3, "{value}");
            assert!(!value.contains(char::is_whitespace));
        }
    }

    #[test]
    fn test_uri() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let value = uri(&mut rng);
            assert!(value.starts_with("http://www.") || value.starts_with("https://www."));
            assert!(!value.contains(char::is_whitespace));
        }
    }

    #[test]
    fn test_ip_addresses_parse() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let v4 = ipv4(&mut rng);
            assert!((7..=15).contains(&v4.len()));
            assert!(v4.parse::<Ipv4Addr>().is_ok());

            let v6 = ipv6(&mut rng);
            assert!((2..=39).contains(&v6.len()));
            assert!(v6.parse::<Ipv6Addr>().is_ok());
        }
    }
}
