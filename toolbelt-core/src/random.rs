// toolbelt-core/src/random.rs
//! Random integers and strings drawn from a caller-supplied generator.
//!
//! Nothing in here owns a generator. Callers pass any [`rand::Rng`], which
//! keeps draws reproducible under a seeded `StdRng` in tests.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use rand::Rng;

use crate::errors::ToolbeltError;

/// Options for [`random_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomStringOptions {
    /// Minimum length in runes. Zero is treated as one.
    pub min_len: usize,
    pub max_len: usize,
    /// Letters may come from the whole Unicode range instead of ASCII only.
    pub allow_unicode: bool,
    pub allow_numbers: bool,
    pub allow_symbols: bool,
    /// Spaces never appear as the first or last rune.
    pub allow_spaces: bool,
}

impl Default for RandomStringOptions {
    fn default() -> Self {
        Self {
            min_len: 8,
            max_len: 16,
            allow_unicode: false,
            allow_numbers: true,
            allow_symbols: false,
            allow_spaces: false,
        }
    }
}

/// Returns an integer within `min..=max`.
///
/// # Errors
///
/// [`ToolbeltError::InvalidRange`] when `min > max`.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> Result<i64, ToolbeltError> {
    if min > max {
        warn!("Rejected random range {}..={}", min, max);
        return Err(ToolbeltError::InvalidRange { min, max });
    }
    Ok(rng.random_range(min..=max))
}

/// Returns `how_many` integers, each within `min..=max`.
pub fn random_int_array<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
    how_many: usize,
) -> Result<Vec<i64>, ToolbeltError> {
    (0..how_many).map(|_| random_int(rng, min, max)).collect()
}

/// Returns a string of decimal digits whose length lies within
/// `min_len..=max_len`, never using any digit listed in `forbidden`.
///
/// An empty string comes back when `max_len < min_len`, when the drawn
/// length is zero, or when every digit is forbidden.
pub fn random_numeric_string<R: Rng + ?Sized>(
    rng: &mut R,
    forbidden: &[u8],
    min_len: usize,
    max_len: usize,
) -> String {
    if max_len < min_len {
        warn!("Random numeric string length range {}..={} is empty", min_len, max_len);
        return String::new();
    }

    let length = if min_len == max_len { max_len } else { rng.random_range(min_len..=max_len) };
    if length == 0 {
        return String::new();
    }

    let allowed: Vec<char> = ('0'..='9')
        .filter(|c| c.to_digit(10).map_or(true, |d| !forbidden.contains(&(d as u8))))
        .collect();

    match allowed.as_slice() {
        [] => {
            debug!("Every digit is forbidden, returning an empty string");
            String::new()
        }
        [only] => std::iter::repeat(*only).take(length).collect(),
        _ => (0..length).map(|_| allowed[rng.random_range(0..allowed.len())]).collect(),
    }
}

/// Returns a random string shaped by `options`. Letters are always allowed.
///
/// An empty string comes back, with a warning, when `max_len` is zero or
/// smaller than `min_len`.
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, options: &RandomStringOptions) -> String {
    if options.max_len == 0 || options.min_len > options.max_len {
        warn!(
            "Random string length range {}..={} is not usable",
            options.min_len, options.max_len
        );
        return String::new();
    }

    let min_len = options.min_len.max(1);
    let length = rng.random_range(min_len..=options.max_len);
    let max_code = if options.allow_unicode { char::MAX as u32 } else { 0x7F };

    let mut out = String::with_capacity(length);
    let mut count = 0;
    while count < length {
        // Surrogate code points yield None and are drawn again.
        let Some(c) = char::from_u32(rng.random_range(1..=max_code)) else { continue };
        if c.is_control() {
            continue;
        }

        let edge = count == 0 || count == length - 1;
        let accepted = if c.is_alphabetic() {
            true
        } else if c.is_numeric() {
            options.allow_numbers
        } else if c == ' ' {
            options.allow_spaces && !edge
        } else if c.is_ascii_punctuation() {
            options.allow_symbols
        } else {
            false
        };

        if accepted {
            out.push(c);
            count += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_random_int_is_inclusive() {
        let mut rng = rng();
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..500 {
            let n = random_int(&mut rng, 1, 3).unwrap();
            assert!((1..=3).contains(&n));
            seen_min |= n == 1;
            seen_max |= n == 3;
        }
        assert!(seen_min && seen_max);
        assert_eq!(random_int(&mut rng, 7, 7).unwrap(), 7);
    }

    #[test]
    fn test_random_int_rejects_inverted_range() {
        let err = random_int(&mut rng(), 5, 1).unwrap_err();
        assert!(matches!(err, ToolbeltError::InvalidRange { min: 5, max: 1 }));
        assert!(random_int_array(&mut rng(), 5, 1, 3).is_err());
    }

    #[test]
    fn test_random_int_array() {
        let values = random_int_array(&mut rng(), -10, 10, 20).unwrap();
        assert_eq!(values.len(), 20);
        assert!(values.iter().all(|v| (-10..=10).contains(v)));
        assert!(random_int_array(&mut rng(), 0, 1, 0).unwrap().is_empty());
    }

    #[test]
    fn test_seeded_draws_repeat() {
        let a = random_int_array(&mut rng(), 0, 1_000_000, 5).unwrap();
        let b = random_int_array(&mut rng(), 0, 1_000_000, 5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_numeric_string() {
        let mut rng = rng();
        for _ in 0..50 {
            let s = random_numeric_string(&mut rng, &[0, 1, 2, 3], 4, 9);
            let len = s.chars().count();
            assert!((4..=9).contains(&len), "{}", s);
            assert!(s.chars().all(|c| ('4'..='9').contains(&c)), "{}", s);
        }
    }

    #[test]
    fn test_random_numeric_string_can_draw_nine() {
        let s = random_numeric_string(&mut rng(), &[], 500, 500);
        assert!(s.contains('9'));
        assert!(s.contains('0'));
    }

    #[test]
    fn test_random_numeric_string_edge_cases() {
        let mut rng = rng();
        assert_eq!(random_numeric_string(&mut rng, &[], 5, 2), "");
        assert_eq!(random_numeric_string(&mut rng, &[], 0, 0), "");
        assert_eq!(random_numeric_string(&mut rng, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9], 3, 3), "");
        assert_eq!(random_numeric_string(&mut rng, &[0, 1, 2, 3, 4, 5, 6, 8, 9], 4, 4), "7777");
    }

    #[test]
    fn test_random_string_ascii_letters_only() {
        let options = RandomStringOptions {
            min_len: 5,
            max_len: 10,
            allow_numbers: false,
            ..Default::default()
        };
        let mut rng = rng();
        for _ in 0..50 {
            let s = random_string(&mut rng, &options);
            assert!((5..=10).contains(&s.chars().count()), "{}", s);
            assert!(s.chars().all(|c| c.is_ascii_alphabetic()), "{}", s);
        }
    }

    #[test]
    fn test_random_string_spaces_never_at_edges() {
        let options = RandomStringOptions {
            min_len: 3,
            max_len: 30,
            allow_spaces: true,
            allow_symbols: true,
            ..Default::default()
        };
        let mut rng = rng();
        for _ in 0..100 {
            let s = random_string(&mut rng, &options);
            assert!(!s.starts_with(' ') && !s.ends_with(' '), "{:?}", s);
        }
    }

    #[test]
    fn test_random_string_unicode_is_valid_and_sized() {
        let options = RandomStringOptions {
            min_len: 4,
            max_len: 4,
            allow_unicode: true,
            ..Default::default()
        };
        let s = random_string(&mut rng(), &options);
        assert_eq!(s.chars().count(), 4);
        assert!(s.chars().all(|c| c.is_alphanumeric()));
    }

    #[test]
    fn test_random_string_unusable_ranges() {
        let mut rng = rng();
        let zero = RandomStringOptions { min_len: 0, max_len: 0, ..Default::default() };
        assert_eq!(random_string(&mut rng, &zero), "");
        let inverted = RandomStringOptions { min_len: 9, max_len: 3, ..Default::default() };
        assert_eq!(random_string(&mut rng, &inverted), "");
    }
}
