// toolbelt-core/src/filters.rs
//! Character-class filters and small string helpers.
//!
//! These are the building blocks of the transformation pipeline, and are
//! exported on their own because they are useful by themselves. Every length
//! in this module counts Unicode scalar values ("runes"), never bytes.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

static DUPLICATED_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// Punctuation accepted as a "symbol" by the password checker.
const PASSWORD_SYMBOLS: &str = "!\"#$%&'()*+´-./:;<=>?@[\\]^_`{|}~";

/// Keeps only alphabetic characters.
pub fn only_letters(sequence: &str) -> String {
    sequence.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Keeps only the ASCII digits `0-9`.
pub fn only_digits(sequence: &str) -> String {
    sequence.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Keeps letters and numeric characters, dropping spaces, punctuation and symbols.
pub fn only_letters_and_digits(sequence: &str) -> String {
    sequence
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_numeric())
        .collect()
}

/// Removes numeric characters and leaves everything else untouched.
pub fn remove_digits(sequence: &str) -> String {
    sequence.chars().filter(|c| !c.is_numeric()).collect()
}

/// `true` when the sequence is non-empty and made only of numeric characters.
pub fn has_only_numbers(sequence: &str) -> bool {
    !sequence.is_empty() && sequence.chars().all(char::is_numeric)
}

/// `true` when the sequence is non-empty and made only of letters.
pub fn has_only_letters(sequence: &str) -> bool {
    !sequence.is_empty() && sequence.chars().all(char::is_alphabetic)
}

/// Rune count after trimming surrounding whitespace.
pub fn trim_len(text: &str) -> usize {
    text.trim().chars().count()
}

/// `true` if the trimmed text has at least `min_len` runes.
pub fn check_min_len(text: &str, min_len: usize) -> bool {
    trim_len(text) >= min_len
}

/// Collapses every run of whitespace (spaces, tabs, newlines) into one space.
pub fn dedup_spaces(sequence: &str) -> String {
    if sequence.is_empty() {
        return String::new();
    }
    DUPLICATED_SPACES.replace_all(sequence, " ").into_owned()
}

/// [`dedup_spaces`] followed by a trim.
pub fn clean_spaces(sequence: &str) -> String {
    dedup_spaces(sequence).trim().to_string()
}

/// The sequence written backwards, rune by rune.
pub fn reverse(sequence: &str) -> String {
    sequence.chars().rev().collect()
}

/// Returns at most `max_len` leading runes of `sequence`.
///
/// Never splits a multi-byte character. `max_len == 0` means "no limit".
pub fn truncate(sequence: &str, max_len: usize) -> &str {
    if max_len == 0 {
        return sequence;
    }
    match sequence.char_indices().nth(max_len) {
        Some((byte_index, _)) => &sequence[..byte_index],
        None => sequence,
    }
}

/// Applies the replacement pairs over and over until the text stops changing.
///
/// Pairs whose replacement contains its own pattern (or whose pattern is
/// empty) would never settle and are skipped.
pub fn replace_all_repeatedly(original: &str, pairs: &[(&str, &str)]) -> String {
    let usable: Vec<&(&str, &str)> = pairs
        .iter()
        .filter(|(from, to)| !from.is_empty() && !to.contains(from))
        .collect();

    let mut current = original.to_string();
    loop {
        let next = usable
            .iter()
            .fold(current.clone(), |acc, (from, to)| acc.replace(from, to));
        if next == current {
            return current;
        }
        current = next;
    }
}

/// SHA-256 of the UTF-8 bytes, as lowercase hex.
pub fn string_hash(sequence: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sequence.as_bytes());
    hex::encode(hasher.finalize())
}

/// Lowercases the text, then uppercases the first letter of every word.
///
/// ASCII characters other than letters, digits and `_` separate words, as
/// does any whitespace, so `"o'neil-smith"` becomes `"O'Neil-Smith"`.
pub fn title_case(sequence: &str) -> String {
    let mut out = String::with_capacity(sequence.len());
    let mut previous_is_separator = true;

    for c in sequence.chars().flat_map(char::to_lowercase) {
        if previous_is_separator {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        previous_is_separator = is_word_separator(c);
    }
    out
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphabetic() || c.is_numeric() {
        return false;
    }
    c.is_whitespace()
}

/// `true` if the rune belongs to the fixed punctuation set used for passwords.
pub fn rune_has_symbol(c: char) -> bool {
    PASSWORD_SYMBOLS.contains(c)
}
