// toolbelt-core/src/person.rs
//! Person-name heuristics.
//!
//! The rule is deliberately simple: a complete name has at least two words,
//! one of them with three or more letters and another with two or more, and
//! contains only letters, spaces, apostrophes and hyphens.
//!
//! License: MIT OR APACHE 2.0

use crate::transform::{transform, TransformFlags};

/// Outcome of [`check_person_name`]. `Ok` is zero, failures are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NameCheck {
    Ok = 0,
    /// Something other than letters, spaces, `'` or `-` was found.
    Polluted = 1,
    TooFewWords = 2,
    /// Empty (after trimming) and empty names were not accepted.
    TooShort = 3,
    /// Two words exist but not one of 3+ runes and another of 2+ runes.
    TooSimple = 4,
}

impl NameCheck {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Checks that `name` looks like a complete person name.
pub fn check_person_name(name: &str, accept_empty: bool) -> NameCheck {
    let name = name.trim();

    if name.is_empty() {
        return if accept_empty { NameCheck::Ok } else { NameCheck::TooShort };
    }

    if name
        .chars()
        .any(|c| !(c.is_alphabetic() || c == ' ' || c == '\'' || c == '-'))
    {
        return NameCheck::Polluted;
    }

    let words: Vec<&str> = name.split_whitespace().collect();
    if words.len() < 2 {
        return NameCheck::TooFewWords;
    }

    let mut found_three = false;
    let mut found_two = false;
    for word in &words {
        let length = word.chars().count();
        if !found_three && length >= 3 {
            found_three = true;
        } else if !found_two && length >= 2 {
            found_two = true;
        }
    }

    if found_two && found_three {
        NameCheck::Ok
    } else {
        NameCheck::TooSimple
    }
}

/// Tabs become spaces, then `flags` are applied unless they are exactly
/// [`TransformFlags::NONE`].
fn prepare(name: &str, flags: TransformFlags) -> String {
    let name = name.replace('\t', " ");
    if flags == TransformFlags::NONE {
        name
    } else {
        transform(&name, 0, flags)
    }
}

/// First and last words of a name, e.g. `"Friedrich Nietzsche"` for
/// `"friedrich wilhelm nietzsche"` with [`TransformFlags::TITLE_CASE`].
pub fn name_first_and_last(name: &str, flags: TransformFlags) -> String {
    let name = prepare(name, flags);
    let words: Vec<&str> = name.split_whitespace().collect();

    match words.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, .., last] => format!("{} {}", first, last),
    }
}

/// First rune of every word, separated by spaces.
pub fn name_initials(name: &str, flags: TransformFlags) -> String {
    let name = prepare(name, flags);
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
