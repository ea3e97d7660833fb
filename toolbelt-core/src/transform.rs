// toolbelt-core/src/transform.rs
//! String transformation pipeline.
//!
//! Two forms are provided:
//!
//! * [`transform`] takes a [`TransformFlags`] set and applies the selected
//!   steps in a fixed order. When several mutually exclusive flags are set,
//!   a priority rule picks one of them (see the function docs).
//! * [`transform_serially`] takes an ordered list of [`TransformStep`]s and
//!   applies each one as given, which allows sequences the fixed order cannot
//!   express, such as hashing first and uppercasing the digest.
//!
//! Both forms truncate by rune count, never by bytes.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

use crate::filters::{
    only_digits, only_letters, only_letters_and_digits, remove_digits, string_hash, title_case,
    truncate,
};

/// A set of transformations. Combine with `|`.
///
/// The bit values are part of the public contract and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TransformFlags(u32);

impl TransformFlags {
    /// Disables every other flag: only truncation is performed.
    pub const NONE: Self = Self(1);
    pub const TRIM: Self = Self(1 << 1);
    pub const LOWERCASE: Self = Self(1 << 2);
    pub const UPPERCASE: Self = Self(1 << 3);
    pub const ONLY_DIGITS: Self = Self(1 << 4);
    pub const ONLY_LETTERS: Self = Self(1 << 5);
    pub const ONLY_LETTERS_AND_DIGITS: Self = Self(1 << 6);
    /// SHA-256 of the already transformed string, as lowercase hex.
    pub const HASH: Self = Self(1 << 7);
    pub const TITLE_CASE: Self = Self(1 << 8);
    pub const REMOVE_DIGITS: Self = Self(1 << 9);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for TransformFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TransformFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A single transformation, as used by [`transform_serially`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformStep {
    None,
    Trim,
    Lowercase,
    Uppercase,
    OnlyDigits,
    OnlyLetters,
    OnlyLettersAndDigits,
    Hash,
    TitleCase,
    RemoveDigits,
}

impl TransformStep {
    pub const ALL: [TransformStep; 10] = [
        TransformStep::None,
        TransformStep::Trim,
        TransformStep::Lowercase,
        TransformStep::Uppercase,
        TransformStep::OnlyDigits,
        TransformStep::OnlyLetters,
        TransformStep::OnlyLettersAndDigits,
        TransformStep::Hash,
        TransformStep::TitleCase,
        TransformStep::RemoveDigits,
    ];

    fn apply(self, s: &str) -> String {
        match self {
            TransformStep::None => s.to_string(),
            TransformStep::Trim => s.trim().to_string(),
            TransformStep::Lowercase => s.to_lowercase(),
            TransformStep::Uppercase => s.to_uppercase(),
            TransformStep::OnlyDigits => only_digits(s),
            TransformStep::OnlyLetters => only_letters(s),
            TransformStep::OnlyLettersAndDigits => only_letters_and_digits(s),
            TransformStep::Hash => string_hash(s),
            TransformStep::TitleCase => title_case(s),
            TransformStep::RemoveDigits => remove_digits(s),
        }
    }
}

impl From<TransformStep> for TransformFlags {
    fn from(step: TransformStep) -> Self {
        match step {
            TransformStep::None => TransformFlags::NONE,
            TransformStep::Trim => TransformFlags::TRIM,
            TransformStep::Lowercase => TransformFlags::LOWERCASE,
            TransformStep::Uppercase => TransformFlags::UPPERCASE,
            TransformStep::OnlyDigits => TransformFlags::ONLY_DIGITS,
            TransformStep::OnlyLetters => TransformFlags::ONLY_LETTERS,
            TransformStep::OnlyLettersAndDigits => TransformFlags::ONLY_LETTERS_AND_DIGITS,
            TransformStep::Hash => TransformFlags::HASH,
            TransformStep::TitleCase => TransformFlags::TITLE_CASE,
            TransformStep::RemoveDigits => TransformFlags::REMOVE_DIGITS,
        }
    }
}

impl FromIterator<TransformStep> for TransformFlags {
    fn from_iter<I: IntoIterator<Item = TransformStep>>(iter: I) -> Self {
        iter.into_iter()
            .fold(TransformFlags::empty(), |acc, step| acc | TransformFlags::from(step))
    }
}

/// Transforms `input` according to `flags`, in this fixed order:
///
/// 1. one character-class filter: letters-and-digits, else digits only,
///    else letters only;
/// 2. digit removal;
/// 3. trim;
/// 4. one case fold: title case, else lowercase, else uppercase;
/// 5. hash;
/// 6. truncation to `max_len` runes (`0` = unlimited), then trim again so
///    truncation leaves no trailing whitespace.
///
/// With [`TransformFlags::NONE`] only the truncation happens.
pub fn transform(input: &str, max_len: usize, flags: TransformFlags) -> String {
    if input.is_empty() {
        return String::new();
    }

    if flags.contains(TransformFlags::NONE) {
        return truncate(input, max_len).to_string();
    }

    let mut s = input.to_string();

    let filter = [
        (TransformFlags::ONLY_LETTERS_AND_DIGITS, TransformStep::OnlyLettersAndDigits),
        (TransformFlags::ONLY_DIGITS, TransformStep::OnlyDigits),
        (TransformFlags::ONLY_LETTERS, TransformStep::OnlyLetters),
    ]
    .into_iter()
    .find(|(flag, _)| flags.contains(*flag));
    if let Some((_, step)) = filter {
        s = step.apply(&s);
    }

    if flags.contains(TransformFlags::REMOVE_DIGITS) {
        s = remove_digits(&s);
    }

    let trim = flags.contains(TransformFlags::TRIM);
    if trim {
        s = s.trim().to_string();
    }

    let case_fold = [
        (TransformFlags::TITLE_CASE, TransformStep::TitleCase),
        (TransformFlags::LOWERCASE, TransformStep::Lowercase),
        (TransformFlags::UPPERCASE, TransformStep::Uppercase),
    ]
    .into_iter()
    .find(|(flag, _)| flags.contains(*flag));
    if let Some((_, step)) = case_fold {
        s = step.apply(&s);
    }

    if flags.contains(TransformFlags::HASH) {
        s = string_hash(&s);
    }

    finish(&s, max_len, trim)
}

/// Applies `steps` in the given order, then truncates to `max_len` runes.
///
/// No priority rules apply: `[OnlyDigits, Hash, Uppercase]` keeps the digits,
/// hashes them and uppercases the hex digest. If the sequence trims, the
/// truncated result is trimmed once more, exactly as [`transform`] does.
pub fn transform_serially(input: &str, max_len: usize, steps: &[TransformStep]) -> String {
    if input.is_empty() {
        return String::new();
    }

    let s = steps
        .iter()
        .fold(input.to_string(), |acc, step| step.apply(&acc));

    finish(&s, max_len, steps.contains(&TransformStep::Trim))
}

fn finish(s: &str, max_len: usize, trim: bool) -> String {
    let truncated = truncate(s, max_len);
    if trim {
        truncated.trim().to_string()
    } else {
        truncated.to_string()
    }
}
