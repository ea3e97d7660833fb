// toolbelt-core/src/check_str.rs
//! Rule-driven string validation.
//!
//! [`check_str`] validates a string against a [`RuleMask`], a set of composable
//! "deny" and "require" rules, and reports the first violated rule as a
//! [`CheckStrResult`]. Evaluation is short-circuit and always happens in the
//! same order:
//!
//! 1. empty input (accepted only with [`RuleMask::ALLOW_EMPTY`]),
//! 2. minimum and maximum rune count,
//! 3. deny rules: spaces, numbers, letters, symbols, more than one word,
//!    uppercase, lowercase, non-ASCII,
//! 4. require rules: numbers, letters, symbols, more than one word,
//!    uppercase, lowercase.
//!
//! A mask without any deny or require bit stops after step 2.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A set of string rules. Combine rules with `|`.
///
/// The bit values are part of the public contract and never change.
/// A deny rule and its matching require rule may both be set; the deny rule
/// is evaluated first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RuleMask(u64);

impl RuleMask {
    pub const ALLOW_EMPTY: Self = Self(1);
    pub const DENY_SPACES: Self = Self(1 << 1);
    pub const DENY_NUMBERS: Self = Self(1 << 2);
    pub const DENY_LETTERS: Self = Self(1 << 3);
    pub const DENY_SYMBOLS: Self = Self(1 << 4);
    pub const DENY_MORE_THAN_ONE_WORD: Self = Self(1 << 5);
    pub const DENY_UPPERCASE: Self = Self(1 << 6);
    pub const DENY_LOWERCASE: Self = Self(1 << 7);
    pub const DENY_UNICODE: Self = Self(1 << 8);
    pub const REQUIRE_NUMBERS: Self = Self(1 << 9);
    pub const REQUIRE_LETTERS: Self = Self(1 << 10);
    pub const REQUIRE_SYMBOLS: Self = Self(1 << 11);
    pub const REQUIRE_MORE_THAN_ONE_WORD: Self = Self(1 << 12);
    pub const REQUIRE_UPPERCASE: Self = Self(1 << 13);
    pub const REQUIRE_LOWERCASE: Self = Self(1 << 14);

    /// Every deny and require bit, i.e. everything but `ALLOW_EMPTY`.
    const CONTENT_RULES: u64 = ((1 << 15) - 1) & !1;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` if any deny or require rule is set.
    pub const fn has_content_rules(self) -> bool {
        self.0 & Self::CONTENT_RULES != 0
    }
}

impl BitOr for RuleMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RuleMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Outcome of [`check_str`]. `Ok` is zero, every failure a distinct negative code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum CheckStrResult {
    Ok = 0,
    EmptyDenied = -1,
    TooShort = -2,
    TooLong = -3,
    SpaceDenied = -4,
    NumbersDenied = -5,
    LettersDenied = -6,
    SymbolsDenied = -7,
    MoreThanOneWordDenied = -8,
    UppercaseDenied = -9,
    LowercaseDenied = -10,
    UnicodeDenied = -11,
    NumbersNotFound = -12,
    LettersNotFound = -13,
    SymbolsNotFound = -14,
    MoreThanOneWordNotFound = -15,
    UppercaseNotFound = -16,
    LowercaseNotFound = -17,
}

impl CheckStrResult {
    pub const fn code(self) -> i8 {
        self as i8
    }

    pub const fn is_ok(self) -> bool {
        matches!(self, CheckStrResult::Ok)
    }
}

impl fmt::Display for CheckStrResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}

/// Characters rejected by [`RuleMask::DENY_SPACES`].
const SPACE_CHARS: [char; 4] = [' ', '\t', '\n', '\r'];

/// A rune is a symbol when it is neither a letter, a number nor whitespace.
/// Unicode symbols, punctuation and control characters all qualify.
pub fn is_symbol(c: char) -> bool {
    !(c.is_alphabetic() || c.is_numeric() || c.is_whitespace())
}

#[derive(Debug, Default)]
struct Composition {
    numbers: bool,
    letters: bool,
    symbols: bool,
    uppercase: bool,
    lowercase: bool,
    non_ascii: bool,
    multiple_words: bool,
}

impl Composition {
    fn of(input: &str) -> Self {
        let mut found = Composition {
            multiple_words: input.split_whitespace().nth(1).is_some(),
            ..Default::default()
        };

        for c in input.chars() {
            if c.is_numeric() {
                found.numbers = true;
            }
            if c.is_alphabetic() {
                found.letters = true;
                found.uppercase |= c.is_uppercase();
                found.lowercase |= c.is_lowercase();
            }
            if is_symbol(c) {
                found.symbols = true;
            }
            if !c.is_ascii() {
                found.non_ascii = true;
            }
        }
        found
    }
}

/// Validates `input` against `rules`, returning the first violation.
///
/// Lengths count runes. `max_len == 0` means there is no upper bound.
pub fn check_str(input: &str, min_len: usize, max_len: usize, rules: RuleMask) -> CheckStrResult {
    if input.is_empty() {
        return if rules.contains(RuleMask::ALLOW_EMPTY) {
            CheckStrResult::Ok
        } else {
            CheckStrResult::EmptyDenied
        };
    }

    let length = input.chars().count();
    if length < min_len {
        return CheckStrResult::TooShort;
    }
    if max_len > 0 && length > max_len {
        return CheckStrResult::TooLong;
    }

    if !rules.has_content_rules() {
        return CheckStrResult::Ok;
    }

    if rules.contains(RuleMask::DENY_SPACES) && input.contains(SPACE_CHARS) {
        return CheckStrResult::SpaceDenied;
    }

    let found = Composition::of(input);

    let denials = [
        (RuleMask::DENY_NUMBERS, found.numbers, CheckStrResult::NumbersDenied),
        (RuleMask::DENY_LETTERS, found.letters, CheckStrResult::LettersDenied),
        (RuleMask::DENY_SYMBOLS, found.symbols, CheckStrResult::SymbolsDenied),
        (RuleMask::DENY_MORE_THAN_ONE_WORD, found.multiple_words, CheckStrResult::MoreThanOneWordDenied),
        (RuleMask::DENY_UPPERCASE, found.uppercase, CheckStrResult::UppercaseDenied),
        (RuleMask::DENY_LOWERCASE, found.lowercase, CheckStrResult::LowercaseDenied),
        (RuleMask::DENY_UNICODE, found.non_ascii, CheckStrResult::UnicodeDenied),
    ];
    if let Some(&(_, _, result)) = denials
        .iter()
        .find(|(rule, present, _)| *present && rules.contains(*rule))
    {
        return result;
    }

    let requirements = [
        (RuleMask::REQUIRE_NUMBERS, found.numbers, CheckStrResult::NumbersNotFound),
        (RuleMask::REQUIRE_LETTERS, found.letters, CheckStrResult::LettersNotFound),
        (RuleMask::REQUIRE_SYMBOLS, found.symbols, CheckStrResult::SymbolsNotFound),
        (RuleMask::REQUIRE_MORE_THAN_ONE_WORD, found.multiple_words, CheckStrResult::MoreThanOneWordNotFound),
        (RuleMask::REQUIRE_UPPERCASE, found.uppercase, CheckStrResult::UppercaseNotFound),
        (RuleMask::REQUIRE_LOWERCASE, found.lowercase, CheckStrResult::LowercaseNotFound),
    ];
    if let Some(&(_, _, result)) = requirements
        .iter()
        .find(|(rule, present, _)| !*present && rules.contains(*rule))
    {
        return result;
    }

    CheckStrResult::Ok
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Case {
        summary: &'static str,
        input: &'static str,
        min_len: usize,
        max_len: usize,
        rules: RuleMask,
        expected: CheckStrResult,
    }

    fn case(
        summary: &'static str,
        input: &'static str,
        min_len: usize,
        max_len: usize,
        rules: RuleMask,
        expected: CheckStrResult,
    ) -> Case {
        Case { summary, input, min_len, max_len, rules, expected }
    }

    #[test]
    fn test_check_str_table() {
        use CheckStrResult::*;
        let none = RuleMask::empty();

        let cases = [
            case(
                "cyrillic text within bounds",
                "ЀЁЂЃЄЅІЇЈЉЊЋЌЍЎЏ АБВГДЕЖЗИЙКЛМНОП РСТУФХЦЧШЩЪЫ ЬЭЮЯ абвгдежзийкл мнопрстуфхцчшщ ъыьэюяѐёђѓєѕіїј љњћќѝўџѠѡѢѣѤѥѦѧѨѩѪѬѭѮѯ",
                0, 118, none, Ok,
            ),
            case("allowed empty string", "", 0, 1000, RuleMask::ALLOW_EMPTY, Ok),
            case("fails on empty string", "", 0, 100, none, EmptyDenied),
            case("fails on min length", "four", 5, 100, none, TooShort),
            case("fails on max length", "four", 4, 3, none, TooLong),
            case("denies space", "two words", 0, 100, RuleMask::DENY_SPACES, SpaceDenied),
            case("denies tab", "two\twords", 0, 100, RuleMask::DENY_SPACES, SpaceDenied),
            case("denies newline", "row\nrow", 0, 100, RuleMask::DENY_SPACES, SpaceDenied),
            case("denies carriage return", "row\rrow", 0, 100, RuleMask::DENY_SPACES, SpaceDenied),
            case("denies numbers", "this is a number: 9", 0, 100, RuleMask::DENY_NUMBERS, NumbersDenied),
            case("denies unicode numbers", " 九 に 三 Ⅷ'", 0, 100, RuleMask::DENY_NUMBERS, NumbersDenied),
            case("denies letters", "o123456789", 0, 100, RuleMask::DENY_LETTERS, LettersDenied),
            case("denies symbols", "a symbol %", 0, 100, RuleMask::DENY_SYMBOLS, SymbolsDenied),
            case("denies more than one word", "two words", 0, 100, RuleMask::DENY_MORE_THAN_ONE_WORD, MoreThanOneWordDenied),
            case("denies words split by newline", "one\ntwo", 0, 100, RuleMask::DENY_MORE_THAN_ONE_WORD, MoreThanOneWordDenied),
            case("denies uppercase", "upper Case", 0, 100, RuleMask::DENY_UPPERCASE, UppercaseDenied),
            case("denies lowercase", "LOWER cASE", 0, 100, RuleMask::DENY_LOWERCASE, LowercaseDenied),
            case("denies unicode", "TAB\tÇÂÖÉд", 0, 100, RuleMask::DENY_UNICODE, UnicodeDenied),
            case("missed numbers", "NO NUMBERS", 0, 100, RuleMask::REQUIRE_NUMBERS, NumbersNotFound),
            case("missed letters", " 87 %323232\t", 0, 100, RuleMask::REQUIRE_LETTERS, LettersNotFound),
            case("missed symbols", "NO SYMBOLS 123", 0, 100, RuleMask::REQUIRE_SYMBOLS, SymbolsNotFound),
            case("missed more than one word", "FHFJKDHFSDJKH012308312-0=-0=-00", 0, 100, RuleMask::REQUIRE_MORE_THAN_ONE_WORD, MoreThanOneWordNotFound),
            case("missed uppercase", "all lowercase 456", 0, 100, RuleMask::REQUIRE_UPPERCASE, UppercaseNotFound),
            case("missed lowercase", "ALL UPPERCASE 789", 0, 100, RuleMask::REQUIRE_LOWERCASE, LowercaseNotFound),
        ];

        for c in &cases {
            assert_eq!(
                check_str(c.input, c.min_len, c.max_len, c.rules),
                c.expected,
                "case '{}' failed for input {:?}",
                c.summary,
                c.input
            );
        }
    }

    #[test]
    fn test_zero_mask_still_checks_empty_and_length() {
        let none = RuleMask::empty();
        assert_eq!(check_str("", 0, 0, none), CheckStrResult::EmptyDenied);
        assert_eq!(check_str("abc", 4, 0, none), CheckStrResult::TooShort);
        assert_eq!(check_str("abc", 0, 2, none), CheckStrResult::TooLong);
        // Content is never inspected without content rules.
        assert_eq!(check_str("%% \t 12 Ab ç", 0, 0, none), CheckStrResult::Ok);
        assert_eq!(check_str("%% \t 12", 0, 0, RuleMask::ALLOW_EMPTY), CheckStrResult::Ok);
    }

    #[test]
    fn test_deny_evaluated_before_require() {
        let rules = RuleMask::DENY_NUMBERS | RuleMask::REQUIRE_NUMBERS;
        assert_eq!(check_str("abc1", 0, 0, rules), CheckStrResult::NumbersDenied);
        assert_eq!(check_str("abc", 0, 0, rules), CheckStrResult::NumbersNotFound);
    }

    #[test]
    fn test_first_violation_wins() {
        let rules = RuleMask::DENY_SYMBOLS | RuleMask::DENY_UPPERCASE | RuleMask::REQUIRE_NUMBERS;
        assert_eq!(check_str("Hello!", 0, 0, rules), CheckStrResult::SymbolsDenied);
        assert_eq!(check_str("Hello", 0, 0, rules), CheckStrResult::UppercaseDenied);
        assert_eq!(check_str("hello", 0, 0, rules), CheckStrResult::NumbersNotFound);
        assert_eq!(check_str("hello1", 0, 0, rules), CheckStrResult::Ok);
    }

    #[test]
    fn test_length_counts_runes() {
        assert_eq!(check_str("ção", 3, 3, RuleMask::REQUIRE_LETTERS), CheckStrResult::Ok);
        assert_eq!(check_str("çãoé", 0, 3, RuleMask::REQUIRE_LETTERS), CheckStrResult::TooLong);
    }

    #[test]
    fn test_control_characters_count_as_symbols() {
        assert!(is_symbol('\u{7}'));
        assert!(is_symbol('€'));
        assert!(is_symbol('-'));
        assert!(!is_symbol('\t'));
        assert!(!is_symbol('Ⅷ'));
        assert_eq!(check_str("bell\u{7}", 0, 0, RuleMask::DENY_SYMBOLS), CheckStrResult::SymbolsDenied);
    }

    #[test]
    fn test_codes_are_distinct() {
        use std::collections::HashSet;
        use CheckStrResult::*;
        let all = [
            Ok, EmptyDenied, TooShort, TooLong, SpaceDenied, NumbersDenied, LettersDenied,
            SymbolsDenied, MoreThanOneWordDenied, UppercaseDenied, LowercaseDenied, UnicodeDenied,
            NumbersNotFound, LettersNotFound, SymbolsNotFound, MoreThanOneWordNotFound,
            UppercaseNotFound, LowercaseNotFound,
        ];
        let codes: HashSet<i8> = all.iter().map(|r| r.code()).collect();
        assert_eq!(codes.len(), all.len());
        assert_eq!(Ok.code(), 0);
        assert!(all.iter().filter(|r| !r.is_ok()).all(|r| r.code() < 0));
    }

    #[test]
    fn test_rule_mask_composition() {
        let mut mask = RuleMask::DENY_SPACES | RuleMask::REQUIRE_LETTERS;
        assert!(mask.contains(RuleMask::DENY_SPACES));
        assert!(!mask.contains(RuleMask::ALLOW_EMPTY));
        mask |= RuleMask::ALLOW_EMPTY;
        assert_eq!(mask.bits(), 1 | 2 | 1024);
        assert!(!RuleMask::ALLOW_EMPTY.has_content_rules());
        assert!(RuleMask::REQUIRE_LOWERCASE.has_content_rules());
        assert_eq!(RuleMask::from_bits(16384), RuleMask::REQUIRE_LOWERCASE);
    }
}
