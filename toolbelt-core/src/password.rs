// toolbelt-core/src/password.rs
//! New-password checks: minimum length, confirmation match and complexity rules.
//!
//! License: MIT OR APACHE 2.0

use std::ops::BitOr;

use crate::filters::{rune_has_symbol, trim_len};

/// Passwords shorter than this are always rejected, whatever the caller asks for.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Complexity requirements for [`check_new_password`]. Combine with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PasswordComplexity(u8);

impl PasswordComplexity {
    /// Only the minimum length is checked. Turns every other flag off.
    pub const LOWEST: Self = Self(1);
    pub const REQUIRE_LETTER: Self = Self(1 << 1);
    /// Only honoured together with `REQUIRE_LETTER`.
    pub const REQUIRE_UPPERCASE: Self = Self(1 << 2);
    pub const REQUIRE_NUMBER: Self = Self(1 << 3);
    pub const REQUIRE_SPACE: Self = Self(1 << 4);
    pub const REQUIRE_SYMBOL: Self = Self(1 << 5);

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for PasswordComplexity {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Outcome of [`check_new_password`]. `Ok` is zero, failures are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PasswordCheck {
    Ok = 0,
    /// Password and confirmation differ.
    Divergent = 1,
    TooShort = 2,
    /// A complexity requirement is not met.
    TooSimple = 3,
}

impl PasswordCheck {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Checks a new password against its confirmation and the complexity rules.
///
/// Length is verified first (on the trimmed password, in runes, with a floor
/// of [`MIN_PASSWORD_LENGTH`]), then the confirmation, then complexity.
pub fn check_new_password(
    password: &str,
    confirmation: &str,
    min_len: usize,
    complexity: PasswordComplexity,
) -> PasswordCheck {
    let min_len = min_len.max(MIN_PASSWORD_LENGTH);

    if trim_len(password) < min_len {
        return PasswordCheck::TooShort;
    }

    if password != confirmation {
        return PasswordCheck::Divergent;
    }

    if complexity.contains(PasswordComplexity::LOWEST) {
        return PasswordCheck::Ok;
    }

    let letter = password.chars().any(char::is_alphabetic);
    let uppercase = password.chars().any(|c| c.is_alphabetic() && c.is_uppercase());
    let number = password.chars().any(char::is_numeric);
    let symbol = password.chars().any(rune_has_symbol);
    let space = password.contains(' ');

    if complexity.contains(PasswordComplexity::REQUIRE_LETTER) {
        if !letter {
            return PasswordCheck::TooSimple;
        }
        if complexity.contains(PasswordComplexity::REQUIRE_UPPERCASE) && !uppercase {
            return PasswordCheck::TooSimple;
        }
    }

    let unmet = [
        (PasswordComplexity::REQUIRE_NUMBER, number),
        (PasswordComplexity::REQUIRE_SYMBOL, symbol),
        (PasswordComplexity::REQUIRE_SPACE, space),
    ]
    .into_iter()
    .any(|(rule, present)| complexity.contains(rule) && !present);

    if unmet {
        PasswordCheck::TooSimple
    } else {
        PasswordCheck::Ok
    }
}
