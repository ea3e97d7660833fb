// File: toolbelt-core/src/validators.rs
//! Programmatic validation functions for structured identifiers and contact data.
//!
//! This module provides the Brazilian tax-ID checksum validators (CPF for persons,
//! CNPJ for companies) plus light structural checks for email addresses and
//! phone numbers. Every function fails closed: malformed input yields `false`,
//! never a panic.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use crate::filters::only_digits;

const CPF_LENGTH: usize = 11;
const CNPJ_LENGTH: usize = 14;

/// Weights applied to the first twelve CNPJ digits. The second check digit
/// uses the same table with a leading 6.
const CNPJ_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("static email regex")
});

static EMBEDDED_EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+",
    )
    .expect("static embedded email regex")
});

/// Converts a string made only of ASCII digits into their numeric values.
fn digit_values(digits: &str) -> Option<Vec<u32>> {
    digits.chars().map(|c| c.to_digit(10)).collect()
}

/// Validates a CPF (Brazilian taxpayer ID for persons).
///
/// Every non-digit character is discarded first, so both `"038.185.341-10"`
/// and `"03818534110"` are accepted. Sequences of eleven identical digits
/// pass the arithmetic but are not valid documents and are rejected.
///
/// # Arguments
///
/// * `cpf` - The CPF string slice to validate, punctuated or not.
///
/// # Returns
///
/// `true` if the eleven digits carry two correct check digits, `false` otherwise.
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits = only_digits(cpf);
    if digits.len() != CPF_LENGTH {
        return false;
    }

    let Some(d) = digit_values(&digits) else {
        return false;
    };

    if d.iter().all(|&x| x == d[0]) {
        return false;
    }

    let check_digit = |count: usize| -> u32 {
        let first_weight = count as u32 + 1;
        let sum: u32 = d[..count]
            .iter()
            .enumerate()
            .map(|(i, &x)| x * (first_weight - i as u32))
            .sum();
        match (sum * 10) % 11 {
            10 => 0,
            r => r,
        }
    };

    check_digit(9) == d[9] && check_digit(10) == d[10]
}

/// Modulo-11 check digit used by CNPJ: remainders below 2 map to 0.
fn cnpj_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Validates a CNPJ (Brazilian taxpayer ID for companies).
///
/// # Arguments
///
/// * `cnpj` - The CNPJ string slice, e.g. `"88.015.315/0001-53"` or `"88015315000153"`.
///
/// # Returns
///
/// `true` if the fourteen digits carry two correct check digits, `false` otherwise.
pub fn is_valid_cnpj(cnpj: &str) -> bool {
    let digits = only_digits(cnpj);
    if digits.len() != CNPJ_LENGTH {
        return false;
    }

    let Some(d) = digit_values(&digits) else {
        return false;
    };

    if cnpj_check_digit(&d[..12], &CNPJ_WEIGHTS) != d[12] {
        return false;
    }

    let mut second_weights = Vec::with_capacity(13);
    second_weights.push(6);
    second_weights.extend_from_slice(&CNPJ_WEIGHTS);

    cnpj_check_digit(&d[..13], &second_weights) == d[13]
}

/// Returns `true` if the whole input is an email address.
///
/// The input is neither trimmed nor sanitized beforehand.
/// See RFC 2822 section 3.4.1 for the address anatomy.
pub fn check_email(email: &str) -> bool {
    !email.is_empty() && EMAIL.is_match(email)
}

/// Returns `true` if an email address appears anywhere within the input.
pub fn str_contains_email(text: &str) -> bool {
    !text.is_empty() && EMBEDDED_EMAIL.is_match(text)
}

/// Validates a phone number by digit count (9 to 14 digits, formatting ignored).
///
/// # Arguments
///
/// * `phone` - The phone number, with or without punctuation.
/// * `accept_empty` - Whether an input without any digit counts as valid.
pub fn check_phone(phone: &str, accept_empty: bool) -> bool {
    let digits = only_digits(phone);
    if digits.is_empty() {
        return accept_empty;
    }
    (9..=14).contains(&digits.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_known_vectors() {
        assert!(is_valid_cpf("03818534110"));
        assert!(is_valid_cpf("038.185.341-10"));
        assert!(!is_valid_cpf("12345678910"));
        assert!(!is_valid_cpf("03818534111"));
    }

    #[test]
    fn test_cpf_rejects_wrong_length() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("0381853411"));
        assert!(!is_valid_cpf("038185341100"));
        assert!(!is_valid_cpf("abc"));
    }

    #[test]
    fn test_cpf_rejects_repeated_digits() {
        for digit in 0..=9 {
            let repeated = digit.to_string().repeat(11);
            assert!(!is_valid_cpf(&repeated), "{} should be rejected", repeated);
        }
    }

    #[test]
    fn test_cnpj_known_vectors() {
        assert!(is_valid_cnpj("88015315000153"));
        assert!(is_valid_cnpj("88.015.315/0001-53"));
        assert!(!is_valid_cnpj("88015315000154"));
        assert!(!is_valid_cnpj("88015315000143"));
        assert!(!is_valid_cnpj("8801531500015"));
        assert!(!is_valid_cnpj(""));
    }

    #[test]
    fn test_email() {
        assert!(check_email("email@gmail.com"));
        assert!(check_email("first.last+tag@sub.example.org"));
        assert!(!check_email(""));
        assert!(!check_email("email-gmail.com"));
        assert!(!check_email(" email@gmail.com"));
    }

    #[test]
    fn test_str_contains_email() {
        assert!(!str_contains_email(""));
        assert!(!str_contains_email("email-gmail.com"));
        assert!(str_contains_email("email@gmail.com"));
        assert!(str_contains_email("dasdsdsdsda-*9email@gmail.comdsdsds.88"));
    }

    #[test]
    fn test_phone() {
        assert!(check_phone("+55 (11) 98765-4321", false));
        assert!(check_phone("987654321", false));
        assert!(!check_phone("87654321", false));
        assert!(!check_phone("123456789012345", false));
        assert!(check_phone("", true));
        assert!(!check_phone("", false));
        assert!(check_phone("--", true));
    }
}
