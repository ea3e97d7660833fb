// toolbelt-core/src/messages.rs
//! Human-readable messages for checker outcomes.
//!
//! Two locales are supported: English (the fallback) and Brazilian Portuguese.
//!
//! License: MIT OR APACHE 2.0

use crate::check_str::CheckStrResult;
use crate::password::PasswordCheck;
use crate::person::NameCheck;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    Portuguese,
}

impl Locale {
    /// Maps a locale code to a [`Locale`]. `"bra"`, `"pt"` and `"pt-BR"`
    /// (any case) select Portuguese; everything else falls back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "bra" | "pt" | "pt-br" | "pt_br" => Locale::Portuguese,
            _ => Locale::English,
        }
    }
}

pub fn person_name_message(locale: Locale, result: NameCheck) -> &'static str {
    match (locale, result) {
        (Locale::Portuguese, NameCheck::Ok) => "Nome válido",
        (Locale::Portuguese, NameCheck::Polluted) => "O campo nome permite apenas letras e espaços",
        (Locale::Portuguese, NameCheck::TooFewWords) => "O nome deve ser composto de ao menos duas palavras",
        (Locale::Portuguese, NameCheck::TooShort) => "Nome muito curto ou vazio",
        (Locale::Portuguese, NameCheck::TooSimple) => {
            "O nome deve ser composto de ao menos duas palavras, sendo uma com três e outra com ao menos duas letras"
        }
        (Locale::English, NameCheck::Ok) => "Name is well formed",
        (Locale::English, NameCheck::Polluted) => "Name accepts only letters and spaces",
        (Locale::English, NameCheck::TooFewWords) => "Name should be composed of at least two words",
        (Locale::English, NameCheck::TooShort) => "Name too short or empty",
        (Locale::English, NameCheck::TooSimple) => {
            "Name should be composed of at least two words, one with at least 3 letters and another with at least 2"
        }
    }
}

pub fn password_message(locale: Locale, result: PasswordCheck) -> &'static str {
    match (locale, result) {
        (Locale::Portuguese, PasswordCheck::Ok) => "Senha válida",
        (Locale::Portuguese, PasswordCheck::Divergent) => "Senha diferente da confirmação",
        (Locale::Portuguese, PasswordCheck::TooShort) => "Senha muito curta",
        (Locale::Portuguese, PasswordCheck::TooSimple) => "Senha não atende às regras de complexidade",
        (Locale::English, PasswordCheck::Ok) => "Password validated",
        (Locale::English, PasswordCheck::Divergent) => "Password and confirmation don't match",
        (Locale::English, PasswordCheck::TooShort) => "Password is too short",
        (Locale::English, PasswordCheck::TooSimple) => "Password doesn't meet the complexity rules",
    }
}

pub fn check_str_message(locale: Locale, result: CheckStrResult) -> &'static str {
    use CheckStrResult::*;
    match locale {
        Locale::Portuguese => match result {
            Ok => "Texto válido",
            EmptyDenied => "O texto não pode ser vazio",
            TooShort => "Texto muito curto",
            TooLong => "Texto muito longo",
            SpaceDenied => "O texto não pode conter espaços",
            NumbersDenied => "O texto não pode conter números",
            LettersDenied => "O texto não pode conter letras",
            SymbolsDenied => "O texto não pode conter símbolos",
            MoreThanOneWordDenied => "O texto deve ser uma única palavra",
            UppercaseDenied => "O texto não pode conter letras maiúsculas",
            LowercaseDenied => "O texto não pode conter letras minúsculas",
            UnicodeDenied => "O texto deve conter apenas caracteres ASCII",
            NumbersNotFound => "O texto deve conter ao menos um número",
            LettersNotFound => "O texto deve conter ao menos uma letra",
            SymbolsNotFound => "O texto deve conter ao menos um símbolo",
            MoreThanOneWordNotFound => "O texto deve conter mais de uma palavra",
            UppercaseNotFound => "O texto deve conter ao menos uma letra maiúscula",
            LowercaseNotFound => "O texto deve conter ao menos uma letra minúscula",
        },
        Locale::English => match result {
            Ok => "Text is valid",
            EmptyDenied => "Text can't be empty",
            TooShort => "Text is too short",
            TooLong => "Text is too long",
            SpaceDenied => "Text can't contain spaces",
            NumbersDenied => "Text can't contain numbers",
            LettersDenied => "Text can't contain letters",
            SymbolsDenied => "Text can't contain symbols",
            MoreThanOneWordDenied => "Text must be a single word",
            UppercaseDenied => "Text can't contain uppercase letters",
            LowercaseDenied => "Text can't contain lowercase letters",
            UnicodeDenied => "Text must contain only ASCII characters",
            NumbersNotFound => "Text must contain at least one number",
            LettersNotFound => "Text must contain at least one letter",
            SymbolsNotFound => "Text must contain at least one symbol",
            MoreThanOneWordNotFound => "Text must contain more than one word",
            UppercaseNotFound => "Text must contain at least one uppercase letter",
            LowercaseNotFound => "Text must contain at least one lowercase letter",
        },
    }
}
