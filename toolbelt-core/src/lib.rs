// toolbelt-core/src/lib.rs
//! # Toolbelt Core Library
//!
//! `toolbelt-core` is a collection of small, stateless helpers for the string
//! handling that sits at the edge of most services: checking user input
//! against rule masks, normalizing it through transformation pipelines,
//! validating Brazilian tax IDs, emails and phones, and searching loosely
//! typed collections.
//!
//! Every function is pure except those in [`random`], which draw from a
//! generator the caller passes in, and the [`config`] loaders, which read YAML.
//!
//! ## Modules
//!
//! * `numeric`: `Scalar` and `Collection` values tagged with their primitive `Kind`,
//!   plus the integer normalizer used for cross-width comparisons.
//! * `matcher`: strict and flexible membership search, array differences.
//! * `check_str`: the rule-mask string validator and its result codes.
//! * `transform`: flag-driven and serial string transformation pipelines.
//! * `filters`: the character filters and string primitives the pipelines are built on.
//! * `validators`: CPF/CNPJ checksums, email and phone checks.
//! * `person`: person-name heuristics, first/last name and initials.
//! * `password`: new-password length, confirmation and complexity checks.
//! * `messages`: English and Portuguese messages for checker outcomes.
//! * `random`: random integers, digit strings and strings from an injected RNG.
//! * `convert`: lenient string-to-number and string-to-boolean conversions.
//! * `format`: positional reshaping such as `"###.###.###-##"` masks.
//! * `config`: named `StringPolicy` sets loaded from YAML.
//! * `errors`: the crate's error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use toolbelt_core::{check_str, transform, CheckStrResult, RuleMask, TransformFlags};
//!
//! let handle = transform("  Alice_99 ", 16, TransformFlags::TRIM | TransformFlags::LOWERCASE);
//! assert_eq!(handle, "alice_99");
//!
//! let rules = RuleMask::DENY_SPACES | RuleMask::REQUIRE_NUMBERS;
//! assert_eq!(check_str(&handle, 3, 16, rules), CheckStrResult::Ok);
//! assert_eq!(check_str("alice", 3, 16, rules), CheckStrResult::NumbersNotFound);
//! ```
//!
//! ## Error Handling
//!
//! Validation outcomes are values, never errors: checkers return result enums
//! or booleans. [`ToolbeltError`] is reserved for invalid arguments and policy
//! configuration problems. The YAML loaders return `anyhow::Result` with context.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod check_str;
pub mod config;
pub mod convert;
pub mod errors;
pub mod filters;
pub mod format;
pub mod matcher;
pub mod messages;
pub mod numeric;
pub mod password;
pub mod person;
pub mod random;
pub mod transform;
pub mod validators;

/// Re-exports the numeric value model.
pub use numeric::{normalize, Collection, Kind, Scalar};

/// Re-exports the membership search helpers.
pub use matcher::{array_difference, array_difference_a_to_b, in_array, in_array_int_flex, matches_any};

/// Re-exports the rule-mask validator.
pub use check_str::{check_str, CheckStrResult, RuleMask};

/// Re-exports the transformation pipelines.
pub use transform::{transform, transform_serially, TransformFlags, TransformStep};

/// Re-exports the identifier and contact validators.
pub use validators::{check_email, check_phone, is_valid_cnpj, is_valid_cpf, str_contains_email};

/// Re-exports the person-name heuristics.
pub use person::{check_person_name, name_first_and_last, name_initials, NameCheck};

/// Re-exports the new-password checker.
pub use password::{check_new_password, PasswordCheck, PasswordComplexity, MIN_PASSWORD_LENGTH};

/// Re-exports the message locale.
pub use messages::Locale;

/// Re-exports the random string options.
pub use random::RandomStringOptions;

/// Re-exports the policy configuration types and functions.
pub use config::{merge_policies, validate_policies, PolicyConfig, Rule, StringPolicy};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ToolbeltError;
