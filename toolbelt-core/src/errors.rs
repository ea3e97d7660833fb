//! errors.rs - Custom error types for the toolbelt-core library.
//!
//! Validation outcomes are never reported through this type: checkers return
//! sentinel enums or booleans. `ToolbeltError` covers the few operations that
//! can genuinely fail, such as drawing from an empty range or looking up a
//! policy that was never configured.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `toolbelt-core` library.
///
/// New variants may be added in future versions, hence `#[non_exhaustive]`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ToolbeltError {
    #[error("Invalid range: minimum ({min}) is greater than maximum ({max})")]
    InvalidRange { min: i64, max: i64 },

    #[error("String policy '{0}' not found.")]
    PolicyNotFound(String),

    #[error("Policy validation failed:\n{0}")]
    PolicyValidation(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
