// toolbelt-core/src/format.rs
//! Positional reshaping of digit sequences into display masks such as
//! `"###.###.###-##"`.
//!
//! License: MIT OR APACHE 2.0

/// Placeholder used by [`reshape`].
pub const DEFAULT_PLACEHOLDER: char = '#';

/// Fills the `#` positions of `format` with the runes of `sequence`.
///
/// Output stops as soon as the sequence runs out. Runes left over once the
/// format is exhausted are appended unchanged.
///
/// ```
/// use toolbelt_core::format::reshape;
///
/// assert_eq!(reshape("#####-###", "98765432"), "98765-432");
/// assert_eq!(reshape("###.###.##", "9876"), "987.6");
/// assert_eq!(reshape("###.###", "123456789"), "123.456789");
/// ```
pub fn reshape(format: &str, sequence: &str) -> String {
    reshape_with_placeholder(DEFAULT_PLACEHOLDER, format, sequence)
}

/// [`reshape`] with a custom placeholder rune.
/// An empty format or sequence returns the sequence as is.
pub fn reshape_with_placeholder(placeholder: char, format: &str, sequence: &str) -> String {
    if format.is_empty() || sequence.is_empty() {
        return sequence.to_string();
    }

    let mut remaining = sequence.chars().peekable();
    let mut out = String::with_capacity(format.len() + sequence.len());

    for f in format.chars() {
        if remaining.peek().is_none() {
            break;
        }
        if f == placeholder {
            out.extend(remaining.next());
        } else {
            out.push(f);
        }
    }

    out.extend(remaining);
    out
}
