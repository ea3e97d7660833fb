// toolbelt-core/src/matcher.rs
//! Generic membership search over homogeneous collections.
//!
//! Two modes are offered:
//!
//! * **strict** ([`Collection::contains`], [`in_array`]): the candidate's kind must
//!   equal the collection's kind exactly, then a linear scan looks for an equal value.
//! * **flexible integer** ([`Collection::contains_flexible`], [`in_array_int_flex`]):
//!   both sides go through [`normalize`], so a `u8` 55 matches an `i64` 55.
//!
//! A kind mismatch and a value that is simply absent both produce `false`;
//! callers cannot tell the two apart.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;
use std::hash::Hash;

use crate::numeric::{normalize, normalized_elements, Collection, Scalar};

impl Collection<'_> {
    /// Strict membership: same kind, exact equality.
    ///
    /// Floats use `==`, so `NaN` is never found.
    pub fn contains(&self, candidate: &Scalar) -> bool {
        if self.is_empty() {
            return false;
        }

        match (*self, *candidate) {
            (Collection::I8(a), Scalar::I8(x)) => a.contains(&x),
            (Collection::I16(a), Scalar::I16(x)) => a.contains(&x),
            (Collection::I32(a), Scalar::I32(x)) => a.contains(&x),
            (Collection::I64(a), Scalar::I64(x)) => a.contains(&x),
            (Collection::Isize(a), Scalar::Isize(x)) => a.contains(&x),
            (Collection::U8(a), Scalar::U8(x)) => a.contains(&x),
            (Collection::U16(a), Scalar::U16(x)) => a.contains(&x),
            (Collection::U32(a), Scalar::U32(x)) => a.contains(&x),
            (Collection::U64(a), Scalar::U64(x)) => a.contains(&x),
            (Collection::Usize(a), Scalar::Usize(x)) => a.contains(&x),
            (Collection::F32(a), Scalar::F32(x)) => a.iter().any(|&v| v == x),
            (Collection::F64(a), Scalar::F64(x)) => a.iter().any(|&v| v == x),
            (Collection::Str(a), Scalar::Str(x)) => a.iter().any(|&v| v == x),
            (Collection::Strings(a), Scalar::Str(x)) => a.iter().any(|v| v == x),
            (Collection::Bool(a), Scalar::Bool(x)) => a.contains(&x),
            _ => false,
        }
    }

    /// Integer membership across widths and signedness.
    ///
    /// Both sides must be integer kinds: float, string and boolean
    /// candidates or collections never match.
    pub fn contains_flexible(&self, candidate: &Scalar) -> bool {
        if !candidate.kind().is_integer() {
            return false;
        }
        let wanted = normalize(candidate);
        match normalized_elements(self) {
            Some(mut elements) => elements.any(|v| v == wanted),
            None => false,
        }
    }
}

/// Strict search where either side may be absent.
pub fn in_array(collection: Option<&Collection>, candidate: Option<&Scalar>) -> bool {
    match (collection, candidate) {
        (Some(c), Some(item)) => c.contains(item),
        _ => false,
    }
}

/// Flexible integer search where either side may be absent.
pub fn in_array_int_flex(candidate: Option<&Scalar>, collection: Option<&Collection>) -> bool {
    match (candidate, collection) {
        (Some(item), Some(c)) => c.contains_flexible(item),
        _ => false,
    }
}

/// Returns `true` if any item has the same kind as `search` and an equal value.
pub fn matches_any(search: &Scalar, items: &[Scalar]) -> bool {
    items.iter().any(|item| item == search)
}

/// Items of `a` that do not appear in `b`, in `a`'s order.
pub fn array_difference_a_to_b<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let present: HashSet<&T> = b.iter().collect();
    a.iter().filter(|item| !present.contains(item)).cloned().collect()
}

/// Items that appear in exactly one of the two slices: first those only in
/// `b`, then those only in `a`.
pub fn array_difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut diff = array_difference_a_to_b(b, a);
    diff.extend(array_difference_a_to_b(a, b));
    diff
}
