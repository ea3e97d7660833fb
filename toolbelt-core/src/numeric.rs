// toolbelt-core/src/numeric.rs
//! Value kinds and the numeric normalizer.
//!
//! Membership search works over a fixed set of primitive kinds. Instead of
//! inspecting types at runtime, candidates and collections are closed tagged
//! unions ([`Scalar`] and [`Collection`]) with one variant per supported kind.
//!
//! [`normalize`] maps any of the ten integer kinds onto an `i128`. Every `i64`
//! and every `u64` fits in an `i128` exactly, so values stored with different
//! widths or signedness can be compared without overflow or sign extension.
//!
//! License: MIT OR APACHE 2.0

/// The storage kind of a [`Scalar`] or of the elements of a [`Collection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Str,
    Bool,
}

impl Kind {
    /// Returns `true` for the ten signed and unsigned integer kinds.
    pub fn is_integer(self) -> bool {
        !matches!(self, Kind::F32 | Kind::F64 | Kind::Str | Kind::Bool)
    }
}

/// A single candidate value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Str(&'a str),
    Bool(bool),
}

impl Scalar<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Scalar::I8(_) => Kind::I8,
            Scalar::I16(_) => Kind::I16,
            Scalar::I32(_) => Kind::I32,
            Scalar::I64(_) => Kind::I64,
            Scalar::Isize(_) => Kind::Isize,
            Scalar::U8(_) => Kind::U8,
            Scalar::U16(_) => Kind::U16,
            Scalar::U32(_) => Kind::U32,
            Scalar::U64(_) => Kind::U64,
            Scalar::Usize(_) => Kind::Usize,
            Scalar::F32(_) => Kind::F32,
            Scalar::F64(_) => Kind::F64,
            Scalar::Str(_) => Kind::Str,
            Scalar::Bool(_) => Kind::Bool,
        }
    }
}

/// A borrowed, homogeneous collection of one supported kind.
///
/// String collections come in two shapes so that both `&[&str]` and
/// `&[String]` can be searched without copying; both have kind [`Kind::Str`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collection<'a> {
    I8(&'a [i8]),
    I16(&'a [i16]),
    I32(&'a [i32]),
    I64(&'a [i64]),
    Isize(&'a [isize]),
    U8(&'a [u8]),
    U16(&'a [u16]),
    U32(&'a [u32]),
    U64(&'a [u64]),
    Usize(&'a [usize]),
    F32(&'a [f32]),
    F64(&'a [f64]),
    Str(&'a [&'a str]),
    Strings(&'a [String]),
    Bool(&'a [bool]),
}

impl Collection<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Collection::I8(_) => Kind::I8,
            Collection::I16(_) => Kind::I16,
            Collection::I32(_) => Kind::I32,
            Collection::I64(_) => Kind::I64,
            Collection::Isize(_) => Kind::Isize,
            Collection::U8(_) => Kind::U8,
            Collection::U16(_) => Kind::U16,
            Collection::U32(_) => Kind::U32,
            Collection::U64(_) => Kind::U64,
            Collection::Usize(_) => Kind::Usize,
            Collection::F32(_) => Kind::F32,
            Collection::F64(_) => Kind::F64,
            Collection::Str(_) | Collection::Strings(_) => Kind::Str,
            Collection::Bool(_) => Kind::Bool,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Collection::I8(a) => a.len(),
            Collection::I16(a) => a.len(),
            Collection::I32(a) => a.len(),
            Collection::I64(a) => a.len(),
            Collection::Isize(a) => a.len(),
            Collection::U8(a) => a.len(),
            Collection::U16(a) => a.len(),
            Collection::U32(a) => a.len(),
            Collection::U64(a) => a.len(),
            Collection::Usize(a) => a.len(),
            Collection::F32(a) => a.len(),
            Collection::F64(a) => a.len(),
            Collection::Str(a) => a.len(),
            Collection::Strings(a) => a.len(),
            Collection::Bool(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Scalar<'_> {
                fn from(value: $t) -> Self {
                    Scalar::$variant(value)
                }
            }

            impl<'a> From<&'a [$t]> for Collection<'a> {
                fn from(values: &'a [$t]) -> Self {
                    Collection::$variant(values)
                }
            }

            impl<'a> From<&'a Vec<$t>> for Collection<'a> {
                fn from(values: &'a Vec<$t>) -> Self {
                    Collection::$variant(values.as_slice())
                }
            }
        )*
    };
}

impl_from_primitive!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    bool => Bool,
);

impl<'a> From<&'a str> for Scalar<'a> {
    fn from(value: &'a str) -> Self {
        Scalar::Str(value)
    }
}

impl<'a> From<&'a String> for Scalar<'a> {
    fn from(value: &'a String) -> Self {
        Scalar::Str(value.as_str())
    }
}

impl<'a> From<&'a [&'a str]> for Collection<'a> {
    fn from(values: &'a [&'a str]) -> Self {
        Collection::Str(values)
    }
}

impl<'a> From<&'a [String]> for Collection<'a> {
    fn from(values: &'a [String]) -> Self {
        Collection::Strings(values)
    }
}

impl<'a> From<&'a Vec<String>> for Collection<'a> {
    fn from(values: &'a Vec<String>) -> Self {
        Collection::Strings(values.as_slice())
    }
}

/// Converts an integer scalar into its exact `i128` value.
///
/// Unsigned inputs are widened without sign extension. Non-integer kinds
/// (floats, strings, booleans) yield `0`; callers that need to tell them
/// apart must check [`Kind::is_integer`] first.
pub fn normalize(value: &Scalar) -> i128 {
    match *value {
        Scalar::I8(x) => i128::from(x),
        Scalar::I16(x) => i128::from(x),
        Scalar::I32(x) => i128::from(x),
        Scalar::I64(x) => i128::from(x),
        Scalar::Isize(x) => x as i128,
        Scalar::U8(x) => i128::from(x),
        Scalar::U16(x) => i128::from(x),
        Scalar::U32(x) => i128::from(x),
        Scalar::U64(x) => i128::from(x),
        Scalar::Usize(x) => x as i128,
        Scalar::F32(_) | Scalar::F64(_) | Scalar::Str(_) | Scalar::Bool(_) => 0,
    }
}

/// Normalizes every element of an integer collection.
///
/// Returns `None` for float, string and boolean collections.
pub(crate) fn normalized_elements<'c>(
    collection: &'c Collection<'c>,
) -> Option<Box<dyn Iterator<Item = i128> + 'c>> {
    let iter: Box<dyn Iterator<Item = i128> + 'c> = match *collection {
        Collection::I8(a) => Box::new(a.iter().map(|&x| i128::from(x))),
        Collection::I16(a) => Box::new(a.iter().map(|&x| i128::from(x))),
        Collection::I32(a) => Box::new(a.iter().map(|&x| i128::from(x))),
        Collection::I64(a) => Box::new(a.iter().map(|&x| i128::from(x))),
        Collection::Isize(a) => Box::new(a.iter().map(|&x| x as i128)),
        Collection::U8(a) => Box::new(a.iter().map(|&x| i128::from(x))),
        Collection::U16(a) => Box::new(a.iter().map(|&x| i128::from(x))),
        Collection::U32(a) => Box::new(a.iter().map(|&x| i128::from(x))),
        Collection::U64(a) => Box::new(a.iter().map(|&x| i128::from(x))),
        Collection::Usize(a) => Box::new(a.iter().map(|&x| x as i128)),
        Collection::F32(_)
        | Collection::F64(_)
        | Collection::Str(_)
        | Collection::Strings(_)
        | Collection::Bool(_) => return None,
    };
    Some(iter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_preserves_sign() {
        assert_eq!(normalize(&Scalar::I8(-128)), -128);
        assert_eq!(normalize(&Scalar::I64(i64::MIN)), i128::from(i64::MIN));
    }

    #[test]
    fn test_normalize_does_not_sign_extend_unsigned() {
        assert_eq!(normalize(&Scalar::U8(255)), 255);
        assert_eq!(normalize(&Scalar::U64(u64::MAX)), 18_446_744_073_709_551_615);
        assert_ne!(normalize(&Scalar::U64(u64::MAX)), normalize(&Scalar::I64(-1)));
    }

    #[test]
    fn test_normalize_non_integer_is_zero() {
        assert_eq!(normalize(&Scalar::F64(3.5)), 0);
        assert_eq!(normalize(&Scalar::Str("42")), 0);
        assert_eq!(normalize(&Scalar::Bool(true)), 0);
    }

    #[test]
    fn test_kind_classification() {
        assert!(Kind::Usize.is_integer());
        assert!(Kind::I16.is_integer());
        assert!(!Kind::F32.is_integer());
        assert!(!Kind::Str.is_integer());
        assert_eq!(Collection::from(&["a".to_string()][..]).kind(), Kind::Str);
        assert_eq!(Collection::Str(&["a"]).kind(), Kind::Str);
    }

    #[test]
    fn test_normalized_elements_rejects_non_integer_collections() {
        let floats = [1.0f64, 2.0];
        assert!(normalized_elements(&Collection::from(&floats[..])).is_none());

        let ints = [-1i16, 7];
        let collected: Vec<i128> = normalized_elements(&Collection::from(&ints[..]))
            .map(|it| it.collect())
            .unwrap_or_default();
        assert_eq!(collected, vec![-1, 7]);
    }
}
