//! Each comparator returns a genuine three-way [`Ordering`]; none of them subtract, so
//! extreme integers and floats order correctly.
//!
//! # Examples
//!
//! ```
//! use grow_vec::{compare, GrowVec};
//!
//! let mut vec: GrowVec<i64> = [3, i64::MIN, 2, i64::MAX].into_iter().collect();
//!
//! vec.sort_with(compare::i64_ascending);
//! assert_eq!(vec.as_slice(), &[i64::MIN, 2, 3, i64::MAX]);
//!
//! vec.sort_with(compare::i64_descending);
//! assert_eq!(vec.as_slice(), &[i64::MAX, 3, 2, i64::MIN]);
//! ```

use core::{cmp::Ordering, ffi::CStr};

/// Orders any [`Ord`] type from smallest to largest.
#[must_use]
#[inline]
pub fn ascending<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Orders any [`Ord`] type from largest to smallest.
#[must_use]
#[inline]
pub fn descending<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}

/// Ascending order for `i64`.
#[must_use]
#[inline]
pub fn i64_ascending(a: &i64, b: &i64) -> Ordering {
    a.cmp(b)
}

/// Descending order for `i64`.
#[must_use]
#[inline]
pub fn i64_descending(a: &i64, b: &i64) -> Ordering {
    b.cmp(a)
}

/// Ascending order for `u64`.
#[must_use]
#[inline]
pub fn u64_ascending(a: &u64, b: &u64) -> Ordering {
    a.cmp(b)
}

/// Descending order for `u64`.
#[must_use]
#[inline]
pub fn u64_descending(a: &u64, b: &u64) -> Ordering {
    b.cmp(a)
}

/// Ascending order for `f64` under the IEEE 754 total order.
///
/// Negative zero sorts before positive zero, and NaNs sort to the ends according to
/// their sign bit.
///
/// ```
/// use grow_vec::{compare, GrowVec};
///
/// let mut vec: GrowVec<f64> = [0.5, -0.0, 0.0, -1.5, 0.25].into_iter().collect();
/// vec.sort_with(compare::f64_ascending);
/// assert_eq!(vec.as_slice(), &[-1.5, -0.0, 0.0, 0.25, 0.5]);
/// assert!(vec[1].is_sign_negative());
/// ```
#[must_use]
#[inline]
pub fn f64_ascending(a: &f64, b: &f64) -> Ordering {
    a.total_cmp(b)
}

/// Descending order for `f64` under the IEEE 754 total order.
#[must_use]
#[inline]
pub fn f64_descending(a: &f64, b: &f64) -> Ordering {
    b.total_cmp(a)
}

/// Ascending order for `char` by Unicode scalar value.
#[must_use]
#[inline]
pub fn char_ascending(a: &char, b: &char) -> Ordering {
    a.cmp(b)
}

/// Descending order for `char` by Unicode scalar value.
#[must_use]
#[inline]
pub fn char_descending(a: &char, b: &char) -> Ordering {
    b.cmp(a)
}

/// Ascending byte-wise order for string slices.
#[must_use]
#[inline]
pub fn str_ascending(a: &&str, b: &&str) -> Ordering {
    a.cmp(b)
}

/// Descending byte-wise order for string slices.
#[must_use]
#[inline]
pub fn str_descending(a: &&str, b: &&str) -> Ordering {
    b.cmp(a)
}

/// Ascending byte-wise order for null-terminated strings.
///
/// ```
/// use grow_vec::{compare, GrowVec};
///
/// let mut vec: GrowVec<&std::ffi::CStr> = [c"pear", c"apple", c"fig"].into_iter().collect();
/// vec.sort_with(compare::cstr_ascending);
/// assert_eq!(vec.as_slice(), &[c"apple", c"fig", c"pear"]);
/// ```
#[must_use]
#[inline]
pub fn cstr_ascending(a: &&CStr, b: &&CStr) -> Ordering {
    a.cmp(b)
}

/// Descending byte-wise order for null-terminated strings.
#[must_use]
#[inline]
pub fn cstr_descending(a: &&CStr, b: &&CStr) -> Ordering {
    b.cmp(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_extremes_do_not_wrap() {
        assert_eq!(i64_ascending(&i64::MIN, &i64::MAX), Ordering::Less);
        assert_eq!(i64_descending(&i64::MIN, &i64::MAX), Ordering::Greater);
        assert_eq!(u64_ascending(&0, &u64::MAX), Ordering::Less);
        assert_eq!(u64_descending(&0, &u64::MAX), Ordering::Greater);
        assert_eq!(u64_ascending(&7, &7), Ordering::Equal);
    }

    #[test]
    fn fractional_floats_are_distinguished() {
        assert_eq!(f64_ascending(&0.1, &0.2), Ordering::Less);
        assert_eq!(f64_descending(&0.1, &0.2), Ordering::Greater);
        assert_eq!(f64_ascending(&f64::NEG_INFINITY, &f64::MIN), Ordering::Less);
        assert_eq!(f64_ascending(&f64::NAN, &f64::INFINITY), Ordering::Greater);
    }

    #[test]
    fn chars_and_strings() {
        assert_eq!(char_ascending(&'a', &'b'), Ordering::Less);
        assert_eq!(char_descending(&'a', &'b'), Ordering::Greater);
        assert_eq!(str_ascending(&"apple", &"apricot"), Ordering::Less);
        assert_eq!(str_descending(&"apple", &"apricot"), Ordering::Greater);
        assert_eq!(cstr_ascending(&c"b", &c"ab"), Ordering::Greater);
        assert_eq!(cstr_descending(&c"b", &c"ab"), Ordering::Less);
    }

    #[test]
    fn generic_comparators() {
        assert_eq!(ascending("a", "b"), Ordering::Less);
        assert_eq!(descending(&3_u8, &1_u8), Ordering::Less);
    }
}
