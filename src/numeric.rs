//! Arithmetic over a closed set of numeric kinds
//!
//! [`Number`] describes the type set accepted by [`add`] and [`sub`]: the
//! signed integer kinds and the floating-point kinds. The trait is sealed, so
//! the set cannot grow outside this crate and unsigned kinds are rejected at
//! compile time:
//!
//! ```compile_fail
//! use generic_queue_rs::add;
//!
//! let _ = add(1u32, 2u32);
//! ```

use std::fmt;

use crate::sealed::Sealed;

/// Numeric kinds usable with [`add`] and [`sub`]
///
/// The arithmetic follows the native behavior of each kind: integer kinds
/// wrap around on overflow, floating-point kinds round per IEEE-754.
pub trait Number: Sealed + Copy + Default + PartialOrd + fmt::Debug + Send + Sync + 'static {
    /// `self + rhs` with the kind's native semantics
    fn plus(self, rhs: Self) -> Self;

    /// `self - rhs` with the kind's native semantics
    fn minus(self, rhs: Self) -> Self;

    /// Returns true for values that take no part in ordering (float NaN)
    #[inline]
    fn is_unordered(self) -> bool {
        false
    }
}

/// Signed integer kinds
pub trait Signed: Number {}

/// Floating-point kinds
pub trait Float: Number {}

macro_rules! impl_signed {
    ($($t:ty),* $(,)?) => {$(
        impl Sealed for $t {}

        impl Number for $t {
            #[inline]
            fn plus(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn minus(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }
        }

        impl Signed for $t {}
    )*};
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {$(
        impl Sealed for $t {}

        impl Number for $t {
            #[inline]
            fn plus(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn minus(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn is_unordered(self) -> bool {
                self.is_nan()
            }
        }

        impl Float for $t {}
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_float!(f32, f64);

/// Adds two values of the same numeric kind
///
/// ```
/// use generic_queue_rs::add;
///
/// assert_eq!(add(1, 2), 3);
/// assert!((add::<f64>(1.0, 3.1) - 4.1).abs() < 1e-9);
/// ```
#[inline]
pub fn add<T: Number>(a: T, b: T) -> T {
    a.plus(b)
}

/// Subtracts `b` from `a`
#[inline]
pub fn sub<T: Number>(a: T, b: T) -> T {
    let difference = |i: T, j: T| i.minus(j);
    difference(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_signed() {
        assert_eq!(add(1, 2), 3);
        assert_eq!(add::<i8>(-5, 3), -2);
        assert_eq!(add::<i64>(40, 2), 42);
        assert_eq!(add::<isize>(0, 0), 0);
    }

    #[test]
    fn test_add_float() {
        assert!((add::<f64>(1.0, 3.1) - 4.1).abs() < 1e-12);
        assert!((add::<f32>(0.5, 0.25) - 0.75).abs() < f32::EPSILON);
        assert_eq!(add(f64::MAX, f64::MAX), f64::INFINITY);
    }

    #[test]
    fn test_sub() {
        assert_eq!(sub(1, 2), -1);
        assert_eq!(sub::<i16>(100, 1), 99);
        assert!((sub::<f64>(4.1, 3.1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_integer_overflow_wraps() {
        assert_eq!(add(i8::MAX, 1), i8::MIN);
        assert_eq!(sub(i32::MIN, 1), i32::MAX);
        assert_eq!(add(i64::MAX, i64::MAX), -2);
    }

    #[test]
    fn test_nan_is_unordered() {
        assert!(f64::NAN.is_unordered());
        assert!(!1.5f32.is_unordered());
        assert!(!7i32.is_unordered());
    }

    #[test]
    fn test_type_sets() {
        fn is_signed<T: Signed>() -> bool { true }
        fn is_float<T: Float>() -> bool { true }

        assert!(is_signed::<i8>());
        assert!(is_signed::<isize>());
        assert!(is_float::<f32>());
        assert!(is_float::<f64>());
    }
}
