// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # By-Value Bit Utility Traits
//!
//! Method-call forms of the free functions in `bits` and `circular`,
//! implemented for every primitive integer type. The `_val` suffix keeps the
//! names clear of inherent methods such as `u32::is_power_of_two`, whose
//! semantics differ for signed types.
//!
//! No implementations exist for floating point types, so calling these
//! methods on non-integral values fails to compile.

use crate::num::{bits, circular};

/// A trait for integer types that can be tested for being a power of two.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::num::ops::PowerOfTwoVal;
/// assert!(64i32.is_power_of_two_val());
/// assert!(!(-64i32).is_power_of_two_val());
/// ```
pub trait PowerOfTwoVal: Sized + Copy {
    /// Returns `true` if `self` is strictly positive and has exactly one bit set.
    fn is_power_of_two_val(self) -> bool;
}

/// A trait for integer types that can be aligned to a power-of-two boundary.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::num::ops::AlignVal;
/// assert_eq!(13u64.align_val(8), 16);
/// assert!(16u64.is_aligned_val(8));
/// ```
pub trait AlignVal: Sized + Copy {
    /// Rounds `self` up to the nearest multiple of `alignment`, which must
    /// be a power of two.
    fn align_val(self, alignment: Self) -> Self;

    /// Returns `true` if `self` is a multiple of `alignment`, which must be
    /// a power of two.
    fn is_aligned_val(self, alignment: Self) -> bool;
}

/// A trait for integer types that can be tested for parity.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::num::ops::ParityVal;
/// assert!((-4i16).is_even_val());
/// assert!(!7u8.is_even_val());
/// ```
pub trait ParityVal: Sized + Copy {
    /// Returns `true` if the least significant bit of `self` is zero.
    fn is_even_val(self) -> bool;
}

/// A trait for integer types used as indices into a circular range `[0, max)`.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::num::ops::CircularVal;
/// assert_eq!(5usize.next_val(6), 0);
/// assert_eq!(0usize.previous_val(6), 5);
/// ```
pub trait CircularVal: Sized + Copy {
    /// Returns the index after `self`, wrapping to `0` at `max`.
    fn next_val(self, max: Self) -> Self;

    /// Returns the index before `self`, wrapping to `max - 1` at `0`.
    fn previous_val(self, max: Self) -> Self;
}

macro_rules! bit_util_impl_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl PowerOfTwoVal for $t {
                #[inline(always)]
                fn is_power_of_two_val(self) -> bool {
                    bits::is_power_of_two(self)
                }
            }

            impl AlignVal for $t {
                #[inline(always)]
                fn align_val(self, alignment: $t) -> $t {
                    bits::align(self, alignment)
                }

                #[inline(always)]
                fn is_aligned_val(self, alignment: $t) -> bool {
                    bits::is_aligned(self, alignment)
                }
            }

            impl ParityVal for $t {
                #[inline(always)]
                fn is_even_val(self) -> bool {
                    bits::is_even(self)
                }
            }

            impl CircularVal for $t {
                #[inline(always)]
                fn next_val(self, max: $t) -> $t {
                    circular::next(self, max)
                }

                #[inline(always)]
                fn previous_val(self, max: $t) -> $t {
                    circular::previous(self, max)
                }
            }
        )*
    };
}

bit_util_impl_val!(u8, u16, u32, u64, usize, u128);
bit_util_impl_val!(i8, i16, i32, i64, isize, i128);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_power_of_two_val_signed_and_unsigned() {
        assert!(1u8.is_power_of_two_val());
        assert!(1024u128.is_power_of_two_val());
        assert!(!0isize.is_power_of_two_val());
        assert!(!i128::MIN.is_power_of_two_val());
    }

    #[test]
    fn test_align_val_every_width() {
        assert_eq!(13u8.align_val(8), 16);
        assert_eq!(13u16.align_val(8), 16);
        assert_eq!(13u32.align_val(8), 16);
        assert_eq!(13usize.align_val(8), 16);
        assert_eq!(13i8.align_val(8), 16);
        assert_eq!(13i128.align_val(8), 16);
    }

    #[test]
    fn test_is_aligned_val() {
        assert!(64usize.is_aligned_val(64));
        assert!(!65usize.is_aligned_val(64));
    }

    #[test]
    fn test_is_even_val() {
        assert!(0u32.is_even_val());
        assert!((-4i64).is_even_val());
        assert!(!(-3i64).is_even_val());
    }

    #[test]
    fn test_circular_val_wraps() {
        assert_eq!(2u32.next_val(6), 3);
        assert_eq!(5u32.next_val(6), 0);
        assert_eq!(3i16.previous_val(6), 2);
        assert_eq!(0i16.previous_val(6), 5);
    }

    proptest! {
        #[test]
        fn prop_methods_agree_with_free_functions(v in any::<i32>(), shift in 0u32..12) {
            let a = 1i32 << shift;
            prop_assert_eq!(v.is_power_of_two_val(), bits::is_power_of_two(v));
            prop_assert_eq!(v.is_even_val(), bits::is_even(v));
            prop_assert_eq!(v.is_aligned_val(a), bits::is_aligned(v, a));
            let bounded = v.rem_euclid(1 << 20);
            prop_assert_eq!(bounded.align_val(a), bits::align(bounded, a));
        }
    }
}
