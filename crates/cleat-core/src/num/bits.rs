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

//! # Bit Predicates and Alignment
//!
//! Power-of-two detection, rounding up to a power-of-two boundary, and
//! parity checks for primitive integers.
//!
//! ## Preconditions
//!
//! `align` and `is_aligned` only produce meaningful results when `alignment`
//! is a power of two, because `alignment - 1` must be a contiguous low-bit
//! mask. This is not validated in release builds. Debug builds panic via
//! `debug_assert!` when it is violated.

use num_traits::PrimInt;

/// Returns `true` if `value` is strictly positive and has exactly one bit set.
///
/// Works for signed and unsigned integers. Zero and negative values are never
/// powers of two.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::num::bits::is_power_of_two;
/// assert!(is_power_of_two(16u32));
/// assert!(!is_power_of_two(18u32));
/// assert!(!is_power_of_two(0i32));
/// assert!(!is_power_of_two(-8i32));
/// ```
#[inline(always)]
pub fn is_power_of_two<T>(value: T) -> bool
where
    T: PrimInt,
{
    // The positivity check short-circuits before the two's-complement
    // negation, so `!value + 1` cannot overflow for `0` or `T::min_value()`.
    value > T::zero() && (value & (!value + T::one())) == value
}

/// Rounds `value` up to the smallest multiple of `alignment` that is `>= value`.
///
/// # Panics
///
/// In debug builds, this function will panic if `alignment` is not a power
/// of two. Release builds return an unspecified value instead.
///
/// # Invariants
///
/// - `alignment` must be a power of two.
/// - `value + alignment - 1` must not overflow `T`.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::num::bits::align;
/// assert_eq!(align(13u64, 8), 16);
/// assert_eq!(align(16u64, 8), 16);
/// assert_eq!(align(0u64, 8), 0);
/// ```
#[inline(always)]
pub fn align<T>(value: T, alignment: T) -> T
where
    T: PrimInt,
{
    debug_assert!(
        is_power_of_two(alignment),
        "called `align` with an alignment that is not a power of two"
    );

    let mask = alignment - T::one();
    (value + mask) & !mask
}

/// Returns `true` if `value` is a multiple of `alignment`.
///
/// # Panics
///
/// In debug builds, this function will panic if `alignment` is not a power
/// of two.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::num::bits::is_aligned;
/// assert!(is_aligned(128usize, 64));
/// assert!(!is_aligned(130usize, 64));
/// ```
#[inline(always)]
pub fn is_aligned<T>(value: T, alignment: T) -> bool
where
    T: PrimInt,
{
    debug_assert!(
        is_power_of_two(alignment),
        "called `is_aligned` with an alignment that is not a power of two"
    );

    (value & (alignment - T::one())) == T::zero()
}

/// Returns `true` if the least significant bit of `value` is zero.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::num::bits::is_even;
/// assert!(is_even(0i32));
/// assert!(is_even(-4i32));
/// assert!(!is_even(7u8));
/// ```
#[inline(always)]
pub fn is_even<T>(value: T) -> bool
where
    T: PrimInt,
{
    (value & T::one()) == T::zero()
}
