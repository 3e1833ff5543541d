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

//! # Circular Index Stepping
//!
//! Advance or retreat an index by one position inside a circular range
//! `[0, max)`, wrapping to the opposite end at the boundary. Intended for
//! head/tail cursors of fixed-capacity ring structures whose capacity is not
//! necessarily a power of two.
//!
//! These are single-step operations, not a general modulo: an index that is
//! already outside `[0, max)` is not brought back into range.

use num_traits::PrimInt;

#[inline(always)]
fn in_range<T>(current: T, max: T) -> bool
where
    T: PrimInt,
{
    current >= T::zero() && current < max
}

/// Returns the index following `current` in the circular range `[0, max)`.
///
/// Yields `current + 1`, or `0` when `current + 1 == max`.
///
/// # Panics
///
/// In debug builds, this function will panic if `current` is not in
/// `[0, max)`.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::num::circular::next;
/// assert_eq!(next(2u32, 6), 3);
/// assert_eq!(next(5u32, 6), 0);
/// ```
#[inline(always)]
pub fn next<T>(current: T, max: T) -> T
where
    T: PrimInt,
{
    debug_assert!(
        in_range(current, max),
        "called `next` with `current` outside of `[0, max)`"
    );

    let next = current + T::one();
    if next == max { T::zero() } else { next }
}

/// Returns the index preceding `current` in the circular range `[0, max)`.
///
/// Yields `current - 1`, or `max - 1` when `current == 0`.
///
/// # Panics
///
/// In debug builds, this function will panic if `current` is not in
/// `[0, max)`, which also rejects `max == 0`.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::num::circular::previous;
/// assert_eq!(previous(3u32, 6), 2);
/// assert_eq!(previous(0u32, 6), 5);
/// ```
#[inline(always)]
pub fn previous<T>(current: T, max: T) -> T
where
    T: PrimInt,
{
    debug_assert!(
        in_range(current, max),
        "called `previous` with `current` outside of `[0, max)`"
    );

    if current == T::zero() {
        max - T::one()
    } else {
        current - T::one()
    }
}
