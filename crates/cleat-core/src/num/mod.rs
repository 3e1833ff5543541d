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

//! # Numeric Foundations
//!
//! Bit-level predicates and transforms for primitive integers. All functions
//! are generic over `num_traits::PrimInt`, which restricts them to integral
//! types at compile time; floating point arguments are rejected by the type
//! checker rather than at run time.
//!
//! ## Submodules
//!
//! - `constants`: Layout constants shared with callers (`CACHE_LINE_LENGTH`).
//! - `bits`: Power-of-two test, alignment rounding and checking, parity test.
//! - `circular`: Single-step advance and retreat of indices in a circular
//!   range `[0, max)`.
//! - `ops`: By-value extension traits (`PowerOfTwoVal`, `AlignVal`,
//!   `ParityVal`, `CircularVal`) for method-call syntax.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod bits;
pub mod circular;
pub mod constants;
pub mod ops;

pub use bits::{align, is_aligned, is_even, is_power_of_two};
pub use circular::{next, previous};
pub use constants::CACHE_LINE_LENGTH;
