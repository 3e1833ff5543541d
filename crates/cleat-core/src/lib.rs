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

//! # Cleat Core
//!
//! Integer bit utilities for memory-layout and circular-indexing code.
//! These primitives sit on the hot paths of ring buffers and slot allocators,
//! so every operation is a pure, allocation-free, inlinable function of its
//! arguments.
//!
//! ## Modules
//!
//! - `num`: The cache-line constant (`CACHE_LINE_LENGTH`), power-of-two and
//!   alignment predicates (`is_power_of_two`, `align`, `is_aligned`), the
//!   parity test (`is_even`), circular index stepping (`next`, `previous`),
//!   and by-value extension traits exposing the same operations as methods
//!   on every primitive integer type.
//!
//! ## Preconditions
//!
//! Alignment arguments must be powers of two and circular indices must lie in
//! `[0, max)`. These are the caller's responsibility: release builds perform
//! no validation, debug builds check them with `debug_assert!`.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
