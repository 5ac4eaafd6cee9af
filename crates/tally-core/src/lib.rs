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

//! # Tally Core
//!
//! Shared building blocks for counting the elements of a sequence that
//! satisfy a fixed predicate, with iterative and recursive strategies that
//! are interchangeable by construction.
//!
//! ## Modules
//!
//! - `error`: The `CountError` type (single kind: invalid input), the
//!   `Count` alias and the `require_sequence` guard that rejects absent
//!   sequences before any element is read.
//! - `math`: Closed-open index spans `[start, end)` with midpoint splitting,
//!   used by the recursive strategies to address sub-sequences without
//!   copying them.
//! - `num`: Banker's rounding (`RoundHalfEven`) for `f32` and `f64`.
//! - `predicate`: The `Predicate<T>` trait and the named element tests.
//! - `scan`: Loop and recursion strategies plus the `Traversal` dispatcher.
//!
//! Refer to each module for detailed APIs and examples.

pub mod error;
pub mod math;
pub mod num;
pub mod predicate;
pub mod scan;
