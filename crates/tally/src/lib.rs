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

//! # Tally
//!
//! Counting the elements of a fixed-size sequence that satisfy a fixed
//! predicate, written once with a loop and once recursively. Each pair must
//! agree on every input, which the test suite checks exhaustively for small
//! inputs and with property tests for random ones.
//!
//! ## Modules
//!
//! - `for_loop`: negative integers, even `f32` values, bytes with high-nibble bits.
//! - `while_loop`: absent-or-empty strings, `i64` extremes, absent references.
//! - `do_while_loop`: `false` values, zero decimals, values rounding half-to-even to even.
//!
//! Every function takes the sequence as `Option<&[T]>`. `None` stands for
//! an absent sequence and is rejected with `CountError::InvalidInput`
//! before any element is read; an empty slice counts zero.
//!
//! ```rust
//! use tally::{do_while_loop, while_loop};
//!
//! let flags = [false, true, false];
//! assert_eq!(do_while_loop::false_value_count(Some(&flags)), Ok(2));
//! assert_eq!(do_while_loop::false_value_count_recursive(Some(&flags)), Ok(2));
//!
//! assert!(while_loop::min_or_max_long_count(None).is_err());
//! ```
//!
//! The strategies themselves live in `tally_core::scan` and accept any
//! `tally_core::predicate::Predicate`.

pub mod do_while_loop;
pub mod for_loop;
pub mod while_loop;

pub use rust_decimal::Decimal;
pub use tally_core::error::{Count, CountError, ErrorKind};

/// The parameter name reported when a sequence is rejected.
const ARGUMENT: &str = "array_to_search";
