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

//! # Round Half To Even
//!
//! Banker's rounding: a value exactly halfway between two integers rounds to
//! the even one, every other value rounds to the nearest integer. This is
//! the rule used by `rounded_to_even_count`, and it differs from
//! `f64::round`, which rounds halves away from zero.
//!
//! ```rust
//! use tally_core::num::rounding::RoundHalfEven;
//!
//! assert_eq!(2.5_f64.round_half_even(), 2.0);
//! assert_eq!(2.5_f64.round(), 3.0);
//! ```

use num_traits::Float;

/// A trait for floating-point types that support round-half-to-even by value.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::rounding::RoundHalfEven;
///
/// assert_eq!(1.5_f32.round_half_even(), 2.0);
/// assert_eq!(-2.5_f64.round_half_even(), -2.0);
/// assert_eq!(3.4_f64.round_half_even(), 3.0);
/// ```
pub trait RoundHalfEven: Float {
    /// Rounds to the nearest integer, resolving ties toward the even neighbour.
    ///
    /// `NaN` and infinities are returned unchanged.
    fn round_half_even(self) -> Self;
}

macro_rules! round_half_even_impl {
    ($t:ty) => {
        impl RoundHalfEven for $t {
            #[inline(always)]
            fn round_half_even(self) -> $t {
                <$t>::round_ties_even(self)
            }
        }
    };
}

round_half_even_impl!(f32);
round_half_even_impl!(f64);
