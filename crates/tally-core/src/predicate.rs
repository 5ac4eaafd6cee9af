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

//! # Element Predicates
//!
//! A `Predicate<T>` is the fixed boolean test a counter applies to every
//! element. The named predicates below cover the element kinds the `tally`
//! crate counts; numeric ones are generic over `num_traits` bounds so the
//! same test works for every primitive width. Any `Fn(&T) -> bool` closure
//! is a predicate too.
//!
//! ```rust
//! use tally_core::predicate::{IsNegative, Predicate};
//!
//! assert!(IsNegative.matches(&-3_i32));
//! assert!(!IsNegative.matches(&0_i64));
//! assert!((|v: &u8| *v > 7).matches(&9));
//! ```

use crate::num::rounding::RoundHalfEven;
use num_traits::{Bounded, Float, Signed, Zero};

/// A fixed boolean test applied to one element.
pub trait Predicate<T: ?Sized> {
    /// Returns `true` if `value` should be counted.
    fn matches(&self, value: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    #[inline(always)]
    fn matches(&self, value: &T) -> bool {
        self(value)
    }
}

/// Matches values strictly below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsNegative;

impl<T: Signed> Predicate<T> for IsNegative {
    #[inline(always)]
    fn matches(&self, value: &T) -> bool {
        value.is_negative()
    }
}

/// Matches floating-point values whose remainder modulo two is zero.
///
/// Only integral, even values qualify: `4.0` and `-2.0` match, `2.5` does
/// not. `NaN` and infinities never match because their remainder is `NaN`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsEven;

impl<T: Float> Predicate<T> for IsEven {
    #[inline(always)]
    fn matches(&self, value: &T) -> bool {
        is_even_float(*value)
    }
}

/// Matches bytes with at least one bit set in the upper four bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HasHighNibbleBits;

impl HasHighNibbleBits {
    /// The mask selecting the high nibble of a byte.
    pub const MASK: u8 = 0xF0;
}

impl Predicate<u8> for HasHighNibbleBits {
    #[inline(always)]
    fn matches(&self, value: &u8) -> bool {
        value & Self::MASK != 0
    }
}

/// Matches absent or empty strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsNullOrEmpty;

impl<S: AsRef<str>> Predicate<Option<S>> for IsNullOrEmpty {
    #[inline(always)]
    fn matches(&self, value: &Option<S>) -> bool {
        value.as_ref().is_none_or(|s| s.as_ref().is_empty())
    }
}

/// Matches the smallest and the largest representable value of a type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsMinOrMax;

impl<T: Bounded + PartialEq> Predicate<T> for IsMinOrMax {
    #[inline(always)]
    fn matches(&self, value: &T) -> bool {
        *value == T::min_value() || *value == T::max_value()
    }
}

/// Matches absent references.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsNone;

impl<T> Predicate<Option<T>> for IsNone {
    #[inline(always)]
    fn matches(&self, value: &Option<T>) -> bool {
        value.is_none()
    }
}

/// Matches `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsFalse;

impl Predicate<bool> for IsFalse {
    #[inline(always)]
    fn matches(&self, value: &bool) -> bool {
        !*value
    }
}

/// Matches values exactly equal to the additive identity.
///
/// There is no tolerance: for `rust_decimal::Decimal` any scale of zero
/// (`0`, `0.00`, `-0`) matches, while `0.0000001` does not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsZero;

impl<T: Zero> Predicate<T> for IsZero {
    #[inline(always)]
    fn matches(&self, value: &T) -> bool {
        value.is_zero()
    }
}

/// Matches values that round, half-to-even, to an even integer.
///
/// `1.5` and `2.5` both round to `2` and match; `3.4` rounds to `3` and
/// does not. Non-finite values never match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoundsToEven;

impl<T: RoundHalfEven> Predicate<T> for RoundsToEven {
    #[inline(always)]
    fn matches(&self, value: &T) -> bool {
        is_even_float(value.round_half_even())
    }
}

#[inline(always)]
fn is_even_float<T: Float>(value: T) -> bool {
    let two = T::one() + T::one();
    value % two == T::zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_is_negative() {
        assert!(IsNegative.matches(&-1_i32));
        assert!(IsNegative.matches(&i32::MIN));
        assert!(!IsNegative.matches(&0_i32));
        assert!(!IsNegative.matches(&i32::MAX));
    }

    #[test]
    fn test_is_even_requires_integral_even_value() {
        assert!(IsEven.matches(&0.0_f32));
        assert!(IsEven.matches(&-0.0_f32));
        assert!(IsEven.matches(&4.0_f32));
        assert!(IsEven.matches(&-2.0_f32));
        assert!(!IsEven.matches(&3.0_f32));
        assert!(!IsEven.matches(&2.5_f32));
        assert!(!IsEven.matches(&-0.5_f32));
    }

    #[test]
    fn test_is_even_non_finite() {
        assert!(!IsEven.matches(&f32::NAN));
        assert!(!IsEven.matches(&f32::INFINITY));
        assert!(!IsEven.matches(&f32::NEG_INFINITY));
        // Every f32 this large is an even integer.
        assert!(IsEven.matches(&f32::MAX));
    }

    #[test]
    fn test_has_high_nibble_bits() {
        assert!(!HasHighNibbleBits.matches(&0x00));
        assert!(!HasHighNibbleBits.matches(&0x0F));
        assert!(HasHighNibbleBits.matches(&0x10));
        assert!(HasHighNibbleBits.matches(&0x33));
        assert!(HasHighNibbleBits.matches(&0xF0));
        assert!(HasHighNibbleBits.matches(&0xFF));
    }

    #[test]
    fn test_is_null_or_empty() {
        assert!(IsNullOrEmpty.matches(&None::<&str>));
        assert!(IsNullOrEmpty.matches(&Some("")));
        assert!(!IsNullOrEmpty.matches(&Some(" ")));
        assert!(!IsNullOrEmpty.matches(&Some("a")));
        assert!(IsNullOrEmpty.matches(&Some(String::new())));
    }

    #[test]
    fn test_is_min_or_max() {
        assert!(IsMinOrMax.matches(&i64::MIN));
        assert!(IsMinOrMax.matches(&i64::MAX));
        assert!(!IsMinOrMax.matches(&(i64::MIN + 1)));
        assert!(!IsMinOrMax.matches(&(i64::MAX - 1)));
        assert!(!IsMinOrMax.matches(&0_i64));
        assert!(IsMinOrMax.matches(&u8::MAX));
    }

    #[test]
    fn test_is_none() {
        assert!(IsNone.matches(&None::<u32>));
        assert!(!IsNone.matches(&Some(0_u32)));
    }

    #[test]
    fn test_is_false() {
        assert!(IsFalse.matches(&false));
        assert!(!IsFalse.matches(&true));
    }

    #[test]
    fn test_is_zero_decimal_ignores_scale() {
        assert!(IsZero.matches(&Decimal::ZERO));
        assert!(IsZero.matches(&Decimal::new(0, 2)));
        assert!(IsZero.matches(&-Decimal::ZERO));
        assert!(!IsZero.matches(&Decimal::new(1, 7)));
        assert!(!IsZero.matches(&Decimal::NEGATIVE_ONE));
    }

    #[test]
    fn test_rounds_to_even() {
        assert!(RoundsToEven.matches(&1.5_f64));
        assert!(RoundsToEven.matches(&2.5_f64));
        assert!(!RoundsToEven.matches(&3.4_f64));
        assert!(RoundsToEven.matches(&0.5_f64));
        assert!(RoundsToEven.matches(&-0.5_f64));
        assert!(!RoundsToEven.matches(&-1.4_f64));
        assert!(RoundsToEven.matches(&-2.5_f64));
        assert!(RoundsToEven.matches(&f64::MAX));
        assert!(!RoundsToEven.matches(&f64::NAN));
        assert!(!RoundsToEven.matches(&f64::INFINITY));
    }

    #[test]
    fn test_closure_is_predicate() {
        let above_seven = |v: &u8| *v > 7;
        assert!(above_seven.matches(&8));
        assert!(!above_seven.matches(&7));
    }
}
