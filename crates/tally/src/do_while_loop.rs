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

//! Counters written with post-condition loops, each with a recursive twin.
//!
//! Rust has no `do`/`while` statement; the body runs first inside a `loop`
//! and the condition is checked at its end. The empty sequence is handled
//! before entering the loop.
//!
//! | Function                 | Element   | Counts                                      |
//! |--------------------------|-----------|---------------------------------------------|
//! | `false_value_count`      | `bool`    | `false` values                              |
//! | `zero_decimal_count`     | `Decimal` | values exactly equal to zero                |
//! | `rounded_to_even_count`  | `f64`     | values that round half-to-even to even      |

use crate::ARGUMENT;
use rust_decimal::Decimal;
use tally_core::{
    error::{Count, CountError, into_count, require_sequence},
    predicate::{IsFalse, IsZero, RoundsToEven},
    scan::{loops, recursion},
};

/// Counts the `false` values in `array_to_search`.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
///
/// # Examples
///
/// ```rust
/// # use tally::do_while_loop::false_value_count;
///
/// assert_eq!(false_value_count(Some(&[false, true, false])), Ok(2));
/// ```
pub fn false_value_count(array_to_search: Option<&[bool]>) -> Result<Count, CountError> {
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(loops::count_do_while(values, &IsFalse)))
}

/// Counts the decimals in `array_to_search` that are exactly zero.
///
/// The comparison is by value, so `0`, `0.00` and `-0` all count; there is
/// no tolerance for values merely close to zero.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
pub fn zero_decimal_count(array_to_search: Option<&[Decimal]>) -> Result<Count, CountError> {
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(loops::count_do_while(values, &IsZero)))
}

/// Counts the values in `array_to_search` that round, half-to-even, to an
/// even integer.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
///
/// # Examples
///
/// ```rust
/// # use tally::do_while_loop::rounded_to_even_count;
///
/// // 1.5 -> 2, 2.5 -> 2, 3.4 -> 3
/// assert_eq!(rounded_to_even_count(Some(&[1.5, 2.5, 3.4])), Ok(2));
/// ```
pub fn rounded_to_even_count(array_to_search: Option<&[f64]>) -> Result<Count, CountError> {
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(loops::count_do_while(values, &RoundsToEven)))
}

/// Recursive twin of [`false_value_count`]: counts down the elements still
/// to visit, carrying the running total.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
pub fn false_value_count_recursive(array_to_search: Option<&[bool]>) -> Result<Count, CountError> {
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(recursion::count_remaining_accumulating(
        values, &IsFalse,
    )))
}

/// Recursive twin of [`zero_decimal_count`]: splits once at the midpoint and
/// walks each half front to back, carrying the running total.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
pub fn zero_decimal_count_recursive(
    array_to_search: Option<&[Decimal]>,
) -> Result<Count, CountError> {
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(recursion::count_halves_with(
        values,
        &IsZero,
        recursion::count_front_accumulating,
    )))
}

/// Recursive twin of [`rounded_to_even_count`]: midpoint divide-and-conquer
/// down to single elements.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
pub fn rounded_to_even_count_recursive(
    array_to_search: Option<&[f64]>,
) -> Result<Count, CountError> {
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(recursion::count_divide_and_conquer(
        values,
        &RoundsToEven,
    )))
}
