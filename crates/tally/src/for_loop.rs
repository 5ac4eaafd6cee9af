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

//! Counters written with `for` loops, each with a recursive twin.
//!
//! | Function                               | Element | Counts                           |
//! |----------------------------------------|---------|----------------------------------|
//! | `negative_integer_count`               | `i32`   | values below zero                |
//! | `even_number_count`                    | `f32`   | values with `x % 2 == 0`         |
//! | `byte_with_bits_in_high_nibble_count`  | `u8`    | bytes with any of `0xF0` set     |

use crate::ARGUMENT;
use tally_core::{
    error::{Count, CountError, into_count, require_sequence},
    predicate::{HasHighNibbleBits, IsEven, IsNegative},
    scan::{loops, recursion},
};

/// Counts the negative integers in `array_to_search`.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
///
/// # Examples
///
/// ```rust
/// # use tally::for_loop::negative_integer_count;
///
/// assert_eq!(negative_integer_count(Some(&[-1, 0, 1, -8])), Ok(2));
/// assert!(negative_integer_count(None).is_err());
/// ```
pub fn negative_integer_count(array_to_search: Option<&[i32]>) -> Result<Count, CountError> {
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(loops::count_for(values, &IsNegative)))
}

/// Counts the even numbers in `array_to_search`.
///
/// A value is even when its remainder modulo two is zero, so only integral
/// values qualify (`4.0` does, `2.5` does not) and `NaN` or infinities never do.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
pub fn even_number_count(array_to_search: Option<&[f32]>) -> Result<Count, CountError> {
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(loops::count_for(values, &IsEven)))
}

/// Counts the bytes in `array_to_search` with at least one bit set in the high nibble.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
pub fn byte_with_bits_in_high_nibble_count(
    array_to_search: Option<&[u8]>,
) -> Result<Count, CountError> {
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(loops::count_for(values, &HasHighNibbleBits)))
}

/// Recursive twin of [`negative_integer_count`]: a forward index walk that
/// sums on the way back up.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
pub fn negative_integer_count_recursive(
    array_to_search: Option<&[i32]>,
) -> Result<Count, CountError> {
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(recursion::count_forward_indexed(values, &IsNegative)))
}

/// Recursive twin of [`even_number_count`]: head, then the tail.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
pub fn even_number_count_recursive(array_to_search: Option<&[f32]>) -> Result<Count, CountError> {
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(recursion::count_head_tail(values, &IsEven)))
}

/// Recursive twin of [`byte_with_bits_in_high_nibble_count`]: a backward
/// index walk carrying the running total.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
pub fn byte_with_bits_in_high_nibble_count_recursive(
    array_to_search: Option<&[u8]>,
) -> Result<Count, CountError> {
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(recursion::count_backward_accumulating(
        values,
        &HasHighNibbleBits,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::error::ErrorKind;

    #[test]
    fn test_negative_integer_count() {
        let values = [0, -1, 2, -3, i32::MIN, i32::MAX, -1];
        assert_eq!(negative_integer_count(Some(&values)), Ok(4));
        assert_eq!(negative_integer_count_recursive(Some(&values)), Ok(4));
    }

    #[test]
    fn test_negative_integer_count_without_negatives() {
        let values = [0, 1, 2, 3];
        assert_eq!(negative_integer_count(Some(&values)), Ok(0));
        assert_eq!(negative_integer_count_recursive(Some(&values)), Ok(0));
    }

    #[test]
    fn test_even_number_count() {
        let values = [0.0, 1.0, 2.0, 2.5, -4.0, -3.0, 1e10, f32::NAN, f32::INFINITY];
        assert_eq!(even_number_count(Some(&values)), Ok(4));
        assert_eq!(even_number_count_recursive(Some(&values)), Ok(4));
    }

    #[test]
    fn test_byte_with_bits_in_high_nibble_count() {
        let values = [0x05, 0xF0, 0x33];
        assert_eq!(byte_with_bits_in_high_nibble_count(Some(&values)), Ok(2));
        assert_eq!(
            byte_with_bits_in_high_nibble_count_recursive(Some(&values)),
            Ok(2)
        );
    }

    #[test]
    fn test_byte_with_bits_in_high_nibble_count_low_nibble_only() {
        let values: Vec<u8> = (0x00..=0x0F).collect();
        assert_eq!(byte_with_bits_in_high_nibble_count(Some(&values)), Ok(0));
        assert_eq!(
            byte_with_bits_in_high_nibble_count_recursive(Some(&values)),
            Ok(0)
        );
    }

    #[test]
    fn test_all_bytes() {
        let values: Vec<u8> = (0..=u8::MAX).collect();
        assert_eq!(byte_with_bits_in_high_nibble_count(Some(&values)), Ok(240));
        assert_eq!(
            byte_with_bits_in_high_nibble_count_recursive(Some(&values)),
            Ok(240)
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(negative_integer_count(Some(&[])), Ok(0));
        assert_eq!(negative_integer_count_recursive(Some(&[])), Ok(0));
        assert_eq!(even_number_count(Some(&[])), Ok(0));
        assert_eq!(even_number_count_recursive(Some(&[])), Ok(0));
        assert_eq!(byte_with_bits_in_high_nibble_count(Some(&[])), Ok(0));
        assert_eq!(
            byte_with_bits_in_high_nibble_count_recursive(Some(&[])),
            Ok(0)
        );
    }

    #[test]
    fn test_absent_input_is_rejected() {
        let results = [
            negative_integer_count(None),
            negative_integer_count_recursive(None),
            even_number_count(None),
            even_number_count_recursive(None),
            byte_with_bits_in_high_nibble_count(None),
            byte_with_bits_in_high_nibble_count_recursive(None),
        ];
        for result in results {
            let err = result.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
            assert_eq!(err.argument(), "array_to_search");
        }
    }
}
