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

//! Counters written with `while` loops, each with a recursive twin.
//!
//! | Function                | Element      | Counts                               |
//! |-------------------------|--------------|--------------------------------------|
//! | `empty_string_count`    | `Option<S>`  | absent or empty strings              |
//! | `min_or_max_long_count` | `i64`        | `i64::MIN` and `i64::MAX`            |
//! | `null_object_count`     | `Option<T>`  | absent references                    |

use crate::ARGUMENT;
use tally_core::{
    error::{Count, CountError, into_count, require_sequence},
    predicate::{IsMinOrMax, IsNone, IsNullOrEmpty},
    scan::{loops, recursion},
};

/// Counts the absent or empty strings in `array_to_search`.
///
/// Whitespace is not empty: `" "` is not counted.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
///
/// # Examples
///
/// ```rust
/// # use tally::while_loop::empty_string_count;
///
/// let values = [Some(""), Some("a"), None, Some("b")];
/// assert_eq!(empty_string_count(Some(&values[..])), Ok(2));
/// ```
pub fn empty_string_count<S>(array_to_search: Option<&[Option<S>]>) -> Result<Count, CountError>
where
    S: AsRef<str>,
{
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(loops::count_while(values, &IsNullOrEmpty)))
}

/// Counts the elements of `array_to_search` equal to `i64::MIN` or `i64::MAX`.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
pub fn min_or_max_long_count(array_to_search: Option<&[i64]>) -> Result<Count, CountError> {
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(loops::count_while(values, &IsMinOrMax)))
}

/// Counts the absent references in `array_to_search`.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
pub fn null_object_count<T>(array_to_search: Option<&[Option<T>]>) -> Result<Count, CountError> {
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(loops::count_while(values, &IsNone)))
}

/// Recursive twin of [`empty_string_count`]: the last element, then the prefix.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
pub fn empty_string_count_recursive<S>(
    array_to_search: Option<&[Option<S>]>,
) -> Result<Count, CountError>
where
    S: AsRef<str>,
{
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(recursion::count_last_init(values, &IsNullOrEmpty)))
}

/// Recursive twin of [`min_or_max_long_count`]: head, then the tail.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
pub fn min_or_max_long_count_recursive(
    array_to_search: Option<&[i64]>,
) -> Result<Count, CountError> {
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(recursion::count_head_tail(values, &IsMinOrMax)))
}

/// Recursive twin of [`null_object_count`]: head, then the tail, carrying
/// the running total.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `array_to_search` is absent.
pub fn null_object_count_recursive<T>(
    array_to_search: Option<&[Option<T>]>,
) -> Result<Count, CountError> {
    let values = require_sequence(array_to_search, ARGUMENT)?;
    Ok(into_count(recursion::count_front_accumulating(values, &IsNone)))
}
