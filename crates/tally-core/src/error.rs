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

//! Error reporting and the input guard shared by every counter.
//!
//! Counting never fails once it has started: the only failure mode is a
//! rejected input, detected by `require_sequence` before the first element
//! is read. The guard also checks that the sequence length fits the 32-bit
//! `Count` returned to callers, so the counters themselves can convert
//! their `usize` totals without loss.

use std::fmt::Display;

/// The number of matching elements, as returned to callers.
pub type Count = i32;

/// The broad category of a `CountError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed an argument the counter cannot scan.
    InvalidInput,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input"),
        }
    }
}

/// Why an input sequence was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidInputReason {
    /// The sequence reference is absent.
    Absent,
    /// The sequence has more elements than a `Count` can represent.
    TooLong {
        /// The length of the rejected sequence.
        len: usize,
    },
}

/// Details about a rejected input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidInput {
    /// The name of the rejected parameter (e.g., "array_to_search").
    pub argument: &'static str,
    /// Why the parameter was rejected.
    pub reason: InvalidInputReason,
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            InvalidInputReason::Absent => {
                write!(f, "Argument '{}' must not be absent", self.argument)
            }
            InvalidInputReason::TooLong { len } => write!(
                f,
                "Argument '{}' has {} elements, at most {} can be counted",
                self.argument,
                len,
                Count::MAX
            ),
        }
    }
}

impl std::error::Error for InvalidInput {}

/// The error type for counting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountError {
    /// The input sequence was rejected before any element was read.
    InvalidInput(InvalidInput),
}

impl CountError {
    /// Creates the error raised for an absent sequence.
    #[inline]
    pub const fn absent(argument: &'static str) -> Self {
        Self::InvalidInput(InvalidInput {
            argument,
            reason: InvalidInputReason::Absent,
        })
    }

    /// Returns the category of this error.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }

    /// Returns the name of the rejected parameter.
    #[inline]
    pub const fn argument(&self) -> &'static str {
        match self {
            Self::InvalidInput(e) => e.argument,
        }
    }
}

impl Display for CountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "Invalid input: {}", e),
        }
    }
}

impl std::error::Error for CountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
        }
    }
}

impl From<InvalidInput> for CountError {
    fn from(e: InvalidInput) -> Self {
        Self::InvalidInput(e)
    }
}

/// Unwraps a possibly absent sequence, rejecting it before any element access.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `values` is `None`, or if its length
/// exceeds `Count::MAX`.
///
/// # Examples
///
/// ```rust
/// # use tally_core::error::{require_sequence, ErrorKind};
///
/// let values = [1, 2, 3];
/// assert_eq!(require_sequence(Some(&values[..]), "values").unwrap().len(), 3);
///
/// let err = require_sequence::<i32>(None, "values").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidInput);
/// assert_eq!(err.argument(), "values");
/// ```
#[inline]
pub fn require_sequence<'a, T>(
    values: Option<&'a [T]>,
    argument: &'static str,
) -> Result<&'a [T], CountError> {
    let Some(values) = values else {
        tracing::debug!(argument, "rejected absent sequence");
        return Err(CountError::absent(argument));
    };
    check_len(values.len(), argument)?;
    Ok(values)
}

#[inline]
fn check_len(len: usize, argument: &'static str) -> Result<(), InvalidInput> {
    if Count::try_from(len).is_ok() {
        return Ok(());
    }
    tracing::debug!(argument, len, "rejected sequence too long to count");
    Err(InvalidInput {
        argument,
        reason: InvalidInputReason::TooLong { len },
    })
}

/// Converts a total into a `Count`, saturating at `Count::MAX`.
///
/// Totals counted from a sequence accepted by `require_sequence` always fit.
#[inline]
pub fn into_count(total: usize) -> Count {
    Count::try_from(total).unwrap_or(Count::MAX)
}
