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

//! # Index Spans
//!
//! Half-open index ranges `[start, end)` over a shared, read-only slice.
//! Recursive counters walk a `Span` instead of slicing the input into fresh
//! sub-arrays on every call, so each step is O(1) and allocation free.
//!
//! ## Usage
//!
//! ```rust
//! use tally_core::math::span::Span;
//!
//! let values = [1, 2, 3, 4, 5];
//! let (left, right) = Span::of_len(values.len()).halves();
//!
//! assert_eq!(left.slice(&values), &[1, 2]);
//! assert_eq!(right.slice(&values), &[3, 4, 5]);
//! ```

/// A half-open index range `[start, end)`.
///
/// # Invariants
/// `start` must always be less than or equal to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start_inclusive: usize,
    end_exclusive: usize,
}

impl Span {
    #[inline]
    fn new_unchecked(start_inclusive: usize, end_exclusive: usize) -> Self {
        debug_assert!(
            start_inclusive <= end_exclusive,
            "Invalid span: start_inclusive must be less than or equal to end_exclusive"
        );
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// Creates the span `[0, len)` covering a whole sequence of length `len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tally_core::math::span::Span;
    ///
    /// let span = Span::of_len(4);
    /// assert_eq!((span.start(), span.len()), (0, 4));
    /// ```
    #[inline]
    pub const fn of_len(len: usize) -> Self {
        Self {
            start_inclusive: 0,
            end_exclusive: len,
        }
    }

    /// Returns the inclusive start index.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start_inclusive
    }

    /// Returns the number of indices in the span.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end_exclusive - self.start_inclusive
    }

    /// Returns `true` if the span contains no indices.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start_inclusive == self.end_exclusive
    }

    // `start + len / 2`: odd lengths give the left side the smaller share,
    // and the sum cannot overflow.
    #[inline]
    const fn midpoint(&self) -> usize {
        self.start_inclusive + (self.len() >> 1)
    }

    /// Splits the span at its midpoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tally_core::math::span::Span;
    ///
    /// let (left, right) = Span::of_len(5).halves();
    /// assert_eq!((left.len(), right.len()), (2, 3));
    /// ```
    #[inline]
    pub fn halves(&self) -> (Self, Self) {
        let mid = self.midpoint();
        (
            Self::new_unchecked(self.start_inclusive, mid),
            Self::new_unchecked(mid, self.end_exclusive),
        )
    }

    /// Returns the last index and the span that precedes it.
    #[inline]
    pub fn split_last(&self) -> Option<(usize, Self)> {
        if self.is_empty() {
            return None;
        }
        let last = self.end_exclusive - 1;
        Some((last, Self::new_unchecked(self.start_inclusive, last)))
    }

    /// Returns the part of `values` covered by the span.
    ///
    /// # Panics
    ///
    /// Panics if the span reaches past `values.len()`.
    #[inline]
    pub fn slice<'a, T>(&self, values: &'a [T]) -> &'a [T] {
        &values[self.start_inclusive..self.end_exclusive]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_len() {
        let span = Span::of_len(10);
        assert_eq!(span.start(), 0);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
        assert!(Span::of_len(0).is_empty());
    }

    #[test]
    #[should_panic(expected = "Invalid span")]
    #[cfg(debug_assertions)]
    fn test_new_unchecked_rejects_reversed_bounds_in_debug() {
        Span::new_unchecked(10, 5);
    }

    #[test]
    fn test_midpoint() {
        // Even length
        assert_eq!(Span::of_len(10).midpoint(), 5);
        // Odd length rounds toward the start
        assert_eq!(Span::of_len(3).midpoint(), 1);
        assert_eq!(Span::of_len(1).midpoint(), 0);
        // Offset start
        assert_eq!(Span::new_unchecked(6, 11).midpoint(), 8);
        // No overflow near the top of the range
        assert_eq!(
            Span::new_unchecked(usize::MAX - 4, usize::MAX).midpoint(),
            usize::MAX - 2
        );
    }

    #[test]
    fn test_halves_odd_length_left_is_smaller() {
        let (left, right) = Span::of_len(5).halves();
        assert_eq!(left, Span::new_unchecked(0, 2));
        assert_eq!(right, Span::new_unchecked(2, 5));
    }

    #[test]
    fn test_halves_single_and_empty() {
        let (left, right) = Span::of_len(1).halves();
        assert!(left.is_empty());
        assert_eq!(right, Span::of_len(1));

        let (left, right) = Span::of_len(0).halves();
        assert!(left.is_empty());
        assert!(right.is_empty());
    }

    #[test]
    fn test_halves_cover_every_index_once() {
        for len in 0..64 {
            let (left, right) = Span::of_len(len).halves();
            assert_eq!(left.start() + left.len(), right.start());
            assert_eq!(left.len() + right.len(), len);
            assert!(left.len() <= right.len());
        }
    }

    #[test]
    fn test_split_last() {
        let span = Span::new_unchecked(2, 5);
        assert_eq!(span.split_last(), Some((4, Span::new_unchecked(2, 4))));
        assert!(Span::new_unchecked(4, 4).split_last().is_none());
    }

    #[test]
    fn test_slice() {
        let values = ['a', 'b', 'c', 'd'];
        assert_eq!(Span::new_unchecked(1, 3).slice(&values), &['b', 'c']);
        assert!(Span::new_unchecked(4, 4).slice(&values).is_empty());
    }
}
