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

//! Recursive counters.
//!
//! Every function here computes exactly what the loop counters compute, in
//! a different recursion shape. Sub-sequences are views of the one input
//! slice (sub-slices or `Span`s); nothing is copied on the way down.
//!
//! The linear shapes recurse once per element, but never across more than
//! [`MAX_LINEAR_DEPTH`] elements: the input is cut into runs of at most that
//! length and the runs are taken in the order the shape visits elements.
//! Accumulating shapes carry their total from one run into the next.
//! `count_divide_and_conquer` and `count_halves_with` split at the midpoint
//! and stay at logarithmic depth.

use crate::{math::span::Span, predicate::Predicate};

/// The largest number of nested calls a linear shape makes.
pub const MAX_LINEAR_DEPTH: usize = 1024;

#[inline(always)]
fn increment<T, P>(predicate: &P, value: &T) -> usize
where
    P: Predicate<T> + ?Sized,
{
    usize::from(predicate.matches(value))
}

/// Walks the indices front to back, adding each result on the way back up.
///
/// # Examples
///
/// ```rust
/// # use tally_core::scan::recursion::count_forward_indexed;
/// # use tally_core::predicate::IsNegative;
///
/// assert_eq!(count_forward_indexed(&[-4, 2, -1], &IsNegative), 2);
/// ```
pub fn count_forward_indexed<T, P>(values: &[T], predicate: &P) -> usize
where
    P: Predicate<T> + ?Sized,
{
    // Results are added on the way back up, so the last run is tested first.
    values
        .rchunks(MAX_LINEAR_DEPTH)
        .map(|run| forward_indexed_from(run, predicate, 0))
        .sum()
}

fn forward_indexed_from<T, P>(values: &[T], predicate: &P, index: usize) -> usize
where
    P: Predicate<T> + ?Sized,
{
    if index >= values.len() {
        return 0;
    }
    forward_indexed_from(values, predicate, index + 1) + increment(predicate, &values[index])
}

/// Tests the head, recurses on the tail, adds on the way back up.
pub fn count_head_tail<T, P>(values: &[T], predicate: &P) -> usize
where
    P: Predicate<T> + ?Sized,
{
    values
        .rchunks(MAX_LINEAR_DEPTH)
        .map(|run| head_tail_of(run, predicate))
        .sum()
}

fn head_tail_of<T, P>(values: &[T], predicate: &P) -> usize
where
    P: Predicate<T> + ?Sized,
{
    match values {
        [] => 0,
        [first, rest @ ..] => head_tail_of(rest, predicate) + increment(predicate, first),
    }
}

/// Tests the last element, recurses on the prefix, adds on the way back up.
pub fn count_last_init<T, P>(values: &[T], predicate: &P) -> usize
where
    P: Predicate<T> + ?Sized,
{
    values
        .chunks(MAX_LINEAR_DEPTH)
        .map(|run| last_init_of(run, predicate))
        .sum()
}

fn last_init_of<T, P>(values: &[T], predicate: &P) -> usize
where
    P: Predicate<T> + ?Sized,
{
    match values {
        [] => 0,
        [init @ .., last] => last_init_of(init, predicate) + increment(predicate, last),
    }
}

/// Tests the head and carries the running total into the tail.
///
/// # Examples
///
/// ```rust
/// # use tally_core::scan::recursion::count_front_accumulating;
/// # use tally_core::predicate::IsNone;
///
/// assert_eq!(count_front_accumulating(&[None, Some(1), None], &IsNone), 2);
/// ```
pub fn count_front_accumulating<T, P>(values: &[T], predicate: &P) -> usize
where
    P: Predicate<T> + ?Sized,
{
    values
        .chunks(MAX_LINEAR_DEPTH)
        .fold(0, |total, run| front_accumulating_from(run, predicate, total))
}

fn front_accumulating_from<T, P>(values: &[T], predicate: &P, accumulator: usize) -> usize
where
    P: Predicate<T> + ?Sized,
{
    match values {
        [] => accumulator,
        [first, rest @ ..] => {
            front_accumulating_from(rest, predicate, accumulator + increment(predicate, first))
        }
    }
}

/// Walks the span from its last index to its first, carrying the running total.
pub fn count_backward_accumulating<T, P>(values: &[T], predicate: &P) -> usize
where
    P: Predicate<T> + ?Sized,
{
    values.rchunks(MAX_LINEAR_DEPTH).fold(0, |total, run| {
        backward_accumulating_from(run, predicate, Span::of_len(run.len()), total)
    })
}

fn backward_accumulating_from<T, P>(
    values: &[T],
    predicate: &P,
    span: Span,
    accumulator: usize,
) -> usize
where
    P: Predicate<T> + ?Sized,
{
    match span.split_last() {
        None => accumulator,
        Some((last, rest)) => backward_accumulating_from(
            values,
            predicate,
            rest,
            accumulator + increment(predicate, &values[last]),
        ),
    }
}

/// Counts down the number of elements still to visit, carrying the running total.
///
/// With `remaining` elements left in a run, the next element is at
/// `run.len() - remaining`, so the walk runs front to back.
pub fn count_remaining_accumulating<T, P>(values: &[T], predicate: &P) -> usize
where
    P: Predicate<T> + ?Sized,
{
    values.chunks(MAX_LINEAR_DEPTH).fold(0, |total, run| {
        remaining_accumulating_from(run, predicate, run.len(), total)
    })
}

fn remaining_accumulating_from<T, P>(
    values: &[T],
    predicate: &P,
    remaining: usize,
    accumulator: usize,
) -> usize
where
    P: Predicate<T> + ?Sized,
{
    if remaining == 0 {
        return accumulator;
    }
    let value = &values[values.len() - remaining];
    remaining_accumulating_from(
        values,
        predicate,
        remaining - 1,
        accumulator + increment(predicate, value),
    )
}

/// Splits at the midpoint and sums both halves, down to single elements.
///
/// For a span of odd length the left half receives the smaller share
/// (`[start, mid)` with `mid = start + len / 2`).
///
/// # Examples
///
/// ```rust
/// # use tally_core::scan::recursion::count_divide_and_conquer;
/// # use tally_core::predicate::RoundsToEven;
///
/// assert_eq!(count_divide_and_conquer(&[1.5, 2.5, 3.4], &RoundsToEven), 2);
/// ```
pub fn count_divide_and_conquer<T, P>(values: &[T], predicate: &P) -> usize
where
    P: Predicate<T> + ?Sized,
{
    divide_and_conquer_in(values, predicate, Span::of_len(values.len()))
}

fn divide_and_conquer_in<T, P>(values: &[T], predicate: &P, span: Span) -> usize
where
    P: Predicate<T> + ?Sized,
{
    match span.len() {
        0 => 0,
        1 => increment(predicate, &values[span.start()]),
        _ => {
            let (left, right) = span.halves();
            divide_and_conquer_in(values, predicate, left)
                + divide_and_conquer_in(values, predicate, right)
        }
    }
}

/// Splits once at the midpoint and counts each half with `count_half`.
///
/// # Examples
///
/// ```rust
/// # use tally_core::scan::recursion::{count_front_accumulating, count_halves_with};
/// # use tally_core::predicate::IsFalse;
///
/// let values = [false, true, false, false, true];
/// assert_eq!(count_halves_with(&values, &IsFalse, count_front_accumulating), 3);
/// ```
pub fn count_halves_with<T, P, F>(values: &[T], predicate: &P, count_half: F) -> usize
where
    P: Predicate<T> + ?Sized,
    F: Fn(&[T], &P) -> usize,
{
    if values.is_empty() {
        return 0;
    }
    let (left, right) = Span::of_len(values.len()).halves();
    count_half(left.slice(values), predicate) + count_half(right.slice(values), predicate)
}
