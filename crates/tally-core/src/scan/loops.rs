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

//! Iterative counters: one forward pass, three loop shapes.
//!
//! All three return the same total for every input. They differ only in
//! where the loop condition is checked: `count_for` lets the slice iterator
//! drive the loop, `count_while` checks an explicit index before each step,
//! and `count_do_while` runs the body first and checks afterwards, which is
//! why it needs its own guard for the empty sequence.

use crate::predicate::Predicate;

/// Counts matching elements with a `for` loop.
///
/// # Examples
///
/// ```rust
/// # use tally_core::scan::loops::count_for;
/// # use tally_core::predicate::IsNegative;
///
/// assert_eq!(count_for(&[-1, 0, -7, 3], &IsNegative), 2);
/// ```
pub fn count_for<T, P>(values: &[T], predicate: &P) -> usize
where
    P: Predicate<T> + ?Sized,
{
    let mut count = 0;
    for value in values {
        if predicate.matches(value) {
            count += 1;
        }
    }
    count
}

/// Counts matching elements with a pre-condition `while` loop.
pub fn count_while<T, P>(values: &[T], predicate: &P) -> usize
where
    P: Predicate<T> + ?Sized,
{
    let mut count = 0;
    let mut index = 0;
    while index < values.len() {
        if predicate.matches(&values[index]) {
            count += 1;
        }
        index += 1;
    }
    count
}

/// Counts matching elements with a post-condition loop.
pub fn count_do_while<T, P>(values: &[T], predicate: &P) -> usize
where
    P: Predicate<T> + ?Sized,
{
    if values.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut index = 0;
    loop {
        if predicate.matches(&values[index]) {
            count += 1;
        }
        index += 1;
        if index >= values.len() {
            break;
        }
    }
    count
}
