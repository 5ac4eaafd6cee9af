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

//! # Traversal Strategies
//!
//! Counting the elements of a sequence that satisfy a `Predicate` can be
//! done in many ways that must all agree. This module names the strategies
//! and dispatches to them.
//!
//! ## Submodules
//!
//! - `loops`: `for`, `while` and post-condition (`do`/`while`) loops.
//! - `recursion`: linear recursion shapes (head/tail, prefix/last, index
//!   walks, with and without an accumulator) and midpoint
//!   divide-and-conquer over `Span`s.
//!
//! ## Usage
//!
//! ```rust
//! use tally_core::predicate::IsFalse;
//! use tally_core::scan::{Traversal, count_with};
//!
//! let values = [false, true, false];
//! for traversal in Traversal::ALL {
//!     assert_eq!(count_with(traversal, Some(&values[..]), "values", &IsFalse), Ok(2));
//! }
//! assert!(count_with::<bool, _>(Traversal::ForLoop, None, "values", &IsFalse).is_err());
//! ```

pub mod loops;
pub mod recursion;

use crate::{
    error::{Count, CountError, into_count, require_sequence},
    predicate::Predicate,
};

/// A strategy for visiting every element of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// A `for` loop over the elements.
    ForLoop,
    /// A `while` loop over an explicit index.
    WhileLoop,
    /// A post-condition loop: body first, condition afterwards.
    DoWhileLoop,
    /// One element per call, carrying the running total.
    LinearRecursion,
    /// Midpoint splitting, summing both halves.
    DivideAndConquer,
}

impl Traversal {
    /// Every traversal, loops first.
    pub const ALL: [Traversal; 5] = [
        Traversal::ForLoop,
        Traversal::WhileLoop,
        Traversal::DoWhileLoop,
        Traversal::LinearRecursion,
        Traversal::DivideAndConquer,
    ];

    /// Returns a short, stable name for the traversal.
    pub const fn name(&self) -> &'static str {
        match self {
            Traversal::ForLoop => "for",
            Traversal::WhileLoop => "while",
            Traversal::DoWhileLoop => "do-while",
            Traversal::LinearRecursion => "linear-recursion",
            Traversal::DivideAndConquer => "divide-and-conquer",
        }
    }

    /// Counts the elements of an already guarded slice.
    pub(crate) fn count<T, P>(&self, values: &[T], predicate: &P) -> usize
    where
        P: Predicate<T> + ?Sized,
    {
        match self {
            Traversal::ForLoop => loops::count_for(values, predicate),
            Traversal::WhileLoop => loops::count_while(values, predicate),
            Traversal::DoWhileLoop => loops::count_do_while(values, predicate),
            Traversal::LinearRecursion => recursion::count_front_accumulating(values, predicate),
            Traversal::DivideAndConquer => recursion::count_divide_and_conquer(values, predicate),
        }
    }
}

impl std::fmt::Display for Traversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Guards `values` and counts the elements matching `predicate`.
///
/// # Errors
///
/// Returns `CountError::InvalidInput` if `values` is absent; no element is
/// read in that case.
pub fn count_with<T, P>(
    traversal: Traversal,
    values: Option<&[T]>,
    argument: &'static str,
    predicate: &P,
) -> Result<Count, CountError>
where
    P: Predicate<T> + ?Sized,
{
    let values = require_sequence(values, argument)?;
    let count = traversal.count(values, predicate);
    tracing::trace!(
        traversal = traversal.name(),
        len = values.len(),
        count,
        "counted matching elements"
    );
    Ok(into_count(count))
}
