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

//! Subproblems of the branch-and-bound search.

use num_traits::PrimInt;
use std::cmp::Ordering;

/// One open subproblem: a prefix of decided items plus its relaxation bound.
///
/// `depth` counts the decided items, so it doubles as the catalog position
/// of the first undecided item. `profit` and `weight` are the totals of
/// the included items among the decided prefix, and `bound` is the
/// fractional-relaxation upper bound on any completion.
///
/// Nodes order by `bound` so that a max-heap of them pops the most
/// promising subproblem first. Ties prefer deeper nodes (closer to a
/// leaf), then higher packed profit, then lower packed weight, which
/// keeps the pop order deterministic for any fixed heap content.
#[derive(Debug, Clone, Copy)]
pub struct Node<T> {
    depth: usize,
    profit: T,
    weight: T,
    bound: f64,
}

impl<T> Node<T>
where
    T: PrimInt,
{
    /// Creates a new node.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `bound` is NaN or infinite.
    pub fn new(depth: usize, profit: T, weight: T, bound: f64) -> Self {
        debug_assert!(
            bound.is_finite(),
            "called `Node::new` with non-finite bound: {}",
            bound
        );

        Self {
            depth,
            profit,
            weight,
            bound,
        }
    }

    /// Creates the root node, with no items decided yet.
    pub fn root(bound: f64) -> Self {
        Self::new(0, T::zero(), T::zero(), bound)
    }

    /// Returns the number of decided items, which is also the catalog
    /// position of the first undecided item.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the packed profit of the decided prefix.
    #[inline]
    pub fn profit(&self) -> T {
        self.profit
    }

    /// Returns the packed weight of the decided prefix.
    #[inline]
    pub fn weight(&self) -> T {
        self.weight
    }

    /// Returns the fractional-relaxation upper bound.
    #[inline]
    pub fn bound(&self) -> f64 {
        self.bound
    }
}

impl<T> Ord for Node<T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.bound
            .total_cmp(&other.bound)
            .then_with(|| self.depth.cmp(&other.depth))
            .then_with(|| self.profit.cmp(&other.profit))
            .then_with(|| other.weight.cmp(&self.weight))
    }
}

impl<T> PartialOrd for Node<T>
where
    T: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Node<T>
where
    T: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Node<T> where T: Ord {}

impl<T> std::fmt::Display for Node<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Node(depth: {}, profit: {}, weight: {}, bound: {})",
            self.depth, self.profit, self.weight, self.bound
        )
    }
}
