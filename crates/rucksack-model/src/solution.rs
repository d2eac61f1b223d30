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

use num_traits::{PrimInt, Signed};

/// The committed outcome of packing a knapsack: the total profit earned
/// and the total weight consumed.
///
/// A `Solution` is always a consistent pair taken from one feasible packing.
/// The empty packing `(0, 0)` is feasible for every instance, which is why
/// searches can start from `Solution::empty` instead of from "no solution".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Solution<T> {
    profit: T,
    weight: T,
}

impl<T> Solution<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    /// Constructs a new `Solution`.
    ///
    /// # Panics
    ///
    /// Panics if `profit` or `weight` is negative.
    pub fn new(profit: T, weight: T) -> Self {
        assert!(
            profit >= T::zero(),
            "called `Solution::new` with negative profit: {}",
            profit
        );
        assert!(
            weight >= T::zero(),
            "called `Solution::new` with negative weight: {}",
            weight
        );

        Self { profit, weight }
    }

    /// Returns the empty packing: zero profit, zero weight.
    #[inline]
    pub fn empty() -> Self {
        Self {
            profit: T::zero(),
            weight: T::zero(),
        }
    }

    /// Returns the total profit of this packing.
    #[inline]
    pub fn profit(&self) -> T {
        self.profit
    }

    /// Returns the total weight of this packing.
    #[inline]
    pub fn weight(&self) -> T {
        self.weight
    }

    /// Returns the solution as a `(profit, weight)` pair.
    #[inline]
    pub fn into_pair(self) -> (T, T) {
        (self.profit, self.weight)
    }
}

impl<T> std::fmt::Display for Solution<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Solution(profit: {}, weight: {})",
            self.profit, self.weight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_new_and_accessors() {
        let solution = Solution::<IntegerType>::new(220, 50);
        assert_eq!(solution.profit(), 220);
        assert_eq!(solution.weight(), 50);
        assert_eq!(solution.into_pair(), (220, 50));
    }

    #[test]
    fn test_empty_is_all_zero() {
        let solution = Solution::<IntegerType>::empty();
        assert_eq!(solution.into_pair(), (0, 0));
    }

    #[test]
    #[should_panic(expected = "called `Solution::new` with negative profit")]
    fn test_new_rejects_negative_profit() {
        let _ = Solution::<IntegerType>::new(-1, 0);
    }

    #[test]
    #[should_panic(expected = "called `Solution::new` with negative weight")]
    fn test_new_rejects_negative_weight() {
        let _ = Solution::<IntegerType>::new(0, -1);
    }

    #[test]
    fn test_display() {
        let solution = Solution::<IntegerType>::new(19, 11);
        assert_eq!(format!("{}", solution), "Solution(profit: 19, weight: 11)");
    }
}
