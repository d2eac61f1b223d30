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

/// A single item of a 0/1 knapsack instance.
///
/// An item is a pair of a profit earned when the item is packed and a
/// weight consumed from the knapsack capacity. Both are strictly positive:
/// an item with zero profit is never worth packing and an item with zero
/// weight would always be packed, so neither belongs in an instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Item<T> {
    profit: T,
    weight: T,
}

impl<T> Item<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    /// Constructs a new `Item`.
    ///
    /// # Panics
    ///
    /// Panics if `profit` or `weight` is not strictly positive.
    pub fn new(profit: T, weight: T) -> Self {
        assert!(
            profit > T::zero(),
            "called `Item::new` with non-positive profit: {}",
            profit
        );
        assert!(
            weight > T::zero(),
            "called `Item::new` with non-positive weight: {}",
            weight
        );

        Self { profit, weight }
    }

    /// Returns the profit earned when this item is packed.
    #[inline]
    pub fn profit(&self) -> T {
        self.profit
    }

    /// Returns the weight this item consumes from the capacity.
    #[inline]
    pub fn weight(&self) -> T {
        self.weight
    }
}

impl<T> std::fmt::Display for Item<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item(profit: {}, weight: {})", self.profit, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_new_and_accessors() {
        let item = Item::<IntegerType>::new(60, 10);
        assert_eq!(item.profit(), 60);
        assert_eq!(item.weight(), 10);
    }

    #[test]
    #[should_panic(expected = "called `Item::new` with non-positive profit")]
    fn test_new_rejects_zero_profit() {
        let _ = Item::<IntegerType>::new(0, 10);
    }

    #[test]
    #[should_panic(expected = "called `Item::new` with non-positive weight")]
    fn test_new_rejects_negative_weight() {
        let _ = Item::<IntegerType>::new(60, -1);
    }

    #[test]
    fn test_display() {
        let item = Item::<IntegerType>::new(100, 20);
        assert_eq!(format!("{}", item), "Item(profit: 100, weight: 20)");
    }
}
