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

use crate::{index::ItemIndex, item::Item};
use num_traits::{PrimInt, Signed};

/// Represents the theoretical search space size of a 0/1 knapsack instance.
///
/// The full decision tree over $N$ items is binary: level $k$ holds $2^k$
/// nodes, one per subset of decisions on the first $k$ items, for a total of
/// $2^{N+1} - 1$ nodes. Since these numbers exceed standard integer limits
/// quickly, this struct stores the value in **Logarithmic Space**
/// ($\log_{10}$).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Complexity {
    /// The base-10 logarithm of the total search space size.
    log_val: f64,
}

impl Complexity {
    /// Calculates the complexity for a given number of items.
    pub fn new(num_items: usize) -> Self {
        // Helper to compute log10(10^a + 10^b) without leaving log space.
        let log10_add = |a: f64, b: f64| -> f64 {
            let max = a.max(b);
            let min = a.min(b);
            max + (1.0 + 10.0_f64.powf(min - max)).log10()
        };

        // Level 0 is the root alone: log10(1) = 0.0.
        let mut current_level_log = 0.0;
        let mut total_sum_log = 0.0;

        let doubling_log = 2.0_f64.log10();
        for _ in 1..=num_items {
            // Each decided item doubles the level size.
            current_level_log += doubling_log;
            total_sum_log = log10_add(total_sum_log, current_level_log);
        }

        Complexity {
            log_val: total_sum_log,
        }
    }

    /// Returns the percentage of the search space that was actually explored,
    /// or `Some(0.0)` when the space is too large for the ratio to be
    /// meaningful in `f64`.
    pub fn coverage(&self, nodes_explored: u64) -> Option<f64> {
        if self.log_val > 15.0 {
            return Some(0.0);
        }

        let total_size = 10.0_f64.powf(self.log_val);
        if total_size == 0.0 {
            return None;
        }

        Some((nodes_explored as f64 / total_size) * 100.0)
    }

    /// Returns the exponent (order of magnitude).
    #[inline]
    pub fn exponent(&self) -> u64 {
        self.log_val.floor() as u64
    }

    /// Returns the mantissa (coefficient).
    #[inline]
    pub fn mantissa(&self) -> f64 {
        let fractional_part = self.log_val - self.log_val.floor();
        10.0_f64.powf(fractional_part)
    }

    /// Returns the raw log10 value.
    #[inline]
    pub fn raw(&self) -> f64 {
        self.log_val
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} × 10^{}", self.mantissa(), self.exponent())
    }
}

impl std::fmt::Debug for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Complexity(log10={:.4})", self.log_val)
    }
}

/// An immutable 0/1 knapsack problem instance.
///
/// Holds the knapsack capacity and the items in their original input order.
/// The solving engine derives its own ratio-sorted view from this data, so
/// an `Instance` never changes after construction and can be shared freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance<T> {
    capacity: T,
    items: Vec<Item<T>>,
}

impl<T> Instance<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    /// Constructs a new `Instance`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is negative. A zero capacity is fine; such an
    /// instance is degenerate and solved without any search.
    pub fn new(capacity: T, items: Vec<Item<T>>) -> Self {
        assert!(
            capacity >= T::zero(),
            "called `Instance::new` with negative capacity: {}",
            capacity
        );

        Self { capacity, items }
    }

    /// Returns the knapsack capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rucksack_model::instance::Instance;
    /// # use rucksack_model::item::Item;
    ///
    /// let instance = Instance::<i64>::new(50, vec![Item::new(60, 10)]);
    /// assert_eq!(instance.capacity(), 50);
    /// ```
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the number of items in the instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rucksack_model::instance::Instance;
    /// # use rucksack_model::item::Item;
    ///
    /// let instance = Instance::<i64>::new(50, vec![Item::new(60, 10), Item::new(100, 20)]);
    /// assert_eq!(instance.num_items(), 2);
    /// ```
    #[inline]
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Returns the item at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is out of bounds.
    #[inline]
    pub fn item(&self, item_index: ItemIndex) -> Item<T> {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items(),
            "called `Instance::item` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        self.items[index]
    }

    /// Returns a slice of all items in input order.
    #[inline]
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Returns `true` if the instance admits no packing decisions at all,
    /// i.e. it has no items or a zero capacity. The optimal packing of a
    /// trivial instance is the empty one.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.items.is_empty() || self.capacity.is_zero()
    }

    /// Returns the size of the full binary decision tree over this instance.
    #[inline]
    pub fn complexity(&self) -> Complexity {
        Complexity::new(self.num_items())
    }
}

impl<T> std::fmt::Display for Instance<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Instance Summary")?;
        writeln!(f, "   Capacity: {}", self.capacity)?;
        writeln!(f, "   Items:    {}", self.num_items())?;

        if self.items.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "   {:<8} | {:<10} | {:<10}", "Item", "Profit", "Weight")?;
        writeln!(f, "   {:-<8}-+-{:-<10}-+-{:-<10}", "", "", "")?;
        for (i, item) in self.items.iter().enumerate() {
            writeln!(
                f,
                "   {:<8} | {:<10} | {:<10}",
                i,
                item.profit(),
                item.weight()
            )?;
        }

        Ok(())
    }
}
