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

//! The solver-facing view of a knapsack instance.
//!
//! A `Catalog` is built once per solve, before any worker thread starts.
//! It re-orders the instance items by descending profit/weight ratio (the
//! order both the greedy bound relaxation and the branching scheme walk
//! them in) and lays the data out as parallel vectors, so the inner loops
//! touch one flat array per field. After construction the catalog is
//! read-only and shared across workers by plain reference.

use rucksack_model::{index::ItemIndex, instance::Instance};
use rucksack_search::num::SolverNumeric;

#[inline(always)]
fn ratio_of<T: SolverNumeric>(profit: T, weight: T) -> f64 {
    let profit: i64 = profit.into();
    let weight: i64 = weight.into();
    profit as f64 / weight as f64
}

/// A read-only, ratio-sorted item table plus the knapsack capacity.
///
/// Position `i` in the catalog is the item with the `i`-th highest
/// profit/weight ratio; ties keep their input order. A frontier node's
/// depth is an index into this ordering: all items before it are decided,
/// all items from it onward are still free.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    capacity: T,
    profits: Vec<T>,
    weights: Vec<T>,
    ratios: Vec<f64>,
}

impl<T> Catalog<T>
where
    T: SolverNumeric,
{
    /// Builds the catalog for the given instance.
    ///
    /// Sorting is stable, so items with equal ratios stay in input order.
    pub fn from_instance(instance: &Instance<T>) -> Self {
        let mut order: Vec<(T, T, f64)> = instance
            .items()
            .iter()
            .map(|item| (item.profit(), item.weight(), ratio_of(item.profit(), item.weight())))
            .collect();
        order.sort_by(|a, b| b.2.total_cmp(&a.2));

        let mut profits = Vec::with_capacity(order.len());
        let mut weights = Vec::with_capacity(order.len());
        let mut ratios = Vec::with_capacity(order.len());
        for (profit, weight, ratio) in order {
            profits.push(profit);
            weights.push(weight);
            ratios.push(ratio);
        }

        Self {
            capacity: instance.capacity(),
            profits,
            weights,
            ratios,
        }
    }

    /// Returns the knapsack capacity.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the number of items in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.profits.len()
    }

    /// Returns `true` if the catalog holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.profits.is_empty()
    }

    /// Returns the profit of the item at the given catalog position.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is out of bounds.
    #[inline]
    pub fn profit(&self, item_index: ItemIndex) -> T {
        let index = item_index.get();
        debug_assert!(
            index < self.len(),
            "called `Catalog::profit` with item index out of bounds: the len is {} but the index is {}",
            self.len(),
            index
        );

        self.profits[index]
    }

    /// Returns the weight of the item at the given catalog position.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is out of bounds.
    #[inline]
    pub fn weight(&self, item_index: ItemIndex) -> T {
        let index = item_index.get();
        debug_assert!(
            index < self.len(),
            "called `Catalog::weight` with item index out of bounds: the len is {} but the index is {}",
            self.len(),
            index
        );

        self.weights[index]
    }

    /// Returns the profit/weight ratio of the item at the given catalog
    /// position.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is out of bounds.
    #[inline]
    pub fn ratio(&self, item_index: ItemIndex) -> f64 {
        let index = item_index.get();
        debug_assert!(
            index < self.len(),
            "called `Catalog::ratio` with item index out of bounds: the len is {} but the index is {}",
            self.len(),
            index
        );

        self.ratios[index]
    }

    /// Returns all profits in catalog order.
    #[inline]
    pub fn profits(&self) -> &[T] {
        &self.profits
    }

    /// Returns all weights in catalog order.
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Returns all profit/weight ratios in catalog order.
    #[inline]
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }
}

impl<T> std::fmt::Display for Catalog<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Catalog(items: {}, capacity: {})",
            self.len(),
            self.capacity
        )
    }
}
