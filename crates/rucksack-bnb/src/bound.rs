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

//! The fractional-relaxation profit bound.
//!
//! For a partial packing (every item before `first_undecided` is fixed,
//! the rest are free) the bound answers: what is the most profit any
//! completion of this packing could possibly reach? It relaxes the 0/1
//! constraint on the free items and fills the remaining capacity
//! greedily in ratio order, taking a fractional slice of the first item
//! that no longer fits whole.
//!
//! The relaxation only ever widens the feasible set, so the bound is an
//! upper bound on every integral completion. Discarding a subproblem
//! whose bound does not beat the incumbent therefore never discards an
//! optimal packing.

use crate::catalog::Catalog;
use rucksack_model::index::ItemIndex;
use rucksack_search::num::SolverNumeric;

#[inline(always)]
fn to_f64<T: Into<i64>>(value: T) -> f64 {
    let value: i64 = value.into();
    value as f64
}

/// Computes the fractional-relaxation upper bound for a partial packing.
///
/// `profit` and `weight` are the totals of the items already packed;
/// `first_undecided` is the catalog position of the first free item.
/// Items must be considered in catalog (descending ratio) order for the
/// greedy fill to be the true relaxation optimum.
///
/// A packing with no remaining capacity (`weight >= capacity`) cannot be
/// extended by any further item, so its bound is 0.0: such a subproblem
/// carries no potential beyond what has already been offered to the
/// incumbent.
///
/// # Panics
///
/// Panics in debug builds if `first_undecided` exceeds the catalog length.
pub fn fractional_bound<T>(
    catalog: &Catalog<T>,
    first_undecided: usize,
    profit: T,
    weight: T,
) -> f64
where
    T: SolverNumeric,
{
    debug_assert!(
        first_undecided <= catalog.len(),
        "called `fractional_bound` with first undecided index out of bounds: the len is {} but the index is {}",
        catalog.len(),
        first_undecided
    );

    if weight >= catalog.capacity() {
        return 0.0;
    }

    let mut bound = to_f64(profit);
    let mut remaining = catalog.capacity() - weight;

    for index in first_undecided..catalog.len() {
        let item = ItemIndex::new(index);
        let item_weight = catalog.weight(item);
        if item_weight <= remaining {
            bound += to_f64(catalog.profit(item));
            remaining = remaining - item_weight;
        } else {
            bound += to_f64(remaining) * catalog.ratio(item);
            break;
        }
    }

    bound
}
