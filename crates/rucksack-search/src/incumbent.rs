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

//! # Shared Incumbent (Best Packing Holder)
//!
//! A concurrent container for the best packing discovered so far during
//! search. It exposes a fast, lock-free profit read via an atomic and stores
//! the committed `Solution<T>` behind a `Mutex` as the source of truth.
//! Designed for exact search pipelines where multiple threads propose
//! improvements.
//!
//! ## Motivation
//!
//! - Fast pruning checks: a cheap atomic profit hint lets workers compare
//!   node bounds against the incumbent without locking.
//! - Correctness by locking: the authoritative packing is protected by a
//!   `Mutex`, so an observed `(profit, weight)` pair always comes from one
//!   committed solution and is never torn.
//! - No sentinel needed: the empty packing `(0, 0)` is feasible for every
//!   instance, so the incumbent starts there instead of at "nothing yet".
//!
//! ## Highlights
//!
//! - `try_install(&Solution<T>) -> bool` installs strictly better candidates,
//!   updating both the committed packing and the atomic profit hint. Under
//!   contention the improvements serialize at the lock; a candidate equal to
//!   the incumbent never replaces it.
//! - `snapshot() -> Solution<T>` returns the committed packing as one
//!   consistent pair.
//! - `best_profit() -> i64` and `best_profit_as::<T>() -> Result<T, _>` for
//!   quick reads and typed conversions.
//! - The hint is read and written with `Ordering::Relaxed`. A reader may see
//!   a slightly stale (lower) profit, which can only admit extra work into
//!   the search, never discard an improving candidate.
//!
//! ## Usage
//!
//! ```rust
//! use rucksack_search::incumbent::SharedIncumbent;
//! use rucksack_model::solution::Solution;
//!
//! let inc: SharedIncumbent<i64> = SharedIncumbent::new();
//! let candidate = Solution::new(100, 20);
//!
//! if inc.try_install(&candidate) {
//!     // Installed as new best
//! }
//!
//! let best = inc.best_profit(); // fast atomic read
//! let snap = inc.snapshot();    // the committed (profit, weight) pair
//! ```

use num_traits::{PrimInt, Signed};
use rucksack_model::solution::Solution;
use std::sync::{Mutex, atomic::AtomicI64};

/// A concurrent holder for the best (incumbent) packing found during search.
///
/// This structure maintains:
/// - an `AtomicI64` profit hint for fast, lock-free reads, and
/// - a `Mutex<Solution<T>>` for the committed packing, which is the source
///   of truth.
///
/// Concurrency and memory ordering:
/// - The profit hint is loaded/stored with `Ordering::Relaxed`. This is
///   sufficient because the hint only short-circuits work (e.g., skipping
///   the lock when a candidate is obviously worse). All correctness-sensitive
///   state lives behind the `Mutex`.
///
/// Initialization:
/// - Both tiers start at the empty packing: the hint at `0`, the committed
///   solution at `(0, 0)`. Maximization means any real improvement has a
///   strictly positive profit, so zero doubles as "nothing packed yet"
///   without being a sentinel.
#[derive(Debug)]
pub struct SharedIncumbent<T> {
    /// Profit of the incumbent packing stored as `i64` for atomic access.
    ///
    /// When Rust gains support for generic atomics (e.g., `Atomic<T>`),
    /// consider migrating to a type that matches the profit representation.
    ///
    /// See the tracking issue:
    /// - Generic atomics: [rust-lang/rust#130539](https://github.com/rust-lang/rust/issues/130539)
    best_profit: AtomicI64,

    /// The incumbent packing, protected by a mutex for safe concurrent access.
    solution: Mutex<Solution<T>>,
}

impl<T> Default for SharedIncumbent<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for SharedIncumbent<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Incumbent(best_profit: {})", self.best_profit())
    }
}

impl<T> SharedIncumbent<T> {
    /// Creates a new shared incumbent holding the empty packing.
    #[inline]
    pub fn new() -> Self
    where
        T: PrimInt + Signed + std::fmt::Display,
    {
        SharedIncumbent {
            best_profit: AtomicI64::new(0),
            solution: Mutex::new(Solution::empty()),
        }
    }

    /// Returns the current best profit.
    #[inline]
    pub fn best_profit(&self) -> i64 {
        self.best_profit.load(std::sync::atomic::Ordering::Relaxed)
    }

    /// Returns the current best profit converted to type T.
    #[inline]
    pub fn best_profit_as(&self) -> Result<T, <T as std::convert::TryFrom<i64>>::Error>
    where
        T: TryFrom<i64>,
    {
        let val = self.best_profit.load(std::sync::atomic::Ordering::Relaxed);
        T::try_from(val)
    }

    /// Returns the committed incumbent packing as one consistent pair.
    #[inline]
    pub fn snapshot(&self) -> Solution<T>
    where
        T: Copy,
    {
        let guard = self.solution.lock().unwrap();
        *guard
    }

    /// Attempts to install the given candidate packing as the new incumbent.
    /// Returns `true` if the candidate was installed, `false` otherwise.
    ///
    /// Only a candidate with a strictly greater profit replaces the
    /// incumbent. A candidate matching the incumbent profit is rejected,
    /// even if its weight differs; the first packing to reach a profit
    /// level keeps it.
    #[inline]
    pub fn try_install(&self, candidate: &Solution<T>) -> bool
    where
        T: PrimInt + Signed + Into<i64> + std::fmt::Display,
    {
        let candidate_profit: i64 = candidate.profit().into();

        // We are maximizing, so higher is better.
        if candidate_profit <= self.best_profit() {
            return false;
        }

        let mut guard = self.solution.lock().unwrap();
        // Another thread might have installed a better packing while we were
        // waiting for the lock. Compare against the *actual* solution in the
        // mutex, not the atomic hint we read earlier.
        let current_profit: i64 = guard.profit().into();
        if candidate_profit <= current_profit {
            return false;
        }

        // Install the new incumbent, then publish the hint.
        *guard = *candidate;
        self.best_profit
            .store(candidate_profit, std::sync::atomic::Ordering::Relaxed);

        true
    }
}

#[cfg(test)]
mod tests {
    use super::SharedIncumbent;
    use rucksack_model::solution::Solution;
    use std::sync::Arc;
    use std::thread;

    fn make_solution(profit: i64) -> Solution<i64> {
        // Tie the weight to the profit so torn reads are detectable.
        Solution::new(profit, profit * 2)
    }

    #[test]
    fn test_initial_state() {
        let inc: SharedIncumbent<i64> = SharedIncumbent::new();
        assert_eq!(inc.best_profit(), 0);
        assert_eq!(inc.snapshot(), Solution::empty());
    }

    #[test]
    fn test_install_better_solution_updates_hint_and_snapshot() {
        let inc: SharedIncumbent<i64> = SharedIncumbent::new();
        let s = make_solution(100);

        let installed = inc.try_install(&s);
        assert!(installed);
        assert_eq!(inc.best_profit(), 100);

        let snap = inc.snapshot();
        assert_eq!(snap.profit(), 100);
        assert_eq!(snap.weight(), 200);
    }

    #[test]
    fn test_reject_worse_or_equal_candidates() {
        let inc: SharedIncumbent<i64> = SharedIncumbent::new();

        let best = make_solution(100);
        assert!(inc.try_install(&best));
        assert_eq!(inc.best_profit(), 100);

        let worse = make_solution(50);
        assert!(!inc.try_install(&worse));
        assert_eq!(inc.best_profit(), 100);

        // Same profit with a different weight must not replace the
        // incumbent either; the first packing at a profit level wins.
        let equal = Solution::new(100, 30);
        assert!(!inc.try_install(&equal));
        assert_eq!(inc.snapshot().weight(), 200);
    }

    #[test]
    fn test_zero_profit_candidate_never_installs() {
        // The incumbent already holds the empty packing, so a zero-profit
        // candidate is never an improvement.
        let inc: SharedIncumbent<i64> = SharedIncumbent::new();
        assert!(!inc.try_install(&Solution::empty()));
        assert!(!inc.try_install(&Solution::new(0, 5)));
        assert_eq!(inc.snapshot(), Solution::empty());
    }

    #[test]
    fn test_concurrent_installs_maximum_wins() {
        let inc = Arc::new(SharedIncumbent::<i64>::new());
        let profits = vec![300, 200, 400, 50, 120, 75, 500, 60, 90];

        let mut handles = Vec::new();
        for profit in profits.iter().cloned() {
            let inc_cloned = Arc::clone(&inc);
            handles.push(thread::spawn(move || {
                let s = make_solution(profit);
                inc_cloned.try_install(&s)
            }));
        }

        // Join threads and collect install outcomes
        let results = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>();
        assert!(
            results.iter().any(|&r| r),
            "at least one install should succeed"
        );

        // The final state must reflect the maximum profit, and the snapshot
        // must be the matching committed pair.
        let max_profit = *profits.iter().max().unwrap();
        assert_eq!(inc.best_profit(), max_profit);

        let snap = inc.snapshot();
        assert_eq!(snap.profit(), max_profit);
        assert_eq!(snap.weight(), max_profit * 2);
    }

    #[test]
    fn test_snapshot_is_never_torn() {
        let inc = Arc::new(SharedIncumbent::<i64>::new());

        let mut handles = Vec::new();
        for profit in 1..=8i64 {
            let inc_cloned = Arc::clone(&inc);
            handles.push(thread::spawn(move || {
                for step in 0..500 {
                    let s = make_solution(profit * 1000 + step);
                    inc_cloned.try_install(&s);
                }
            }));
        }

        // Readers must always observe a pair from a single committed
        // packing: the weight is exactly twice the profit by construction.
        for _ in 0..4 {
            let inc_cloned = Arc::clone(&inc);
            handles.push(thread::spawn(move || {
                for _ in 0..2000 {
                    let snap = inc_cloned.snapshot();
                    assert_eq!(
                        snap.weight(),
                        snap.profit() * 2,
                        "snapshot returned a torn pair"
                    );
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(inc.best_profit(), 8499);
    }

    #[test]
    fn test_incumbent_with_i16() {
        // Use i16 as the profit type
        let inc: SharedIncumbent<i16> = SharedIncumbent::new();

        let best = Solution::new(50i16, 10i16);
        let worse = Solution::new(20i16, 4i16);

        // First install should succeed
        assert!(inc.try_install(&best));
        // The hint is i64 and reflects the i16 profit via Into<i64>
        assert_eq!(inc.best_profit(), 50i64);

        // Worse candidate should be rejected
        assert!(!inc.try_install(&worse));
        assert_eq!(inc.best_profit(), 50i64);

        // Typed conversion back to i16
        let typed = inc.best_profit_as().expect("profit must fit into i16");
        assert_eq!(typed, 50i16);

        let snap = inc.snapshot();
        assert_eq!(snap.profit(), 50i16);
        assert_eq!(snap.weight(), 10i16);
    }
}
