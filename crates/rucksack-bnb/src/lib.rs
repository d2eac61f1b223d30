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

//! Rucksack-BnB: parallel branch-and-bound for the 0/1 knapsack problem
//!
//! High-level crate that implements an exact, concurrent best-first solver
//! for the 0/1 knapsack problem. Worker threads share a bound-ordered
//! frontier, a best-packing incumbent, and a ratio-sorted item catalog;
//! everything else is thread-local.
//!
//! Core flow
//! - Provide a `rucksack_model::instance::Instance<T>`.
//! - Configure a `bnb::BnbSolver` (thread count), or call `bnb::solve` for
//!   the plain `(profit, weight)` answer.
//! - Optionally attach a `monitor::search_monitor::SearchMonitor` to observe
//!   the run.
//!
//! Design highlights
//! - Best-first exploration: the frontier always hands out the node with the
//!   highest fractional-relaxation bound.
//! - Push-time pruning: a child enters the frontier only if its bound beats
//!   the incumbent profit at that moment.
//! - Quiescence termination: an outstanding-work counter inside the frontier
//!   detects the instant no node is queued and no expansion is running, then
//!   wakes every blocked worker exactly once.
//!
//! Assumptions and guarantees
//! - Bounds are admissible (never underestimate the best completion of a
//!   node); pruning relies on this for exactness.
//! - The returned profit is the proven optimum and does not depend on the
//!   number of worker threads.
//!
//! Module map
//! - `bnb`: the solver engine and worker orchestration.
//! - `catalog`: the read-only, ratio-sorted item view shared by workers.
//! - `bound`: the fractional-relaxation bound estimator.
//! - `node`: frontier nodes and their best-first ordering.
//! - `frontier`: the shared queue plus the termination protocol.
//! - `monitor`: observation monitors (log, composite, no-op).
//! - `result`: solver outcome carrying the packing and statistics.
//! - `stats`: lightweight counters/timing.

pub mod bnb;
pub mod bound;
pub mod catalog;
pub mod frontier;
pub mod monitor;
pub mod node;
pub mod result;
pub mod stats;
