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

//! The parallel branch-and-bound solver.
//!
//! # Motivation
//!
//! The solver finds a provably optimal packing by exploring the binary
//! decision tree over the catalog items: at depth `d` the search decides
//! whether item `d` (in ratio order) enters the knapsack. Explored
//! subproblems live in a shared best-first [`Frontier`]; every worker
//! thread repeatedly claims the subproblem with the highest relaxation
//! bound, offers its packing to the shared incumbent, and pushes the two
//! children that still might beat the incumbent.
//!
//! # Exactness
//!
//! Two facts make the result exact rather than heuristic:
//!
//! - Every feasible packing is offered to the incumbent at the moment its
//!   last included item is decided, so the incumbent can only ever settle
//!   on a profit some real packing achieves.
//! - [`fractional_bound`] never underestimates what a subtree can reach,
//!   so discarding a child whose bound does not exceed the incumbent
//!   discards no packing better than the incumbent. The incumbent hint
//!   read during pruning may lag behind the true best, which only admits
//!   extra work, never wrong answers.
//!
//! # Termination
//!
//! The frontier counts outstanding work units and closes itself when the
//! count reaches zero, waking every parked worker. Workers exit their
//! loop on the closed frontier, the scope joins them, and the incumbent
//! snapshot at that point is the optimum.

use crate::bound::fractional_bound;
use crate::catalog::Catalog;
use crate::frontier::Frontier;
use crate::monitor::no_op::NoOperationMonitor;
use crate::monitor::search_monitor::SearchMonitor;
use crate::node::Node;
use crate::result::SolverOutcome;
use crate::stats::BnbStatistics;
use rucksack_model::{index::ItemIndex, instance::Instance, item::Item, solution::Solution};
use rucksack_search::{incumbent::SharedIncumbent, num::SolverNumeric};
use std::time::Instant;

/// A configurable, parallel, exact solver for the 0/1 knapsack problem.
///
/// # Examples
///
/// ```rust
/// use rucksack_bnb::bnb::BnbSolver;
/// use rucksack_model::{instance::Instance, item::Item};
///
/// let instance = Instance::<i64>::new(
///     50,
///     vec![Item::new(60, 10), Item::new(100, 20), Item::new(120, 30)],
/// );
///
/// let outcome = BnbSolver::new().with_thread_count(4).solve(&instance);
/// assert_eq!(outcome.solution().profit(), 220);
/// assert_eq!(outcome.solution().weight(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BnbSolver {
    thread_count: Option<usize>,
}

impl BnbSolver {
    /// Creates a solver that uses one worker per available hardware
    /// thread.
    pub fn new() -> Self {
        Self { thread_count: None }
    }

    /// Sets the number of worker threads. Zero restores the hardware
    /// default.
    pub fn with_thread_count(mut self, threads: usize) -> Self {
        self.thread_count = if threads == 0 { None } else { Some(threads) };
        self
    }

    fn effective_thread_count(&self) -> usize {
        self.thread_count.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|count| count.get())
                .unwrap_or(1)
        })
    }

    /// Solves the given instance to optimality.
    pub fn solve<T>(&self, instance: &Instance<T>) -> SolverOutcome<T>
    where
        T: SolverNumeric,
    {
        self.solve_with_monitor(instance, &NoOperationMonitor::new())
    }

    /// Solves the given instance to optimality, reporting progress to the
    /// monitor.
    ///
    /// The monitor sees the search entering and exiting even for trivial
    /// instances, which are answered with the empty packing before any
    /// worker is spawned.
    pub fn solve_with_monitor<T, M>(&self, instance: &Instance<T>, monitor: &M) -> SolverOutcome<T>
    where
        T: SolverNumeric,
        M: SearchMonitor<T>,
    {
        let start_time = Instant::now();
        monitor.on_enter_search(instance);

        let mut statistics = BnbStatistics::new();

        // No items or no capacity: the empty packing is trivially optimal.
        if instance.is_trivial() {
            statistics.set_total_time(start_time.elapsed());
            monitor.on_exit_search(&statistics);
            return SolverOutcome::new(Solution::empty(), statistics);
        }

        let context = SearchContext::new(instance);
        let root_bound = context.seed_root();
        statistics.set_root_bound(root_bound);

        let worker_count = self.effective_thread_count();
        let worker_statistics = std::thread::scope(|scope| {
            let context = &context;
            let mut handles = Vec::with_capacity(worker_count);
            for _ in 0..worker_count {
                handles.push(scope.spawn(move || Worker::new(context, monitor).run()));
            }

            handles
                .into_iter()
                .map(|handle| handle.join().expect("solver worker thread panicked"))
                .collect::<Vec<_>>()
        });

        for worker_stats in &worker_statistics {
            statistics.merge(worker_stats);
        }
        statistics.set_total_time(start_time.elapsed());
        monitor.on_exit_search(&statistics);

        SolverOutcome::new(context.incumbent.snapshot(), statistics)
    }
}

impl Default for BnbSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BnbSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.thread_count {
            Some(threads) => write!(f, "BnbSolver(threads: {})", threads),
            None => write!(f, "BnbSolver(threads: auto)"),
        }
    }
}

/// Solves a 0/1 knapsack given as raw `(profit, weight)` pairs.
///
/// Returns the optimal packing as a `(profit, weight)` pair. Passing
/// `None` for `thread_count` uses one worker per available hardware
/// thread.
///
/// # Panics
///
/// Panics if any profit or weight is non-positive, or if the capacity is
/// negative.
///
/// # Examples
///
/// ```rust
/// use rucksack_bnb::bnb::solve;
///
/// let items = [(60, 10), (100, 20), (120, 30)];
/// assert_eq!(solve(50, &items, Some(4)), (220, 50));
/// ```
pub fn solve<T>(capacity: T, items: &[(T, T)], thread_count: Option<usize>) -> (T, T)
where
    T: SolverNumeric,
{
    let items = items
        .iter()
        .map(|&(profit, weight)| Item::new(profit, weight))
        .collect();
    let instance = Instance::new(capacity, items);

    let mut solver = BnbSolver::new();
    if let Some(threads) = thread_count {
        solver = solver.with_thread_count(threads);
    }

    solver.solve(&instance).solution().into_pair()
}

/// Everything the workers share, owned by the solve call.
struct SearchContext<T> {
    catalog: Catalog<T>,
    frontier: Frontier<T>,
    incumbent: SharedIncumbent<T>,
}

impl<T> SearchContext<T>
where
    T: SolverNumeric,
{
    fn new(instance: &Instance<T>) -> Self {
        Self {
            catalog: Catalog::from_instance(instance),
            frontier: Frontier::new(),
            incumbent: SharedIncumbent::new(),
        }
    }

    /// Pushes the root node and returns its relaxation bound.
    fn seed_root(&self) -> f64 {
        let bound = fractional_bound(&self.catalog, 0, T::zero(), T::zero());
        self.frontier.push(Node::root(bound));
        bound
    }
}

/// One worker thread's view of the search.
///
/// Statistics are accumulated privately and handed back when the worker
/// finishes, so the hot loop touches no shared counters.
struct Worker<'a, T, M> {
    context: &'a SearchContext<T>,
    monitor: &'a M,
    statistics: BnbStatistics,
}

impl<'a, T, M> Worker<'a, T, M>
where
    T: SolverNumeric,
    M: SearchMonitor<T>,
{
    fn new(context: &'a SearchContext<T>, monitor: &'a M) -> Self {
        Self {
            context,
            monitor,
            statistics: BnbStatistics::new(),
        }
    }

    fn run(mut self) -> BnbStatistics {
        // The work unit of a popped node is released only after all of
        // its children are pushed; see the frontier's closing protocol.
        while let Some(node) = self.context.frontier.pop() {
            self.expand(node);
            self.context.frontier.complete();
        }

        self.statistics
    }

    fn expand(&mut self, node: Node<T>) {
        self.statistics.on_node_expanded();
        self.statistics.on_depth_update(node.depth() as u64);

        // All items decided; the node's packing was already offered at
        // its last include decision.
        if node.depth() == self.context.catalog.len() {
            return;
        }

        let item = ItemIndex::new(node.depth());
        let child_depth = node.depth() + 1;

        let include_profit = node.profit() + self.context.catalog.profit(item);
        let include_weight = node.weight() + self.context.catalog.weight(item);

        // Feasibility of the include packing is a weight check, never a
        // bound check: a full knapsack has bound 0.0 but is a perfectly
        // valid candidate.
        if include_weight <= self.context.catalog.capacity() {
            self.offer(include_profit, include_weight);
        }

        let include_bound = fractional_bound(
            &self.context.catalog,
            child_depth,
            include_profit,
            include_weight,
        );
        self.consider(Node::new(
            child_depth,
            include_profit,
            include_weight,
            include_bound,
        ));

        let exclude_bound =
            fractional_bound(&self.context.catalog, child_depth, node.profit(), node.weight());
        self.consider(Node::new(
            child_depth,
            node.profit(),
            node.weight(),
            exclude_bound,
        ));
    }

    /// Offers a feasible packing to the shared incumbent.
    fn offer(&mut self, profit: T, weight: T) {
        let candidate = Solution::new(profit, weight);
        if self.context.incumbent.try_install(&candidate) {
            self.statistics.on_solution_found();
            self.monitor.on_solution_found(&candidate);
        }
    }

    /// Pushes a child that can still beat the incumbent, drops the rest.
    fn consider(&mut self, child: Node<T>) {
        let incumbent_profit = self.context.incumbent.best_profit();
        if child.bound() > incumbent_profit as f64 {
            self.statistics.on_child_generated();
            self.context.frontier.push(child);
        } else if child.weight() >= self.context.catalog.capacity() {
            self.statistics.on_pruning_infeasible();
        } else {
            self.statistics.on_pruning_bound();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rucksack_model::loading::InstanceLoader;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type IntegerType = i64;

    fn classic_instance() -> Instance<IntegerType> {
        Instance::new(
            50,
            vec![Item::new(60, 10), Item::new(100, 20), Item::new(120, 30)],
        )
    }

    fn random_instance(seed: u64, num_items: usize) -> Instance<IntegerType> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut items = Vec::with_capacity(num_items);
        let mut total_weight = 0;
        for _ in 0..num_items {
            let profit = rng.gen_range(1..=100);
            let weight = rng.gen_range(1..=50);
            total_weight += weight;
            items.push(Item::new(profit, weight));
        }

        // Half the total weight forces real include/exclude tension.
        Instance::new((total_weight / 2).max(1), items)
    }

    fn brute_force_profit(instance: &Instance<IntegerType>) -> IntegerType {
        let items = instance.items();
        let mut best = 0;
        for mask in 0u32..(1u32 << items.len()) {
            let mut profit = 0;
            let mut weight = 0;
            for (position, item) in items.iter().enumerate() {
                if mask & (1 << position) != 0 {
                    profit += item.profit();
                    weight += item.weight();
                }
            }
            if weight <= instance.capacity() && profit > best {
                best = profit;
            }
        }

        best
    }

    #[derive(Default)]
    struct EventCounters {
        enters: AtomicUsize,
        solutions: AtomicUsize,
        exits: AtomicUsize,
    }

    #[derive(Clone, Default)]
    struct RecordingMonitor {
        counters: Arc<EventCounters>,
    }

    impl SearchMonitor<IntegerType> for RecordingMonitor {
        fn name(&self) -> &str {
            "RecordingMonitor"
        }

        fn on_enter_search(&self, _instance: &Instance<IntegerType>) {
            self.counters.enters.fetch_add(1, Ordering::SeqCst);
        }

        fn on_solution_found(&self, _solution: &Solution<IntegerType>) {
            self.counters.solutions.fetch_add(1, Ordering::SeqCst);
        }

        fn on_exit_search(&self, _statistics: &BnbStatistics) {
            self.counters.exits.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_solves_classic_instance() {
        let outcome = BnbSolver::new().with_thread_count(4).solve(&classic_instance());

        // Items 2 and 3: profit 100 + 120, weight 20 + 30.
        assert_eq!(outcome.solution().profit(), 220);
        assert_eq!(outcome.solution().weight(), 50);
    }

    #[test]
    fn test_trivial_instances_skip_the_search() {
        let no_items = Instance::<IntegerType>::new(10, vec![]);
        let outcome = BnbSolver::new().solve(&no_items);
        assert_eq!(outcome.solution(), Solution::empty());
        assert_eq!(outcome.statistics().nodes_expanded, 0);

        let no_capacity = Instance::new(0, vec![Item::<IntegerType>::new(5, 1)]);
        let outcome = BnbSolver::new().solve(&no_capacity);
        assert_eq!(outcome.solution(), Solution::empty());
        assert_eq!(outcome.statistics().nodes_expanded, 0);
    }

    #[test]
    fn test_search_runs_for_single_oversized_item() {
        // Not trivial (one item, positive capacity), but nothing fits.
        let instance = Instance::new(5, vec![Item::<IntegerType>::new(10, 20)]);
        let outcome = BnbSolver::new().with_thread_count(1).solve(&instance);

        assert_eq!(outcome.solution(), Solution::empty());
        assert_eq!(outcome.statistics().nodes_expanded, 1);
        assert_eq!(outcome.statistics().prunings_infeasible, 1);
        assert_eq!(outcome.statistics().prunings_bound, 1);
    }

    #[test]
    fn test_records_root_bound() {
        let outcome = BnbSolver::new().with_thread_count(1).solve(&classic_instance());

        // 60 + 100 whole, then 20 of the last item at ratio 4.0.
        assert_eq!(outcome.statistics().root_bound, 240.0);
    }

    #[test]
    fn test_matches_exhaustive_enumeration() {
        for seed in 0..6 {
            let instance = random_instance(seed, 12);
            let expected = brute_force_profit(&instance);

            let outcome = BnbSolver::new().with_thread_count(4).solve(&instance);
            assert_eq!(outcome.solution().profit(), expected, "seed {}", seed);
            assert!(outcome.solution().weight() <= instance.capacity());
        }
    }

    #[test]
    fn test_thread_counts_agree_on_the_optimum() {
        let instance = random_instance(7, 14);
        let expected = BnbSolver::new()
            .with_thread_count(1)
            .solve(&instance)
            .solution()
            .profit();

        for threads in [2, 4, 8] {
            let outcome = BnbSolver::new().with_thread_count(threads).solve(&instance);
            assert_eq!(outcome.solution().profit(), expected, "threads {}", threads);
            assert!(outcome.solution().weight() <= instance.capacity());
        }
    }

    #[test]
    fn test_profit_grows_with_capacity() {
        let mut rng = StdRng::seed_from_u64(3);
        let items: Vec<Item<IntegerType>> = (0..10)
            .map(|_| Item::new(rng.gen_range(1..=100), rng.gen_range(1..=30)))
            .collect();

        let mut previous = 0;
        for capacity in [0, 10, 25, 50, 100, 300] {
            let instance = Instance::new(capacity, items.clone());
            let profit = BnbSolver::new()
                .with_thread_count(2)
                .solve(&instance)
                .solution()
                .profit();

            assert!(profit >= previous, "capacity {}", capacity);
            previous = profit;
        }
    }

    #[test]
    fn test_node_accounting_balances() {
        let outcome = BnbSolver::new()
            .with_thread_count(4)
            .solve(&random_instance(11, 14));
        let stats = outcome.statistics();

        // Every node but the root entered the frontier as someone's
        // child, and the search drains the frontier completely.
        assert_eq!(stats.nodes_expanded, stats.children_generated + 1);
        assert!(stats.max_depth <= 14);
    }

    #[test]
    fn test_monitor_observes_the_search() {
        let monitor = RecordingMonitor::default();
        let outcome = BnbSolver::new()
            .with_thread_count(2)
            .solve_with_monitor(&classic_instance(), &monitor);

        assert_eq!(outcome.solution().profit(), 220);
        assert_eq!(monitor.counters.enters.load(Ordering::SeqCst), 1);
        assert_eq!(monitor.counters.exits.load(Ordering::SeqCst), 1);

        let improvements = monitor.counters.solutions.load(Ordering::SeqCst);
        assert!(improvements >= 1);
        assert_eq!(improvements as u64, outcome.statistics().solutions_found);
    }

    #[test]
    fn test_monitor_sees_trivial_solves() {
        let monitor = RecordingMonitor::default();
        let instance = Instance::new(0, vec![Item::<IntegerType>::new(5, 1)]);
        BnbSolver::new().solve_with_monitor(&instance, &monitor);

        assert_eq!(monitor.counters.enters.load(Ordering::SeqCst), 1);
        assert_eq!(monitor.counters.exits.load(Ordering::SeqCst), 1);
        assert_eq!(monitor.counters.solutions.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_loads_and_solves_bundled_instance() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("data")
            .join("ks_4_0");
        let instance = InstanceLoader::<IntegerType>::new()
            .from_path(&path)
            .expect("bundled instance should load");

        let outcome = BnbSolver::new().solve(&instance);

        // Items 2 and 3: profit 15 + 4, weight 8 + 3.
        assert_eq!(outcome.solution().profit(), 19);
        assert_eq!(outcome.solution().weight(), 11);
    }

    #[test]
    fn test_solve_function_classic() {
        let items = [(60, 10), (100, 20), (120, 30)];
        assert_eq!(solve(50, &items, Some(2)), (220, 50));
    }

    #[test]
    fn test_solve_function_degenerate_inputs() {
        assert_eq!(solve::<IntegerType>(10, &[], None), (0, 0));
        assert_eq!(solve(0, &[(5, 1)], Some(1)), (0, 0));
    }

    #[test]
    fn test_solve_function_single_oversized_item() {
        assert_eq!(solve(5, &[(10, 20)], Some(1)), (0, 0));
    }

    #[test]
    fn test_zero_threads_restores_hardware_default() {
        assert_eq!(BnbSolver::new().with_thread_count(0), BnbSolver::new());
        assert_ne!(BnbSolver::new().with_thread_count(3), BnbSolver::new());
    }

    #[test]
    fn test_solver_display() {
        assert_eq!(format!("{}", BnbSolver::new()), "BnbSolver(threads: auto)");
        assert_eq!(
            format!("{}", BnbSolver::new().with_thread_count(4)),
            "BnbSolver(threads: 4)"
        );
    }

    #[test]
    fn test_typed_solve_with_smaller_integers() {
        let items: [(i16, i16); 3] = [(60, 10), (100, 20), (120, 30)];
        assert_eq!(solve(50i16, &items, Some(2)), (220, 50));
    }
}
