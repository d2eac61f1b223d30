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

//! Counters describing a finished branch-and-bound search.

use std::time::Duration;

/// Search statistics collected during a solve.
///
/// Each worker keeps its own instance and the solver merges them when the
/// search ends, so no counter is contended during the search. All counts
/// saturate instead of wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct BnbStatistics {
    /// Number of nodes popped from the frontier and expanded.
    pub nodes_expanded: u64,

    /// Number of children that survived pruning and entered the frontier.
    pub children_generated: u64,

    /// Number of candidate packings that improved the incumbent.
    pub solutions_found: u64,

    /// Number of children discarded because their relaxation bound did
    /// not beat the incumbent.
    pub prunings_bound: u64,

    /// Number of children discarded because their packed weight already
    /// filled or exceeded the capacity.
    pub prunings_infeasible: u64,

    /// Deepest node expanded during the search.
    pub max_depth: u64,

    /// Wall-clock duration of the whole solve.
    pub time_total: Duration,

    /// Relaxation bound of the root node.
    pub root_bound: f64,
}

impl BnbStatistics {
    /// Creates zeroed statistics.
    pub fn new() -> Self {
        Self {
            nodes_expanded: 0,
            children_generated: 0,
            solutions_found: 0,
            prunings_bound: 0,
            prunings_infeasible: 0,
            max_depth: 0,
            time_total: Duration::ZERO,
            root_bound: 0.0,
        }
    }

    /// Records one expanded node.
    #[inline]
    pub fn on_node_expanded(&mut self) {
        self.nodes_expanded = self.nodes_expanded.saturating_add(1);
    }

    /// Records one child entering the frontier.
    #[inline]
    pub fn on_child_generated(&mut self) {
        self.children_generated = self.children_generated.saturating_add(1);
    }

    /// Records one incumbent improvement.
    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    /// Records one child pruned by its bound.
    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    /// Records one child pruned as infeasible.
    #[inline]
    pub fn on_pruning_infeasible(&mut self) {
        self.prunings_infeasible = self.prunings_infeasible.saturating_add(1);
    }

    /// Widens the maximum depth seen so far.
    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    /// Sets the total wall-clock time of the solve.
    #[inline]
    pub fn set_total_time(&mut self, time: Duration) {
        self.time_total = time;
    }

    /// Sets the relaxation bound of the root node.
    #[inline]
    pub fn set_root_bound(&mut self, bound: f64) {
        self.root_bound = bound;
    }

    /// Folds another worker's counters into this one.
    ///
    /// Counters add (saturating) and depths take the maximum. The total
    /// time and root bound belong to the solve as a whole and are left
    /// untouched.
    pub fn merge(&mut self, other: &Self) {
        self.nodes_expanded = self.nodes_expanded.saturating_add(other.nodes_expanded);
        self.children_generated = self
            .children_generated
            .saturating_add(other.children_generated);
        self.solutions_found = self.solutions_found.saturating_add(other.solutions_found);
        self.prunings_bound = self.prunings_bound.saturating_add(other.prunings_bound);
        self.prunings_infeasible = self
            .prunings_infeasible
            .saturating_add(other.prunings_infeasible);
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

impl Default for BnbStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BnbStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rucksack-BnB Solver Statistics:")?;
        writeln!(f, "  {:<22} {}", "Nodes expanded:", self.nodes_expanded)?;
        writeln!(f, "  {:<22} {}", "Children generated:", self.children_generated)?;
        writeln!(f, "  {:<22} {}", "Solutions found:", self.solutions_found)?;
        writeln!(f, "  {:<22} {}", "Prunings (bound):", self.prunings_bound)?;
        writeln!(f, "  {:<22} {}", "Prunings (infeasible):", self.prunings_infeasible)?;
        writeln!(f, "  {:<22} {}", "Max depth:", self.max_depth)?;
        writeln!(f, "  {:<22} {:.2}", "Root bound:", self.root_bound)?;
        write!(f, "  {:<22} {:?}", "Total time:", self.time_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let stats = BnbStatistics::new();

        assert_eq!(stats.nodes_expanded, 0);
        assert_eq!(stats.children_generated, 0);
        assert_eq!(stats.solutions_found, 0);
        assert_eq!(stats.prunings_bound, 0);
        assert_eq!(stats.prunings_infeasible, 0);
        assert_eq!(stats.max_depth, 0);
        assert_eq!(stats.time_total, Duration::ZERO);
        assert_eq!(stats.root_bound, 0.0);
        assert_eq!(stats, BnbStatistics::default());
    }

    #[test]
    fn test_mutators() {
        let mut stats = BnbStatistics::new();

        stats.on_node_expanded();
        stats.on_node_expanded();
        stats.on_child_generated();
        stats.on_solution_found();
        stats.on_pruning_bound();
        stats.on_pruning_infeasible();
        stats.on_depth_update(7);
        stats.on_depth_update(3);
        stats.set_total_time(Duration::from_millis(125));
        stats.set_root_bound(240.0);

        assert_eq!(stats.nodes_expanded, 2);
        assert_eq!(stats.children_generated, 1);
        assert_eq!(stats.solutions_found, 1);
        assert_eq!(stats.prunings_bound, 1);
        assert_eq!(stats.prunings_infeasible, 1);
        assert_eq!(stats.max_depth, 7);
        assert_eq!(stats.time_total, Duration::from_millis(125));
        assert_eq!(stats.root_bound, 240.0);
    }

    #[test]
    fn test_merge_adds_counters_and_keeps_solve_fields() {
        let mut total = BnbStatistics::new();
        total.on_node_expanded();
        total.on_depth_update(2);
        total.set_total_time(Duration::from_secs(1));
        total.set_root_bound(240.0);

        let mut worker = BnbStatistics::new();
        worker.on_node_expanded();
        worker.on_child_generated();
        worker.on_pruning_bound();
        worker.on_depth_update(5);
        worker.set_total_time(Duration::from_secs(9));
        worker.set_root_bound(999.0);

        total.merge(&worker);

        assert_eq!(total.nodes_expanded, 2);
        assert_eq!(total.children_generated, 1);
        assert_eq!(total.prunings_bound, 1);
        assert_eq!(total.max_depth, 5);
        assert_eq!(total.time_total, Duration::from_secs(1));
        assert_eq!(total.root_bound, 240.0);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = BnbStatistics::new();
        stats.nodes_expanded = u64::MAX;
        stats.on_node_expanded();

        assert_eq!(stats.nodes_expanded, u64::MAX);
    }

    #[test]
    fn test_display_contains_all_counters() {
        let mut stats = BnbStatistics::new();
        stats.on_node_expanded();
        stats.set_root_bound(240.0);

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Rucksack-BnB Solver Statistics:"));
        assert!(rendered.contains("Nodes expanded:"));
        assert!(rendered.contains("Children generated:"));
        assert!(rendered.contains("Solutions found:"));
        assert!(rendered.contains("Prunings (bound):"));
        assert!(rendered.contains("Prunings (infeasible):"));
        assert!(rendered.contains("Max depth:"));
        assert!(rendered.contains("240.00"));
        assert!(rendered.contains("Total time:"));
    }
}
