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

//! The core monitor trait.

use crate::stats::BnbStatistics;
use num_traits::{PrimInt, Signed};
use rucksack_model::{instance::Instance, solution::Solution};

/// Observer of a branch-and-bound solve.
///
/// The solver shares one monitor across all worker threads and calls the
/// hooks through `&self`, so implementations carrying state must
/// synchronize it internally. Incumbent improvements can be reported from
/// any worker, concurrently.
///
/// Hooks observe only; they cannot steer or stop the search.
pub trait SearchMonitor<T>: Send + Sync
where
    T: PrimInt + Signed,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once, before any worker starts.
    fn on_enter_search(&self, instance: &Instance<T>);

    /// Called every time a candidate packing improves the incumbent.
    fn on_solution_found(&self, solution: &Solution<T>);

    /// Called once, after all workers have finished.
    fn on_exit_search(&self, statistics: &BnbStatistics);
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SearchMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOperationMonitor;

    #[test]
    fn test_dyn_debug_uses_monitor_name() {
        let monitor: Box<dyn SearchMonitor<i64>> = Box::new(NoOperationMonitor::new());
        assert_eq!(format!("{:?}", &*monitor), "SearchMonitor(NoOperationMonitor)");
    }

    #[test]
    fn test_dyn_display_uses_monitor_name() {
        let monitor: Box<dyn SearchMonitor<i64>> = Box::new(NoOperationMonitor::new());
        assert_eq!(format!("{}", &*monitor), "SearchMonitor(NoOperationMonitor)");
    }
}
