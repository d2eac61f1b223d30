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

//! A monitor that prints search progress to stdout.

use crate::monitor::search_monitor::SearchMonitor;
use crate::stats::BnbStatistics;
use num_traits::{PrimInt, Signed};
use rucksack_model::{instance::Instance, solution::Solution};
use std::sync::Mutex;
use std::time::Instant;

/// Prints one line per incumbent improvement, with elapsed wall time.
///
/// The elapsed clock restarts whenever a search begins, so one monitor can
/// be handed to several solves in sequence. Improvements are strictly
/// profit-increasing and therefore rare, so every one of them is printed
/// unconditionally. Interleaved output from concurrent improvements is
/// possible but each line stays intact, since a single `println!` locks
/// stdout.
#[derive(Debug)]
pub struct LogMonitor {
    start_time: Mutex<Instant>,
}

impl LogMonitor {
    /// Creates a new `LogMonitor`.
    pub fn new() -> Self {
        Self {
            start_time: Mutex::new(Instant::now()),
        }
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchMonitor<T> for LogMonitor
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&self, instance: &Instance<T>) {
        *self.start_time.lock().unwrap() = Instant::now(); // Restart the clock.
        println!(
            "Searching over {} items with capacity {}.",
            instance.num_items(),
            instance.capacity()
        );
        println!("{:>10} | {:>12} | {:>12}", "Elapsed", "Profit", "Weight");
        println!("{:->10}-+-{:->12}-+-{:->12}", "", "", "");
    }

    fn on_solution_found(&self, solution: &Solution<T>) {
        let elapsed = self.start_time.lock().unwrap().elapsed().as_secs_f64();
        println!(
            "{:>9.1}s | {:>12} | {:>12}",
            elapsed,
            solution.profit(),
            solution.weight()
        );
    }

    fn on_exit_search(&self, statistics: &BnbStatistics) {
        println!("{:->10}-+-{:->12}-+-{:->12}", "", "", "");
        println!(
            "Search finished after expanding {} nodes.",
            statistics.nodes_expanded
        );
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor")
    }
}
