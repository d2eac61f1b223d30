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

//! The result of a finished solve.

use crate::stats::BnbStatistics;
use num_traits::{PrimInt, Signed};
use rucksack_model::solution::Solution;

/// A proven-optimal solution together with the search statistics.
///
/// The solver always runs its search to exhaustion, so the contained
/// solution is optimal by construction; no separate status is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutcome<T> {
    solution: Solution<T>,
    statistics: BnbStatistics,
}

impl<T> SolverOutcome<T> {
    /// Creates a new outcome.
    pub fn new(solution: Solution<T>, statistics: BnbStatistics) -> Self {
        Self {
            solution,
            statistics,
        }
    }

    /// Returns the optimal solution.
    #[inline]
    pub fn solution(&self) -> Solution<T>
    where
        T: Copy,
    {
        self.solution
    }

    /// Returns the search statistics.
    #[inline]
    pub fn statistics(&self) -> &BnbStatistics {
        &self.statistics
    }
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.solution)?;
        write!(f, "{}", self.statistics)
    }
}
