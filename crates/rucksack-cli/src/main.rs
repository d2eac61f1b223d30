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

//! Command line front end for the rucksack solver.

use clap::Parser;
use rucksack_bnb::bnb::BnbSolver;
use rucksack_bnb::monitor::log::LogMonitor;
use rucksack_model::loading::InstanceLoader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rucksack")]
#[command(about = "An exact parallel branch-and-bound solver for the 0/1 knapsack problem")]
#[command(version)]
struct Cli {
    /// Path to the instance file: an `N W` header line followed by one
    /// `value weight` pair per item. `#` starts a comment.
    file: PathBuf,

    /// Number of worker threads (default: one per hardware thread).
    #[arg(long)]
    threads: Option<usize>,

    /// Filter out items heavier than the capacity while loading.
    #[arg(long)]
    drop_oversized: bool,

    /// Print search statistics after solving.
    #[arg(long)]
    stats: bool,

    /// Print incumbent improvements while solving.
    #[arg(long)]
    log: bool,
}

fn main() {
    let cli = Cli::parse();

    let loader = InstanceLoader::<i64>::new().drop_oversized(cli.drop_oversized);
    let instance = match loader.from_path(&cli.file) {
        Ok(instance) => instance,
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    };

    let mut solver = BnbSolver::new();
    if let Some(threads) = cli.threads {
        solver = solver.with_thread_count(threads);
    }

    let outcome = if cli.log {
        solver.solve_with_monitor(&instance, &LogMonitor::new())
    } else {
        solver.solve(&instance)
    };

    println!("Maximum profit: {}", outcome.solution().profit());
    println!("Total weight: {}", outcome.solution().weight());

    if cli.stats {
        let complexity = instance.complexity();
        println!();
        println!("{}", outcome.statistics());
        println!("  {:<22} {}", "Tree size:", complexity);
        if let Some(coverage) = complexity.coverage(outcome.statistics().nodes_expanded) {
            println!("  {:<22} {:.6}%", "Tree coverage:", coverage);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
