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

//! # Rucksack Model
//!
//! **The Core Domain Model for the Rucksack 0/1 Knapsack Solver.**
//!
//! This crate defines the fundamental data structures used to represent the
//! **0/1 knapsack problem**. It serves as the data interchange layer between
//! the problem definition (user input) and the solving engine (`rucksack_bnb`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **solving**:
//!
//! * **`index`**: Provides a strongly-typed wrapper (`ItemIndex`) to prevent logical indexing errors.
//! * **`item`**: A single item with a strictly positive profit and weight.
//! * **`instance`**: An immutable problem instance (capacity plus items) and its search-space `Complexity`.
//! * **`solution`**: Defines the output format, a committed profit/weight pair.
//! * **`loading`**: Reads instances from the whitespace-separated `N W` / `value weight` file format.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail-Fast**: Constructors validate inputs eagerly so the solver never encounters an item with a non-positive profit or weight.
//! 2.  **Immutability**: An `Instance` never changes after construction; the engine derives its own sorted views from it.
//! 3.  **Validated Input Boundary**: The loader rejects malformed files with typed errors, while degenerate instances (no items, zero capacity) load fine and are solved trivially.

pub mod index;
pub mod instance;
pub mod item;
pub mod loading;
pub mod solution;
