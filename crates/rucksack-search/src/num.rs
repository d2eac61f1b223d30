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

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for search and solver components. `SolverNumeric`
//! specifies the integer capabilities required by the solver: the intrinsic
//! traits (`PrimInt`, `Signed`), a lossless conversion into `i64`, and the
//! marker traits needed to move values across worker threads.
//!
//! ## Motivation
//!
//! The engine should remain generic over integer types while the shared
//! incumbent keeps its fast profit hint in a single `AtomicI64` word. The
//! `Into<i64>` requirement makes that hint lossless for every admitted type,
//! and collecting all bounds into one alias keeps generic signatures short.
//!
//! Note: `i128` is intentionally excluded; it does not convert losslessly
//! into the atomic hint and is significantly slower on many platforms.

use num_traits::{PrimInt, Signed};
use std::hash::Hash;

/// A trait alias for numeric types that can be used in the solver.
/// These are usually all signed integer types `i8`, `i16`, `i32` and `i64`.
///
/// # Note
///
/// `i128` is intentionally excluded, as it cannot be converted losslessly
/// into the `i64` profit hint shared between worker threads.
pub trait SolverNumeric:
    PrimInt + Signed + Into<i64> + std::fmt::Debug + std::fmt::Display + Send + Sync + Hash
{
}

impl<T> SolverNumeric for T where
    T: PrimInt + Signed + Into<i64> + std::fmt::Debug + std::fmt::Display + Send + Sync + Hash
{
}
