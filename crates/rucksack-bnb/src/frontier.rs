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

//! The shared best-first work queue and its termination protocol.
//!
//! # Motivation
//!
//! A parallel best-first search has no natural "queue is empty, we are
//! done" moment: an empty heap may just mean every open node is currently
//! being expanded by some worker, about to spawn children. The frontier
//! therefore tracks *outstanding* work units alongside the heap. Every
//! pushed node adds one unit; a worker releases the unit of a node only
//! via [`Frontier::complete`], after it has pushed all of that node's
//! children. The counter can thus only reach zero once no node exists
//! anywhere, in the heap or in flight, and that state is permanent: a
//! push requires a unit-holding worker, and there is none left.
//!
//! When the counter drops to zero the frontier closes and wakes every
//! blocked popper, so workers shut down without polling or timeouts.
//!
//! # Highlights
//!
//! - Best-first: [`Frontier::pop`] returns the open node with the highest
//!   relaxation bound.
//! - Blocking: `pop` parks the caller on a condition variable while the
//!   heap is empty but work is still outstanding.
//! - Quiescence detection: the last [`Frontier::complete`] closes the
//!   frontier, after which `pop` returns `None` forever.

use crate::node::Node;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Condvar, Mutex};

#[derive(Debug)]
struct FrontierState<T> {
    heap: BinaryHeap<Node<T>>,
    closed: bool,
}

/// A blocking max-heap of open nodes with quiescence-based shutdown.
#[derive(Debug)]
pub struct Frontier<T> {
    state: Mutex<FrontierState<T>>,
    available: Condvar,
    outstanding: AtomicUsize,
}

impl<T> Frontier<T>
where
    T: Ord,
{
    /// Creates an empty, open frontier.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FrontierState {
                heap: BinaryHeap::new(),
                closed: false,
            }),
            available: Condvar::new(),
            outstanding: AtomicUsize::new(0),
        }
    }

    /// Adds a node to the frontier and charges one outstanding work unit.
    ///
    /// The counter is raised before the node becomes visible, so no
    /// observer can see the node without its unit.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the frontier has already closed. Callers
    /// uphold this by pushing only while they hold an unfinished unit of
    /// their own, which keeps the counter above zero.
    pub fn push(&self, node: Node<T>) {
        self.outstanding.fetch_add(1, Ordering::SeqCst);
        {
            let mut state = self.state.lock().unwrap();
            debug_assert!(!state.closed, "called `Frontier::push` on a closed frontier");
            state.heap.push(node);
        }
        self.available.notify_one();
    }

    /// Removes and returns the open node with the highest bound.
    ///
    /// Blocks while the heap is empty but work is still outstanding.
    /// Returns `None` once the frontier has closed.
    pub fn pop(&self) -> Option<Node<T>> {
        let mut state = self.state.lock().unwrap();
        loop {
            if let Some(node) = state.heap.pop() {
                return Some(node);
            }
            if state.closed {
                return None;
            }
            state = self.available.wait(state).unwrap();
        }
    }

    /// Releases one outstanding work unit.
    ///
    /// A worker calls this once per popped node, after pushing all of the
    /// node's children. Releasing the last unit closes the frontier and
    /// wakes every blocked popper.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if no work is outstanding.
    pub fn complete(&self) {
        let previous = self.outstanding.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(
            previous > 0,
            "called `Frontier::complete` without outstanding work"
        );

        if previous == 1 {
            {
                let mut state = self.state.lock().unwrap();
                state.closed = true;
            }
            self.available.notify_all();
        }
    }

    /// Returns the number of outstanding work units.
    #[inline]
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::SeqCst)
    }

    /// Returns `true` once the frontier has closed.
    pub fn is_closed(&self) -> bool {
        self.state.lock().unwrap().closed
    }

    /// Returns the number of nodes currently queued.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().heap.len()
    }

    /// Returns `true` if no nodes are currently queued.
    pub fn is_empty(&self) -> bool {
        self.state.lock().unwrap().heap.is_empty()
    }
}

impl<T> Default for Frontier<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for Frontier<T>
where
    T: Ord,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Frontier(len: {}, outstanding: {}, closed: {})",
            self.len(),
            self.outstanding(),
            self.is_closed()
        )
    }
}
