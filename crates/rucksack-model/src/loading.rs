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

//! Problem instance loader for the 0/1 knapsack domain.
//!
//! This module turns whitespace-delimited text streams into a validated
//! `Instance`. The expected format is an item count and a capacity followed
//! by one `value weight` pair per item. Lines may contain comments introduced
//! by `#`, which are ignored during tokenization.
//!
//! The loader enforces the instance preconditions at the input boundary:
//! every item must have a strictly positive profit and weight, the item
//! count and the capacity must be non-negative. Degenerate instances (zero
//! items or zero capacity) pass validation, because the solver handles them
//! without searching. Malformed input is reported through typed errors that
//! carry the offending token or item index rather than through panics.
//!
//! The parser accepts any `BufRead`, file path, raw reader, or string slice,
//! making it convenient to integrate with benchmarks, tests, and tooling.

use crate::{index::ItemIndex, instance::Instance, item::Item};
use num_traits::{PrimInt, Signed};
use std::{
    collections::VecDeque,
    fmt::{Debug, Display},
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The error type for the instance loading process.
#[derive(Debug)]
pub enum InstanceLoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input stream ended unexpectedly (e.g., missing tokens).
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The item count N could not be interpreted as a non-negative integer.
    InvalidItemCount,
    /// The capacity W is negative.
    NegativeCapacity,
    /// An item has a non-positive profit or weight.
    NonPositiveItem(ItemValueError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

/// Details about an item that violates the positivity requirements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemValueError {
    /// The position of the offending item in the input.
    pub item_index: ItemIndex,
}

impl std::fmt::Display for ItemValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Item {} must have a strictly positive profit and weight",
            self.item_index.get()
        )
    }
}

impl std::error::Error for ItemValueError {}

impl Display for InstanceLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "Unexpected end of file while parsing instance"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::InvalidItemCount => {
                write!(f, "The item count N must be a non-negative integer")
            }
            Self::NegativeCapacity => write!(f, "The capacity W must be non-negative"),
            Self::NonPositiveItem(e) => write!(f, "Invalid item: {}", e),
        }
    }
}

impl std::error::Error for InstanceLoaderError {}

impl From<std::io::Error> for InstanceLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for InstanceLoaderError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<ItemValueError> for InstanceLoaderError {
    fn from(e: ItemValueError) -> Self {
        Self::NonPositiveItem(e)
    }
}

/// A configurable loader for knapsack problem instances.
///
/// The format this parser expects is as follows (whitespace-separated tokens):
///
/// ```raw
/// N W (number of items, knapsack capacity)
/// v_1 w_1 (value and weight of item 1)
/// ...
/// v_N w_N (value and weight of item N)
/// ```
///
/// # Configuration
/// * `drop_oversized`: Items heavier than the capacity can never be packed.
///   With this option set, the loader filters them out instead of handing
///   them to the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceLoader<T> {
    drop_oversized: bool,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Default for InstanceLoader<T> {
    fn default() -> Self {
        Self {
            drop_oversized: false,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> InstanceLoader<T>
where
    T: PrimInt + Signed + FromStr + Display + Debug,
{
    /// Creates a new `InstanceLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether items heavier than the capacity are filtered out
    /// during loading.
    #[inline]
    pub fn drop_oversized(mut self, yes: bool) -> Self {
        self.drop_oversized = yes;
        self
    }

    /// Loads an instance from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Instance<T>, InstanceLoaderError> {
        let mut sc = Scanner::new(rdr);

        let n_val: T = sc.next()?;
        let capacity: T = sc.next()?;

        // A zero item count is a valid (degenerate) instance, a negative
        // one is not.
        let n = n_val
            .to_usize()
            .ok_or(InstanceLoaderError::InvalidItemCount)?;

        if capacity < T::zero() {
            return Err(InstanceLoaderError::NegativeCapacity);
        }

        let mut items = Vec::with_capacity(n);
        for i in 0..n {
            let profit: T = sc.next()?;
            let weight: T = sc.next()?;

            if profit <= T::zero() || weight <= T::zero() {
                return Err(InstanceLoaderError::NonPositiveItem(ItemValueError {
                    item_index: ItemIndex::new(i),
                }));
            }

            if self.drop_oversized && weight > capacity {
                continue;
            }

            items.push(Item::new(profit, weight));
        }

        Ok(Instance::new(capacity, items))
    }

    /// Loads an instance from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Instance<T>, InstanceLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an instance from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Instance<T>, InstanceLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an instance from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Instance<T>, InstanceLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

/// A helper to read whitespace-delimited tokens from a generic reader.
///
/// Tokens are buffered one line at a time; everything following a `#` on a
/// line is treated as a comment and discarded.
struct Scanner<R> {
    rdr: R,
    line: String,
    tokens: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    /// Creates a new `Scanner` wrapping the given reader.
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            line: String::new(),
            tokens: VecDeque::new(),
        }
    }

    /// Reads the next input line and queues its tokens.
    /// Returns `Ok(true)` if data was read, `Ok(false)` on EOF.
    fn fill_line(&mut self) -> Result<bool, InstanceLoaderError> {
        self.line.clear();
        let n = self
            .rdr
            .read_line(&mut self.line)
            .map_err(InstanceLoaderError::Io)?;
        if n == 0 {
            return Ok(false);
        }

        let data = match self.line.split_once('#') {
            Some((before_comment, _)) => before_comment,
            None => self.line.as_str(),
        };
        self.tokens
            .extend(data.split_whitespace().map(str::to_owned));

        Ok(true)
    }

    /// Returns the next token parsed into `T`, refilling the line buffer
    /// as needed.
    fn next<T>(&mut self) -> Result<T, InstanceLoaderError>
    where
        T: FromStr,
    {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return token.parse::<T>().map_err(|_| {
                    InstanceLoaderError::Parse(ParseTokenError {
                        token,
                        type_name: std::any::type_name::<T>(),
                    })
                });
            }

            if !self.fill_line()? {
                return Err(InstanceLoaderError::UnexpectedEof);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_INSTANCE: &str = r#"
        4 11        # N=4 items, W=11 capacity
        8 4         # item 0
        10 5        # item 1
        15 8        # item 2
        4 3         # item 3
    "#;

    #[test]
    fn test_loads_and_maps_correctly() {
        let loader = InstanceLoader::new();
        let instance: Instance<i64> = loader.from_str(SMALL_INSTANCE).expect("Failed to load");

        assert_eq!(instance.num_items(), 4);
        assert_eq!(instance.capacity(), 11);

        // Items keep their input order.
        assert_eq!(instance.item(ItemIndex::new(0)).profit(), 8);
        assert_eq!(instance.item(ItemIndex::new(2)).weight(), 8);
        assert_eq!(instance.item(ItemIndex::new(3)).profit(), 4);
    }

    #[test]
    fn test_drop_oversized_filters_items() {
        let data = "3 10  5 4  99 50  7 6"; // The 50-weight item can never fit.
        let loader = InstanceLoader::new().drop_oversized(true);
        let instance: Instance<i64> = loader.from_str(data).expect("Failed to load");

        assert_eq!(instance.num_items(), 2);
        assert_eq!(instance.item(ItemIndex::new(0)).profit(), 5);
        assert_eq!(instance.item(ItemIndex::new(1)).profit(), 7);
    }

    #[test]
    fn test_degenerate_instances_are_legal() {
        let no_items: Instance<i64> = InstanceLoader::new()
            .from_str("0 10")
            .expect("Failed to load");
        assert_eq!(no_items.num_items(), 0);
        assert!(no_items.is_trivial());

        let no_capacity: Instance<i64> = InstanceLoader::new()
            .from_str("1 0  5 1")
            .expect("Failed to load");
        assert_eq!(no_capacity.num_items(), 1);
        assert!(no_capacity.is_trivial());
    }

    #[test]
    fn test_negative_item_count() {
        let res: Result<Instance<i64>, _> = InstanceLoader::new().from_str("-3 10");
        match res {
            Err(InstanceLoaderError::InvalidItemCount) => {}
            _ => panic!("Expected InvalidItemCount error"),
        }
    }

    #[test]
    fn test_negative_capacity() {
        let res: Result<Instance<i64>, _> = InstanceLoader::new().from_str("1 -5  5 1");
        match res {
            Err(InstanceLoaderError::NegativeCapacity) => {}
            _ => panic!("Expected NegativeCapacity error"),
        }
    }

    #[test]
    fn test_non_positive_item() {
        let res: Result<Instance<i64>, _> = InstanceLoader::new().from_str("2 10  5 2  0 3");
        match res {
            Err(InstanceLoaderError::NonPositiveItem(ItemValueError { item_index })) => {
                assert_eq!(item_index.get(), 1);
            }
            _ => panic!("Expected NonPositiveItem error"),
        }
    }

    #[test]
    fn test_parse_error_structure() {
        let data = "2 11 garbage";
        let loader = InstanceLoader::<i64>::new();
        let res = loader.from_str(data);

        match res {
            Err(InstanceLoaderError::Parse(e)) => {
                assert_eq!(e.token, "garbage");
                assert!(e.type_name.contains("i64"));
            }
            _ => panic!("Expected Parse error with context"),
        }
    }

    #[test]
    fn test_unexpected_eof() {
        let res: Result<Instance<i64>, _> = InstanceLoader::new().from_str("2 11  5 2");
        match res {
            Err(InstanceLoaderError::UnexpectedEof) => {}
            _ => panic!("Expected UnexpectedEof error"),
        }
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let loader = InstanceLoader::<i64>::new();
        let res = loader.from_path("/nonexistent/rucksack/instances/ks_0_0");
        match res {
            Err(InstanceLoaderError::Io(_)) => {}
            _ => panic!("Expected Io error"),
        }
    }
}
