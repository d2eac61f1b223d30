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

/// A typed index for items.
///
/// Wrapping the raw `usize` in a dedicated type prevents an item position
/// from being confused with other integer quantities (profits, weights,
/// counts) at compile time. The wrapper is `#[repr(transparent)]`, so it
/// has the exact layout and cost of the `usize` it wraps.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Creates a new `ItemIndex` from a raw `usize`.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying `usize` value.
    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns `true` if this index is zero.
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Debug for ItemIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ItemIndex({})", self.0)
    }
}

impl std::fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ItemIndex({})", self.0)
    }
}

impl From<usize> for ItemIndex {
    #[inline(always)]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<ItemIndex> for usize {
    #[inline(always)]
    fn from(index: ItemIndex) -> Self {
        index.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_get() {
        let index = ItemIndex::new(7);
        assert_eq!(index.get(), 7);
        assert!(!index.is_zero());
        assert!(ItemIndex::new(0).is_zero());
    }

    #[test]
    fn test_ordering() {
        let a = ItemIndex::new(1);
        let b = ItemIndex::new(2);
        assert!(a < b);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn test_conversions() {
        let index: ItemIndex = 42.into();
        assert_eq!(index, ItemIndex::new(42));

        let raw: usize = index.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_display_and_debug() {
        let index = ItemIndex::new(3);
        assert_eq!(format!("{}", index), "ItemIndex(3)");
        assert_eq!(format!("{:?}", index), "ItemIndex(3)");
    }
}
