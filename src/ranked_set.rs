//! A small sorted container carrying an integer rank, used as the element type
//! of the solution sets a cover search produces.
//!
//! The natural order of a `RankedSet` is rank first, contents second. Putting
//! these in a `BTreeSet<RankedSet<T>>` gives callers a sorted list of
//! solutions (best-first or worst-first depending on iteration direction) for
//! free, without reaching for a priority queue that would have to be drained
//! to be iterated.
//!
//! A dense `Vec<T>` backs the set rather than a balanced tree: solution sizes
//! are bounded by a small depth limit (a team of at most 6, or at most 24
//! attack slots), so a linear scan during insert/erase is both simpler and
//! faster in practice than tree-node indirection.

use std::cmp::Ordering;
use std::slice;

/// A sorted, duplicate-free sequence of `T` with an accumulated integer rank.
#[derive(Debug, Clone, Default)]
pub struct RankedSet<T> {
    rank: i32,
    elements: Vec<T>,
}

impl<T: Ord> RankedSet<T> {
    pub fn new() -> Self {
        RankedSet {
            rank: 0,
            elements: Vec::new(),
        }
    }

    /// Reserves capacity for at least `additional` more elements, useful when
    /// the caller already knows the depth limit of the search that will fill
    /// this set.
    pub fn with_capacity(capacity: usize) -> Self {
        RankedSet {
            rank: 0,
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn rank(&self) -> i32 {
        self.rank
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Inserts `value`, maintaining sorted order. If `value` was not already
    /// present, `rank_delta` is added to the running rank and `true` is
    /// returned. If `value` was already present, this is a no-op and `false`
    /// is returned.
    pub fn insert(&mut self, rank_delta: i32, value: T) -> bool {
        match self.elements.binary_search(&value) {
            Ok(_) => false,
            Err(insert_at) => {
                self.elements.insert(insert_at, value);
                self.rank += rank_delta;
                true
            }
        }
    }

    /// Removes `value`, maintaining sorted order. If `value` was present,
    /// `rank_delta` is subtracted from the running rank and `true` is
    /// returned. If `value` was absent, this is a no-op and `false` is
    /// returned.
    pub fn erase(&mut self, rank_delta: i32, value: &T) -> bool {
        match self.elements.binary_search(value) {
            Ok(found_at) => {
                self.elements.remove(found_at);
                self.rank -= rank_delta;
                true
            }
            Err(_) => false,
        }
    }
}

impl<T: Ord> PartialEq for RankedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.elements == other.elements
    }
}

impl<T: Ord> Eq for RankedSet<T> {}

impl<T: Ord> PartialOrd for RankedSet<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for RankedSet<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.elements.cmp(&other.elements))
    }
}

impl<'a, T: Ord> IntoIterator for &'a RankedSet<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> IntoIterator for RankedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
