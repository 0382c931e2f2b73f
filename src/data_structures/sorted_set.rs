use std::cmp::Ordering;
use std::ops::{BitAnd, BitOr, Sub};

use crate::data_structures::DynamicArray;
use crate::Result;

/// A set stored as a strictly ascending, duplicate-free array
///
/// Lookups are binary searches over the backing array. The set algebra
/// operations are two-pointer merges over both ascending sequences, so
/// each runs in O(n + m) and produces an ascending result without sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedSet<T> {
    /// Ascending, duplicate-free elements
    items: DynamicArray<T>,
}

impl<T> Default for SortedSet<T> {
    fn default() -> Self {
        SortedSet {
            items: DynamicArray::new(),
        }
    }
}

impl<T: Ord + Clone> SortedSet<T> {
    /// Creates an empty set with no backing storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set able to hold `capacity` elements before growing
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(SortedSet {
            items: DynamicArray::with_capacity(capacity)?,
        })
    }

    /// Builds a set from arbitrary values, dropping duplicates
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = SortedSet::new();
        for value in values {
            set.insert(value)?;
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every element but keeps the backing storage
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Inserts `value` in its sorted position.
    ///
    /// Returns `Ok(false)` without touching the set if an equal element is
    /// already present. A full set doubles its capacity first.
    pub fn insert(&mut self, value: T) -> Result<bool> {
        match self.items.as_slice().binary_search(&value) {
            Ok(_) => Ok(false),
            Err(position) => {
                self.items.insert(position, value)?;
                Ok(true)
            }
        }
    }

    /// Position of the element equal to `value`.
    ///
    /// `None` plays the role of the one-past-the-end position: a returned
    /// `Some(pos)` always refers to an element equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.items.as_slice().binary_search(value).ok()
    }

    /// The one-past-the-end position
    pub fn end(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Element at `position`, if the position holds one
    pub fn get(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    /// Removes the element at `position`, shifting the tail left.
    ///
    /// Positions at or past the end are ignored.
    pub fn erase(&mut self, position: usize) -> Option<T> {
        self.items.remove(position)
    }

    /// Removes the element equal to `value`, if any
    pub fn remove(&mut self, value: &T) -> bool {
        match self.find(value) {
            Some(position) => self.erase(position).is_some(),
            None => false,
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Iterates in ascending order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Elements present in both `self` and `rhs`
    pub fn intersection(&self, rhs: &SortedSet<T>) -> Result<SortedSet<T>> {
        let mut result = SortedSet::with_capacity(self.len().min(rhs.len()))?;
        let (lhs, rhs) = (self.as_slice(), rhs.as_slice());
        let (mut i, mut j) = (0, 0);

        while i < lhs.len() && j < rhs.len() {
            match lhs[i].cmp(&rhs[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    result.items.push(lhs[i].clone())?;
                    i += 1;
                    j += 1;
                }
            }
        }

        Ok(result)
    }

    /// Elements present in either `self` or `rhs`
    pub fn union(&self, rhs: &SortedSet<T>) -> Result<SortedSet<T>> {
        let mut result = SortedSet::with_capacity(self.len() + rhs.len())?;
        let (lhs, rhs) = (self.as_slice(), rhs.as_slice());
        let (mut i, mut j) = (0, 0);

        while i < lhs.len() && j < rhs.len() {
            match lhs[i].cmp(&rhs[j]) {
                Ordering::Less => {
                    result.items.push(lhs[i].clone())?;
                    i += 1;
                }
                Ordering::Greater => {
                    result.items.push(rhs[j].clone())?;
                    j += 1;
                }
                Ordering::Equal => {
                    result.items.push(lhs[i].clone())?;
                    i += 1;
                    j += 1;
                }
            }
        }

        // At most one of the two tails is non-empty
        for value in lhs[i..].iter().chain(&rhs[j..]) {
            result.items.push(value.clone())?;
        }

        Ok(result)
    }

    /// Elements of `self` that are absent from `rhs`
    pub fn difference(&self, rhs: &SortedSet<T>) -> Result<SortedSet<T>> {
        let mut result = SortedSet::with_capacity(self.len())?;
        let (lhs, rhs) = (self.as_slice(), rhs.as_slice());
        let (mut i, mut j) = (0, 0);

        while i < lhs.len() {
            if j == rhs.len() {
                result.items.push(lhs[i].clone())?;
                i += 1;
                continue;
            }
            match lhs[i].cmp(&rhs[j]) {
                Ordering::Less => {
                    result.items.push(lhs[i].clone())?;
                    i += 1;
                }
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
            }
        }

        Ok(result)
    }
}

impl<'a, 'b, T: Ord + Clone> BitAnd<&'b SortedSet<T>> for &'a SortedSet<T> {
    type Output = Result<SortedSet<T>>;

    fn bitand(self, rhs: &'b SortedSet<T>) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<'a, 'b, T: Ord + Clone> BitOr<&'b SortedSet<T>> for &'a SortedSet<T> {
    type Output = Result<SortedSet<T>>;

    fn bitor(self, rhs: &'b SortedSet<T>) -> Self::Output {
        self.union(rhs)
    }
}

impl<'a, 'b, T: Ord + Clone> Sub<&'b SortedSet<T>> for &'a SortedSet<T> {
    type Output = Result<SortedSet<T>>;

    fn sub(self, rhs: &'b SortedSet<T>) -> Self::Output {
        self.difference(rhs)
    }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
