use std::ops::{Index, IndexMut};

use crate::{Error, Result};

/// A growable array with explicit, doubling capacity management.
///
/// Growth goes through a fallible reservation, so running out of memory
/// surfaces as [`Error::Allocation`] and leaves the array exactly as it was.
#[derive(Debug)]
pub struct DynamicArray<T> {
    /// Live elements
    items: Vec<T>,

    /// Logical capacity; always >= items.len()
    capacity: usize,
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        DynamicArray {
            items: Vec::new(),
            capacity: 0,
        }
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// The copy reserves the same logical capacity as the original
    fn clone(&self) -> Self {
        let mut items = Vec::new();
        // An infallible clone cannot report the failure; fall back to an exact fit
        let capacity = match items.try_reserve_exact(self.capacity) {
            Ok(()) => self.capacity,
            Err(_) => self.items.len(),
        };
        items.extend_from_slice(&self.items);
        DynamicArray { items, capacity }
    }
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with no backing storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty array able to hold `capacity` elements before growing
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| Error::Allocation { requested: capacity })?;
        Ok(DynamicArray { items, capacity })
    }

    /// Creates an array holding `len` copies of `value`
    pub fn filled(len: usize, value: T) -> Result<Self>
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(len)?;
        array.items.resize(len, value);
        Ok(array)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops every element but keeps the backing storage
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Appends an element, doubling the capacity first if the array is full
    pub fn push(&mut self, value: T) -> Result<()> {
        self.ensure_room()?;
        self.items.push(value);
        Ok(())
    }

    /// Removes and returns the last element
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Inserts `value` at `index`, shifting the tail one place right.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.items.len() {
            return Err(Error::IndexOutOfRange(index));
        }
        self.ensure_room()?;
        self.items.insert(index, value);
        Ok(())
    }

    /// Removes the element at `index`, shifting the tail one place left
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Reverses the order of the elements in place
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Consumes the array and hands back its elements as a `Vec`
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Makes room for one more element, doubling the capacity (minimum 1)
    fn ensure_room(&mut self) -> Result<()> {
        if self.items.len() < self.capacity {
            return Ok(());
        }
        let new_capacity = self
            .capacity
            .checked_mul(2)
            .ok_or(Error::Allocation { requested: usize::MAX })?
            .max(1);
        self.reserve_to(new_capacity)
    }

    /// Grows the logical capacity to `new_capacity`; never shrinks
    pub(crate) fn reserve_to(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity {
            return Ok(());
        }
        let additional = new_capacity - self.items.len();
        self.items
            .try_reserve_exact(additional)
            .map_err(|_| Error::Allocation { requested: new_capacity })?;
        self.capacity = new_capacity;
        Ok(())
    }
}

// Capacity is a storage detail; equality only looks at the elements.
impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(items: Vec<T>) -> Self {
        let capacity = items.len();
        DynamicArray { items, capacity }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
