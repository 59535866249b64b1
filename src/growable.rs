//! An array-backed list that reallocates on overflow.

use crate::slots::Slots;
use crate::{Error, List, Result};

pub use crate::slots::IntoIter;

/// A list stored in a contiguous block that doubles its capacity whenever it runs out of room.
///
/// Growth copies every element into the new block before the old one is released,
/// which keeps appends amortized O(1).
///
/// # Example
/// ```rust
/// use chunked_list::GrowableList;
///
/// let mut list = GrowableList::with_capacity(1);
/// list.push_back(1);
/// list.push_back(2);
/// list.push_back(3);
///
/// assert_eq!(list.as_slice(), &[1, 2, 3]);
/// assert_eq!(list.capacity(), 4);
/// ```
pub struct GrowableList<T> {
    slots: Slots<T>,
}

impl<T> GrowableList<T> {
    /// The capacity of a list created with [`GrowableList::new`].
    pub const DEFAULT_CAPACITY: usize = 32;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slots::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.reserve_one();
        self.slots.insert(0, value);
    }

    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.reserve_one();
        self.slots.push_back(value);
    }

    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        self.reserve_one();
        self.slots.insert(index, value);
        Ok(())
    }

    pub fn pop_front(&mut self) -> Result<T> {
        self.remove(0)
    }

    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }

        Ok(self.slots.remove(self.len() - 1))
    }

    pub fn remove(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }

        if index >= self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        Ok(self.slots.remove(index))
    }

    pub fn front(&self) -> Result<&T> {
        self.as_slice().first().ok_or(Error::EmptyCollection)
    }

    pub fn back(&self) -> Result<&T> {
        self.as_slice().last().ok_or(Error::EmptyCollection)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.as_slice().get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.slots.as_slice()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    fn reserve_one(&mut self) {
        if !self.slots.is_full() {
            return;
        }

        let new_capacity = (self.capacity() * 2).max(1);
        log::trace!(
            "growing list storage from {} to {} slots",
            self.capacity(),
            new_capacity
        );
        self.slots.grow(new_capacity);
    }
}

impl<T> Default for GrowableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> for GrowableList<T> {
    fn push_front(&mut self, value: T) -> Result<()> {
        Self::push_front(self, value);
        Ok(())
    }

    fn push_back(&mut self, value: T) -> Result<()> {
        Self::push_back(self, value);
        Ok(())
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        Self::insert(self, index, value)
    }

    fn pop_front(&mut self) -> Result<T> {
        Self::pop_front(self)
    }

    fn pop_back(&mut self) -> Result<T> {
        Self::pop_back(self)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        Self::remove(self, index)
    }

    fn front(&self) -> Result<&T> {
        Self::front(self)
    }

    fn back(&self) -> Result<&T> {
        Self::back(self)
    }

    fn get(&self, index: usize) -> Result<&T> {
        Self::get(self, index)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<T> FromIterator<T> for GrowableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for GrowableList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push_back(value));
    }
}

impl<T: Clone> Clone for GrowableList<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for GrowableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableList<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for GrowableList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for GrowableList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
