use core::iter::FusedIterator;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::{ptr, slice};

/// Contiguous storage with a fixed number of slots, of which the first `len` are initialized.
///
/// This is the backing store of both [`FixedCapacityList`](crate::FixedCapacityList) and
/// [`GrowableList`](crate::GrowableList). Bounds are asserted here; the public lists check
/// them beforehand and report an [`Error`](crate::Error) instead.
pub(crate) struct Slots<T> {
    len: usize,
    data: Box<[MaybeUninit<T>]>,
}

impl<T> Slots<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            len: 0,
            data: Box::<[T]>::new_uninit_slice(capacity),
        }
    }

    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.insert(self.len(), value);
    }

    pub fn insert(&mut self, index: usize, value: T) {
        if index > self.len() {
            panic!("Index out of bounds: cannot insert at index {}", index);
        }

        if self.is_full() {
            panic!("Slots are full: cannot insert more elements");
        }

        unsafe {
            let data_ptr = self.data.as_mut_ptr();

            // Shift elements starting from the index to the right
            ptr::copy(
                data_ptr.add(index),
                data_ptr.add(index + 1),
                self.len() - index,
            );

            data_ptr.add(index).write(MaybeUninit::new(value));
        }

        self.len += 1;
    }

    pub fn remove(&mut self, index: usize) -> T {
        if index >= self.len() {
            panic!("Index out of bounds: cannot remove at index {}", index);
        }

        let value = unsafe { self.data[index].assume_init_read() };

        unsafe {
            // Shift elements from `index + 1` to fill the gap
            let data_ptr = self.data.as_mut_ptr();
            ptr::copy(
                data_ptr.add(index + 1),
                data_ptr.add(index),
                self.len() - index - 1,
            );
        }

        self.len -= 1;
        value
    }

    /// Moves the elements at `at..len` into new slots of the same capacity.
    pub fn split_off(&mut self, at: usize) -> Self {
        assert!(at <= self.len(), "Index out of bounds: cannot split at {}", at);

        let mut other = Self::with_capacity(self.capacity());
        let count = self.len() - at;

        unsafe {
            ptr::copy_nonoverlapping(self.data.as_ptr().add(at), other.data.as_mut_ptr(), count);
        }

        self.len = at;
        other.len = count;
        other
    }

    /// Reallocates into `new_capacity` slots, copying every element over
    /// before the old storage is released.
    pub fn grow(&mut self, new_capacity: usize) {
        assert!(new_capacity >= self.len());

        let mut data = Box::<[T]>::new_uninit_slice(new_capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.data.as_ptr(), data.as_mut_ptr(), self.len());
        }

        // The old slots are `MaybeUninit`, dropping them never drops a `T`.
        self.data = data;
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr().cast::<T>(), self.len()) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_mut_ptr().cast::<T>(), self.len()) }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

impl<T> Drop for Slots<T> {
    fn drop(&mut self) {
        for i in (0..self.len).rev() {
            unsafe { self.data[i].assume_init_drop() };
        }

        self.len = 0;
    }
}

impl<T: Clone> Clone for Slots<T> {
    fn clone(&self) -> Self {
        let mut other = Self::with_capacity(self.capacity());
        for value in self.as_slice() {
            other.push_back(value.clone());
        }
        other
    }
}

impl<T> IntoIterator for Slots<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut this = ManuallyDrop::new(self);

        IntoIter {
            data: std::mem::take(&mut this.data),
            front: 0,
            back: this.len,
        }
    }
}

/// An owning iterator over the elements of an array-backed list.
///
/// This struct is created by `into_iter()` on
/// [`FixedCapacityList`](crate::FixedCapacityList) and [`GrowableList`](crate::GrowableList).
pub struct IntoIter<T> {
    data: Box<[MaybeUninit<T>]>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn as_slice(&self) -> &[T] {
        unsafe {
            slice::from_raw_parts(
                self.data.as_ptr().add(self.front).cast::<T>(),
                self.back - self.front,
            )
        }
    }
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            data: Box::default(),
            front: 0,
            back: 0,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let value = unsafe { self.data[self.front].assume_init_read() };
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        Some(unsafe { self.data[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.front..self.back {
            unsafe { self.data[i].assume_init_drop() };
        }

        self.front = self.back;
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
