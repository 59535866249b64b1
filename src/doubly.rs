//! A node chain linked in both directions.

use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::{Error, List, Result};

struct Node<T> {
    value: T,
    prev: Option<NonNull<Node<T>>>,
    next: Option<NonNull<Node<T>>>,
}

/// A doubly linked list with cached head, tail and length.
///
/// Front and back operations are O(1). Indexed operations walk from whichever end is closer.
///
/// # Example
/// ```rust
/// use chunked_list::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// list.push_back(2);
/// list.push_front(0);
/// list.insert(1, 1).unwrap();
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
/// assert_eq!(list.pop_back(), Ok(2));
/// ```
pub struct DoublyLinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> DoublyLinkedList<T> {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    pub fn push_front(&mut self, value: T) {
        let node = Self::allocate(value, None, self.head);

        match self.head {
            Some(mut head) => unsafe { head.as_mut().prev = Some(node) },
            None => self.tail = Some(node),
        }

        self.head = Some(node);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let node = Self::allocate(value, self.tail, None);

        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        if index == 0 {
            self.push_front(value);
            return Ok(());
        }

        let Some(mut next) = self.node_at(index) else {
            self.push_back(value);
            return Ok(());
        };

        unsafe {
            // `index > 0`, so the node currently there has a predecessor.
            let prev = next.as_ref().prev;
            let node = Self::allocate(value, prev, Some(next));
            if let Some(mut prev) = prev {
                prev.as_mut().next = Some(node);
            }
            next.as_mut().prev = Some(node);
        }

        self.len += 1;
        Ok(())
    }

    pub fn pop_front(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::EmptyCollection)?;
        Ok(unsafe { self.unlink(head) })
    }

    pub fn pop_back(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::EmptyCollection)?;
        Ok(unsafe { self.unlink(tail) })
    }

    pub fn remove(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }

        let node = self.node_at(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        Ok(unsafe { self.unlink(node) })
    }

    pub fn front(&self) -> Result<&T> {
        self.head
            .map(|node| unsafe { &(*node.as_ptr()).value })
            .ok_or(Error::EmptyCollection)
    }

    pub fn back(&self) -> Result<&T> {
        self.tail
            .map(|node| unsafe { &(*node.as_ptr()).value })
            .ok_or(Error::EmptyCollection)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.node_at(index)
            .map(|node| unsafe { &(*node.as_ptr()).value })
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.node_at(index)
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            marker: PhantomData,
        }
    }

    fn allocate(
        value: T,
        prev: Option<NonNull<Node<T>>>,
        next: Option<NonNull<Node<T>>>,
    ) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, prev, next })))
    }

    fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        if index >= self.len {
            return None;
        }

        unsafe {
            if index < self.len / 2 {
                let mut node = self.head?;
                for _ in 0..index {
                    node = node.as_ref().next?;
                }
                Some(node)
            } else {
                let mut node = self.tail?;
                for _ in index + 1..self.len {
                    node = node.as_ref().prev?;
                }
                Some(node)
            }
        }
    }

    /// # Safety
    /// `node` must be a node of this list.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        let node = unsafe { Box::from_raw(node.as_ptr()) };

        match node.prev {
            Some(mut prev) => unsafe { prev.as_mut().next = node.next },
            None => self.head = node.next,
        }

        match node.next {
            Some(mut next) => unsafe { next.as_mut().prev = node.prev },
            None => self.tail = node.prev,
        }

        self.len -= 1;
        node.value
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> List<T> for DoublyLinkedList<T> {
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

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push_back(value));
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

unsafe impl<T: Send> Send for DoublyLinkedList<T> {}

unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

/// An iterator over the elements of a [`DoublyLinkedList`].
///
/// This struct is created by [`DoublyLinkedList::iter()`].
pub struct Iter<'a, T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.head.map(|node| unsafe {
            let node = &*node.as_ptr();
            self.len -= 1;
            self.head = node.next;
            &node.value
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.tail.map(|node| unsafe {
            let node = &*node.as_ptr();
            self.len -= 1;
            self.tail = node.prev;
            &node.value
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .field(&self.len)
            .finish()
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}
