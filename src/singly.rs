//! A forward-only chain of nodes.

use core::iter::FusedIterator;

use crate::{Error, List, Result};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly linked list that owns its head and nothing else.
///
/// No tail pointer and no element count are cached: operations on the back of the list,
/// indexed operations and [`len`](Self::len) all walk the chain from the head in O(n).
/// Front operations are O(1).
///
/// It is used on its own and as the chunk chain of [`ChunkedList`](crate::ChunkedList).
///
/// # Example
/// ```rust
/// use chunked_list::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.push_front("b");
/// list.push_front("a");
///
/// assert_eq!(list.front(), Ok(&"a"));
/// assert_eq!(list.get(1), Ok(&"b"));
/// assert_eq!(list.len(), 2);
/// ```
pub struct SinglyLinkedList<T> {
    head: Link<T>,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Adds an element at the head, O(1).
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    /// Walks to the end of the chain and attaches an element there, O(n).
    pub fn push_back(&mut self, value: T) {
        *self.tail_link() = Some(Box::new(Node { value, next: None }));
    }

    /// Splices an element in so that it ends up at `index`.
    ///
    /// `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        match self.link_at(index) {
            Some(link) => {
                let next = link.take();
                *link = Some(Box::new(Node { value, next }));
                Ok(())
            }
            None => Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            }),
        }
    }

    pub fn pop_front(&mut self) -> Result<T> {
        self.head
            .take()
            .map(|node| {
                self.head = node.next;
                node.value
            })
            .ok_or(Error::EmptyCollection)
    }

    pub fn pop_back(&mut self) -> Result<T> {
        match self.len() {
            0 => Err(Error::EmptyCollection),
            len => self.remove(len - 1),
        }
    }

    /// Unlinks the node at `index` and returns its value.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }

        self.link_at(index)
            .and_then(|link| {
                let node = link.take()?;
                *link = node.next;
                Some(node.value)
            })
            .ok_or_else(|| Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    pub fn front(&self) -> Result<&T> {
        self.head
            .as_ref()
            .map(|node| &node.value)
            .ok_or(Error::EmptyCollection)
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.head
            .as_mut()
            .map(|node| &mut node.value)
            .ok_or(Error::EmptyCollection)
    }

    pub fn back(&self) -> Result<&T> {
        self.iter().last().ok_or(Error::EmptyCollection)
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.iter_mut().last().ok_or(Error::EmptyCollection)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.iter().nth(index).ok_or_else(|| Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        // The length is only needed for the error, computing it upfront keeps the borrow simple.
        let len = self.len();
        self.iter_mut()
            .nth(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Counts the nodes by walking the whole chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }

    /// Provides a forward iterator starting at the head.
    ///
    /// Each call starts a fresh traversal.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    fn tail_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    /// Returns the link that currently holds the node at `index`, the trailing `None`
    /// when `index == len`, or nothing when `index > len`.
    fn link_at(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => return None,
            }
        }
        Some(link)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> List<T> for SinglyLinkedList<T> {
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

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut link = self.tail_link();
        for value in iter {
            let node = link.insert(Box::new(Node { value, next: None }));
            link = &mut node.next;
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len();
        IntoIter { list: self, len }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A forward iterator over the elements of a [`SinglyLinkedList`].
///
/// This struct is created by [`SinglyLinkedList::iter()`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self { next: None }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

/// A forward iterator over mutable references to the elements of a [`SinglyLinkedList`].
///
/// This struct is created by [`SinglyLinkedList::iter_mut()`].
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<T> Default for IterMut<'_, T> {
    fn default() -> Self {
        Self { next: None }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a [`SinglyLinkedList`].
///
/// This struct is created by `SinglyLinkedList::into_iter()`.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
    len: usize,
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    pub(crate) fn as_list(&self) -> &SinglyLinkedList<T> {
        &self.list
    }
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            list: SinglyLinkedList::new(),
            len: 0,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.pop_front().ok()?;
        self.len -= 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}
