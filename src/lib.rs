//! # chunked_list
//!
//! `chunked_list` collects list-like containers that share a single [`List`] interface,
//! so that the asymptotic tradeoffs between them can be compared side by side:
//!
//! - [`FixedCapacityList`]: an array with a hard maximum size.
//! - [`GrowableList`]: an array that doubles its storage on overflow.
//! - [`SinglyLinkedList`]: a forward-only node chain.
//! - [`DoublyLinkedList`]: a node chain with links in both directions.
//! - [`ChunkedList`]: a singly linked chain of fixed-capacity array chunks.
//!
//! ## Chunked storage
//! A [`ChunkedList`] keeps its elements in fixed-capacity chunks strung together
//! in a [`SinglyLinkedList`]. Elements within a chunk are contiguous, and the list grows
//! by appending chunks instead of reallocating. A logical index is resolved by
//! walking the chain while summing the fill of every chunk.
//!
//! ## Errors
//! Every fallible operation returns a [`Result`] and fails without modifying the list.
//!
//! ## Example
//! ```rust
//! use chunked_list::ChunkedList;
//!
//! let mut list = ChunkedList::new(2);
//! list.push_back('b');
//! list.push_front('a');
//! list.insert(2, 'c').unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.chunk_count(), 2);
//! assert_eq!(list.front(), Ok(&'a'));
//! assert_eq!(list.get(2), Ok(&'c'));
//!
//! assert_eq!(list.remove(1), Ok('b'));
//! assert_eq!(list.pop_back(), Ok('c'));
//! ```

mod error;
mod into_iter;
mod iter;
mod iter_mut;
mod slots;

pub mod doubly;
pub mod fixed;
pub mod growable;
pub mod singly;

pub use doubly::DoublyLinkedList;
pub use error::{Error, Result};
pub use fixed::FixedCapacityList;
pub use growable::GrowableList;
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;
pub use singly::SinglyLinkedList;

use std::hash::{Hash, Hasher};

/// The capability shared by every list of this crate.
///
/// Indices are zero-based. Reads and removals accept `index < len()`, insertions accept
/// `index <= len()`. A failed call leaves the list unchanged.
///
/// # Example
/// ```rust
/// use chunked_list::{ChunkedList, Error, GrowableList, List, SinglyLinkedList};
///
/// fn fill<L: List<u32>>(mut list: L) -> L {
///     list.push_back(2).unwrap();
///     list.push_front(0).unwrap();
///     list.insert(1, 1).unwrap();
///     list
/// }
///
/// assert_eq!(fill(SinglyLinkedList::new()).get(1), Ok(&1));
/// assert_eq!(fill(GrowableList::new()).back(), Ok(&2));
///
/// let chunked = fill(ChunkedList::new(2));
/// assert_eq!(chunked.len(), 3);
/// assert_eq!(chunked.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
/// ```
pub trait List<T> {
    /// Inserts `value` before every other element.
    fn push_front(&mut self, value: T) -> Result<()>;

    /// Inserts `value` after every other element.
    fn push_back(&mut self, value: T) -> Result<()>;

    /// Inserts `value` so that it ends up at `index`.
    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    fn pop_front(&mut self) -> Result<T>;

    fn pop_back(&mut self) -> Result<T>;

    fn remove(&mut self, index: usize) -> Result<T>;

    fn front(&self) -> Result<&T>;

    fn back(&self) -> Result<&T>;

    fn get(&self, index: usize) -> Result<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A linked list whose nodes are fixed-capacity arrays ("chunks").
///
/// # Layout
/// - The chain always holds at least one chunk, even when the list is empty.
/// - Every chunk has the capacity given to [`ChunkedList::new`].
/// - Pushing onto a full head (or tail) chunk links a new chunk before (or after) it;
///   inserting into a full chunk splits it in two. Chunks are never rebalanced.
/// - Front and back operations act on the first and last chunk holding an element.
///   A chunk drained by [`pop_front`](ChunkedList::pop_front) or
///   [`pop_back`](ChunkedList::pop_back) is unlinked unless it is the only one;
///   chunks drained by [`remove`](ChunkedList::remove) stay linked until
///   [`compact`](ChunkedList::compact) reclaims them.
///
/// Nothing is cached: the length is summed over the chain, and back operations walk to
/// the tail chunk.
///
/// # Example
/// ```rust
/// use chunked_list::ChunkedList;
///
/// let mut list = ChunkedList::new(3);
/// for value in 1..=7 {
///     list.push_back(value);
/// }
///
/// assert_eq!(list.len(), 7);
/// assert_eq!(list.front(), Ok(&1));
/// assert_eq!(list.back(), Ok(&7));
/// assert_eq!(list.get(3), Ok(&4));
/// assert_eq!(list.chunks().map(|chunk| chunk.len()).collect::<Vec<_>>(), [3, 3, 1]);
/// ```
pub struct ChunkedList<T> {
    chunk_size: usize,
    chunks: SinglyLinkedList<FixedCapacityList<T>>,
}

impl<T> ChunkedList<T> {
    /// Creates an empty list made of a single empty chunk.
    ///
    /// # Panics
    /// Panics if `chunk_size` is zero.
    ///
    /// # Example
    /// ```rust
    /// use chunked_list::ChunkedList;
    ///
    /// let list: ChunkedList<i64> = ChunkedList::new(4);
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.chunk_count(), 1);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "ChunkedList chunk size must be > 0");

        let mut chunks = SinglyLinkedList::new();
        chunks.push_front(FixedCapacityList::new(chunk_size));

        Self { chunk_size, chunks }
    }

    /// Adds an element to the front of the head chunk.
    ///
    /// If the head chunk is full, a new chunk holding only `value` is linked before it.
    ///
    /// # Example
    /// ```rust
    /// use chunked_list::ChunkedList;
    ///
    /// let mut list = ChunkedList::new(2);
    /// list.push_front(30);
    /// list.push_front(20);
    /// list.push_front(10);
    ///
    /// assert_eq!(list, [10, 20, 30]);
    /// assert_eq!(format!("{list:?}"), "[[10], [20, 30]]");
    /// ```
    pub fn push_front(&mut self, value: T) {
        let value = match self.chunks.front_mut() {
            Ok(head) => match head.push_front_within_capacity(value) {
                Ok(()) => return,
                Err(value) => value,
            },
            Err(_) => value,
        };

        log::trace!(
            "head chunk is full, linking a new head chunk of capacity {}",
            self.chunk_size
        );
        self.chunks
            .push_front(FixedCapacityList::with_value(self.chunk_size, value));
    }

    /// Adds an element to the back of the tail chunk.
    ///
    /// If the tail chunk is full, a new chunk holding only `value` is linked after it.
    ///
    /// # Example
    /// ```rust
    /// use chunked_list::ChunkedList;
    ///
    /// let mut list = ChunkedList::new(2);
    /// list.push_back("a");
    /// list.push_back("b");
    /// list.push_back("c");
    ///
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(format!("{list:?}"), r#"[["a", "b"], ["c"]]"#);
    /// ```
    pub fn push_back(&mut self, value: T) {
        let value = match self.chunks.back_mut() {
            Ok(tail) => match tail.push_within_capacity(value) {
                Ok(()) => return,
                Err(value) => value,
            },
            Err(_) => value,
        };

        log::trace!(
            "tail chunk is full, linking chunk #{} of capacity {}",
            self.chunk_count(),
            self.chunk_size
        );
        self.chunks
            .push_back(FixedCapacityList::with_value(self.chunk_size, value));
    }

    /// Inserts an element at the specified index, shifting subsequent elements to the right.
    ///
    /// `index == len()` appends like [`push_back`](Self::push_back). Any other index is
    /// inserted into the chunk that currently holds it, splitting that chunk if it is full.
    ///
    /// # Examples
    /// ```
    /// use chunked_list::{ChunkedList, Error};
    ///
    /// let mut list = ChunkedList::new(3);
    /// list.push_back(10);
    /// list.push_back(30);
    /// list.insert(1, 20).unwrap();
    ///
    /// assert_eq!(list, [10, 20, 30]);
    /// assert_eq!(list.insert(5, 50), Err(Error::IndexOutOfRange { index: 5, len: 3 }));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        if index == len {
            self.push_back(value);
            return Ok(());
        }

        let (position, offset) = self
            .locate(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        self.place(position, offset, value)
    }

    /// Removes the first element of the first chunk holding one.
    ///
    /// The chunk is unlinked once drained, unless it is the only one left.
    ///
    /// # Examples
    /// ```
    /// use chunked_list::{ChunkedList, Error};
    ///
    /// let mut list = ChunkedList::new(2);
    /// list.extend([10, 20, 30]);
    ///
    /// assert_eq!(list.pop_front(), Ok(10));
    /// assert_eq!(list.pop_front(), Ok(20));
    /// assert_eq!(list.chunk_count(), 1);
    /// assert_eq!(list.pop_front(), Ok(30));
    /// assert_eq!(list.pop_front(), Err(Error::EmptyCollection));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        let position = self.first_occupied().ok_or(Error::EmptyCollection)?;
        let value = self.chunks.get_mut(position)?.pop_front()?;
        self.unlink_if_drained(position);
        Ok(value)
    }

    /// Removes the last element of the last chunk holding one.
    ///
    /// The chunk is unlinked once drained, unless it is the only one left.
    ///
    /// # Examples
    /// ```
    /// use chunked_list::ChunkedList;
    ///
    /// let mut list = ChunkedList::new(2);
    /// list.extend([1, 2, 3]);
    ///
    /// assert_eq!(list.pop_back(), Ok(3));
    /// assert_eq!(list.pop_back(), Ok(2));
    /// assert_eq!(list.len(), 1);
    /// assert_eq!(list.back(), Ok(&1));
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        let position = self.last_occupied().ok_or(Error::EmptyCollection)?;
        let value = self.chunks.get_mut(position)?.pop_back()?;
        self.unlink_if_drained(position);
        Ok(value)
    }

    /// Removes and returns the element at the specified index, shifting subsequent
    /// elements of the same chunk to the left.
    ///
    /// # Examples
    /// ```
    /// use chunked_list::{ChunkedList, Error};
    ///
    /// let mut list = ChunkedList::new(2);
    /// list.extend([10, 20, 30, 40, 50]);
    ///
    /// assert_eq!(list.remove(2), Ok(30));
    /// assert_eq!(list.get(2), Ok(&40));
    /// assert_eq!(list.remove(10), Err(Error::IndexOutOfRange { index: 10, len: 4 }));
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }

        let (position, offset) = self.locate(index).ok_or_else(|| Error::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        self.chunks.get_mut(position)?.remove(offset)
    }

    /// Returns a reference to the first element, skipping drained chunks.
    pub fn front(&self) -> Result<&T> {
        self.chunks
            .iter()
            .find(|chunk| !chunk.is_empty())
            .ok_or(Error::EmptyCollection)?
            .front()
    }

    /// Returns a reference to the last element, skipping drained chunks.
    pub fn back(&self) -> Result<&T> {
        self.chunks
            .iter()
            .filter(|chunk| !chunk.is_empty())
            .last()
            .ok_or(Error::EmptyCollection)?
            .back()
    }

    /// Returns a reference to the element at the specified index.
    ///
    /// # Examples
    /// ```
    /// use chunked_list::{ChunkedList, Error};
    ///
    /// let mut list = ChunkedList::new(4);
    /// assert_eq!(list.get(0), Err(Error::EmptyCollection));
    ///
    /// list.push_back(10);
    /// list.push_back(20);
    ///
    /// assert_eq!(list.get(0), Ok(&10));
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }

        let (position, offset) = self.locate(index).ok_or_else(|| Error::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        self.chunks.get(position)?.get(offset)
    }

    /// Returns a mutable reference to the element at the specified index.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }

        let (position, offset) = self.locate(index).ok_or_else(|| Error::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        self.chunks.get_mut(position)?.get_mut(offset)
    }

    /// Returns the number of elements, summed over every chunk.
    pub fn len(&self) -> usize {
        self.chunks.iter().map(FixedCapacityList::len).sum()
    }

    /// Checks whether no chunk holds any element.
    ///
    /// Drained chunks kept in the chain do not count as elements.
    pub fn is_empty(&self) -> bool {
        self.chunks.iter().all(FixedCapacityList::is_empty)
    }

    /// Unlinks every drained chunk, keeping a single empty chunk if nothing is left.
    ///
    /// # Example
    /// ```rust
    /// use chunked_list::{ChunkedList, Error};
    ///
    /// let mut list = ChunkedList::<&str>::new(2);
    /// list.extend(["a", "b", "c"]);
    /// list.remove(0).unwrap();
    /// list.remove(0).unwrap();
    ///
    /// assert_eq!(list.chunk_count(), 2);
    /// assert_eq!(list.front(), Ok(&"c"));
    ///
    /// list.compact();
    /// assert_eq!(list.chunk_count(), 1);
    /// assert_eq!(list.get(1), Err(Error::IndexOutOfRange { index: 1, len: 1 }));
    /// ```
    pub fn compact(&mut self) {
        let before = self.chunk_count();

        let chunks = std::mem::take(&mut self.chunks);
        self.chunks = chunks
            .into_iter()
            .filter(|chunk| !chunk.is_empty())
            .collect();

        if self.chunks.is_empty() {
            self.chunks.push_front(FixedCapacityList::new(self.chunk_size));
        }

        log::debug!(
            "compacted chunk chain from {} to {} chunks",
            before,
            self.chunk_count()
        );
    }

    /// Removes every element, leaving a single empty chunk.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.chunks.push_front(FixedCapacityList::new(self.chunk_size));
    }

    /// The capacity of every chunk.
    #[inline]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// The number of chunks in the chain, drained ones included.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Provides an iterator over the chunks, head first.
    #[inline]
    pub fn chunks(&self) -> singly::Iter<'_, FixedCapacityList<T>> {
        self.chunks.iter()
    }

    /// Provides an iterator over list's elements.
    ///
    /// # Examples
    /// ```
    /// use chunked_list::ChunkedList;
    ///
    /// let mut list = ChunkedList::new(2);
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_list(self)
    }

    /// Provides a mutable iterator over list's elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::from_list(self)
    }

    fn first_occupied(&self) -> Option<usize> {
        self.chunks.iter().position(|chunk| !chunk.is_empty())
    }

    fn last_occupied(&self) -> Option<usize> {
        self.chunks
            .iter()
            .enumerate()
            .filter(|(_, chunk)| !chunk.is_empty())
            .map(|(position, _)| position)
            .last()
    }

    /// Unlinks the chunk at `position` if it holds nothing and is not the last chunk left.
    fn unlink_if_drained(&mut self, position: usize) {
        let drained = self
            .chunks
            .get(position)
            .is_ok_and(FixedCapacityList::is_empty);
        if !drained || self.chunk_count() == 1 {
            return;
        }

        if self.chunks.remove(position).is_ok() {
            log::trace!("unlinked drained chunk #{}", position);
        }
    }

    /// Finds the chunk holding the element at `index`, as `(chunk position, offset in chunk)`.
    fn locate(&self, index: usize) -> Option<(usize, usize)> {
        let mut start = 0;
        for (position, chunk) in self.chunks.iter().enumerate() {
            let end = start + chunk.len();
            if (start..end).contains(&index) {
                return Some((position, index - start));
            }
            start = end;
        }
        None
    }

    /// Inserts `value` at `offset` of the chunk at `position`, splitting the chunk when full.
    fn place(&mut self, position: usize, offset: usize, value: T) -> Result<()> {
        let chunk = self.chunks.get_mut(position)?;
        if !chunk.is_full() {
            return chunk.insert(offset, value);
        }

        let mut upper = chunk.split_off(chunk.len() / 2);
        let mid = chunk.len();
        log::trace!(
            "splitting full chunk #{} at {}, linking the upper half as chunk #{}",
            position,
            mid,
            position + 1
        );

        if offset <= mid {
            chunk.insert(offset, value)?;
        } else {
            upper.insert(offset - mid, value)?;
        }

        self.chunks.insert(position + 1, upper)
    }
}

impl<T> List<T> for ChunkedList<T> {
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

impl<T> Extend<T> for ChunkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iter().peekable();

        if let Ok(tail) = self.chunks.back_mut() {
            tail.fill_from(&mut iter);
        }

        let chunk_size = self.chunk_size;
        self.chunks.extend(std::iter::from_fn(|| {
            iter.peek()?;

            let mut chunk = FixedCapacityList::new(chunk_size);
            chunk.fill_from(&mut iter);
            Some(chunk)
        }));
    }
}

impl<'a, T> Extend<&'a T> for ChunkedList<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Clone> Clone for ChunkedList<T> {
    fn clone(&self) -> Self {
        Self {
            chunk_size: self.chunk_size,
            chunks: self.chunks.clone(),
        }
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for ChunkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq<&[T]> for ChunkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<[T]> for ChunkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq for ChunkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> Eq for ChunkedList<T> where T: Eq {}

impl<T> Hash for ChunkedList<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T> std::fmt::Debug for ChunkedList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.chunks.iter()).finish()
    }
}

impl<T> IntoIterator for ChunkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a ChunkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a mut ChunkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::from_list(self)
    }
}
