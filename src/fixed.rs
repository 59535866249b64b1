//! An array-backed list with a hard maximum size.

use crate::slots::Slots;
use crate::{Error, List, Result};

pub use crate::slots::IntoIter;

/// A list stored in a single contiguous block of `capacity` slots.
///
/// Logical elements occupy the first [`len`](Self::len) slots in order. Insertion beyond
/// the capacity fails with [`Error::CapacityExceeded`] and leaves the list untouched.
///
/// Chunks of a [`ChunkedList`](crate::ChunkedList) are `FixedCapacityList`s.
///
/// # Example
/// ```rust
/// use chunked_list::{Error, FixedCapacityList};
///
/// let mut list = FixedCapacityList::new(2);
/// list.push_back(1).unwrap();
/// list.push_front(0).unwrap();
///
/// assert_eq!(list.as_slice(), &[0, 1]);
/// assert_eq!(list.push_back(2), Err(Error::CapacityExceeded { capacity: 2 }));
/// ```
pub struct FixedCapacityList<T> {
    slots: Slots<T>,
}

impl<T> FixedCapacityList<T> {
    /// Creates an empty list able to hold up to `capacity` elements.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "FixedCapacityList capacity must be > 0");

        Self {
            slots: Slots::with_capacity(capacity),
        }
    }

    /// Creates a list with the given capacity holding only `value`.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_value(capacity: usize, value: T) -> Self {
        let mut this = Self::new(capacity);
        this.slots.push_back(value);
        this
    }

    /// Pulls elements from `iter` until the list is full or `iter` runs dry.
    pub fn fill_from<I: Iterator<Item = T>>(&mut self, iter: &mut I) {
        let room = self.capacity() - self.len();
        for value in iter.take(room) {
            self.slots.push_back(value);
        }
    }

    /// Appends an element, O(1).
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.ensure_room()?;
        self.slots.push_back(value);
        Ok(())
    }

    /// Appends an element if there is room, otherwise hands it back.
    ///
    /// # Example
    /// ```rust
    /// use chunked_list::FixedCapacityList;
    ///
    /// let mut list = FixedCapacityList::new(1);
    /// assert_eq!(list.push_within_capacity('a'), Ok(()));
    /// assert_eq!(list.push_within_capacity('b'), Err('b'));
    /// ```
    pub fn push_within_capacity(&mut self, value: T) -> std::result::Result<(), T> {
        if self.is_full() {
            return Err(value);
        }

        self.slots.push_back(value);
        Ok(())
    }

    /// Inserts an element at the front, shifting every element one slot right. O(n).
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.insert(0, value)
    }

    /// Inserts an element at the front if there is room, otherwise hands it back.
    pub fn push_front_within_capacity(&mut self, value: T) -> std::result::Result<(), T> {
        if self.is_full() {
            return Err(value);
        }

        self.slots.insert(0, value);
        Ok(())
    }

    /// Inserts an element at `index`, shifting the elements after it one slot right. O(n).
    ///
    /// Fails with [`Error::CapacityExceeded`] when full, then with
    /// [`Error::IndexOutOfRange`] when `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.ensure_room()?;
        if index > self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        self.slots.insert(index, value);
        Ok(())
    }

    /// Removes the first element, shifting the rest one slot left. O(n).
    pub fn pop_front(&mut self) -> Result<T> {
        self.remove(0)
    }

    /// Removes the last element. O(1).
    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }

        Ok(self.slots.remove(self.len() - 1))
    }

    /// Removes the element at `index`, shifting the elements after it one slot left. O(n).
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }

        self.check_index(index)?;
        Ok(self.slots.remove(index))
    }

    pub fn front(&self) -> Result<&T> {
        self.as_slice().first().ok_or(Error::EmptyCollection)
    }

    pub fn back(&self) -> Result<&T> {
        self.as_slice().last().ok_or(Error::EmptyCollection)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Splits the list in two at `at`.
    ///
    /// Returns a new list with the same capacity holding the elements `at..len`,
    /// `self` keeps `0..at`.
    ///
    /// # Panics
    /// Panics if `at > len`.
    pub fn split_off(&mut self, at: usize) -> Self {
        Self {
            slots: self.slots.split_off(at),
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.slots.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.slots.as_mut_slice()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
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

    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    fn ensure_room(&self) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        Ok(())
    }
}

impl<T> List<T> for FixedCapacityList<T> {
    fn push_front(&mut self, value: T) -> Result<()> {
        Self::push_front(self, value)
    }

    fn push_back(&mut self, value: T) -> Result<()> {
        Self::push_back(self, value)
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

impl<T: Clone> Clone for FixedCapacityList<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for FixedCapacityList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for FixedCapacityList<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for FixedCapacityList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for FixedCapacityList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FixedCapacityList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, FixedCapacityList};

    fn make_full_list() -> FixedCapacityList<&'static str> {
        let mut sut = FixedCapacityList::new(4);
        sut.push_back("a").unwrap();
        sut.push_back("b").unwrap();
        sut.push_back("c").unwrap();
        sut.push_back("d").unwrap();
        sut
    }

    #[test]
    #[should_panic]
    fn test_new_rejects_zero_capacity() {
        let _ = FixedCapacityList::<i32>::new(0);
    }

    #[test]
    fn test_new_creates_empty_list() {
        let sut: FixedCapacityList<i64> = FixedCapacityList::new(3);
        assert!(sut.is_empty());
        assert!(!sut.is_full());
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.capacity(), 3);
    }

    #[test]
    fn test_empty_list_front_back_accesses_fail() {
        let mut sut: FixedCapacityList<i64> = FixedCapacityList::new(3);
        assert_eq!(sut.front(), Err(Error::EmptyCollection));
        assert_eq!(sut.back(), Err(Error::EmptyCollection));
        assert_eq!(sut.pop_front(), Err(Error::EmptyCollection));
        assert_eq!(sut.pop_back(), Err(Error::EmptyCollection));
        assert_eq!(sut.remove(0), Err(Error::EmptyCollection));
        assert_eq!(
            sut.get(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_push_back_past_capacity_leaves_contents_unchanged() {
        let mut sut = make_full_list();
        assert!(sut.is_full());

        assert_eq!(
            sut.push_back("e"),
            Err(Error::CapacityExceeded { capacity: 4 })
        );
        assert_eq!(
            sut.push_front("e"),
            Err(Error::CapacityExceeded { capacity: 4 })
        );
        assert_eq!(
            sut.insert(2, "e"),
            Err(Error::CapacityExceeded { capacity: 4 })
        );
        assert_eq!(sut.as_slice(), &["a", "b", "c", "d"]);
    }

    #[test]
    fn test_insert_shifts_elements_right() {
        let mut sut = FixedCapacityList::new(5);
        sut.insert(0, 10).unwrap(); // [10]
        sut.insert(0, 5).unwrap(); // [5, 10]
        sut.insert(2, 20).unwrap(); // [5, 10, 20]
        sut.insert(1, 7).unwrap(); // [5, 7, 10, 20]
        assert_eq!(sut.as_slice(), &[5, 7, 10, 20]);

        assert_eq!(
            sut.insert(5, 99),
            Err(Error::IndexOutOfRange { index: 5, len: 4 })
        );
        assert_eq!(sut.as_slice(), &[5, 7, 10, 20]);

        sut.insert(4, 25).unwrap();
        assert_eq!(sut.get(4), Ok(&25));
        assert_eq!(sut.len(), 5);
    }

    #[test]
    fn test_pop_front_removes_in_order() {
        let mut sut = make_full_list();
        assert_eq!(sut.pop_front(), Ok("a"));
        assert_eq!(sut.len(), 3);
        assert_eq!(sut.pop_front(), Ok("b"));
        assert_eq!(sut.pop_front(), Ok("c"));
        assert_eq!(sut.pop_front(), Ok("d"));
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.pop_front(), Err(Error::EmptyCollection));
    }

    #[test]
    fn test_pop_back_removes_in_reverse_order() {
        let mut sut = make_full_list();
        assert_eq!(sut.pop_back(), Ok("d"));
        assert_eq!(sut.pop_back(), Ok("c"));
        assert_eq!(sut.pop_back(), Ok("b"));
        assert_eq!(sut.pop_back(), Ok("a"));
        assert!(sut.is_empty());
        assert_eq!(sut.pop_back(), Err(Error::EmptyCollection));
    }

    #[test]
    fn test_remove_shifts_elements_left() {
        let mut sut = make_full_list();
        assert_eq!(sut.remove(2), Ok("c"));
        assert_eq!(sut.remove(2), Ok("d"));
        assert_eq!(
            sut.remove(2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(sut.remove(1), Ok("b"));
        assert_eq!(sut.remove(0), Ok("a"));
        assert_eq!(sut.remove(0), Err(Error::EmptyCollection));
    }

    #[test]
    fn test_get_front_back_are_idempotent() {
        let sut = make_full_list();
        for _ in 0..3 {
            assert_eq!(sut.front(), Ok(&"a"));
            assert_eq!(sut.back(), Ok(&"d"));
            assert_eq!(sut.get(1), Ok(&"b"));
            assert_eq!(sut.len(), 4);
        }
        assert_eq!(
            sut.get(4),
            Err(Error::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut sut = make_full_list();
        *sut.get_mut(1).unwrap() = "z";
        assert_eq!(sut.as_slice(), &["a", "z", "c", "d"]);
        assert!(sut.get_mut(9).is_err());
    }

    #[test]
    fn test_push_within_capacity_hands_the_value_back() {
        let mut sut = FixedCapacityList::new(1);
        assert_eq!(sut.push_within_capacity(String::from("x")), Ok(()));
        assert_eq!(
            sut.push_within_capacity(String::from("y")),
            Err(String::from("y"))
        );
        assert_eq!(sut.as_slice(), &["x"]);
    }

    #[test]
    fn test_push_front_within_capacity_hands_the_value_back() {
        let mut sut = FixedCapacityList::new(2);
        assert_eq!(sut.push_front_within_capacity('b'), Ok(()));
        assert_eq!(sut.push_front_within_capacity('a'), Ok(()));
        assert_eq!(sut.push_front_within_capacity('z'), Err('z'));
        assert_eq!(sut.as_slice(), &['a', 'b']);
    }

    #[test]
    fn test_fill_from_stops_when_full() {
        let mut sut = FixedCapacityList::with_value(3, 0);
        let mut source = 1..10;
        sut.fill_from(&mut source);
        assert_eq!(sut.as_slice(), &[0, 1, 2]);
        assert_eq!(source.next(), Some(3));

        let mut sut = FixedCapacityList::new(3);
        sut.fill_from(&mut std::iter::once('a'));
        assert_eq!(sut.as_slice(), &['a']);
    }

    #[test]
    fn test_split_off_keeps_capacity() {
        let mut sut = make_full_list();
        let upper = sut.split_off(1);
        assert_eq!(sut.as_slice(), &["a"]);
        assert_eq!(upper.as_slice(), &["b", "c", "d"]);
        assert_eq!(upper.capacity(), 4);
        assert_eq!(sut.capacity(), 4);
    }

    #[test]
    fn test_clone_eq_debug_and_into_iter() {
        let sut = make_full_list();
        let copy = sut.clone();
        assert_eq!(sut, copy);
        assert_eq!(format!("{sut:?}"), r#"["a", "b", "c", "d"]"#);
        assert_eq!(copy.into_iter().rev().collect::<Vec<_>>(), ["d", "c", "b", "a"]);
        assert_eq!((&sut).into_iter().count(), 4);
    }
}
