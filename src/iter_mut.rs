use core::slice;
use std::iter::FusedIterator;

use crate::singly;
use crate::{ChunkedList, FixedCapacityList};

/// A mutable iterator over the elements of a ChunkedList.
///
/// This struct is created by ChunkedList::iter_mut().
#[derive(Default)]
pub struct IterMut<'a, T> {
    chunks: singly::IterMut<'a, FixedCapacityList<T>>,
    current: slice::IterMut<'a, T>,
    len: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn from_list(list: &'a mut ChunkedList<T>) -> Self {
        let len = list.len();
        Self {
            chunks: list.chunks.iter_mut(),
            current: Default::default(),
            len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.next() {
                self.len -= 1;
                return Some(value);
            }

            self.current = self.chunks.next()?.iter_mut();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> std::fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IterMut").field(&self.len).finish()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::ChunkedList;

    use super::IterMut;

    #[test]
    fn test_default_iterator_yields_nothing() {
        let mut sut: IterMut<i32> = Default::default();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next(), None);
    }

    #[test]
    fn test_iter_forward() {
        let mut list = ChunkedList::<usize>::new(2);
        list.extend([0, 1, 2, 3, 4]);

        let mut sut = list.iter_mut();
        assert_eq!(sut.len(), 5);
        assert_eq!(sut.next(), Some(&mut 0));
        assert_eq!(sut.next(), Some(&mut 1));
        assert_eq!(sut.next(), Some(&mut 2));
        assert_eq!(sut.next(), Some(&mut 3));
        assert_eq!(sut.next(), Some(&mut 4));
        assert_eq!(sut.next(), None);

        list.clear();
        let mut sut = list.iter_mut();
        assert_eq!(sut.next(), None);
    }

    #[test]
    fn test_writes_reach_every_chunk() {
        let mut list = ChunkedList::<usize>::new(2);
        list.extend([0, 1, 2, 3, 4]);

        for value in &mut list {
            *value *= 10;
        }

        assert_eq!(list, [0, 10, 20, 30, 40]);
        assert_eq!(list.chunk_count(), 3);
    }

    #[test]
    fn test_references_stay_valid_together() {
        let mut list = ChunkedList::<usize>::new(2);
        list.extend([0, 1, 2, 3, 4]);

        let mut refs: Vec<_> = list.iter_mut().collect();
        *refs[0] += 1;
        *refs[4] += 1;
        assert_eq!(list.get(0), Ok(&1));
        assert_eq!(list.get(4), Ok(&5));
    }

    #[quickcheck]
    fn test_iter_mut_behavioural(mut seed: Vec<i32>) {
        fn _test(chunk_size: usize, expected: &mut [i32]) {
            let mut actual = ChunkedList::<i32>::new(chunk_size);
            actual.extend(expected.iter().copied());

            assert_eq!(actual.iter_mut().len(), expected.len());
            assert!(actual.iter_mut().eq(expected.iter_mut()));
            assert_eq!(actual.iter_mut().count(), expected.iter_mut().count());
            assert_eq!(actual.iter_mut().max(), expected.iter_mut().max());
            assert_eq!(actual.iter_mut().min(), expected.iter_mut().min());
        }

        for chunk_size in [1, 2, 3, 4, 5, 8, 16, 64] {
            _test(chunk_size, &mut seed);
        }
    }
}
