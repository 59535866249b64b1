use core::iter::FusedIterator;
use core::slice;

use crate::singly;
use crate::{ChunkedList, FixedCapacityList};

/// An iterator over the elements of a ChunkedList.
///
/// This struct is created by ChunkedList::iter().
pub struct Iter<'a, T> {
    chunks: singly::Iter<'a, FixedCapacityList<T>>,
    current: slice::Iter<'a, T>,
    len: usize,
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self {
            chunks: Default::default(),
            current: Default::default(),
            len: 0,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_list(list: &'a ChunkedList<T>) -> Self {
        Self {
            chunks: list.chunks(),
            current: Default::default(),
            len: list.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            chunks: self.chunks.clone(),
            current: self.current.clone(),
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.next() {
                self.len -= 1;
                return Some(value);
            }

            self.current = self.chunks.next()?.iter();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> core::fmt::Debug for Iter<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .field(&self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::ChunkedList;

    use super::Iter;

    fn make_list(chunk_size: usize, values: &[usize]) -> ChunkedList<usize> {
        let mut list = ChunkedList::new(chunk_size);
        list.extend(values);
        list
    }

    #[test]
    fn test_default_iterator_yields_nothing() {
        let mut sut: Iter<i32> = Default::default();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next(), None);
    }

    #[test]
    fn test_iter_forward() {
        let mut list = make_list(2, &[0, 1, 2, 3, 4]);
        let sut = list.iter();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[0, 1, 2, 3, 4]);

        list.clear();
        let sut = list.iter();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[]);
    }

    #[test]
    fn test_iter_skips_drained_chunks() {
        let mut list = make_list(2, &[0, 1, 2, 3, 4]);
        list.remove(2).unwrap();
        list.remove(2).unwrap();
        assert_eq!(list.chunk_count(), 3);

        let mut sut = list.iter();
        assert_eq!(sut.len(), 3);
        assert_eq!(sut.next(), Some(&0));
        assert_eq!(sut.next(), Some(&1));
        assert_eq!(sut.len(), 1);
        assert_eq!(sut.next(), Some(&4));
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next(), None);
    }

    #[test]
    fn test_clone_works_correctly() {
        let list = make_list(2, &[0, 1, 2, 3, 4]);

        let mut base = list.iter();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[0, 1, 2, 3, 4]);

        base.next();
        base.next();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[2, 3, 4]);
    }

    #[test]
    fn test_debug_works_correctly() {
        let array = [0, 1, 2, 3, 4];
        let list = make_list(2, &array);
        let sut = list.iter();
        assert_eq!(
            format!("{sut:?}"),
            format!("Iter({:?}, {})", array, array.len())
        );
    }

    #[quickcheck]
    fn test_iter_behavioural(seed: Vec<i32>) {
        fn _test(chunk_size: usize, expected: &[i32]) {
            let mut actual = ChunkedList::<i32>::new(chunk_size);
            actual.extend(expected);

            assert_eq!(actual.iter().len(), expected.len());
            assert!(actual.iter().eq(expected.iter()));
            assert_eq!(actual.iter().count(), expected.len());
            assert_eq!(actual.iter().max(), expected.iter().max());
            assert_eq!(actual.iter().last(), expected.last());
            assert_eq!(
                actual.iter().nth(expected.len() / 2),
                expected.get(expected.len() / 2)
            );
        }

        for chunk_size in [1, 2, 3, 4, 5, 8, 16, 64] {
            _test(chunk_size, &seed);
        }
    }
}
