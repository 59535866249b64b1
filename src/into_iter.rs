use core::iter::FusedIterator;

use crate::{ChunkedList, FixedCapacityList, fixed, singly};

/// An owning iterator over the elements of a ChunkedList.
///
/// This struct is created by ChunkedList::into_iter().
pub struct IntoIter<T> {
    front: fixed::IntoIter<T>,
    chunks: singly::IntoIter<FixedCapacityList<T>>,
    len: usize,
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            front: fixed::IntoIter::default(),
            chunks: singly::IntoIter::default(),
            len: 0,
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list(list: ChunkedList<T>) -> Self {
        let len = list.len();
        Self {
            front: fixed::IntoIter::default(),
            chunks: list.chunks.into_iter(),
            len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.front.next() {
                self.len -= 1;
                return Some(value);
            }
            self.front = self.chunks.next()?.into_iter();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len
    }

    fn nth(&mut self, mut n: usize) -> Option<Self::Item> {
        loop {
            let here = self.front.len();
            if n < here {
                self.len -= n + 1;
                return self.front.nth(n);
            }

            // Skip the whole chunk.
            n -= here;
            self.len -= here;
            self.front = self.chunks.next()?.into_iter();
        }
    }

    fn fold<B, F>(self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let acc = self.front.fold(init, &mut f);
        self.chunks
            .fold(acc, |acc, chunk| chunk.into_iter().fold(acc, &mut f))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let remaining = self
            .front
            .as_slice()
            .iter()
            .chain(self.chunks.as_list().iter().flat_map(|chunk| chunk.iter()));
        f.debug_tuple("IntoIter")
            .field(&remaining.collect::<Vec<_>>())
            .finish()
    }
}
