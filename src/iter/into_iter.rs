use std::{ops::RangeInclusive, vec};

/// An owning iterator over the `(interval, value)` tuples of an
/// [`IntervalTree`], in ascending interval lower bound order.
///
/// Created by the [`IntoIterator`] impl of [`IntervalTree`]. The tree is
/// dismantled up front, so the iterator knows its exact length.
///
/// [`IntervalTree`]: crate::IntervalTree
#[derive(Debug)]
pub struct IntoIter<R, V>(vec::IntoIter<(RangeInclusive<R>, V)>);

impl<R, V> IntoIter<R, V> {
    pub(crate) fn new(sorted: Vec<(RangeInclusive<R>, V)>) -> Self {
        Self(sorted.into_iter())
    }
}

impl<R, V> Iterator for IntoIter<R, V> {
    type Item = (RangeInclusive<R>, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<R, V> ExactSizeIterator for IntoIter<R, V> {}

impl<R, V> DoubleEndedIterator for IntoIter<R, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}
