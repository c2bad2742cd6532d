use std::{fmt::Debug, ops::RangeInclusive};

use tracing::debug;

use crate::{
    interval::Interval,
    iter::{IntoIter, Iter},
    node::Node,
    BuildError,
};

/// An immutable [`IntervalTree`] mapping inclusive intervals `[start, end]` to
/// values, optimised for point stabbing queries: "which intervals contain
/// this point?".
///
/// The tree is built once from a complete set of intervals by
/// [`IntervalTree::build()`] and cannot be modified afterwards.
///
/// # Count Balanced
///
/// Intervals are sorted by their lower bound and the tree is built by
/// recursively selecting the middle entry of each sorted run as the subtree
/// root. The depth of a tree holding `n` intervals is exactly
/// `floor(log2(n)) + 1`, independent of how the intervals are distributed.
///
/// Each node is augmented with the largest upper bound found in its subtree,
/// allowing a query to skip any subtree that ends before the query point. A
/// point query visits `O(log n + k)` nodes, where `k` is the number of matches.
///
/// # Ordering
///
/// Query and iteration results are yielded in ascending order of interval
/// lower bound. Intervals that share a lower bound are yielded in the order
/// they were provided to [`IntervalTree::build()`]. When building from a
/// [`HashMap`] that order is the (unspecified) map iteration order; use an
/// ordered input such as a [`BTreeMap`] or [`Vec`] for fully deterministic
/// output.
///
/// # Concurrency
///
/// A built tree has no interior mutability and is [`Send`] + [`Sync`] when `R`
/// and `V` are, so it may be shared freely between threads for concurrent
/// queries.
///
/// [`HashMap`]: std::collections::HashMap
/// [`BTreeMap`]: std::collections::BTreeMap
#[derive(Debug, Clone)]
pub struct IntervalTree<R, V> {
    root: Box<Node<R, V>>,
    len: usize,
}

impl<R, V> IntervalTree<R, V>
where
    R: Ord,
{
    /// Build an [`IntervalTree`] from a set of `(value, ranges)` pairs, where
    /// every range in `ranges` is associated with a copy of `value`.
    ///
    /// `ranges` may be any collection of pairs, such as a [`HashMap`],
    /// [`BTreeMap`] or [`Vec`]. A value with no ranges is permitted, but at
    /// least one range must be provided in total.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Empty`] if no ranges are provided, and
    /// [`BuildError::InvalidInterval`] if any range has a lower bound greater
    /// than its upper bound.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    ///
    /// use stabtree::IntervalTree;
    ///
    /// let faces = BTreeMap::from([
    ///     ("latin", vec![0x0000..=0x024F]),
    ///     ("greek", vec![0x0370..=0x03FF]),
    ///     ("symbols", vec![0x0000..=0x007F, 0x2190..=0x21FF]),
    /// ]);
    ///
    /// let t = IntervalTree::build(faces).unwrap();
    ///
    /// assert_eq!(t.query(&0x41), [&"latin", &"symbols"]);
    /// assert_eq!(t.query(&0x2192), [&"symbols"]);
    /// assert!(t.query(&0x0300).is_empty());
    /// ```
    ///
    /// [`HashMap`]: std::collections::HashMap
    /// [`BTreeMap`]: std::collections::BTreeMap
    pub fn build<I, S>(ranges: I) -> Result<Self, BuildError<R>>
    where
        I: IntoIterator<Item = (V, S)>,
        S: IntoIterator<Item = RangeInclusive<R>>,
        R: Clone + Debug,
        V: Clone,
    {
        let mut entries = Vec::new();
        for (value, ranges) in ranges {
            for range in ranges {
                let interval = Interval::new(range).inspect_err(|e| {
                    debug!(error = %e, "rejected interval tree input");
                })?;
                entries.push((interval, value.clone()));
            }
        }

        if entries.is_empty() {
            debug!("rejected empty interval tree input");
            return Err(BuildError::Empty);
        }

        // A stable sort keeps intervals sharing a lower bound in the order
        // they were provided.
        entries.sort_by(|a, b| a.0.start().cmp(b.0.start()));

        let len = entries.len();
        let root =
            Node::from_sorted(&mut entries.into_iter(), len).ok_or(BuildError::Empty)?;

        let t = Self { root, len };
        debug!(n_intervals = len, depth = t.depth(), "built interval tree");

        Ok(t)
    }

    /// Return a reference to the value of every interval that contains
    /// `point`, inclusive of the interval bounds.
    ///
    /// A value associated with multiple intervals that contain `point` appears
    /// once per interval. Results are ordered by ascending interval lower
    /// bound. If no interval contains `point`, the result is empty.
    pub fn query(&self, point: &R) -> Vec<&V> {
        let mut out = Vec::new();
        self.root.stab(point, &mut out);
        out
    }

    /// Lazily yield every `(interval, value)` tuple whose interval contains
    /// `point`, in the same order as [`IntervalTree::query()`].
    ///
    /// Unlike [`IntervalTree::query()`] this does not allocate a result set,
    /// and stops searching the tree as soon as the iterator is dropped.
    pub fn query_iter<'a>(&'a self, point: &'a R) -> Iter<'a, R, V> {
        Iter::new(&self.root, Some(point))
    }

    /// Iterate over all `(interval, value)` tuples in the tree, in ascending
    /// interval lower bound order.
    pub fn iter(&self) -> Iter<'_, R, V> {
        Iter::new(&self.root, None)
    }

    /// Iterate over the value of every interval in the tree, in ascending
    /// interval lower bound order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

impl<R, V> IntervalTree<R, V> {
    /// The number of intervals stored in the tree.
    #[allow(clippy::len_without_is_empty)] // A tree is never empty.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of levels in the tree, where a tree holding a single
    /// interval has a depth of 1.
    pub fn depth(&self) -> usize {
        self.root.height() as usize + 1
    }

    /// The largest upper bound of any interval in the tree.
    ///
    /// No point greater than this is contained by any interval.
    pub fn max_end(&self) -> &R {
        self.root.subtree_max()
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Node<R, V> {
        &self.root
    }
}

impl<'a, R, V> IntoIterator for &'a IntervalTree<R, V>
where
    R: Ord,
{
    type Item = (&'a RangeInclusive<R>, &'a V);
    type IntoIter = Iter<'a, R, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R, V> IntoIterator for IntervalTree<R, V> {
    type Item = (RangeInclusive<R>, V);
    type IntoIter = IntoIter<R, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut sorted = Vec::with_capacity(self.len);
        self.root.drain_sorted(&mut sorted);
        IntoIter::new(sorted)
    }
}
