use std::ops::RangeInclusive;

use crate::interval::Interval;

#[derive(Debug, Clone)]
pub(crate) struct Node<R, V> {
    /// Child nodes pointers.
    left: Option<Box<Node<R, V>>>,
    right: Option<Box<Node<R, V>>>,

    /// The node's height.
    ///
    /// A leaf has a height of 0.
    ///
    /// The tree is count-balanced, so a u8 is able to represent the height of
    /// a tree holding more entries than can be addressed.
    height: u8,

    /// The maximum upper bound of all intervals for the subtree rooted at this
    /// [`Node`].
    subtree_max: R,

    interval: Interval<R>,
    value: V,
}

impl<R, V> Node<R, V> {
    pub(crate) fn new(interval: Interval<R>, value: V) -> Self
    where
        R: Clone,
    {
        Self {
            subtree_max: interval.end().clone(),
            interval,
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// Build a count-balanced subtree from the next `n` entries of `entries`,
    /// which MUST yield entries in ascending interval lower-bound order.
    ///
    /// The entry at index `n / 2` becomes the subtree root, with the entries
    /// before it forming the left subtree and the entries after it forming the
    /// right subtree. Each node is augmented once both of its children have
    /// been built.
    ///
    /// Returns [`None`] if `n` is 0, or if `entries` yields fewer than `n`
    /// entries.
    pub(crate) fn from_sorted<I>(entries: &mut I, n: usize) -> Option<Box<Self>>
    where
        I: Iterator<Item = (Interval<R>, V)>,
        R: Ord + Clone,
    {
        if n == 0 {
            return None;
        }

        // The left subtree consumes the entries preceding the midpoint.
        let mid = n / 2;
        let left = Self::from_sorted(entries, mid);

        let (interval, value) = entries.next()?;
        let mut node = Box::new(Self::new(interval, value));

        node.left = left;
        node.right = Self::from_sorted(entries, n - mid - 1);

        update_height(&mut node);
        update_subtree_max(&mut node);

        Some(node)
    }

    /// Append a reference to the value of every node in the subtree rooted at
    /// `self` whose interval contains `point` to `out`, in ascending interval
    /// lower-bound order.
    pub(crate) fn stab<'a>(&'a self, point: &R, out: &mut Vec<&'a V>)
    where
        R: Ord,
    {
        // Prune this subtree from the search if the maximum upper bound in the
        // subtree is less than the point. No interval rooted here can contain
        // it.
        if *point > self.subtree_max {
            return;
        }

        if let Some(left) = self.left() {
            left.stab(point, out);
        }

        if self.interval.contains(point) {
            out.push(&self.value);
        }

        // All intervals in the right subtree start at or after this node's
        // lower bound, so none of them can contain a point preceding it.
        if *point < *self.interval.start() {
            return;
        }

        if let Some(right) = self.right() {
            right.stab(point, out);
        }
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn interval(&self) -> &Interval<R> {
        &self.interval
    }

    pub(crate) fn subtree_max(&self) -> &R {
        &self.subtree_max
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Consume the subtree rooted at `self`, appending its `(interval, value)`
    /// tuples to `out` in ascending interval lower-bound order.
    pub(crate) fn drain_sorted(self: Box<Self>, out: &mut Vec<(RangeInclusive<R>, V)>) {
        let Self {
            left,
            right,
            interval,
            value,
            ..
        } = *self;

        if let Some(left) = left {
            left.drain_sorted(out);
        }

        out.push((interval.into_range(), value));

        if let Some(right) = right {
            right.drain_sorted(out);
        }
    }
}

fn update_height<R, V>(n: &mut Node<R, V>) {
    n.height = n
        .left()
        .map(|v| v.height() + 1)
        .max(n.right().map(|v| v.height() + 1))
        .unwrap_or_default()
}

fn update_subtree_max<R, V>(n: &mut Node<R, V>)
where
    R: Ord + Clone,
{
    let new_max = n
        .left()
        .map(|v| v.subtree_max())
        .max(n.right().map(|v| v.subtree_max()))
        .max(Some(n.interval().end()));

    if let Some(new_max) = new_max {
        n.subtree_max = new_max.clone();
    }
}
