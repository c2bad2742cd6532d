use std::ops::RangeInclusive;

use crate::node::Node;

/// A lazy, in-order walk over the `(interval, value)` tuples of an
/// [`IntervalTree`], in ascending interval lower bound order.
///
/// When constructed with a stabbing point, only intervals containing the point
/// are yielded, and subtrees that cannot contain it are never visited. This
/// yields the same sequence as [`IntervalTree::query()`].
///
/// [`IntervalTree`]: crate::IntervalTree
/// [`IntervalTree::query()`]: crate::IntervalTree::query
#[derive(Debug)]
pub struct Iter<'a, R, V> {
    point: Option<&'a R>,
    stack: Vec<&'a Node<R, V>>,
}

impl<'a, R, V> Iter<'a, R, V>
where
    R: Ord,
{
    pub(crate) fn new(root: &'a Node<R, V>, point: Option<&'a R>) -> Self {
        let mut this = Self {
            stack: Vec::with_capacity(root.height() as usize + 1),
            point,
        };

        this.push_subtree(root);

        this
    }

    /// Push `subtree_root` and its chain of left descendants, stopping early
    /// at the first subtree that ends before the stabbing point (if any).
    fn push_subtree(&mut self, subtree_root: &'a Node<R, V>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            if self.point.is_some_and(|p| p > v.subtree_max()) {
                break;
            }

            self.stack.push(v);
            ptr = v.left();
        }
    }

    fn next_node(&mut self) -> Option<&'a Node<R, V>> {
        loop {
            let v = self.stack.pop()?;

            // The left subtree of "v" has already been walked. If the point
            // precedes "v", then every interval in the right subtree starts
            // after the point too.
            if self.point.is_some_and(|p| p < v.interval().start()) {
                continue;
            }

            if let Some(right) = v.right() {
                self.push_subtree(right);
            }

            match self.point {
                Some(p) if !v.interval().contains(p) => continue,
                _ => return Some(v),
            }
        }
    }
}

impl<'a, R, V> Iterator for Iter<'a, R, V>
where
    R: Ord,
{
    type Item = (&'a RangeInclusive<R>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node()
            .map(|v| (v.interval().as_range(), v.value()))
    }
}
