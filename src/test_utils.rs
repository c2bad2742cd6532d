use std::{fmt::Debug, ops::RangeInclusive};

use proptest::prelude::*;

use crate::{interval::Interval, node::Node, IntervalTree};

const RANGE_MAX: usize = 20;

/// Generate arbitrary valid inclusive ranges with bounds from
/// [0..[`RANGE_MAX`]).
pub(crate) fn arbitrary_range() -> impl Strategy<Value = RangeInclusive<usize>> {
    (0..RANGE_MAX, 0..RANGE_MAX).prop_map(|(a, b)| a.min(b)..=a.max(b))
}

pub(crate) fn arbitrary_interval() -> impl Strategy<Value = Interval<usize>> {
    arbitrary_range().prop_map(|r| Interval::new(r).unwrap())
}

/// Generate a non-empty set of labels, each mapped to between 1 and 3 ranges.
///
/// A small label and bound domain encourages overlapping intervals, shared
/// lower bounds and repeated labels.
pub(crate) fn arbitrary_ranges(
    max_labels: usize,
) -> impl Strategy<Value = Vec<(usize, Vec<RangeInclusive<usize>>)>> {
    prop::collection::vec(
        (any::<usize>(), prop::collection::vec(arbitrary_range(), 1..4)),
        1..max_labels,
    )
}

/// Assert the BST, height, balance and interval tree properties of tree nodes,
/// ensuring the tree is well-formed.
pub(crate) fn validate_tree_structure<R, V>(t: &IntervalTree<R, V>)
where
    R: Ord + Debug,
    V: Debug,
{
    let root = t.root();

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        // Prepare to visit the children
        stack.extend(n.left().iter().chain(n.right().iter()));

        // Invariant 1: the left child never starts after this node.
        assert!(n
            .left()
            .map(|v| v.interval().start() <= n.interval().start())
            .unwrap_or(true));

        // Invariant 2: the right child never starts before this node.
        assert!(n
            .right()
            .map(|v| v.interval().start() >= n.interval().start())
            .unwrap_or(true));

        // Invariant 3: the height of this node is always +1 of the
        // maximum child height.
        let left_height = n.left().map(|v| v.height());
        let right_height = n.right().map(|v| v.height());
        let want_height = left_height
            .max(right_height)
            .map(|v| v + 1) // This node is +1 of the child, if any
            .unwrap_or_default(); // Otherwise it is at height 0

        assert_eq!(
            n.height(),
            want_height,
            "expect node with interval {:?} to have height {}, has {}",
            n.interval(),
            want_height,
            n.height(),
        );

        // Invariant 4: the subtrees never differ in height by more than 1,
        // and the left subtree is never the shorter of the two.
        let balance = left_height.map(|v| v as i64 + 1).unwrap_or_default()
            - right_height.map(|v| v as i64 + 1).unwrap_or_default();
        assert!(
            (0..=1).contains(&balance),
            "balance={balance}, node={n:?}"
        );

        // Invariant 5: the subtree max of "n" must be equal to either the
        // largest of the two child subtree maxes, or its own upper bound.
        let child_max = n
            .left()
            .map(|v| v.subtree_max())
            .max(n.right().map(|v| v.subtree_max()));
        let want_max = child_max.max(Some(n.interval().end())).unwrap();
        assert_eq!(want_max, n.subtree_max());
    }

    // Invariant 6: the subtree max of every node is exactly the largest upper
    // bound found anywhere in its subtree.
    assert_subtree_max(root);
}

/// Recompute the largest upper bound in the subtree rooted at `n` without
/// consulting any cached subtree max, asserting it matches the cached value of
/// every node along the way.
fn assert_subtree_max<R, V>(n: &Node<R, V>) -> &R
where
    R: Ord + Debug,
{
    let want = [n.left(), n.right()]
        .into_iter()
        .flatten()
        .map(assert_subtree_max)
        .fold(n.interval().end(), |acc, v| acc.max(v));

    assert_eq!(
        want,
        n.subtree_max(),
        "node with interval {:?} has stale subtree max",
        n.interval()
    );

    want
}
