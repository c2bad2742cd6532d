//! An immutable, count-balanced [augmented interval tree] optimised for point
//! stabbing queries.
//!
//! An [`IntervalTree`] is built once from a set of labelled, inclusive
//! intervals and then answers "which intervals contain point `x`?" in
//! `O(log n + k)` time for `n` intervals and `k` matches.
//!
//! ```
//! use stabtree::IntervalTree;
//!
//! // Map character offsets to the font faces covering them.
//! let t = IntervalTree::build([
//!     ("regular", vec![0..=10]),
//!     ("bold", vec![5..=15]),
//!     ("italic", vec![20..=30]),
//! ])
//! .unwrap();
//!
//! assert_eq!(t.query(&7), [&"regular", &"bold"]);
//! assert_eq!(t.query(&20), [&"italic"]);
//! assert!(t.query(&16).is_empty());
//! ```
//!
//! [augmented interval tree]:
//!     https://en.wikipedia.org/wiki/Interval_tree#Augmented_tree

#![forbid(unsafe_code)]
#![deny(missing_docs, missing_debug_implementations)]

mod error;
mod interval;
mod iter;
mod node;
mod tree;

pub use error::*;
pub use interval::*;
pub use iter::{IntoIter, Iter};
pub use tree::*;

#[cfg(test)]
mod test_utils;
