use thiserror::Error;

/// Errors returned when building an [`IntervalTree`].
///
/// [`IntervalTree`]: crate::IntervalTree
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError<R> {
    /// No intervals were provided.
    #[error("cannot build an interval tree from zero intervals")]
    Empty,

    /// An interval lower bound is greater than its upper bound.
    #[error("invalid interval: start {start:?} is greater than end {end:?}")]
    InvalidInterval {
        /// The (inclusive) lower bound of the rejected interval.
        start: R,
        /// The (inclusive) upper bound of the rejected interval.
        end: R,
    },
}
