use std::{fmt::Display, ops::RangeInclusive};

use crate::BuildError;

/// A validated, inclusive interval `[start, end]` where `start <= end`.
///
/// Intervals are ordered within the tree by their lower bound only; the
/// relative order of intervals sharing a lower bound is decided at build time.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Interval<R>(RangeInclusive<R>);

impl<R> Interval<R>
where
    R: Ord,
{
    /// Construct an [`Interval`] from `range`, rejecting it if the lower bound
    /// is greater than the upper bound.
    pub fn new(range: RangeInclusive<R>) -> Result<Self, BuildError<R>> {
        if range.start() > range.end() {
            let (start, end) = range.into_inner();
            return Err(BuildError::InvalidInterval { start, end });
        }

        Ok(Self(range))
    }

    /// Returns true if `point` lies within this interval, inclusive of both
    /// bounds.
    pub fn contains(&self, point: &R) -> bool {
        self.start() <= point && point <= self.end()
    }
}

impl<R> Interval<R> {
    /// The inclusive lower bound.
    pub fn start(&self) -> &R {
        self.0.start()
    }

    /// The inclusive upper bound.
    pub fn end(&self) -> &R {
        self.0.end()
    }

    /// Borrow the underlying [`RangeInclusive`].
    pub fn as_range(&self) -> &RangeInclusive<R> {
        &self.0
    }

    /// Unwrap this [`Interval`] into the [`RangeInclusive`] it was built from.
    pub fn into_range(self) -> RangeInclusive<R> {
        self.0
    }
}

impl<R> TryFrom<RangeInclusive<R>> for Interval<R>
where
    R: Ord,
{
    type Error = BuildError<R>;

    fn try_from(value: RangeInclusive<R>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<R> Display for Interval<R>
where
    R: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start(), self.end())
    }
}
