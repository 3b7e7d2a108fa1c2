//! Relational predicates between periods and timestamps

use crate::PeriodLike;

/// Whether `item` lies inside `container`, equality included
#[inline]
pub fn within<C, P>(container: &C, item: &P) -> bool
where
    C: PeriodLike,
    P: PeriodLike<Timestamp = C::Timestamp>,
{
    container.start() <= item.start() && item.end() <= container.end()
}

/// Whether the point `item` lies inside `container`, both edges included
#[inline]
pub fn contains<C: PeriodLike>(container: &C, item: C::Timestamp) -> bool {
    container.start() <= item && item <= container.end()
}

/// Whether two periods share a non-empty sub-range (touching is not enough)
#[inline]
pub(crate) fn overlaps<A, B>(a: &A, b: &B) -> bool
where
    A: PeriodLike,
    B: PeriodLike<Timestamp = A::Timestamp>,
{
    a.start().max(b.start()) < a.end().min(b.end())
}
