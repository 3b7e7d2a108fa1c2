//! Merge algebra: join and union
//!
//! - join: exact edge-to-edge adjacency only (no gap, no overlap)
//! - union: overlap or touching, within one connected run
//!
//! Multi-period forms never return partial results: one break anywhere and
//! the whole merge is `None`. Inputs breaking the period invariant (inverted
//! or mixed-awareness edges) make the merge `None` as well.

use tracing::debug;

use crate::period::is_valid;
use crate::relation::overlaps;
use crate::{ascend_start, Period, PeriodLike};

/// Join two adjacent periods, in either order
pub fn join<A, B>(period: &A, other: &B) -> Option<Period<A::Timestamp>>
where
    A: PeriodLike,
    B: PeriodLike<Timestamp = A::Timestamp>,
{
    join_with(period, other, Period::from_valid_edges)
}

/// [`join`] with a caller-chosen result shape
pub fn join_with<A, B, R, F>(period: &A, other: &B, factory: F) -> Option<R>
where
    A: PeriodLike,
    B: PeriodLike<Timestamp = A::Timestamp>,
    F: FnOnce(A::Timestamp, A::Timestamp) -> R,
{
    if !is_valid(period) || !is_valid(other) {
        return None;
    }

    if period.end() == other.start() {
        // `period` on the left
        Some(factory(period.start(), other.end()))
    } else if period.start() == other.end() {
        // `period` on the right
        Some(factory(other.start(), period.end()))
    } else {
        None
    }
}

/// Join any number of periods into one contiguous period
///
/// Periods are sorted by start; every `end` must equal the next `start`.
pub fn join_all<I>(periods: I) -> Option<Period<<I::Item as PeriodLike>::Timestamp>>
where
    I: IntoIterator,
    I::Item: PeriodLike,
{
    join_all_with(periods, Period::from_valid_edges)
}

/// [`join_all`] with a caller-chosen result shape
pub fn join_all_with<I, R, F>(periods: I, factory: F) -> Option<R>
where
    I: IntoIterator,
    I::Item: PeriodLike,
    F: FnOnce(<I::Item as PeriodLike>::Timestamp, <I::Item as PeriodLike>::Timestamp) -> R,
{
    let sorted = ascend_start(periods.into_iter().map(|p| p.edges()), false);
    if !sorted.iter().all(is_valid) {
        debug!("join aborted: invalid period");
        return None;
    }
    let (&(start, mut end), rest) = sorted.split_first()?;

    for &(next_start, next_end) in rest {
        if next_start != end {
            debug!(?end, ?next_start, "join aborted: periods are not contiguous");
            return None;
        }
        end = next_end;
    }

    (start < end).then(|| factory(start, end))
}

/// Merge two overlapping or touching periods
pub fn union<A, B>(period: &A, other: &B) -> Option<Period<A::Timestamp>>
where
    A: PeriodLike,
    B: PeriodLike<Timestamp = A::Timestamp>,
{
    union_with(period, other, Period::from_valid_edges)
}

/// [`union`] with a caller-chosen result shape
pub fn union_with<A, B, R, F>(period: &A, other: &B, factory: F) -> Option<R>
where
    A: PeriodLike,
    B: PeriodLike<Timestamp = A::Timestamp>,
    F: FnOnce(A::Timestamp, A::Timestamp) -> R,
{
    if !is_valid(period) || !is_valid(other) {
        return None;
    }

    if overlaps(period, other) {
        Some(factory(
            period.start().min(other.start()),
            period.end().max(other.end()),
        ))
    } else {
        join_with(period, other, factory)
    }
}

/// Merge any number of periods forming one connected run
///
/// Periods are sorted by start; each start must already be covered by the
/// run so far. Disjoint clusters make the whole union `None`.
pub fn union_all<I>(periods: I) -> Option<Period<<I::Item as PeriodLike>::Timestamp>>
where
    I: IntoIterator,
    I::Item: PeriodLike,
{
    union_all_with(periods, Period::from_valid_edges)
}

/// [`union_all`] with a caller-chosen result shape
pub fn union_all_with<I, R, F>(periods: I, factory: F) -> Option<R>
where
    I: IntoIterator,
    I::Item: PeriodLike,
    F: FnOnce(<I::Item as PeriodLike>::Timestamp, <I::Item as PeriodLike>::Timestamp) -> R,
{
    let sorted = ascend_start(periods.into_iter().map(|p| p.edges()), false);
    if !sorted.iter().all(is_valid) {
        debug!("union aborted: invalid period");
        return None;
    }
    let (&(start, mut max_end), rest) = sorted.split_first()?;

    for &(next_start, next_end) in rest {
        if next_start > max_end {
            debug!(?max_end, ?next_start, "union aborted: gap between periods");
            return None;
        }
        max_end = max_end.max(next_end);
    }

    (start < max_end).then(|| factory(start, max_end))
}
