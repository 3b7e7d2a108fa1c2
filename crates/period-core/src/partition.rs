//! Partition algebra: intersection and difference

use std::iter::FusedIterator;

use tracing::debug;

use crate::period::is_valid;
use crate::relation::overlaps;
use crate::{ascend_start, Period, PeriodLike, Timestamp};

/// Common sub-range of two periods, `None` if they do not overlap
///
/// Inputs breaking the period invariant never intersect.
pub fn intersection<A, B>(period: &A, other: &B) -> Option<Period<A::Timestamp>>
where
    A: PeriodLike,
    B: PeriodLike<Timestamp = A::Timestamp>,
{
    intersection_with(period, other, Period::from_valid_edges)
}

/// [`intersection`] with a caller-chosen result shape
pub fn intersection_with<A, B, R, F>(period: &A, other: &B, factory: F) -> Option<R>
where
    A: PeriodLike,
    B: PeriodLike<Timestamp = A::Timestamp>,
    F: FnOnce(A::Timestamp, A::Timestamp) -> R,
{
    if !is_valid(period) || !is_valid(other) {
        return None;
    }

    let max_start = period.start().max(other.start());
    let min_end = period.end().min(other.end());
    (max_start < min_end).then(|| factory(max_start, min_end))
}

/// Common sub-range of any number of periods
///
/// The window narrows one period at a time and stops as soon as it is empty.
pub fn intersection_all<I>(periods: I) -> Option<Period<<I::Item as PeriodLike>::Timestamp>>
where
    I: IntoIterator,
    I::Item: PeriodLike,
{
    intersection_all_with(periods, Period::from_valid_edges)
}

/// [`intersection_all`] with a caller-chosen result shape
pub fn intersection_all_with<I, R, F>(periods: I, factory: F) -> Option<R>
where
    I: IntoIterator,
    I::Item: PeriodLike,
    F: FnOnce(<I::Item as PeriodLike>::Timestamp, <I::Item as PeriodLike>::Timestamp) -> R,
{
    let mut periods = periods.into_iter();
    let first = periods.next()?;
    if !is_valid(&first) {
        return None;
    }
    let (mut max_start, mut min_end) = first.edges();

    for period in periods {
        if !is_valid(&period) {
            return None;
        }
        max_start = max_start.max(period.start());
        min_end = min_end.min(period.end());
        if max_start >= min_end {
            return None;
        }
    }

    (max_start < min_end).then(|| factory(max_start, min_end))
}

/// Sub-ranges of `period` not covered by any of `subtrahends`
///
/// The result is ordered, pairwise disjoint and lazy. An empty set of
/// subtrahends leaves `period` whole. If `period` or any subtrahend breaks
/// the period invariant, nothing is yielded.
#[allow(clippy::type_complexity)]
pub fn difference<P, I>(
    period: &P,
    subtrahends: I,
) -> Difference<P::Timestamp, fn(P::Timestamp, P::Timestamp) -> Period<P::Timestamp>>
where
    P: PeriodLike,
    I: IntoIterator,
    I::Item: PeriodLike<Timestamp = P::Timestamp>,
{
    difference_with(period, subtrahends, Period::from_valid_edges as fn(_, _) -> _)
}

/// [`difference`] with a caller-chosen result shape
pub fn difference_with<P, I, R, F>(period: &P, subtrahends: I, factory: F) -> Difference<P::Timestamp, F>
where
    P: PeriodLike,
    I: IntoIterator,
    I::Item: PeriodLike<Timestamp = P::Timestamp>,
    F: FnMut(P::Timestamp, P::Timestamp) -> R,
{
    let subtrahends: Vec<_> = subtrahends.into_iter().map(|other| other.edges()).collect();
    let valid = is_valid(period) && subtrahends.iter().all(is_valid);
    if !valid {
        debug!("difference skipped: invalid period");
    }

    // Only subtrahends that actually cut into `period` matter
    let blocks = ascend_start(
        subtrahends
            .into_iter()
            .filter(|other| valid && overlaps(period, other)),
        false,
    );

    Difference {
        cursor: period.start(),
        end: period.end(),
        blocks: blocks.into_iter(),
        done: !valid,
        factory,
    }
}

/// Lazy iterator returned by [`difference`]
///
/// `cursor` is the earliest point not yet known to be covered.
pub struct Difference<T, F> {
    cursor: T,
    end: T,
    blocks: std::vec::IntoIter<(T, T)>,
    done: bool,
    factory: F,
}

impl<T, R, F> Iterator for Difference<T, F>
where
    T: Timestamp,
    F: FnMut(T, T) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if self.done {
            return None;
        }

        for (start, end) in self.blocks.by_ref() {
            let gap = (start > self.cursor).then_some((self.cursor, start));
            self.cursor = self.cursor.max(end);
            if let Some((gap_start, gap_end)) = gap {
                return Some((self.factory)(gap_start, gap_end));
            }
        }

        self.done = true;
        (self.end > self.cursor).then(|| (self.factory)(self.cursor, self.end))
    }
}

impl<T, R, F> FusedIterator for Difference<T, F>
where
    T: Timestamp,
    F: FnMut(T, T) -> R,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{flat, Moment};
    use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

    fn ts(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn period(start: u32, end: u32) -> Period<NaiveDateTime> {
        Period::new(ts(start), ts(end)).unwrap()
    }

    // ========================================================================
    // INTERSECTION
    // ========================================================================

    #[test]
    fn test_intersection() {
        assert_eq!(intersection(&period(1, 10), &period(5, 15)), Some(period(5, 10)));
        assert_eq!(intersection(&period(5, 15), &period(1, 10)), Some(period(5, 10)));
        assert_eq!(intersection(&period(1, 15), &period(5, 10)), Some(period(5, 10)));
        assert_eq!(
            intersection_with(&period(1, 10), &period(5, 15), flat),
            Some((ts(5), ts(10)))
        );
    }

    #[test]
    fn test_intersection_empty() {
        assert_eq!(intersection(&period(1, 5), &period(10, 15)), None);
        // Touching is not overlapping
        assert_eq!(intersection(&period(1, 5), &period(5, 15)), None);
    }

    #[test]
    fn test_intersection_all() {
        let periods = [period(1, 20), period(5, 15), period(3, 12)];
        assert_eq!(intersection_all(&periods), Some(period(5, 12)));
        assert_eq!(intersection_all_with(&periods, flat), Some((ts(5), ts(12))));

        let periods = [period(1, 20), period(5, 15), period(16, 18)];
        assert_eq!(intersection_all(&periods), None);
    }

    #[test]
    fn test_intersection_all_order_independent() {
        let a = period(1, 20);
        let b = period(5, 15);
        let c = period(3, 12);
        let expected = Some(period(5, 12));

        assert_eq!(intersection_all([a, b, c]), expected);
        assert_eq!(intersection_all([c, a, b]), expected);
        assert_eq!(intersection_all([b, c, a]), expected);
    }

    #[test]
    fn test_intersection_all_degenerate_inputs() {
        assert_eq!(intersection_all(Vec::<Period<NaiveDateTime>>::new()), None);
        assert_eq!(intersection_all([period(1, 5)]), Some(period(1, 5)));
    }

    // ========================================================================
    // DIFFERENCE
    // ========================================================================

    #[test]
    fn test_difference_split() {
        let result: Vec<_> = difference(&period(1, 15), [period(5, 10)]).collect();
        assert_eq!(result, vec![period(1, 5), period(10, 15)]);

        let result: Vec<_> = difference_with(&period(1, 15), [period(5, 10)], flat).collect();
        assert_eq!(result, vec![(ts(1), ts(5)), (ts(10), ts(15))]);
    }

    #[test]
    fn test_difference_fully_covered() {
        let p = period(8, 16);
        for other in [period(8, 16), period(4, 16), period(8, 20), period(4, 20)] {
            assert_eq!(difference(&p, [other]).count(), 0, "{:?}", other);
        }
    }

    #[test]
    fn test_difference_single() {
        let p = period(8, 16);
        let cases = [
            (period(1, 6), vec![period(8, 16)]),
            (period(1, 8), vec![period(8, 16)]),
            (period(16, 20), vec![period(8, 16)]),
            (period(20, 25), vec![period(8, 16)]),
            (period(1, 12), vec![period(12, 16)]),
            (period(12, 20), vec![period(8, 12)]),
            (period(10, 12), vec![period(8, 10), period(12, 16)]),
        ];

        for (other, expected) in cases {
            let result: Vec<_> = difference(&p, [other]).collect();
            assert_eq!(result, expected, "{:?}", other);
        }
    }

    #[test]
    fn test_difference_multi() {
        let p = period(8, 24);

        let result: Vec<_> = difference(&p, [period(1, 6), period(3, 7)]).collect();
        assert_eq!(result, vec![period(8, 24)]);

        let others = [
            period(17, 19),
            period(4, 6),
            period(10, 13),
            period(9, 11),
            period(15, 18),
        ];
        let result: Vec<_> = difference(&p, others).collect();
        assert_eq!(result, vec![period(8, 9), period(13, 15), period(19, 24)]);
    }

    #[test]
    fn test_difference_touching_blocks_merge() {
        let p = period(1, 20);
        let result: Vec<_> = difference(&p, [period(5, 8), period(8, 10), period(12, 25)]).collect();
        assert_eq!(result, vec![period(1, 5), period(10, 12)]);
    }

    #[test]
    fn test_difference_nested_blocks() {
        let p = period(1, 20);
        let result: Vec<_> = difference(&p, [period(3, 15), period(4, 6), period(16, 18)]).collect();
        assert_eq!(result, vec![period(1, 3), period(15, 16), period(18, 20)]);
    }

    #[test]
    fn test_difference_is_lazy_and_fused() {
        let mut calls = 0;
        let mut iter = difference_with(&period(1, 20), [period(5, 6), period(10, 11)], |s, e| {
            calls += 1;
            (s, e)
        });

        assert_eq!(iter.next(), Some((ts(1), ts(5))));
        assert_eq!(iter.next(), Some((ts(6), ts(10))));
        assert_eq!(iter.next(), Some((ts(11), ts(20))));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        drop(iter);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_difference_without_subtrahends() {
        let result: Vec<_> = difference(&period(1, 5), Vec::<Period<NaiveDateTime>>::new()).collect();
        assert_eq!(result, vec![period(1, 5)]);
    }

    #[test]
    fn test_intersection_rejects_invalid_inputs() {
        let inverted = (ts(10), ts(1));
        assert_eq!(intersection(&inverted, &(ts(1), ts(15))), None);
        assert_eq!(intersection(&(ts(1), ts(15)), &inverted), None);
        assert_eq!(intersection_all([inverted]), None);
        assert_eq!(intersection_all([(ts(1), ts(15)), (ts(12), ts(3))]), None);

        let aware = FixedOffset::east_opt(0)
            .unwrap()
            .from_local_datetime(&ts(10))
            .unwrap();
        let mixed = (Moment::from(ts(1)), Moment::from(aware));
        assert_eq!(intersection(&mixed, &mixed), None);
        assert_eq!(intersection_all([mixed]), None);
    }

    #[test]
    fn test_difference_rejects_invalid_inputs() {
        let inverted = (ts(15), ts(1));
        assert_eq!(difference(&inverted, [period(5, 10)]).count(), 0);
        assert_eq!(difference(&period(1, 15), [(ts(10), ts(5))]).count(), 0);

        let mut parts = difference_with(&inverted, Vec::<Period<NaiveDateTime>>::new(), flat);
        assert_eq!(parts.next(), None);
        assert_eq!(parts.next(), None);
    }
}
