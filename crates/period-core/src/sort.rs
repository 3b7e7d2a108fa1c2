//! Ordering helpers
//!
//! Both sorts are stable: periods with equal keys keep their input order,
//! also when reversed.

use crate::PeriodLike;

/// Sort periods by `start`, ascending unless `reverse`
pub fn ascend_start<I>(periods: I, reverse: bool) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: PeriodLike,
{
    let mut sorted: Vec<_> = periods.into_iter().collect();
    if reverse {
        sorted.sort_by(|a, b| b.start().cmp(&a.start()));
    } else {
        sorted.sort_by_key(|p| p.start());
    }
    sorted
}

/// Sort periods by `end`, descending unless `reverse`
pub fn descend_end<I>(periods: I, reverse: bool) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: PeriodLike,
{
    let mut sorted: Vec<_> = periods.into_iter().collect();
    if reverse {
        sorted.sort_by_key(|p| p.end());
    } else {
        sorted.sort_by(|a, b| b.end().cmp(&a.end()));
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_ascend_start() {
        let a = (ts(5), ts(10));
        let b = (ts(1), ts(3));
        let c = (ts(3), ts(20));

        assert_eq!(ascend_start([a, b, c], false), vec![b, c, a]);
        assert_eq!(ascend_start([a, b, c], true), vec![a, c, b]);
        assert!(ascend_start(Vec::<(NaiveDateTime, NaiveDateTime)>::new(), false).is_empty());
    }

    #[test]
    fn test_descend_end() {
        let a = (ts(5), ts(10));
        let b = (ts(1), ts(3));
        let c = (ts(3), ts(20));

        assert_eq!(descend_end([a, b, c], false), vec![c, a, b]);
        assert_eq!(descend_end([a, b, c], true), vec![b, a, c]);
    }

    #[test]
    fn test_sort_is_stable() {
        let first = (ts(1), ts(5));
        let second = (ts(1), ts(9));
        let third = (ts(2), ts(9));

        assert_eq!(ascend_start([first, second], false), vec![first, second]);
        assert_eq!(ascend_start([first, second], true), vec![first, second]);
        assert_eq!(descend_end([second, third], false), vec![second, third]);
        assert_eq!(descend_end([second, third], true), vec![second, third]);
    }
}
