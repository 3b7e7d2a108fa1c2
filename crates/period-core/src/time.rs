//! Timestamp primitives for period edges
//!
//! Periods are generic over any [`Timestamp`]:
//! - `NaiveDateTime`: always naive (no UTC offset)
//! - `DateTime<Tz>`: always aware
//! - [`Moment`]: naive or aware, decided at runtime
//!
//! Durations are `chrono::TimeDelta` throughout.

use std::fmt::Debug;
use std::hash::Hash;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};

/// Nanoseconds in one second
pub const NANOS_PER_SEC: i128 = 1_000_000_000;

/// A totally ordered point in time usable as a period edge
pub trait Timestamp: Copy + Ord + Hash + Debug {
    /// UTC offset carried by the timestamp, `None` for naive values
    fn utc_offset(&self) -> Option<FixedOffset>;

    /// Whether the timestamp carries a UTC offset
    #[inline]
    fn is_aware(&self) -> bool {
        self.utc_offset().is_some()
    }

    /// `self + delta`, `None` on overflow
    fn checked_add_delta(self, delta: TimeDelta) -> Option<Self>;

    /// `self - delta`, `None` on overflow
    #[inline]
    fn checked_sub_delta(self, delta: TimeDelta) -> Option<Self> {
        self.checked_add_delta(-delta)
    }

    /// Signed duration `self - earlier`
    fn since(self, earlier: Self) -> TimeDelta;
}

impl Timestamp for NaiveDateTime {
    #[inline]
    fn utc_offset(&self) -> Option<FixedOffset> {
        None
    }

    #[inline]
    fn checked_add_delta(self, delta: TimeDelta) -> Option<Self> {
        self.checked_add_signed(delta)
    }

    #[inline]
    fn since(self, earlier: Self) -> TimeDelta {
        self.signed_duration_since(earlier)
    }
}

impl<Tz> Timestamp for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Copy,
{
    #[inline]
    fn utc_offset(&self) -> Option<FixedOffset> {
        Some(self.offset().fix())
    }

    #[inline]
    fn checked_add_delta(self, delta: TimeDelta) -> Option<Self> {
        self.checked_add_signed(delta)
    }

    #[inline]
    fn since(self, earlier: Self) -> TimeDelta {
        self.signed_duration_since(earlier)
    }
}

/// A timestamp whose awareness is only known at runtime.
///
/// Naive and aware moments live on separate timelines: every naive moment
/// orders before every aware one. Periods of different awareness therefore
/// never touch, overlap or contain each other.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Moment {
    /// Wall-clock time without offset
    Naive(NaiveDateTime),
    /// Instant with a fixed UTC offset
    Aware(DateTime<FixedOffset>),
}

impl Moment {
    /// Naive value, if this moment is naive
    pub fn naive(&self) -> Option<NaiveDateTime> {
        match self {
            Moment::Naive(naive) => Some(*naive),
            Moment::Aware(_) => None,
        }
    }

    /// Aware value, if this moment is aware
    pub fn aware(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Moment::Naive(_) => None,
            Moment::Aware(aware) => Some(*aware),
        }
    }

    /// Wall-clock value, interpreting aware moments in UTC
    fn naive_utc(&self) -> NaiveDateTime {
        match self {
            Moment::Naive(naive) => *naive,
            Moment::Aware(aware) => aware.naive_utc(),
        }
    }
}

impl Timestamp for Moment {
    #[inline]
    fn utc_offset(&self) -> Option<FixedOffset> {
        self.aware().map(|aware| *aware.offset())
    }

    fn checked_add_delta(self, delta: TimeDelta) -> Option<Self> {
        match self {
            Moment::Naive(naive) => naive.checked_add_signed(delta).map(Moment::Naive),
            Moment::Aware(aware) => aware.checked_add_signed(delta).map(Moment::Aware),
        }
    }

    /// Mixed awareness compares naive values as if they were UTC
    fn since(self, earlier: Self) -> TimeDelta {
        match (self, earlier) {
            (Moment::Aware(a), Moment::Aware(b)) => a.signed_duration_since(b),
            (a, b) => a.naive_utc().signed_duration_since(b.naive_utc()),
        }
    }
}

impl From<NaiveDateTime> for Moment {
    fn from(naive: NaiveDateTime) -> Self {
        Moment::Naive(naive)
    }
}

impl From<DateTime<FixedOffset>> for Moment {
    fn from(aware: DateTime<FixedOffset>) -> Self {
        Moment::Aware(aware)
    }
}

impl From<DateTime<Utc>> for Moment {
    fn from(aware: DateTime<Utc>) -> Self {
        Moment::Aware(aware.fixed_offset())
    }
}

// ============================================================================
// DURATION HELPERS
// ============================================================================

/// Total nanoseconds of a delta
#[inline]
pub fn delta_to_nanos(delta: TimeDelta) -> i128 {
    delta.num_seconds() as i128 * NANOS_PER_SEC + delta.subsec_nanos() as i128
}

/// Delta from total nanoseconds, `None` outside the `TimeDelta` range
pub fn delta_from_nanos(nanos: i128) -> Option<TimeDelta> {
    let secs = i64::try_from(nanos.div_euclid(NANOS_PER_SEC)).ok()?;
    let subsec = nanos.rem_euclid(NANOS_PER_SEC) as u32;
    TimeDelta::new(secs, subsec)
}

/// Scale a delta by a real factor, rounding to the nearest nanosecond
pub fn scale_delta(delta: TimeDelta, factor: f64) -> Option<TimeDelta> {
    if !factor.is_finite() {
        return None;
    }

    // Integral factors stay exact
    if factor.fract() == 0.0 && factor.abs() <= i32::MAX as f64 {
        return delta.checked_mul(factor as i32);
    }

    let scaled = delta_to_nanos(delta) as f64 * factor;
    if !scaled.is_finite() {
        return None;
    }
    delta_from_nanos(scaled.round() as i128)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn aware(day: u32, offset_hours: i32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .from_local_datetime(&naive(day))
            .unwrap()
    }

    #[test]
    fn test_awareness() {
        assert!(!naive(1).is_aware());
        assert!(aware(1, 2).is_aware());
        assert!(Utc.from_utc_datetime(&naive(1)).is_aware());

        assert!(!Moment::from(naive(1)).is_aware());
        assert_eq!(
            Moment::from(aware(1, 2)).utc_offset(),
            FixedOffset::east_opt(7200)
        );
    }

    #[test]
    fn test_moment_timelines_are_disjoint() {
        // A naive moment far in the future still sorts before any aware one
        let late_naive = Moment::from(naive(31));
        let early_aware = Moment::from(aware(1, 0));
        assert!(late_naive < early_aware);
        assert_ne!(Moment::from(naive(1)), Moment::from(aware(1, 0)));
    }

    #[test]
    fn test_moment_arithmetic() {
        let m = Moment::from(aware(1, 3));
        let later = m.checked_add_delta(TimeDelta::days(2)).unwrap();
        assert_eq!(later, Moment::from(aware(3, 3)));
        assert_eq!(later.since(m), TimeDelta::days(2));
        assert_eq!(later.checked_sub_delta(TimeDelta::days(2)), Some(m));

        let n = Moment::from(naive(1));
        assert_eq!(n.checked_add_delta(TimeDelta::MAX), None);
    }

    #[test]
    fn test_nanos_conversion() {
        let delta = TimeDelta::new(5, 250).unwrap();
        assert_eq!(delta_to_nanos(delta), 5_000_000_250);
        assert_eq!(delta_to_nanos(-delta), -5_000_000_250);
        assert_eq!(delta_from_nanos(-5_000_000_250), Some(-delta));
        assert_eq!(delta_from_nanos(i128::MAX), None);
    }

    #[test]
    fn test_scale_delta() {
        let day = TimeDelta::days(1);
        assert_eq!(scale_delta(day, 1.0), Some(day));
        assert_eq!(scale_delta(day, 3.0), Some(TimeDelta::days(3)));
        assert_eq!(scale_delta(day, 0.5), Some(TimeDelta::hours(12)));
        assert_eq!(scale_delta(day, f64::NAN), None);
        assert_eq!(scale_delta(TimeDelta::MAX, 1e10), None);
    }
}
