//! The Period value type and its validation
//!
//! A Period is a closed interval `[start, end]` with `start < end` strictly.
//! Both edges share one awareness: either both carry a UTC offset or neither does.

use std::any::Any;
use std::fmt;
use std::ops::{BitAnd, BitOr};

use chrono::TimeDelta;

use crate::{intersection, union, PeriodError, PeriodResult, Timestamp};

/// One of the two edges of a period
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Start,
    End,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Start => f.write_str("start"),
            Edge::End => f.write_str("end"),
        }
    }
}

/// Anything exposing readable `start`/`end` timestamps.
///
/// All algebra operations accept period-likes rather than [`Period`], so raw
/// `(start, end)` pairs and caller-defined types work as inputs too.
pub trait PeriodLike {
    type Timestamp: Timestamp;

    fn start(&self) -> Self::Timestamp;

    fn end(&self) -> Self::Timestamp;

    #[inline]
    fn edges(&self) -> (Self::Timestamp, Self::Timestamp) {
        (self.start(), self.end())
    }
}

impl<T: Timestamp> PeriodLike for (T, T) {
    type Timestamp = T;

    #[inline]
    fn start(&self) -> T {
        self.0
    }

    #[inline]
    fn end(&self) -> T {
        self.1
    }
}

impl<P: PeriodLike + ?Sized> PeriodLike for &P {
    type Timestamp = P::Timestamp;

    #[inline]
    fn start(&self) -> Self::Timestamp {
        (**self).start()
    }

    #[inline]
    fn end(&self) -> Self::Timestamp {
        (**self).end()
    }
}

/// Raw edge pair factory, the flat alternative to building a [`Period`]
#[inline]
pub fn flat<T>(start: T, end: T) -> (T, T) {
    (start, end)
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Validate period edges
///
/// Fails when exactly one edge is aware, or when `start >= end`.
pub fn validate_edges<T: Timestamp>(start: T, end: T) -> PeriodResult<()> {
    match (start.is_aware(), end.is_aware()) {
        (false, true) => {
            return Err(PeriodError::MixedAwareness {
                naive: Edge::Start,
                aware: Edge::End,
            })
        }
        (true, false) => {
            return Err(PeriodError::MixedAwareness {
                naive: Edge::End,
                aware: Edge::Start,
            })
        }
        _ => {}
    }

    if start >= end {
        return Err(PeriodError::NotChronological {
            start: format!("{:?}", start),
            end: format!("{:?}", end),
        });
    }

    Ok(())
}

/// Validate a period-like value, see [`validate_edges`]
pub fn validate_period<P: PeriodLike>(period: &P) -> PeriodResult<()> {
    validate_edges(period.start(), period.end())
}

/// Whether a period-like satisfies the period invariant
#[inline]
pub(crate) fn is_valid<P: PeriodLike>(period: &P) -> bool {
    validate_period(period).is_ok()
}

// ============================================================================
// PERIOD
// ============================================================================

/// Immutable closed time interval
///
/// INVARIANT: `start < end`, and both edges share awareness.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period<T: Timestamp> {
    start: T,
    end: T,
    /// `end - start`, fixed at construction
    duration: TimeDelta,
}

impl<T: Timestamp> Period<T> {
    /// Create a validated period
    pub fn new(start: T, end: T) -> PeriodResult<Self> {
        validate_edges(start, end)?;
        Ok(Self::from_valid_edges(start, end))
    }

    /// Build from edges already known to satisfy the invariant
    #[inline]
    pub(crate) fn from_valid_edges(start: T, end: T) -> Self {
        debug_assert!(start < end);
        Period {
            start,
            end,
            duration: end.since(start),
        }
    }

    /// Create a period from one edge and a duration
    ///
    /// `anchor` names which edge `edge` is; the other one is derived.
    pub fn from_edge(edge: T, duration: TimeDelta, anchor: Edge) -> PeriodResult<Self> {
        let (start, end) = match anchor {
            Edge::Start => (
                edge,
                edge.checked_add_delta(duration).ok_or(PeriodError::OutOfRange)?,
            ),
            Edge::End => (
                edge.checked_sub_delta(duration).ok_or(PeriodError::OutOfRange)?,
                edge,
            ),
        };
        Self::new(start, end)
    }

    /// Copy with one or both edges replaced, re-validated
    pub fn replace(&self, start: Option<T>, end: Option<T>) -> PeriodResult<Self> {
        Self::new(start.unwrap_or(self.start), end.unwrap_or(self.end))
    }

    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    #[inline]
    pub fn edges(&self) -> (T, T) {
        (self.start, self.end)
    }

    /// Equality against any period-like value.
    ///
    /// Only another `Period<T>` with the same edges compares equal; a
    /// structurally compatible value of a different type never does.
    pub fn eq_like<P>(&self, other: &P) -> bool
    where
        P: PeriodLike + 'static,
        T: 'static,
    {
        (other as &dyn Any)
            .downcast_ref::<Self>()
            .is_some_and(|other| other == self)
    }
}

impl<T: Timestamp> PeriodLike for Period<T> {
    type Timestamp = T;

    #[inline]
    fn start(&self) -> T {
        self.start
    }

    #[inline]
    fn end(&self) -> T {
        self.end
    }
}

impl<T: Timestamp> fmt::Debug for Period<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Period")
            .field(&self.start)
            .field(&self.end)
            .finish()
    }
}

impl<T: Timestamp> TryFrom<(T, T)> for Period<T> {
    type Error = PeriodError;

    fn try_from((start, end): (T, T)) -> PeriodResult<Self> {
        Period::new(start, end)
    }
}

impl<T: Timestamp> From<Period<T>> for (T, T) {
    fn from(period: Period<T>) -> Self {
        period.edges()
    }
}

/// `a & b` - intersection
impl<T: Timestamp> BitAnd for Period<T> {
    type Output = Option<Period<T>>;

    fn bitand(self, rhs: Self) -> Self::Output {
        intersection(&self, &rhs)
    }
}

/// `a | b` - union
impl<T: Timestamp> BitOr for Period<T> {
    type Output = Option<Period<T>>;

    fn bitor(self, rhs: Self) -> Self::Output {
        union(&self, &rhs)
    }
}

// ============================================================================
// MISC
// ============================================================================

/// Flatten periods into `start, end, start, end, ...`
pub fn to_timestamps<I>(periods: I) -> impl Iterator<Item = <I::Item as PeriodLike>::Timestamp>
where
    I: IntoIterator,
    I::Item: PeriodLike,
{
    periods.into_iter().flat_map(|period| {
        let (start, end) = period.edges();
        [start, end]
    })
}

/// Whether every given period-like has exactly the edges of `period`
pub fn edges_eq<P, I>(period: &P, others: I) -> bool
where
    P: PeriodLike,
    I: IntoIterator,
    I::Item: PeriodLike<Timestamp = P::Timestamp>,
{
    let edges = period.edges();
    others.into_iter().all(|other| other.edges() == edges)
}
