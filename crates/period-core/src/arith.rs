//! Arithmetic operators on periods
//!
//! - add / sub: stretch or shrink the end by a duration
//! - add_period / cut: join a neighbour, or cut off a shared-edge sub-range
//! - mul: scale the duration from the start
//! - lshift / rshift: translate, duration preserved
//! - floordiv / rem / truediv: arithmetic on the duration itself
//! - xor: symmetric difference of two periods sharing an edge
//!
//! Operands breaking the period invariant are rejected with the validation
//! error before any arithmetic happens.

use chrono::TimeDelta;

use crate::{
    delta_from_nanos, delta_to_nanos, join, join_with, scale_delta, validate_edges,
    validate_period, Period, PeriodError, PeriodLike, PeriodResult, Timestamp,
};

#[inline]
fn span<P: PeriodLike>(period: &P) -> TimeDelta {
    period.end().since(period.start())
}

/// Duration of a validated operand
#[inline]
fn checked_span<P: PeriodLike>(period: &P) -> PeriodResult<TimeDelta> {
    validate_period(period)?;
    Ok(span(period))
}

/// Floor division, rounding towards negative infinity
#[inline]
fn floor_div(a: i128, b: i128) -> i128 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

// ============================================================================
// ADD / SUB
// ============================================================================

/// Move the end of `period` by `delta`
///
/// A negative delta shrinks the period and fails if it collapses.
pub fn add<P: PeriodLike>(period: &P, delta: TimeDelta) -> PeriodResult<Period<P::Timestamp>> {
    add_with(period, delta, Period::from_valid_edges)
}

/// [`add`] with a caller-chosen result shape
pub fn add_with<P, R, F>(period: &P, delta: TimeDelta, factory: F) -> PeriodResult<R>
where
    P: PeriodLike,
    F: FnOnce(P::Timestamp, P::Timestamp) -> R,
{
    validate_period(period)?;
    let (start, end) = period.edges();
    if delta.is_zero() {
        return Ok(factory(start, end));
    }

    let end = end.checked_add_delta(delta).ok_or(PeriodError::OutOfRange)?;
    if delta < TimeDelta::zero() {
        validate_edges(start, end)?;
    }
    Ok(factory(start, end))
}

/// `period + other`: same as [`join`]
pub fn add_period<A, B>(period: &A, other: &B) -> Option<Period<A::Timestamp>>
where
    A: PeriodLike,
    B: PeriodLike<Timestamp = A::Timestamp>,
{
    join(period, other)
}

/// [`add_period`] with a caller-chosen result shape
pub fn add_period_with<A, B, R, F>(period: &A, other: &B, factory: F) -> Option<R>
where
    A: PeriodLike,
    B: PeriodLike<Timestamp = A::Timestamp>,
    F: FnOnce(A::Timestamp, A::Timestamp) -> R,
{
    join_with(period, other, factory)
}

/// `period - delta`: same as `add(period, -delta)`
pub fn sub<P: PeriodLike>(period: &P, delta: TimeDelta) -> PeriodResult<Period<P::Timestamp>> {
    add(period, -delta)
}

/// [`sub`] with a caller-chosen result shape
pub fn sub_with<P, R, F>(period: &P, delta: TimeDelta, factory: F) -> PeriodResult<R>
where
    P: PeriodLike,
    F: FnOnce(P::Timestamp, P::Timestamp) -> R,
{
    add_with(period, -delta, factory)
}

/// `period - other`: remove `other` from the side where the two share an edge
///
/// `Ok(None)` when nothing remains on that side. This includes an `other`
/// reaching past `period` on the side opposite the shared edge, so [`xor`]
/// can cut in both directions. Periods sharing no edge cannot be cut.
pub fn cut<A, B>(period: &A, other: &B) -> PeriodResult<Option<Period<A::Timestamp>>>
where
    A: PeriodLike,
    B: PeriodLike<Timestamp = A::Timestamp>,
{
    cut_with(period, other, Period::from_valid_edges)
}

/// [`cut`] with a caller-chosen result shape
pub fn cut_with<A, B, R, F>(period: &A, other: &B, factory: F) -> PeriodResult<Option<R>>
where
    A: PeriodLike,
    B: PeriodLike<Timestamp = A::Timestamp>,
    F: FnOnce(A::Timestamp, A::Timestamp) -> R,
{
    validate_period(period)?;
    validate_period(other)?;
    let (start, end) = period.edges();
    let (other_start, other_end) = other.edges();

    if start == other_start {
        Ok((other_end < end).then(|| factory(other_end, end)))
    } else if end == other_end {
        Ok((start < other_start).then(|| factory(start, other_start)))
    } else {
        Err(PeriodError::UnsupportedCut {
            period: format!("{:?}", (start, end)),
            other: format!("{:?}", (other_start, other_end)),
        })
    }
}

/// Symmetric difference of two periods sharing an edge
///
/// `Ok(None)` when the periods are equal.
pub fn xor<A, B>(period: &A, other: &B) -> PeriodResult<Option<Vec<Period<A::Timestamp>>>>
where
    A: PeriodLike,
    B: PeriodLike<Timestamp = A::Timestamp>,
{
    xor_with(period, other, Period::from_valid_edges)
}

/// [`xor`] with a caller-chosen result shape
pub fn xor_with<A, B, R, F>(period: &A, other: &B, mut factory: F) -> PeriodResult<Option<Vec<R>>>
where
    A: PeriodLike,
    B: PeriodLike<Timestamp = A::Timestamp>,
    F: FnMut(A::Timestamp, A::Timestamp) -> R,
{
    let left = cut_with(period, other, &mut factory)?;
    let right = cut_with(other, period, &mut factory)?;

    let parts: Vec<R> = left.into_iter().chain(right).collect();
    Ok((!parts.is_empty()).then_some(parts))
}

// ============================================================================
// SCALE / SHIFT
// ============================================================================

/// Scale the duration of `period` by `factor`, keeping its start
///
/// `Ok(None)` for non-positive factors, or when the scaled duration rounds
/// to nothing.
pub fn mul<P: PeriodLike>(period: &P, factor: f64) -> PeriodResult<Option<Period<P::Timestamp>>> {
    mul_with(period, factor, Period::from_valid_edges)
}

/// [`mul`] with a caller-chosen result shape
pub fn mul_with<P, R, F>(period: &P, factor: f64, factory: F) -> PeriodResult<Option<R>>
where
    P: PeriodLike,
    F: FnOnce(P::Timestamp, P::Timestamp) -> R,
{
    let duration = checked_span(period)?;
    if !factor.is_finite() {
        return Err(PeriodError::InvalidFactor(factor));
    }
    if factor <= 0.0 {
        return Ok(None);
    }

    let start = period.start();
    let scaled = scale_delta(duration, factor).ok_or(PeriodError::OutOfRange)?;
    let end = start.checked_add_delta(scaled).ok_or(PeriodError::OutOfRange)?;
    Ok((start < end).then(|| factory(start, end)))
}

/// Translate `period` back in time by `delta`
pub fn lshift<P: PeriodLike>(period: &P, delta: TimeDelta) -> PeriodResult<Period<P::Timestamp>> {
    lshift_with(period, delta, Period::from_valid_edges)
}

/// [`lshift`] with a caller-chosen result shape
pub fn lshift_with<P, R, F>(period: &P, delta: TimeDelta, factory: F) -> PeriodResult<R>
where
    P: PeriodLike,
    F: FnOnce(P::Timestamp, P::Timestamp) -> R,
{
    rshift_with(period, -delta, factory)
}

/// Translate `period` forward in time by `delta`
pub fn rshift<P: PeriodLike>(period: &P, delta: TimeDelta) -> PeriodResult<Period<P::Timestamp>> {
    rshift_with(period, delta, Period::from_valid_edges)
}

/// [`rshift`] with a caller-chosen result shape
pub fn rshift_with<P, R, F>(period: &P, delta: TimeDelta, factory: F) -> PeriodResult<R>
where
    P: PeriodLike,
    F: FnOnce(P::Timestamp, P::Timestamp) -> R,
{
    validate_period(period)?;
    let (start, end) = period.edges();
    let start = start.checked_add_delta(delta).ok_or(PeriodError::OutOfRange)?;
    let end = end.checked_add_delta(delta).ok_or(PeriodError::OutOfRange)?;
    Ok(factory(start, end))
}

// ============================================================================
// DURATION DIVISION
// ============================================================================

/// How many whole `divisor`s fit into the duration (floored)
pub fn floordiv<P: PeriodLike>(period: &P, divisor: TimeDelta) -> PeriodResult<i128> {
    let divisor = delta_to_nanos(divisor);
    if divisor == 0 {
        return Err(PeriodError::DivisionByZero);
    }
    Ok(floor_div(delta_to_nanos(checked_span(period)?), divisor))
}

/// Duration divided by an integer, floored to the nanosecond
pub fn floordiv_by<P: PeriodLike>(period: &P, divisor: i64) -> PeriodResult<TimeDelta> {
    if divisor == 0 {
        return Err(PeriodError::DivisionByZero);
    }
    let nanos = floor_div(delta_to_nanos(checked_span(period)?), divisor as i128);
    delta_from_nanos(nanos).ok_or(PeriodError::OutOfRange)
}

/// Remainder of the duration modulo `divisor`, with the sign of `divisor`
pub fn rem<P: PeriodLike>(period: &P, divisor: TimeDelta) -> PeriodResult<TimeDelta> {
    let b = delta_to_nanos(divisor);
    if b == 0 {
        return Err(PeriodError::DivisionByZero);
    }
    let a = delta_to_nanos(checked_span(period)?);
    delta_from_nanos(a - b * floor_div(a, b)).ok_or(PeriodError::OutOfRange)
}

/// Ratio of the duration to `divisor`
pub fn truediv<P: PeriodLike>(period: &P, divisor: TimeDelta) -> PeriodResult<f64> {
    let divisor = delta_to_nanos(divisor);
    if divisor == 0 {
        return Err(PeriodError::DivisionByZero);
    }
    Ok(delta_to_nanos(checked_span(period)?) as f64 / divisor as f64)
}

/// Duration divided by a real number, rounded to the nanosecond
pub fn truediv_by<P: PeriodLike>(period: &P, divisor: f64) -> PeriodResult<TimeDelta> {
    if divisor == 0.0 {
        return Err(PeriodError::DivisionByZero);
    }
    let nanos = delta_to_nanos(checked_span(period)?) as f64 / divisor;
    if !nanos.is_finite() {
        return Err(PeriodError::InvalidFactor(divisor));
    }
    delta_from_nanos(nanos.round() as i128).ok_or(PeriodError::OutOfRange)
}
