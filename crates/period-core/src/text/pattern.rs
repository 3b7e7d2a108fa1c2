//! Custom interval format: `<start as fmt><sep><end as fmt>`
//!
//! Parsing cannot simply split on `sep`: the separator may also occur inside
//! a correctly formatted edge. Every occurrence is a split candidate, tried
//! from the middle of the string outwards until both halves parse.

use tracing::{debug, trace};

use crate::{validate_edges, Period, PeriodError, PeriodLike, PeriodResult, TextTimestamp};

/// Indices `0..length` from the middle outwards: left, right, left, right, ...
///
/// For odd lengths the last index comes last.
pub(crate) fn middle_out(length: usize) -> impl Iterator<Item = usize> {
    let middle = length / 2;
    (0..middle)
        .rev()
        .zip(middle..length)
        .flat_map(|(left, right)| [left, right])
        .chain((length % 2 == 1).then(|| length - 1))
}

/// Render both edges with `fmt`, joined by `sep`
pub fn strftime<P>(period: &P, fmt: &str, sep: &str) -> PeriodResult<String>
where
    P: PeriodLike,
    P::Timestamp: TextTimestamp,
{
    let (start, end) = period.edges();
    Ok(format!(
        "{}{}{}",
        start.format_pattern(fmt)?,
        sep,
        end.format_pattern(fmt)?
    ))
}

/// Parse a period whose edges are formatted with `fmt` and joined by `sep`
pub fn strptime<T: TextTimestamp>(s: &str, fmt: &str, sep: &str) -> PeriodResult<Period<T>> {
    strptime_with(s, fmt, sep, Period::from_valid_edges)
}

/// [`strptime`] with a caller-chosen result shape
///
/// The first split where both halves parse wins; its edges are validated
/// before `factory` sees them.
pub fn strptime_with<T, R, F>(s: &str, fmt: &str, sep: &str, factory: F) -> PeriodResult<R>
where
    T: TextTimestamp,
    F: FnOnce(T, T) -> R,
{
    let candidates = (s.len() + 1).saturating_sub(sep.len());

    for i in middle_out(candidates) {
        let j = i + sep.len();
        if s.get(i..j) != Some(sep) {
            continue;
        }

        let Some(start) = T::parse_pattern(&s[..i], fmt) else {
            trace!(split = i, "start does not match format");
            continue;
        };
        let Some(end) = T::parse_pattern(&s[j..], fmt) else {
            trace!(split = i, "end does not match format");
            continue;
        };

        validate_edges(start, end)?;
        return Ok(factory(start, end));
    }

    debug!(input = s, fmt, sep, "no split candidate matches");
    Err(PeriodError::PatternMismatch {
        input: s.to_string(),
        format: fmt.to_string(),
        sep: sep.to_string(),
    })
}
