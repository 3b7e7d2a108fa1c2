//! Text rendering and parsing of single period edges

use std::fmt::{Display, Write};

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::{Moment, PeriodError, PeriodResult, Timestamp, Timespec};

/// A timestamp that can be written and read as text
pub trait TextTimestamp: Timestamp {
    /// ISO-8601 rendering
    fn to_iso(&self, dt_sep: char, timespec: Timespec) -> String;

    /// Parse an ISO-8601 string
    fn parse_iso(s: &str) -> PeriodResult<Self>;

    /// Render with an explicit strftime-style pattern
    fn format_pattern(&self, pattern: &str) -> PeriodResult<String>;

    /// Parse with an explicit strptime-style pattern, `None` if `s` does not match
    fn parse_pattern(s: &str, pattern: &str) -> Option<Self>;
}

/// Render a delayed chrono format, reporting bad patterns instead of panicking
fn render<D: Display>(formatted: D, pattern: &str) -> PeriodResult<String> {
    let mut out = String::new();
    write!(out, "{}", formatted).map_err(|_| PeriodError::InvalidPattern(pattern.to_string()))?;
    Ok(out)
}

fn naive_to_iso(naive: &NaiveDateTime, dt_sep: char, timespec: Timespec) -> String {
    format!(
        "{}{}{}",
        naive.format("%Y-%m-%d"),
        dt_sep,
        naive.format(timespec.time_pattern())
    )
}

fn aware_to_iso<Tz>(aware: &DateTime<Tz>, dt_sep: char, timespec: Timespec) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = naive_to_iso(&aware.naive_local(), dt_sep, timespec);
    out.push_str(&aware.format("%:z").to_string());
    out
}

/// Parse `s` against `pattern`, defaulting absent time fields to zero
///
/// A pattern without any time field yields midnight; `%H` alone yields whole
/// hours. Fields present in the input are never discarded.
fn parse_fields(s: &str, pattern: &str) -> Option<Parsed> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, s, StrftimeItems::new(pattern)).ok()?;

    if parsed.timestamp().is_none() {
        if parsed.hour_div_12().is_none() && parsed.hour_mod_12().is_none() {
            parsed.set_hour(0).ok()?;
        }
        if parsed.minute().is_none() {
            parsed.set_minute(0).ok()?;
        }
    }
    Some(parsed)
}

fn parse_naive_pattern(s: &str, pattern: &str) -> Option<NaiveDateTime> {
    parse_fields(s, pattern)?.to_naive_datetime_with_offset(0).ok()
}

fn parse_aware_pattern(s: &str, pattern: &str) -> Option<DateTime<FixedOffset>> {
    parse_fields(s, pattern)?.to_datetime().ok()
}

// ============================================================================
// ISO-8601 PARSING
// ============================================================================

/// Split an ISO string into its wall-clock value and optional offset
///
/// Accepted: `YYYY-MM-DD`, optionally followed by one separator character
/// and `HH[:MM[:SS[.f]]]`, optionally followed by `Z` or `±HH[[:]MM]`.
pub(crate) fn parse_iso_parts(s: &str) -> Option<(NaiveDateTime, Option<FixedOffset>)> {
    let date = NaiveDate::parse_from_str(s.get(..10)?, "%Y-%m-%d").ok()?;

    let mut rest = s[10..].chars();
    if rest.next().is_none() {
        return Some((date.and_time(NaiveTime::MIN), None));
    }

    let (time, offset) = split_offset(rest.as_str())?;
    Some((date.and_time(parse_iso_time(time)?), offset))
}

fn split_offset(s: &str) -> Option<(&str, Option<FixedOffset>)> {
    if let Some(time) = s.strip_suffix('Z') {
        return Some((time, Some(FixedOffset::east_opt(0)?)));
    }

    match s.rfind(['+', '-']) {
        Some(idx) => Some((&s[..idx], Some(parse_offset(&s[idx..])?))),
        None => Some((s, None)),
    }
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, body) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };

    let digits: String = body.chars().filter(|c| *c != ':').collect();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let field = |range: std::ops::Range<usize>| digits.get(range)?.parse::<i32>().ok();
    let seconds = match digits.len() {
        2 => field(0..2)? * 3600,
        4 => field(0..2)? * 3600 + field(2..4)? * 60,
        6 => field(0..2)? * 3600 + field(2..4)? * 60 + field(4..6)?,
        _ => return None,
    };
    FixedOffset::east_opt(sign * seconds)
}

fn parse_iso_time(s: &str) -> Option<NaiveTime> {
    if s.len() == 2 {
        return NaiveTime::from_hms_opt(s.parse().ok()?, 0, 0);
    }
    NaiveTime::parse_from_str(s, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

fn invalid_iso(s: &str) -> PeriodError {
    PeriodError::InvalidIso(s.to_string())
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl TextTimestamp for NaiveDateTime {
    fn to_iso(&self, dt_sep: char, timespec: Timespec) -> String {
        naive_to_iso(self, dt_sep, timespec)
    }

    fn parse_iso(s: &str) -> PeriodResult<Self> {
        match parse_iso_parts(s) {
            Some((naive, None)) => Ok(naive),
            _ => Err(invalid_iso(s)),
        }
    }

    fn format_pattern(&self, pattern: &str) -> PeriodResult<String> {
        render(self.format(pattern), pattern)
    }

    fn parse_pattern(s: &str, pattern: &str) -> Option<Self> {
        parse_naive_pattern(s, pattern)
    }
}

impl TextTimestamp for DateTime<FixedOffset> {
    fn to_iso(&self, dt_sep: char, timespec: Timespec) -> String {
        aware_to_iso(self, dt_sep, timespec)
    }

    fn parse_iso(s: &str) -> PeriodResult<Self> {
        match parse_iso_parts(s) {
            Some((naive, Some(offset))) => naive
                .and_local_timezone(offset)
                .single()
                .ok_or_else(|| invalid_iso(s)),
            _ => Err(invalid_iso(s)),
        }
    }

    fn format_pattern(&self, pattern: &str) -> PeriodResult<String> {
        render(self.format(pattern), pattern)
    }

    fn parse_pattern(s: &str, pattern: &str) -> Option<Self> {
        parse_aware_pattern(s, pattern)
    }
}

impl TextTimestamp for DateTime<Utc> {
    fn to_iso(&self, dt_sep: char, timespec: Timespec) -> String {
        aware_to_iso(self, dt_sep, timespec)
    }

    fn parse_iso(s: &str) -> PeriodResult<Self> {
        DateTime::<FixedOffset>::parse_iso(s).map(|aware| aware.with_timezone(&Utc))
    }

    fn format_pattern(&self, pattern: &str) -> PeriodResult<String> {
        render(self.format(pattern), pattern)
    }

    fn parse_pattern(s: &str, pattern: &str) -> Option<Self> {
        parse_aware_pattern(s, pattern).map(|aware| aware.with_timezone(&Utc))
    }
}

impl TextTimestamp for Moment {
    fn to_iso(&self, dt_sep: char, timespec: Timespec) -> String {
        match self {
            Moment::Naive(naive) => naive.to_iso(dt_sep, timespec),
            Moment::Aware(aware) => aware.to_iso(dt_sep, timespec),
        }
    }

    fn parse_iso(s: &str) -> PeriodResult<Self> {
        match parse_iso_parts(s) {
            Some((naive, None)) => Ok(Moment::Naive(naive)),
            Some((naive, Some(offset))) => naive
                .and_local_timezone(offset)
                .single()
                .map(Moment::Aware)
                .ok_or_else(|| invalid_iso(s)),
            None => Err(invalid_iso(s)),
        }
    }

    fn format_pattern(&self, pattern: &str) -> PeriodResult<String> {
        match self {
            Moment::Naive(naive) => naive.format_pattern(pattern),
            Moment::Aware(aware) => aware.format_pattern(pattern),
        }
    }

    fn parse_pattern(s: &str, pattern: &str) -> Option<Self> {
        // Patterns with an offset field yield aware moments
        let parsed = parse_fields(s, pattern)?;
        if parsed.offset().is_some() {
            parsed.to_datetime().ok().map(Moment::Aware)
        } else {
            parsed.to_naive_datetime_with_offset(0).ok().map(Moment::Naive)
        }
    }
}
