//! Fixed timestamps used across the integration tests
//!
//! `A < B < C < D`, each a few days apart in January 2024.

use chrono::{NaiveDate, NaiveDateTime};
use period_core::Period;

/// Midnight on the given day of January 2024
pub fn jan(day: u32) -> NaiveDateTime {
    at(2024, 1, day, 0, 0)
}

/// Naive timestamp from calendar fields; panics on invalid input
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_else(|| panic!("invalid fixture {year}-{month}-{day} {hour}:{minute}"))
}

pub fn a() -> NaiveDateTime {
    jan(1)
}

pub fn b() -> NaiveDateTime {
    jan(5)
}

pub fn c() -> NaiveDateTime {
    jan(10)
}

pub fn d() -> NaiveDateTime {
    jan(15)
}

/// Period between two fixture timestamps; panics when not chronological
pub fn period(start: NaiveDateTime, end: NaiveDateTime) -> Period<NaiveDateTime> {
    Period::new(start, end).unwrap_or_else(|err| panic!("invalid fixture period: {err}"))
}
