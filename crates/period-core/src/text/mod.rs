//! Text codecs for periods
//!
//! - ISO-8601 intervals: `2024-01-01T00:00:00/2024-01-05T00:00:00`
//! - Custom patterns: both edges rendered with one strftime-style pattern

pub mod edge;
pub mod iso;
pub mod options;
pub mod pattern;

pub use edge::*;
pub use iso::*;
pub use options::*;
pub use pattern::*;

use std::fmt;
use std::str::FromStr;

use crate::{Period, PeriodError, PeriodResult};

impl<T: TextTimestamp> Period<T> {
    /// ISO-8601 interval rendering
    pub fn isoformat(&self, options: &IsoFormat) -> String {
        isoformat(self, options)
    }

    /// Render both edges with `fmt`, joined by `sep`
    pub fn strftime(&self, fmt: &str, sep: &str) -> PeriodResult<String> {
        strftime(self, fmt, sep)
    }

    /// Parse an ISO-8601 interval
    pub fn fromisoformat(s: &str, sep: &str) -> PeriodResult<Self> {
        fromisoformat(s, sep)
    }

    /// Parse edges formatted with `fmt` and joined by `sep`
    pub fn strptime(s: &str, fmt: &str, sep: &str) -> PeriodResult<Self> {
        strptime(s, fmt, sep)
    }
}

/// Default ISO-8601 interval
impl<T: TextTimestamp> fmt::Display for Period<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.isoformat(&IsoFormat::default()))
    }
}

impl<T: TextTimestamp> FromStr for Period<T> {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::fromisoformat(s, DEFAULT_SEP)
    }
}
