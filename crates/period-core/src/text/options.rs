//! Formatting options for period strings

use std::str::FromStr;

use crate::PeriodError;

/// Default separator between the two edges of a period string
pub const DEFAULT_SEP: &str = "/";

/// Default separator between date and time inside one ISO edge
pub const DEFAULT_DT_SEP: char = 'T';

/// Sub-second precision of ISO edges
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Timespec {
    /// Seconds, plus 3, 6 or 9 fractional digits only when non-zero
    ///
    /// The digit count follows the sub-second value: whole milliseconds
    /// print 3 digits, not a fixed 6-digit microsecond field.
    #[default]
    Auto,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl Timespec {
    /// chrono pattern rendering the time part at this precision
    pub(crate) fn time_pattern(self) -> &'static str {
        match self {
            Timespec::Auto => "%H:%M:%S%.f",
            Timespec::Hours => "%H",
            Timespec::Minutes => "%H:%M",
            Timespec::Seconds => "%H:%M:%S",
            Timespec::Milliseconds => "%H:%M:%S%.3f",
            Timespec::Microseconds => "%H:%M:%S%.6f",
            Timespec::Nanoseconds => "%H:%M:%S%.9f",
        }
    }
}

impl FromStr for Timespec {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Timespec::Auto),
            "hours" => Ok(Timespec::Hours),
            "minutes" => Ok(Timespec::Minutes),
            "seconds" => Ok(Timespec::Seconds),
            "milliseconds" => Ok(Timespec::Milliseconds),
            "microseconds" => Ok(Timespec::Microseconds),
            "nanoseconds" => Ok(Timespec::Nanoseconds),
            other => Err(PeriodError::InvalidPattern(other.to_string())),
        }
    }
}

/// ISO interval rendering configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IsoFormat {
    /// Separator between date and time of each edge
    pub dt_sep: char,
    /// Sub-second precision of each edge
    pub timespec: Timespec,
    /// Separator between the two edges
    pub sep: String,
}

impl Default for IsoFormat {
    fn default() -> Self {
        IsoFormat {
            dt_sep: DEFAULT_DT_SEP,
            timespec: Timespec::Auto,
            sep: DEFAULT_SEP.to_string(),
        }
    }
}

impl IsoFormat {
    pub fn with_dt_sep(mut self, dt_sep: char) -> Self {
        self.dt_sep = dt_sep;
        self
    }

    pub fn with_timespec(mut self, timespec: Timespec) -> Self {
        self.timespec = timespec;
        self
    }

    pub fn with_sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = IsoFormat::default();
        assert_eq!(options.dt_sep, 'T');
        assert_eq!(options.timespec, Timespec::Auto);
        assert_eq!(options.sep, "/");
    }

    #[test]
    fn test_builder() {
        let options = IsoFormat::default()
            .with_dt_sep(' ')
            .with_timespec(Timespec::Minutes)
            .with_sep(" -- ");
        assert_eq!(options.dt_sep, ' ');
        assert_eq!(options.timespec, Timespec::Minutes);
        assert_eq!(options.sep, " -- ");
    }

    #[test]
    fn test_timespec_from_str() {
        assert_eq!("auto".parse::<Timespec>().unwrap(), Timespec::Auto);
        assert_eq!("milliseconds".parse::<Timespec>().unwrap(), Timespec::Milliseconds);
        assert!("fortnights".parse::<Timespec>().is_err());
    }
}
