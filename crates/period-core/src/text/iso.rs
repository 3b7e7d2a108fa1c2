//! ISO-8601 interval format: `<start><sep><end>`

use crate::{validate_edges, IsoFormat, Period, PeriodError, PeriodLike, PeriodResult, TextTimestamp};

/// Render a period as an ISO-8601 interval
pub fn isoformat<P>(period: &P, options: &IsoFormat) -> String
where
    P: PeriodLike,
    P::Timestamp: TextTimestamp,
{
    let (start, end) = period.edges();
    format!(
        "{}{}{}",
        start.to_iso(options.dt_sep, options.timespec),
        options.sep,
        end.to_iso(options.dt_sep, options.timespec)
    )
}

/// Parse an ISO-8601 interval, splitting on the first `sep`
pub fn fromisoformat<T: TextTimestamp>(s: &str, sep: &str) -> PeriodResult<Period<T>> {
    fromisoformat_with(s, sep, Period::from_valid_edges)
}

/// [`fromisoformat`] with a caller-chosen result shape
///
/// Edges are validated before `factory` sees them.
pub fn fromisoformat_with<T, R, F>(s: &str, sep: &str, factory: F) -> PeriodResult<R>
where
    T: TextTimestamp,
    F: FnOnce(T, T) -> R,
{
    let (start, end) = s.split_once(sep).ok_or_else(|| PeriodError::MissingSeparator {
        input: s.to_string(),
        sep: sep.to_string(),
    })?;

    let start = T::parse_iso(start)?;
    let end = T::parse_iso(end)?;
    validate_edges(start, end)?;
    Ok(factory(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{flat, Edge, Moment, Timespec};
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

    fn ts(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_isoformat() {
        let p = Period::new(ts(1, 0), ts(5, 12)).unwrap();
        assert_eq!(
            isoformat(&p, &IsoFormat::default()),
            "2024-01-01T00:00:00/2024-01-05T12:00:00"
        );

        let options = IsoFormat::default()
            .with_dt_sep(' ')
            .with_timespec(Timespec::Minutes)
            .with_sep(" - ");
        assert_eq!(isoformat(&p, &options), "2024-01-01 00:00 - 2024-01-05 12:00");

        // Raw pairs format the same way
        assert_eq!(
            isoformat(&(ts(1, 0), ts(5, 12)), &IsoFormat::default()),
            "2024-01-01T00:00:00/2024-01-05T12:00:00"
        );
    }

    #[test]
    fn test_fromisoformat() {
        let p: Period<NaiveDateTime> =
            fromisoformat("2024-01-01T00:00:00/2024-01-05T12:00:00", "/").unwrap();
        assert_eq!(p, Period::new(ts(1, 0), ts(5, 12)).unwrap());

        let pair: (NaiveDateTime, NaiveDateTime) =
            fromisoformat_with("2024-01-01 -- 2024-01-05", " -- ", flat).unwrap();
        assert_eq!(pair, (ts(1, 0), ts(5, 0)));
    }

    #[test]
    fn test_fromisoformat_aware() {
        let p: Period<DateTime<FixedOffset>> =
            fromisoformat("2024-01-01T00:00:00+01:00/2024-01-05T00:00:00+01:00", "/").unwrap();
        assert_eq!(p.duration(), chrono::TimeDelta::days(4));
    }

    #[test]
    fn test_fromisoformat_failures() {
        let missing = fromisoformat::<NaiveDateTime>("2019-07-31T10:00:002020-01-27T10:00:00", "/");
        assert!(matches!(missing, Err(PeriodError::MissingSeparator { .. })));

        let many = fromisoformat::<NaiveDateTime>("2019-07-3/1T10:00:00/2020-01-27T10:00:00", "/");
        assert!(matches!(many, Err(PeriodError::InvalidIso(_))));

        let backwards = fromisoformat::<NaiveDateTime>("2024-01-05/2024-01-01", "/");
        assert!(matches!(backwards, Err(PeriodError::NotChronological { .. })));
    }

    #[test]
    fn test_fromisoformat_mixed_awareness() {
        let mixed = fromisoformat::<Moment>("2024-01-01T00:00:00/2024-01-05T00:00:00+01:00", "/");
        assert_eq!(
            mixed.unwrap_err(),
            PeriodError::MixedAwareness {
                naive: Edge::Start,
                aware: Edge::End
            }
        );
    }
}
