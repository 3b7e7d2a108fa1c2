//! proptest strategies for the period algebra

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, TimeZone, Utc};
use period_core::{Moment, Period};
use proptest::prelude::*;

/// 2000-01-01T00:00:00 as a Unix timestamp
const MIN_SECS: i64 = 946_684_800;
/// 2100-01-01T00:00:00 as a Unix timestamp
const MAX_SECS: i64 = 4_102_444_800;

/// Largest generated duration: about ten years
const MAX_SPAN_SECS: i64 = 10 * 366 * 86_400;

/// Naive timestamps in 2000..2100 with whole-microsecond precision
pub fn arb_naive() -> impl Strategy<Value = NaiveDateTime> {
    (MIN_SECS..MAX_SECS, 0u32..1_000_000).prop_map(|(secs, micros)| {
        DateTime::<Utc>::from_timestamp(secs, micros * 1_000)
            .map(|dt| dt.naive_utc())
            .unwrap_or_default()
    })
}

/// Strictly positive durations up to about ten years
pub fn arb_delta() -> impl Strategy<Value = TimeDelta> {
    (1i64..MAX_SPAN_SECS).prop_map(TimeDelta::seconds)
}

/// Valid naive periods
pub fn arb_period() -> impl Strategy<Value = Period<NaiveDateTime>> {
    (arb_naive(), arb_delta()).prop_map(|(start, span)| {
        Period::new(start, start + span).unwrap_or_else(|err| panic!("{err}"))
    })
}

/// Small sets of periods clustered inside one year, so they often overlap
pub fn arb_cluster(max: usize) -> impl Strategy<Value = Vec<Period<NaiveDateTime>>> {
    (arb_naive(), prop::collection::vec((0i64..365 * 86_400, 1i64..60 * 86_400), 0..max))
        .prop_map(|(base, offsets)| {
            offsets
                .into_iter()
                .map(|(offset, span)| {
                    let start = base + TimeDelta::seconds(offset);
                    Period::new(start, start + TimeDelta::seconds(span))
                        .unwrap_or_else(|err| panic!("{err}"))
                })
                .collect()
        })
}

/// Raw edge pairs in any order, equal edges included
pub fn arb_raw_pair() -> impl Strategy<Value = (NaiveDateTime, NaiveDateTime)> {
    prop_oneof![
        (arb_naive(), arb_naive()),
        arb_naive().prop_map(|t| (t, t)),
        arb_period().prop_map(|p| (p.end(), p.start())),
        arb_period().prop_map(|p| p.edges()),
    ]
}

/// Naive or aware moment; aware ones carry a whole-hour offset
pub fn arb_moment() -> impl Strategy<Value = Moment> {
    prop_oneof![
        arb_naive().prop_map(Moment::from),
        (arb_naive(), -12i32..=14).prop_map(|(naive, hours)| {
            FixedOffset::east_opt(hours * 3600)
                .and_then(|offset| offset.from_local_datetime(&naive).single())
                .map(Moment::from)
                .unwrap_or(Moment::Naive(naive))
        }),
    ]
}

/// Raw moment pairs, often with mixed awareness
pub fn arb_moment_pair() -> impl Strategy<Value = (Moment, Moment)> {
    (arb_moment(), arb_moment())
}
