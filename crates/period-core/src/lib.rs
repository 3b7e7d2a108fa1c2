//! Period Algebra - Closed time intervals and their algebra
//!
//! This crate defines periods and the operations between them:
//! - Periods and validation (Period, PeriodLike, Edge)
//! - Time primitives (Timestamp, Moment, delta helpers)
//! - Ordering and relations (ascend_start, descend_end, within)
//! - Merging and partitioning (join, union, intersection, difference)
//! - Arithmetic (shifts, scaling, division, cut, xor)
//! - Text codecs (ISO-8601 intervals, strftime/strptime patterns)
//!
//! Every operation building a period comes in two forms: `op` returns a
//! [`Period`], `op_with` hands the validated edges to a caller factory such
//! as [`flat`].

pub mod arith;
pub mod error;
pub mod merge;
pub mod partition;
pub mod period;
pub mod relation;
pub mod sort;
pub mod text;
pub mod time;

pub use arith::*;
pub use error::*;
pub use merge::*;
pub use partition::*;
pub use period::*;
pub use relation::*;
pub use sort::*;
pub use text::*;
pub use time::*;
