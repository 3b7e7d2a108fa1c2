//! Period Algebra Test Harness - Fixtures, strategies and generators
//!
//! This crate provides:
//! - Fixed timestamps and periods shared by the integration tests
//! - proptest strategies for timestamps, periods and durations
//! - Seeded random period sets for benchmarks

pub mod fixtures;
pub mod generator;
pub mod strategies;

pub use fixtures::*;
pub use generator::*;
pub use strategies::*;
