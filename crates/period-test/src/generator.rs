//! Seeded random period sets for benchmarks

use chrono::{NaiveDateTime, TimeDelta};
use period_core::Period;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::jan;

/// Generator configuration
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Number of periods per set
    pub count: usize,
    /// Window the period starts fall into, in seconds from the origin
    pub window_secs: i64,
    /// Longest generated period, in seconds
    pub max_span_secs: i64,
    /// Random seed
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            count: 100,
            window_secs: 365 * 86_400,
            max_span_secs: 7 * 86_400,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Few periods for quick runs
    pub fn light() -> Self {
        GeneratorConfig {
            count: 10,
            ..Default::default()
        }
    }

    /// Dense sets where most periods overlap
    pub fn dense() -> Self {
        GeneratorConfig {
            count: 1_000,
            window_secs: 30 * 86_400,
            max_span_secs: 3 * 86_400,
            seed: 42,
        }
    }
}

/// Deterministic source of random periods
pub struct PeriodGenerator {
    config: GeneratorConfig,
    origin: NaiveDateTime,
    rng: StdRng,
}

impl PeriodGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        PeriodGenerator {
            rng: StdRng::seed_from_u64(config.seed),
            origin: jan(1),
            config,
        }
    }

    /// One random valid period
    pub fn period(&mut self) -> Period<NaiveDateTime> {
        let offset = self.rng.gen_range(0..self.config.window_secs.max(1));
        let span = self.rng.gen_range(1..=self.config.max_span_secs.max(1));
        let start = self.origin + TimeDelta::seconds(offset);
        Period::new(start, start + TimeDelta::seconds(span)).unwrap_or_else(|err| panic!("{err}"))
    }

    /// `config.count` random periods
    pub fn periods(&mut self) -> Vec<Period<NaiveDateTime>> {
        (0..self.config.count).map(|_| self.period()).collect()
    }

    /// `config.count` periods laid end to end, in shuffled order
    pub fn contiguous(&mut self) -> Vec<Period<NaiveDateTime>> {
        let mut start = self.origin;
        let mut run: Vec<_> = (0..self.config.count)
            .map(|_| {
                let span = self.rng.gen_range(1..=self.config.max_span_secs.max(1));
                let end = start + TimeDelta::seconds(span);
                let p = Period::new(start, end).unwrap_or_else(|err| panic!("{err}"));
                start = end;
                p
            })
            .collect();

        run.shuffle(&mut self.rng);
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_is_deterministic() {
        let first = PeriodGenerator::new(GeneratorConfig::light()).periods();
        let second = PeriodGenerator::new(GeneratorConfig::light()).periods();
        assert_eq!(first, second);
        assert_eq!(first.len(), 10);
    }

    #[test]
    fn test_contiguous_joins() {
        let run = PeriodGenerator::new(GeneratorConfig::light()).contiguous();
        assert!(period_core::join_all(&run).is_some());
    }
}
