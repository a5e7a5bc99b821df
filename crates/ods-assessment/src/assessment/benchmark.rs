//! Simulated sector averages shown next to each dimension score.
//!
//! The figure is sample data for the report, not a statistical model. It is
//! kept behind [`BenchmarkSource`] so scoring stays reproducible under test.

use super::domain::DimensionId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

pub const SIMULATED_RANGE: RangeInclusive<u8> = 35..=75;

pub trait BenchmarkSource {
    fn sector_average(&mut self, dimension: DimensionId) -> u8;
}

/// Draws uniformly from [`SIMULATED_RANGE`].
#[derive(Debug, Clone)]
pub struct SimulatedBenchmark {
    rng: StdRng,
}

impl SimulatedBenchmark {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl BenchmarkSource for SimulatedBenchmark {
    fn sector_average(&mut self, _dimension: DimensionId) -> u8 {
        self.rng.gen_range(SIMULATED_RANGE)
    }
}

/// Returns the same figure for every dimension.
#[derive(Debug, Clone, Copy)]
pub struct FixedBenchmark(pub u8);

impl BenchmarkSource for FixedBenchmark {
    fn sector_average(&mut self, _dimension: DimensionId) -> u8 {
        self.0.min(100)
    }
}
