//! Test data generators for natural breaks classification
//!
//! Seeded fixtures shared by unit tests, integration tests and benchmarks so
//! results stay reproducible across runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, LogNormal, Normal, Uniform};

/// Standard datasets for classification testing
pub struct TestDatasets;

impl TestDatasets {
    /// Three well separated clusters rounded to one decimal place
    ///
    /// Returns 300 samples: 100 each from N(10, 1), N(50, 2) and N(90, 1).
    /// Rounding produces plenty of repeated values.
    pub fn three_clusters() -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(42);
        let mut data = Vec::with_capacity(300);
        for (mean, sd) in [(10.0, 1.0), (50.0, 2.0), (90.0, 1.0)] {
            let normal = Normal::new(mean, sd).unwrap();
            data.extend((0..100).map(|_| round_to(normal.sample(&mut rng), 1)));
        }
        data
    }

    /// Right-skewed rates, the typical input for a choropleth legend
    ///
    /// Returns 500 samples from LogNormal(1, 0.75) rounded to two decimals.
    pub fn skewed_rates() -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(7);
        let lognormal = LogNormal::new(1.0, 0.75).unwrap();
        (0..500)
            .map(|_| round_to(lognormal.sample(&mut rng), 2))
            .collect()
    }

    /// Small integer counts with long runs of equal values
    ///
    /// Returns 200 samples drawn uniformly from 0..=12.
    pub fn heavy_duplicates() -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(1234);
        (0..200).map(|_| f64::from(rng.gen_range(0u32..=12))).collect()
    }

    /// Evenly spread continuous values without repeats
    ///
    /// Returns `n` samples from U(0, 1000).
    pub fn uniform(n: usize) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(99);
        let uniform = Uniform::new(0.0, 1000.0);
        (0..n).map(|_| uniform.sample(&mut rng)).collect()
    }

    /// A tight cluster plus one far outlier
    pub fn with_outlier() -> Vec<f64> {
        let mut data: Vec<f64> = (1..=20).map(f64::from).collect();
        data.push(1000.0);
        data
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_reproducible() {
        assert_eq!(TestDatasets::three_clusters(), TestDatasets::three_clusters());
        assert_eq!(TestDatasets::skewed_rates(), TestDatasets::skewed_rates());
        assert_eq!(TestDatasets::uniform(50), TestDatasets::uniform(50));
    }

    #[test]
    fn test_fixture_shapes() {
        assert_eq!(TestDatasets::three_clusters().len(), 300);
        assert_eq!(TestDatasets::skewed_rates().len(), 500);
        let counts = TestDatasets::heavy_duplicates();
        assert_eq!(counts.len(), 200);
        assert!(counts.iter().all(|&v| (0.0..=12.0).contains(&v)));
        assert!(TestDatasets::skewed_rates().iter().all(|&v| v >= 0.0));
    }
}
