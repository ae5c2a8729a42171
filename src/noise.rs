//! Additive White Gaussian Noise sampler
//!
//! Uses Box-Muller transform for Gaussian samples.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

/// AWGN generator with a fixed standard deviation
pub struct NoiseGenerator {
    /// Standard deviation s
    std_dev: f64,

    /// Internal RNG
    rng: ChaCha8Rng,

    /// Cached second sample from Box-Muller
    cached: Option<f64>,
}

impl NoiseGenerator {
    /// Derive an independent generator from `seed_rng`
    pub fn new(std_dev: f64, seed_rng: &mut ChaCha8Rng) -> Self {
        let seed: u64 = seed_rng.gen();
        Self::from_seed(std_dev, seed)
    }

    pub fn from_seed(std_dev: f64, seed: u64) -> Self {
        Self {
            std_dev,
            rng: ChaCha8Rng::seed_from_u64(seed),
            cached: None,
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Next N(0, s²) sample
    pub fn next_sample(&mut self) -> f64 {
        if let Some(cached) = self.cached.take() {
            return cached * self.std_dev;
        }

        let u1: f64 = self.rng.gen();
        let u2: f64 = self.rng.gen();

        // Avoid log(0)
        let u1 = u1.max(1e-300);

        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;

        self.cached = Some(r * theta.sin());

        r * theta.cos() * self.std_dev
    }
}
