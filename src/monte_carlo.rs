//! Sampled MI / GMI estimators
//!
//! Draws (symbol, noise) pairs and averages the same log-likelihood terms the
//! quadrature evaluators integrate. Used to cross-check the 10-point
//! Gauss-Hermite results; accuracy improves as 1/√N.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::SQRT_2;

use crate::bits::label_subset;
use crate::constellation::PamConstellation;
use crate::error::{check_noise_scale, CapacityError, CapacityResult};
use crate::metrics::kernel;
use crate::noise::NoiseGenerator;

/// Seeded Monte Carlo estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonteCarloEstimator {
    samples: usize,
    seed: u64,
}

impl MonteCarloEstimator {
    pub fn new(samples: usize, seed: u64) -> CapacityResult<Self> {
        if samples == 0 {
            return Err(CapacityError::InvalidSampleCount);
        }
        Ok(Self { samples, seed })
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sampled mutual information, symbols drawn from the constellation's prior
    pub fn estimate_mi(&self, pam: &PamConstellation, s: f64) -> CapacityResult<f64> {
        check_noise_scale(s)?;

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut noise = NoiseGenerator::new(s, &mut rng);
        let amplitudes = pam.amplitudes();
        let prior = pam.prior();

        let mut acc = 0.0;
        for _ in 0..self.samples {
            let i = draw_index(prior, rng.gen());
            let x = noise.next_sample() / (SQRT_2 * s);
            let ci = amplitudes[i];

            let sum: f64 = amplitudes
                .iter()
                .zip(prior)
                .map(|(&cj, &pj)| pj * kernel(cj - ci, x, s))
                .sum();
            acc -= sum.log2();
        }

        let mi = acc / self.samples as f64;
        tracing::debug!(
            "sampled MI for {}-PAM at s={:.6} over {} draws: {:.6} bits",
            amplitudes.len(),
            s,
            self.samples,
            mi
        );
        Ok(mi)
    }

    /// Sampled BICM GMI, symbols drawn uniformly
    pub fn estimate_gmi(&self, pam: &PamConstellation, s: f64) -> CapacityResult<f64> {
        check_noise_scale(s)?;

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut noise = NoiseGenerator::new(s, &mut rng);
        let amplitudes = pam.amplitudes();
        let order = pam.order();
        let m = pam.bits_per_symbol();

        let mut loss = 0.0;
        for _ in 0..self.samples {
            let i = rng.gen_range(0..order);
            let x = noise.next_sample() / (SQRT_2 * s);
            let ci = amplitudes[i];

            let num: f64 = amplitudes.iter().map(|&cj| kernel(cj - ci, x, s)).sum();
            for k in 0..m {
                let b = (i >> k) & 1;
                let den: f64 = label_subset(k, b, m)
                    .map(|bj| kernel(amplitudes[bj] - ci, x, s))
                    .sum();
                loss += (num / den).log2();
            }
        }

        let gmi = m as f64 - loss / self.samples as f64;
        tracing::debug!(
            "sampled GMI for {}-PAM at s={:.6} over {} draws: {:.6} bits",
            order,
            s,
            self.samples,
            gmi
        );
        Ok(gmi)
    }
}

/// Inverse-CDF draw; never lands on a zero-probability index
fn draw_index(prior: &[f64], u: f64) -> usize {
    let mut cumulative = 0.0;
    let mut last_nonzero = 0;
    for (i, &p) in prior.iter().enumerate() {
        if p > 0.0 {
            cumulative += p;
            last_nonzero = i;
            if u < cumulative {
                return i;
            }
        }
    }
    last_nonzero
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{eval_gmi, eval_mi};

    const SAMPLES: usize = 20_000;

    #[test]
    fn test_rejects_zero_samples() {
        assert_eq!(MonteCarloEstimator::new(0, 1), Err(CapacityError::InvalidSampleCount));
    }

    #[test]
    fn test_draw_index() {
        let prior = [0.25, 0.0, 0.5, 0.25];
        assert_eq!(draw_index(&prior, 0.0), 0);
        assert_eq!(draw_index(&prior, 0.3), 2);
        assert_eq!(draw_index(&prior, 0.8), 3);
        // Rounding at the top end falls back to the last live symbol
        assert_eq!(draw_index(&[0.5, 0.5, 0.0, 0.0], 0.999_999_999_999), 1);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let pam = PamConstellation::default();
        let est = MonteCarloEstimator::new(2_000, 99).unwrap();
        assert_eq!(est.estimate_mi(&pam, 0.8).unwrap(), est.estimate_mi(&pam, 0.8).unwrap());
        assert_eq!(est.estimate_gmi(&pam, 0.8).unwrap(), est.estimate_gmi(&pam, 0.8).unwrap());
    }

    #[test]
    fn test_agrees_with_quadrature() {
        let pam = PamConstellation::default();
        let est = MonteCarloEstimator::new(SAMPLES, 2024).unwrap();

        // 0 dB and 10 dB for Es = 5
        for &s in &[5.0_f64.sqrt(), 0.5_f64.sqrt()] {
            let mi = eval_mi(pam.amplitudes(), s, pam.prior()).unwrap();
            let gmi = eval_gmi(pam.amplitudes(), s).unwrap();
            let mi_mc = est.estimate_mi(&pam, s).unwrap();
            let gmi_mc = est.estimate_gmi(&pam, s).unwrap();

            assert!((mi - mi_mc).abs() < 0.03, "s={} MI {} vs sampled {}", s, mi, mi_mc);
            assert!((gmi - gmi_mc).abs() < 0.03, "s={} GMI {} vs sampled {}", s, gmi, gmi_mc);
        }
    }

    #[test]
    fn test_rejects_bad_noise_scale() {
        let pam = PamConstellation::default();
        let est = MonteCarloEstimator::new(10, 0).unwrap();
        assert!(est.estimate_mi(&pam, 0.0).is_err());
        assert!(est.estimate_gmi(&pam, -0.1).is_err());
    }
}
