//! AWGN mutual information of a PAM constellation
//!
//!   MI = -(1/√π) Σ_i Pk[i] Σ_l w_l · log2( Σ_j Pk[j] · K(C_j - C_i, x_l) )
//!
//! where K is the quadrature likelihood-ratio kernel. The inner sum always
//! contains the j = i term K(0) = 1, so the logarithm is finite for s > 0.

use std::f64::consts::PI;

use super::kernel;
use crate::constellation::{validate_amplitudes, validate_prior};
use crate::error::{check_noise_scale, CapacityResult};
use crate::quadrature::GaussHermite;

/// Mutual information in bits/symbol
///
/// # Arguments
/// * `amplitudes` - Constellation, index = bit label, power-of-two length
/// * `s` - AWGN standard deviation, s > 0
/// * `prior` - Symbol probabilities aligned with `amplitudes`, summing to 1
pub fn eval_mi(amplitudes: &[f64], s: f64, prior: &[f64]) -> CapacityResult<f64> {
    validate_amplitudes(amplitudes)?;
    validate_prior(prior, amplitudes.len())?;
    check_noise_scale(s)?;

    Ok(mi_unchecked(amplitudes, s, prior))
}

pub(crate) fn mi_unchecked(amplitudes: &[f64], s: f64, prior: &[f64]) -> f64 {
    let gh = GaussHermite;
    let mut mi = 0.0;

    for (&ci, &pi) in amplitudes.iter().zip(prior) {
        // Never transmitted; its inner sum may underflow to zero
        if pi == 0.0 {
            continue;
        }

        for (x, w) in gh.points() {
            let sum: f64 = amplitudes
                .iter()
                .zip(prior)
                .map(|(&cj, &pj)| pj * kernel(cj - ci, x, s))
                .sum();

            mi -= pi * w * sum.log2();
        }
    }

    let mi = mi / PI.sqrt();
    tracing::debug!("MI for {}-PAM at s={:.6}: {:.6} bits", amplitudes.len(), s, mi);
    mi
}
