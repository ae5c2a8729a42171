//! BICM generalized mutual information for equiprobable PAM
//!
//! For every label bit k and bit value b, each point `bi` of the subset
//! {i : bit k of i = b} is integrated against the noise:
//!
//!   loss_k = 1/(M·√π) Σ_b Σ_bi Σ_l w_l · log2( Σ_j K(C_bi - C_j) / Σ_bj K(C_bi - C_bj) )
//!
//! with j over all M points and bj over the same subset as bi. Then
//! GMI = m - Σ_k loss_k. The denominator contains bj = bi, so it is ≥ 1.

use std::f64::consts::PI;

use super::kernel;
use crate::bits::{bits_per_symbol, label_subset};
use crate::constellation::validate_amplitudes;
use crate::error::{check_noise_scale, CapacityResult};
use crate::quadrature::GaussHermite;

/// BICM GMI in bits/symbol
///
/// The prior is fixed at 1/M per symbol.
///
/// # Arguments
/// * `amplitudes` - Constellation, index = bit label, power-of-two length
/// * `s` - AWGN standard deviation, s > 0
pub fn eval_gmi(amplitudes: &[f64], s: f64) -> CapacityResult<f64> {
    validate_amplitudes(amplitudes)?;
    check_noise_scale(s)?;

    Ok(gmi_unchecked(amplitudes, s))
}

/// Per-bit contributions 1 - loss_k, one entry per label bit; they sum to the GMI
pub fn gmi_per_bit(amplitudes: &[f64], s: f64) -> CapacityResult<Vec<f64>> {
    validate_amplitudes(amplitudes)?;
    check_noise_scale(s)?;

    let m = bits_per_symbol(amplitudes.len());
    Ok((0..m).map(|k| 1.0 - bit_loss(amplitudes, s, k, m)).collect())
}

pub(crate) fn gmi_unchecked(amplitudes: &[f64], s: f64) -> f64 {
    let m = bits_per_symbol(amplitudes.len());
    let mut gmi = m as f64;

    for k in 0..m {
        let loss = bit_loss(amplitudes, s, k, m);
        tracing::trace!("bit {}: loss {:.6}", k, loss);
        gmi -= loss;
    }

    tracing::debug!("GMI for {}-PAM at s={:.6}: {:.6} bits", amplitudes.len(), s, gmi);
    gmi
}

/// Information lost on label bit `k` by decoding it independently
fn bit_loss(amplitudes: &[f64], s: f64, k: u32, m: u32) -> f64 {
    let gh = GaussHermite;
    let norm = amplitudes.len() as f64 * PI.sqrt();
    let mut loss = 0.0;

    for b in 0..=1usize {
        for bi in label_subset(k, b, m) {
            let ci = amplitudes[bi];

            for (x, w) in gh.points() {
                let num: f64 = amplitudes.iter().map(|&cj| kernel(ci - cj, x, s)).sum();
                let den: f64 = label_subset(k, b, m)
                    .map(|bj| kernel(ci - amplitudes[bj], x, s))
                    .sum();

                loss += w * (num / den).log2() / norm;
            }
        }
    }

    loss
}
