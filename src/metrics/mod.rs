//! Information-rate metrics for PAM over AWGN
//!
//! Both evaluators integrate the Gaussian noise out with the fixed 10-point
//! Gauss-Hermite table. For a transmitted amplitude `a`, a competing amplitude
//! `b` and quadrature node `x`, the received sample is `a + √2·s·x` and the
//! likelihood ratio p(y|b)/p(y|a) reduces to
//!
//!   exp(-((b-a)² - √8·x·s·(b-a)) / (2s²))
//!
//! which is what [`kernel`] computes with `d = b - a`. MI passes `C_j - C_i`
//! in that orientation. GMI passes `C_bi - C_j`, which is the same ratio at
//! node `-x`; the node table is symmetric, so the sums agree.

mod gmi;
mod mi;


pub use gmi::{eval_gmi, gmi_per_bit};
pub use mi::eval_mi;

use crate::constellation::PamConstellation;
use crate::error::{check_noise_scale, CapacityResult};

/// √8
const SQRT_8: f64 = 2.0 * std::f64::consts::SQRT_2;

/// Quadrature likelihood-ratio kernel for amplitude difference `d`
#[inline]
pub(crate) fn kernel(d: f64, x: f64, s: f64) -> f64 {
    (-(d * d - SQRT_8 * x * s * d) / (2.0 * s * s)).exp()
}

impl PamConstellation {
    /// Mutual information in bits/symbol under this constellation's prior
    pub fn mutual_information(&self, s: f64) -> CapacityResult<f64> {
        check_noise_scale(s)?;
        Ok(mi::mi_unchecked(self.amplitudes(), s, self.prior()))
    }

    /// BICM GMI in bits/symbol, equiprobable signalling
    ///
    /// The constellation's own prior is ignored.
    pub fn generalized_mutual_information(&self, s: f64) -> CapacityResult<f64> {
        check_noise_scale(s)?;
        Ok(gmi::gmi_unchecked(self.amplitudes(), s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_self_term_is_one() {
        for &x in &crate::quadrature::GH_NODES {
            assert_eq!(kernel(0.0, x, 0.7), 1.0);
        }
    }

    #[test]
    fn test_kernel_matches_likelihood_ratio() {
        // p(y|b)/p(y|a) with y = a + √2·s·x
        let (a, b, s, x) = (1.0, -3.0, 0.8, 0.9);
        let y = a + std::f64::consts::SQRT_2 * s * x;
        let pdf = |c: f64| (-(y - c) * (y - c) / (2.0 * s * s)).exp();
        let ratio = pdf(b) / pdf(a);
        let k = kernel(b - a, x, s);
        assert!((k - ratio).abs() < 1e-9 * ratio, "kernel {} vs ratio {}", k, ratio);
    }

    #[test]
    fn test_kernel_reversed_difference_is_mirrored_node() {
        let (a, b, s) = (1.0, -3.0, 0.8);
        for &x in &crate::quadrature::GH_NODES {
            let mirrored = kernel(b - a, -x, s);
            let reversed = kernel(a - b, x, s);
            assert!((mirrored - reversed).abs() <= 1e-12 * reversed.max(1.0), "x={}", x);
        }
    }

    #[test]
    fn test_methods_reject_bad_noise_scale() {
        let pam = PamConstellation::default();
        assert!(pam.mutual_information(0.0).is_err());
        assert!(pam.generalized_mutual_information(-1.0).is_err());
    }
}
