//! 10-point Gauss-Hermite quadrature
//!
//! Approximates ∫ f(x)·e^{-x²} dx ≈ Σ w_l·f(x_l). Nodes are the roots of the
//! Hermite polynomial H₁₀, symmetric about zero; weights sum to √π.
//!
//! A Gaussian expectation E[g(n)] with n ~ N(0, s²) becomes, after the change
//! of variables n = √2·s·x:
//!
//!   E[g(n)] = (1/√π) Σ w_l·g(√2·s·x_l)

/// Number of quadrature nodes
pub const GH_ORDER: usize = 10;

/// Hermite H₁₀ roots, ascending
pub const GH_NODES: [f64; GH_ORDER] = [
    -3.436159118837737603327,
    -2.532731674232789796409,
    -1.756683649299881773451,
    -1.036610829789513654178,
    -0.3429013272237046087892,
    0.3429013272237046087892,
    1.036610829789513654178,
    1.756683649299881773451,
    2.532731674232789796409,
    3.436159118837737603327,
];

/// Weights aligned with `GH_NODES`
pub const GH_WEIGHTS: [f64; GH_ORDER] = [
    7.64043285523262062916e-6,
    0.001343645746781232692202,
    0.0338743944554810631362,
    0.2401386110823146864165,
    0.6108626337353257987836,
    0.6108626337353257987836,
    0.2401386110823146864165,
    0.03387439445548106313617,
    0.001343645746781232692202,
    7.64043285523262062916e-6,
];

/// Stateless handle over the fixed node/weight table
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussHermite;

impl GaussHermite {
    /// Iterate (node, weight) pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> {
        GH_NODES.into_iter().zip(GH_WEIGHTS)
    }

    /// Σ w_l·f(x_l), i.e. ∫ f(x)·e^{-x²} dx
    pub fn integrate<F>(&self, mut f: F) -> f64
    where
        F: FnMut(f64) -> f64,
    {
        self.points().map(|(x, w)| w * f(x)).sum()
    }

    /// E[g(n)] for n ~ N(0, s²)
    pub fn gaussian_expectation<F>(&self, s: f64, mut g: F) -> f64
    where
        F: FnMut(f64) -> f64,
    {
        let scale = std::f64::consts::SQRT_2 * s;
        self.integrate(|x| g(scale * x)) / std::f64::consts::PI.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_weights_sum_to_sqrt_pi() {
        let sum: f64 = GH_WEIGHTS.iter().sum();
        assert!((sum - PI.sqrt()).abs() < 1e-12, "weight sum {}", sum);
    }

    #[test]
    fn test_table_symmetric() {
        for l in 0..GH_ORDER {
            let mirror = GH_ORDER - 1 - l;
            assert!((GH_NODES[l] + GH_NODES[mirror]).abs() < 1e-15, "node {} not mirrored", l);
            assert!((GH_WEIGHTS[l] - GH_WEIGHTS[mirror]).abs() < 1e-15, "weight {} not mirrored", l);
        }
    }

    #[test]
    fn test_nodes_ascending() {
        for pair in GH_NODES.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_polynomial_moments_exact() {
        let gh = GaussHermite;

        // ∫ x² e^{-x²} = √π/2, ∫ x⁴ e^{-x²} = 3√π/4, odd moments vanish
        let m2 = gh.integrate(|x| x * x);
        let m4 = gh.integrate(|x| x.powi(4));
        let m3 = gh.integrate(|x| x.powi(3));

        assert!((m2 - PI.sqrt() / 2.0).abs() < 1e-12, "m2 = {}", m2);
        assert!((m4 - 3.0 * PI.sqrt() / 4.0).abs() < 1e-12, "m4 = {}", m4);
        assert!(m3.abs() < 1e-12, "m3 = {}", m3);
    }

    #[test]
    fn test_gaussian_expectation_variance() {
        let gh = GaussHermite;
        for &s in &[0.1, 1.0, 3.5] {
            let var = gh.gaussian_expectation(s, |n| n * n);
            assert!((var - s * s).abs() < 1e-10, "s={} variance {}", s, var);
        }
    }
}
