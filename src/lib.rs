//! PAM Capacity - MI and BICM GMI of PAM over AWGN
//!
//! Evaluates the information rate of a fixed real-valued constellation, bit
//! labeling and symbol prior at one noise level. The noise expectation is
//! integrated with a fixed 10-point Gauss-Hermite rule. All evaluators are
//! pure functions; preconditions (power-of-two order, normalized prior,
//! s > 0) are checked and reported as `CapacityError`.

pub mod bits;
pub mod constellation;
pub mod error;
pub mod link;
pub mod metrics;
pub mod monte_carlo;
pub mod nif;
pub mod noise;
pub mod quadrature;
mod utils;

// Re-export core types for convenience
pub use bits::{insert_zero, label_subset};
pub use constellation::{symbol_energy, Labeling, PamConstellation};
pub use error::{CapacityError, CapacityResult};
pub use link::{evaluate, noise_scale, snr_db, LinkParams, LinkReport};
pub use metrics::{eval_gmi, eval_mi, gmi_per_bit};
pub use monte_carlo::MonteCarloEstimator;
pub use quadrature::GaussHermite;

rustler::init!("Elixir.PamCapacity.Nif");
