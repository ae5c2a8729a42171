//! NIF interface for Elixir
//!
//! Thin wrappers over the pure evaluators. Precondition failures come back
//! as `{:error, code}` where `code` is `CapacityError::code()`.

use rustler::{Atom, NifResult};

use crate::constellation::{self, Labeling, PamConstellation};
use crate::error::CapacityError;
use crate::link::{self, LinkParams, LinkReport};
use crate::metrics;
use crate::monte_carlo::MonteCarloEstimator;

rustler::atoms! {
    natural,
    gray,
}

fn to_nif_error(err: CapacityError) -> rustler::Error {
    rustler::Error::Term(Box::new(err.code()))
}

fn atom_to_labeling(atom: Atom) -> Result<Labeling, &'static str> {
    if atom == natural() {
        Ok(Labeling::Natural)
    } else if atom == gray() {
        Ok(Labeling::Gray)
    } else {
        Err("unsupported labeling")
    }
}

// ============================================================================
// Core operations
// ============================================================================

/// E[C²] under the prior
#[rustler::nif]
pub fn symbol_energy(amplitudes: Vec<f64>, prior: Vec<f64>) -> NifResult<f64> {
    constellation::symbol_energy(&amplitudes, &prior).map_err(to_nif_error)
}

/// AWGN standard deviation from energy and SNR (dB)
#[rustler::nif]
pub fn noise_scale(energy: f64, snr_db: f64) -> NifResult<f64> {
    link::noise_scale(energy, snr_db).map_err(to_nif_error)
}

/// Mutual information in bits/symbol
#[rustler::nif]
pub fn eval_mi(amplitudes: Vec<f64>, s: f64, prior: Vec<f64>) -> NifResult<f64> {
    metrics::eval_mi(&amplitudes, s, &prior).map_err(to_nif_error)
}

/// BICM GMI in bits/symbol (equiprobable)
#[rustler::nif]
pub fn eval_gmi(amplitudes: Vec<f64>, s: f64) -> NifResult<f64> {
    metrics::eval_gmi(&amplitudes, s).map_err(to_nif_error)
}

/// Per-bit GMI contributions
#[rustler::nif]
pub fn gmi_per_bit(amplitudes: Vec<f64>, s: f64) -> NifResult<Vec<f64>> {
    metrics::gmi_per_bit(&amplitudes, s).map_err(to_nif_error)
}

/// Full evaluation of one LinkParams struct
#[rustler::nif]
pub fn evaluate(params: LinkParams) -> NifResult<LinkReport> {
    link::evaluate(&params).map_err(to_nif_error)
}

// ============================================================================
// Presets and sampled estimates
// ============================================================================

/// Equally spaced M-PAM amplitudes for `:natural` or `:gray` labeling
#[rustler::nif]
pub fn pam_preset(order: u64, labeling: Atom) -> NifResult<Vec<f64>> {
    let labeling = atom_to_labeling(labeling).map_err(|e| rustler::Error::Term(Box::new(e)))?;
    let order = usize::try_from(order).unwrap_or(usize::MAX);
    let pam = PamConstellation::with_labeling(order, labeling).map_err(to_nif_error)?;
    Ok(pam.amplitudes().to_vec())
}

/// Sampled mutual information
#[rustler::nif(schedule = "DirtyCpu")]
pub fn estimate_mi(
    amplitudes: Vec<f64>,
    prior: Vec<f64>,
    s: f64,
    samples: u64,
    seed: u64,
) -> NifResult<f64> {
    let pam = PamConstellation::new(amplitudes, prior).map_err(to_nif_error)?;
    MonteCarloEstimator::new(samples as usize, seed)
        .and_then(|est| est.estimate_mi(&pam, s))
        .map_err(to_nif_error)
}

/// Sampled BICM GMI
#[rustler::nif(schedule = "DirtyCpu")]
pub fn estimate_gmi(amplitudes: Vec<f64>, s: f64, samples: u64, seed: u64) -> NifResult<f64> {
    let pam = PamConstellation::uniform(amplitudes).map_err(to_nif_error)?;
    MonteCarloEstimator::new(samples as usize, seed)
        .and_then(|est| est.estimate_gmi(&pam, s))
        .map_err(to_nif_error)
}
