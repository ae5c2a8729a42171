//! Single-SNR link evaluation
//!
//! Derives the AWGN standard deviation from the symbol energy and a target
//! SNR, then runs both metrics:
//!
//!   s = √Es · 10^(-SNR_dB/20)

use rustler::NifStruct;

use crate::constellation::PamConstellation;
use crate::error::{check_noise_scale, CapacityError, CapacityResult};
use crate::metrics;
use crate::utils::{db_to_amplitude, power_to_db};

/// SNR used when the caller does not pick one
pub const DEFAULT_SNR_DB: f64 = 10.0;

/// Link parameters from Elixir
#[derive(NifStruct, Debug, Clone, PartialEq)]
#[module = "PamCapacity.Types.LinkParams"]
pub struct LinkParams {
    pub amplitudes: Vec<f64>,
    pub prior: Vec<f64>,
    pub snr_db: f64,
}

impl Default for LinkParams {
    /// 4-PAM {-3, -1, 3, 1}, uniform prior, 10 dB
    fn default() -> Self {
        let pam = PamConstellation::default();
        Self {
            amplitudes: pam.amplitudes().to_vec(),
            prior: pam.prior().to_vec(),
            snr_db: DEFAULT_SNR_DB,
        }
    }
}

impl LinkParams {
    pub fn from_constellation(pam: &PamConstellation, snr_db: f64) -> Self {
        Self {
            amplitudes: pam.amplitudes().to_vec(),
            prior: pam.prior().to_vec(),
            snr_db,
        }
    }

    /// Validate into a constellation
    pub fn constellation(&self) -> CapacityResult<PamConstellation> {
        PamConstellation::new(self.amplitudes.clone(), self.prior.clone())
    }
}

/// Evaluation result for one SNR point
#[derive(NifStruct, Debug, Clone, PartialEq)]
#[module = "PamCapacity.Types.LinkReport"]
pub struct LinkReport {
    pub symbol_energy: f64,
    pub noise_scale: f64,
    pub mi: f64,
    pub gmi: f64,
}

/// AWGN standard deviation for symbol energy `es` at `snr_db`
pub fn noise_scale(es: f64, snr_db: f64) -> CapacityResult<f64> {
    if !es.is_finite() || es < 0.0 {
        return Err(CapacityError::InvalidEnergy(es));
    }
    if !snr_db.is_finite() {
        return Err(CapacityError::InvalidSnr(snr_db));
    }
    if es == 0.0 {
        tracing::warn!("zero symbol energy gives a zero noise scale");
    }
    Ok(es.sqrt() * db_to_amplitude(-snr_db))
}

/// SNR in dB realised by noise scale `s` on symbol energy `es`
pub fn snr_db(es: f64, s: f64) -> CapacityResult<f64> {
    if !es.is_finite() || es <= 0.0 {
        return Err(CapacityError::InvalidEnergy(es));
    }
    check_noise_scale(s)?;
    Ok(power_to_db(es / (s * s)))
}

/// Energy, noise scale, MI and GMI for one parameter set
pub fn evaluate(params: &LinkParams) -> CapacityResult<LinkReport> {
    let pam = params.constellation()?;
    let symbol_energy = pam.symbol_energy();
    let noise_scale = noise_scale(symbol_energy, params.snr_db)?;

    if !pam.is_equiprobable() {
        tracing::warn!("GMI assumes equiprobable symbols; the supplied prior is ignored for it");
    }

    let mi = metrics::eval_mi(pam.amplitudes(), noise_scale, pam.prior())?;
    let gmi = metrics::eval_gmi(pam.amplitudes(), noise_scale)?;

    tracing::info!(
        "{}-PAM at {} dB: Es={:.6} s={:.6} MI={:.6} GMI={:.6}",
        pam.order(),
        params.snr_db,
        symbol_energy,
        noise_scale,
        mi,
        gmi
    );

    Ok(LinkReport {
        symbol_energy,
        noise_scale,
        mi,
        gmi,
    })
}
