//! PAM constellation with symbol prior
//!
//! Amplitudes are indexed by bit label: index `i` carries the m-bit label
//! whose binary value is `i`. The ordering of the amplitude vector therefore
//! fixes the bit mapping (natural, Gray or anything else the caller supplies).

use std::fmt;
use std::str::FromStr;

use crate::bits::bits_per_symbol;
use crate::error::{CapacityError, CapacityResult};

/// Allowed deviation of Σ Pk from 1
pub const PRIOR_SUM_TOLERANCE: f64 = 1e-9;

/// Largest order the equally spaced presets will allocate
pub const MAX_PRESET_ORDER: usize = 1 << 16;

/// Bit mapping used by the equally spaced presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Labeling {
    /// Label equals amplitude rank
    Natural,
    /// Binary-reflected Gray code over amplitude rank
    #[default]
    Gray,
}

impl FromStr for Labeling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "natural" | "binary" => Ok(Labeling::Natural),
            "gray" | "grey" => Ok(Labeling::Gray),
            other => Err(format!("unknown labeling '{}'", other)),
        }
    }
}

impl fmt::Display for Labeling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Labeling::Natural => write!(f, "natural"),
            Labeling::Gray => write!(f, "gray"),
        }
    }
}

/// Validated PAM constellation and its symbol prior
#[derive(Debug, Clone, PartialEq)]
pub struct PamConstellation {
    amplitudes: Vec<f64>,
    prior: Vec<f64>,
}

impl PamConstellation {
    /// Build from explicit amplitudes and prior
    pub fn new(amplitudes: Vec<f64>, prior: Vec<f64>) -> CapacityResult<Self> {
        validate_amplitudes(&amplitudes)?;
        validate_prior(&prior, amplitudes.len())?;
        Ok(Self { amplitudes, prior })
    }

    /// Build with an equiprobable prior
    pub fn uniform(amplitudes: Vec<f64>) -> CapacityResult<Self> {
        validate_amplitudes(&amplitudes)?;
        let p = 1.0 / amplitudes.len() as f64;
        let prior = vec![p; amplitudes.len()];
        Ok(Self { amplitudes, prior })
    }

    /// Equally spaced M-PAM {-(M-1), ..., -1, 1, ..., M-1}, uniform prior
    ///
    /// For M = 4, `Labeling::Gray` gives {-3, -1, 3, 1} and
    /// `Labeling::Natural` gives {-3, -1, 1, 3}.
    ///
    /// Orders above [`MAX_PRESET_ORDER`] are rejected before allocating.
    pub fn with_labeling(order: usize, labeling: Labeling) -> CapacityResult<Self> {
        check_order(order)?;
        if order > MAX_PRESET_ORDER {
            return Err(CapacityError::OrderTooLarge {
                order,
                max: MAX_PRESET_ORDER,
            });
        }

        let mut amplitudes = vec![0.0; order];
        for rank in 0..order {
            let level = 2.0 * rank as f64 - (order - 1) as f64;
            let label = match labeling {
                Labeling::Natural => rank,
                Labeling::Gray => rank ^ (rank >> 1),
            };
            amplitudes[label] = level;
        }

        Self::uniform(amplitudes)
    }

    /// Number of points M
    pub fn order(&self) -> usize {
        self.amplitudes.len()
    }

    /// Label width m = log2(M)
    pub fn bits_per_symbol(&self) -> u32 {
        bits_per_symbol(self.order())
    }

    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    pub fn prior(&self) -> &[f64] {
        &self.prior
    }

    /// True when every symbol has probability 1/M
    pub fn is_equiprobable(&self) -> bool {
        let p = 1.0 / self.order() as f64;
        self.prior.iter().all(|&pk| (pk - p).abs() < PRIOR_SUM_TOLERANCE)
    }

    /// Es = Σ Pk[i]·C[i]²
    pub fn symbol_energy(&self) -> f64 {
        energy(&self.amplitudes, &self.prior)
    }

    /// Copy scaled to unit symbol energy
    ///
    /// An all-zero constellation has no scale to normalize and is returned as is.
    pub fn normalized(&self) -> Self {
        let es = self.symbol_energy();
        if es <= 0.0 {
            tracing::warn!("cannot normalize constellation with zero symbol energy");
            return self.clone();
        }
        let gain = 1.0 / es.sqrt();
        Self {
            amplitudes: self.amplitudes.iter().map(|c| c * gain).collect(),
            prior: self.prior.clone(),
        }
    }
}

impl Default for PamConstellation {
    /// 4-PAM {-3, -1, 3, 1}, uniform prior
    fn default() -> Self {
        Self {
            amplitudes: vec![-3.0, -1.0, 3.0, 1.0],
            prior: vec![0.25; 4],
        }
    }
}

/// Average symbol energy E[C²] under the prior
///
/// Only the shapes are checked: the prior is not required to be normalized.
pub fn symbol_energy(amplitudes: &[f64], prior: &[f64]) -> CapacityResult<f64> {
    if amplitudes.is_empty() {
        return Err(CapacityError::EmptyConstellation);
    }
    if amplitudes.len() != prior.len() {
        return Err(CapacityError::LengthMismatch {
            amplitudes: amplitudes.len(),
            prior: prior.len(),
        });
    }
    Ok(energy(amplitudes, prior))
}

#[inline]
fn energy(amplitudes: &[f64], prior: &[f64]) -> f64 {
    amplitudes
        .iter()
        .zip(prior)
        .map(|(c, pk)| pk * c * c)
        .sum()
}

pub(crate) fn check_order(order: usize) -> CapacityResult<()> {
    if order == 0 {
        return Err(CapacityError::EmptyConstellation);
    }
    if order < 2 || !order.is_power_of_two() {
        return Err(CapacityError::OrderNotPowerOfTwo(order));
    }
    Ok(())
}

/// Power-of-two order and finite amplitudes
pub(crate) fn validate_amplitudes(amplitudes: &[f64]) -> CapacityResult<()> {
    check_order(amplitudes.len())?;
    match amplitudes.iter().position(|c| !c.is_finite()) {
        Some(index) => Err(CapacityError::NonFiniteAmplitude { index }),
        None => Ok(()),
    }
}

/// Aligned length, non-negative entries, unit sum
pub(crate) fn validate_prior(prior: &[f64], order: usize) -> CapacityResult<()> {
    if prior.len() != order {
        return Err(CapacityError::LengthMismatch {
            amplitudes: order,
            prior: prior.len(),
        });
    }
    for (index, &value) in prior.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(CapacityError::InvalidProbability { index, value });
        }
    }
    let sum: f64 = prior.iter().sum();
    if (sum - 1.0).abs() > PRIOR_SUM_TOLERANCE {
        return Err(CapacityError::PriorNotNormalized { sum });
    }
    Ok(())
}
