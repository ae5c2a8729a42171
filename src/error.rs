//! Capacity evaluation error types

use thiserror::Error;

/// Result type for capacity evaluation
pub type CapacityResult<T> = Result<T, CapacityError>;

/// Precondition violations rejected before any numeric evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CapacityError {
    /// Constellation has no points
    #[error("constellation is empty")]
    EmptyConstellation,

    /// Constellation order is not a power of two (or is below 2)
    #[error("constellation order {0} is not a power of two >= 2")]
    OrderNotPowerOfTwo(usize),

    /// Preset order exceeds the supported maximum
    #[error("constellation order {order} exceeds the preset maximum {max}")]
    OrderTooLarge { order: usize, max: usize },

    /// Prior and amplitudes are not aligned by index
    #[error("prior has {prior} entries but constellation has {amplitudes} points")]
    LengthMismatch { amplitudes: usize, prior: usize },

    /// Amplitude is NaN or infinite
    #[error("amplitude at index {index} is not finite")]
    NonFiniteAmplitude { index: usize },

    /// Prior entry is negative or not finite
    #[error("prior entry at index {index} is invalid: {value}")]
    InvalidProbability { index: usize, value: f64 },

    /// Prior does not sum to one
    #[error("prior sums to {sum}, expected 1")]
    PriorNotNormalized { sum: f64 },

    /// Noise standard deviation must be positive and finite
    #[error("noise scale must be positive and finite, got {0}")]
    InvalidNoiseScale(f64),

    /// Symbol energy must be non-negative and finite
    #[error("symbol energy must be non-negative and finite, got {0}")]
    InvalidEnergy(f64),

    /// SNR must be finite
    #[error("SNR must be finite, got {0} dB")]
    InvalidSnr(f64),

    /// Monte Carlo estimation needs at least one sample
    #[error("sample count must be at least 1")]
    InvalidSampleCount,
}

impl CapacityError {
    /// Short snake_case code, returned as the error term across the NIF boundary
    pub fn code(&self) -> &'static str {
        match self {
            CapacityError::EmptyConstellation => "empty_constellation",
            CapacityError::OrderNotPowerOfTwo(_) => "order_not_power_of_two",
            CapacityError::OrderTooLarge { .. } => "order_too_large",
            CapacityError::LengthMismatch { .. } => "length_mismatch",
            CapacityError::NonFiniteAmplitude { .. } => "non_finite_amplitude",
            CapacityError::InvalidProbability { .. } => "invalid_probability",
            CapacityError::PriorNotNormalized { .. } => "prior_not_normalized",
            CapacityError::InvalidNoiseScale(_) => "invalid_noise_scale",
            CapacityError::InvalidEnergy(_) => "invalid_energy",
            CapacityError::InvalidSnr(_) => "invalid_snr",
            CapacityError::InvalidSampleCount => "invalid_sample_count",
        }
    }

    /// Check if the error concerns the symbol prior
    pub fn is_prior_error(&self) -> bool {
        matches!(
            self,
            CapacityError::LengthMismatch { .. }
                | CapacityError::InvalidProbability { .. }
                | CapacityError::PriorNotNormalized { .. }
        )
    }
}

/// Reject non-positive or non-finite noise scales
pub(crate) fn check_noise_scale(s: f64) -> CapacityResult<()> {
    if s.is_finite() && s > 0.0 {
        Ok(())
    } else {
        Err(CapacityError::InvalidNoiseScale(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CapacityError::EmptyConstellation.code(), "empty_constellation");
        assert_eq!(CapacityError::InvalidNoiseScale(0.0).code(), "invalid_noise_scale");
        assert_eq!(
            CapacityError::OrderTooLarge { order: 1 << 20, max: 1 << 16 }.code(),
            "order_too_large"
        );
        assert_eq!(
            CapacityError::PriorNotNormalized { sum: 0.9 }.code(),
            "prior_not_normalized"
        );
    }

    #[test]
    fn test_prior_error_classification() {
        assert!(CapacityError::PriorNotNormalized { sum: 2.0 }.is_prior_error());
        assert!(CapacityError::LengthMismatch { amplitudes: 4, prior: 3 }.is_prior_error());
        assert!(!CapacityError::OrderNotPowerOfTwo(3).is_prior_error());
    }

    #[test]
    fn test_check_noise_scale() {
        assert!(check_noise_scale(0.5).is_ok());
        assert_eq!(check_noise_scale(0.0), Err(CapacityError::InvalidNoiseScale(0.0)));
        assert!(check_noise_scale(-1.0).is_err());
        assert!(check_noise_scale(f64::NAN).is_err());
        assert!(check_noise_scale(f64::INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        let err = CapacityError::LengthMismatch { amplitudes: 4, prior: 2 };
        assert_eq!(err.to_string(), "prior has 2 entries but constellation has 4 points");
    }
}
