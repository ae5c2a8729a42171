//! Small dB helpers

/// Convert dB to an amplitude ratio
#[inline]
pub fn db_to_amplitude(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert a power ratio to dB
#[inline]
pub fn power_to_db(linear: f64) -> f64 {
    10.0 * linear.log10()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_conversion() {
        assert!((db_to_amplitude(0.0) - 1.0).abs() < 1e-10);
        assert!((db_to_amplitude(20.0) - 10.0).abs() < 1e-10);
        assert!((db_to_amplitude(-20.0) - 0.1).abs() < 1e-10);
        assert!((power_to_db(100.0) - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_amplitude_squared_is_power() {
        for &db in &[-30.0, -3.0, 0.0, 6.0, 17.5] {
            let a = db_to_amplitude(db);
            assert!((power_to_db(a * a) - db).abs() < 1e-10);
        }
    }
}
