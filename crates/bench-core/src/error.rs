use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BenchError {
    #[error("Insufficient samples: need at least {required}, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },

    #[error("Invalid coverage factor: {0} (must be greater than zero)")]
    InvalidCoverageFactor(f64),

    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),

    #[error("Source error: {0}")]
    SourceError(String),
}

impl BenchError {
    /// Fails unless `k` is strictly positive. NaN is rejected as well.
    pub fn check_coverage_factor(k: f64) -> Result<(), BenchError> {
        if k > 0.0 {
            Ok(())
        } else {
            Err(BenchError::InvalidCoverageFactor(k))
        }
    }

    pub fn check_same_length(expected: usize, actual: usize) -> Result<(), BenchError> {
        if expected == actual {
            Ok(())
        } else {
            Err(BenchError::LengthMismatch { expected, actual })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_factor_check() {
        assert!(BenchError::check_coverage_factor(2.0).is_ok());
        assert!(BenchError::check_coverage_factor(f64::INFINITY).is_ok());
        assert_eq!(
            BenchError::check_coverage_factor(0.0),
            Err(BenchError::InvalidCoverageFactor(0.0))
        );
        assert!(BenchError::check_coverage_factor(-1.0).is_err());
        assert!(BenchError::check_coverage_factor(f64::NAN).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = BenchError::InsufficientSamples { required: 2, actual: 1 };
        assert_eq!(err.to_string(), "Insufficient samples: need at least 2, got 1");

        let err = BenchError::LengthMismatch { expected: 3, actual: 4 };
        assert!(err.to_string().contains("expected 3"));
    }
}
