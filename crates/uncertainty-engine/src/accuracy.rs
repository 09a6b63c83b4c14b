use bench_core::BenchError;
use serde::{Deserialize, Serialize};

/// Manufacturer accuracy specification in the "±(ppm of reading + ppm of range)" style
///
/// The resulting figure is an expanded uncertainty at whatever coverage factor the
/// datasheet states (usually k=2); divide by that `k` to get the Type B standard
/// uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AccuracyTerms")]
pub struct AccuracySpec {
    /// Parts per million of the reading
    reading_ppm: f64,

    /// Parts per million of the selected range
    range_ppm: f64,

    /// Full-scale value of the selected range, in the reading's units
    range: f64,
}

/// Unchecked wire form; deserialization goes through [`AccuracySpec::ppm`]
#[derive(Deserialize)]
struct AccuracyTerms {
    reading_ppm: f64,
    range_ppm: f64,
    range: f64,
}

impl TryFrom<AccuracyTerms> for AccuracySpec {
    type Error = BenchError;

    fn try_from(terms: AccuracyTerms) -> Result<Self, Self::Error> {
        Self::ppm(terms.reading_ppm, terms.range_ppm, terms.range)
    }
}

impl AccuracySpec {
    pub fn ppm(reading_ppm: f64, range_ppm: f64, range: f64) -> Result<Self, BenchError> {
        if !(reading_ppm >= 0.0 && reading_ppm.is_finite()) {
            return Err(BenchError::InvalidData(format!(
                "ppm of reading must be a non-negative number, got {}",
                reading_ppm
            )));
        }
        if !(range_ppm >= 0.0 && range_ppm.is_finite()) {
            return Err(BenchError::InvalidData(format!(
                "ppm of range must be a non-negative number, got {}",
                range_ppm
            )));
        }
        if !(range > 0.0 && range.is_finite()) {
            return Err(BenchError::InvalidData(format!(
                "range must be positive, got {}",
                range
            )));
        }

        Ok(Self {
            reading_ppm,
            range_ppm,
            range,
        })
    }

    /// Datasheets often quote "% of reading + % of range"
    pub fn percent(reading_percent: f64, range_percent: f64, range: f64) -> Result<Self, BenchError> {
        Self::ppm(reading_percent * 1e4, range_percent * 1e4, range)
    }

    pub fn reading_ppm(&self) -> f64 {
        self.reading_ppm
    }

    pub fn range_ppm(&self) -> f64 {
        self.range_ppm
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    /// Expanded uncertainty bound for a single reading
    pub fn expanded_uncertainty(&self, reading: f64) -> f64 {
        reading.abs() * self.reading_ppm * 1e-6 + self.range * self.range_ppm * 1e-6
    }

    /// Per-sample expanded uncertainty bounds, aligned with `readings`
    pub fn expanded_uncertainties(&self, readings: &[f64]) -> Vec<f64> {
        readings
            .iter()
            .map(|&reading| self.expanded_uncertainty(reading))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reading_and_range_terms() {
        let spec = AccuracySpec::ppm(35.0, 5.0, 10.0).unwrap();

        // 5 V * 35 ppm + 10 V * 5 ppm = 175 µV + 50 µV
        assert_relative_eq!(spec.expanded_uncertainty(5.0), 225e-6, max_relative = 1e-12);
        // sign of the reading does not matter
        assert_relative_eq!(spec.expanded_uncertainty(-5.0), 225e-6, max_relative = 1e-12);
        // range term remains at zero input
        assert_relative_eq!(spec.expanded_uncertainty(0.0), 50e-6, max_relative = 1e-12);
    }

    #[test]
    fn test_percent_matches_ppm() {
        let from_percent = AccuracySpec::percent(0.0035, 0.0005, 10.0).unwrap();

        assert_relative_eq!(from_percent.reading_ppm(), 35.0, max_relative = 1e-12);
        assert_relative_eq!(from_percent.range_ppm(), 5.0, max_relative = 1e-12);
    }

    #[test]
    fn test_sequence_is_aligned() {
        let spec = AccuracySpec::ppm(10.0, 0.0, 1.0).unwrap();
        let bounds = spec.expanded_uncertainties(&[1.0, 2.0, 4.0]);

        assert_eq!(bounds.len(), 3);
        assert_relative_eq!(bounds[0], 10e-6, max_relative = 1e-12);
        assert_relative_eq!(bounds[1], 20e-6, max_relative = 1e-12);
        assert_relative_eq!(bounds[2], 40e-6, max_relative = 1e-12);
    }

    #[test]
    fn test_rejects_bad_terms() {
        assert!(AccuracySpec::ppm(-1.0, 5.0, 10.0).is_err());
        assert!(AccuracySpec::ppm(35.0, f64::NAN, 10.0).is_err());
        assert!(AccuracySpec::ppm(35.0, 5.0, 0.0).is_err());
        assert!(AccuracySpec::ppm(35.0, 5.0, -10.0).is_err());
    }

    #[test]
    fn test_deserialize_validates_terms() {
        let spec: AccuracySpec =
            serde_json::from_str(r#"{"reading_ppm": 35.0, "range_ppm": 5.0, "range": 10.0}"#).unwrap();
        assert_eq!(spec, AccuracySpec::ppm(35.0, 5.0, 10.0).unwrap());

        let negative = serde_json::from_str::<AccuracySpec>(
            r#"{"reading_ppm": -35.0, "range_ppm": 5.0, "range": 10.0}"#,
        );
        assert!(negative.is_err());

        let zero_range = serde_json::from_str::<AccuracySpec>(
            r#"{"reading_ppm": 35.0, "range_ppm": 5.0, "range": 0.0}"#,
        );
        assert!(zero_range.is_err());
    }
}
