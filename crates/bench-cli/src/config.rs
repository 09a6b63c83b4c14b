use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;
use uncertainty_engine::{AccuracySpec, DEFAULT_COVERAGE_FACTOR};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    // Uncertainty
    pub coverage_factor: f64,              // 2.0 (~95%)

    // Meter accuracy, ±(ppm of reading + ppm of range)
    pub reading_ppm: f64,                  // 35
    pub range_ppm: f64,                    // 5
    pub range_volts: f64,                  // 10 V range

    // Temperature correction, skipped when no reference is set
    pub reference_temperature: Option<f64>,
    pub tempco_degree: usize,              // 2
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            coverage_factor: DEFAULT_COVERAGE_FACTOR,
            reading_ppm: 35.0,
            range_ppm: 5.0,
            range_volts: 10.0,
            reference_temperature: None,
            tempco_degree: 2,
        }
    }
}

impl ReportConfig {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            coverage_factor: env::var("COVERAGE_FACTOR")
                .unwrap_or_else(|_| DEFAULT_COVERAGE_FACTOR.to_string())
                .parse()?,

            reading_ppm: env::var("READING_PPM")
                .unwrap_or_else(|_| "35.0".to_string())
                .parse()?,
            range_ppm: env::var("RANGE_PPM")
                .unwrap_or_else(|_| "5.0".to_string())
                .parse()?,
            range_volts: env::var("RANGE_VOLTS")
                .unwrap_or_else(|_| "10.0".to_string())
                .parse()?,

            reference_temperature: match env::var("REFERENCE_TEMPERATURE") {
                Ok(value) => Some(value.parse()?),
                Err(_) => None,
            },
            tempco_degree: env::var("TEMPCO_DEGREE")
                .unwrap_or_else(|_| "2".to_string())
                .parse()?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.coverage_factor > 0.0) {
            bail!("COVERAGE_FACTOR must be greater than 0, got {}", self.coverage_factor);
        }
        if let Some(reference) = self.reference_temperature {
            if !reference.is_finite() {
                bail!("REFERENCE_TEMPERATURE must be a finite number");
            }
        }
        if self.tempco_degree > 5 {
            bail!("TEMPCO_DEGREE must be at most 5, got {}", self.tempco_degree);
        }
        self.accuracy_spec()?;
        Ok(())
    }

    pub fn accuracy_spec(&self) -> Result<AccuracySpec> {
        Ok(AccuracySpec::ppm(self.reading_ppm, self.range_ppm, self.range_volts)?)
    }
}
