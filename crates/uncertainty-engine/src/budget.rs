use bench_core::BenchError;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::accuracy::AccuracySpec;
use crate::gum;

/// Evaluated uncertainty figures for one run of readings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UncertaintyBudget {
    pub coverage_factor: f64,
    pub sample_count: usize,
    pub mean: f64,

    /// Standard error of the mean
    pub type_a: f64,

    /// Per-sample Type B standard uncertainty
    pub type_b: Vec<f64>,

    /// RMS of `type_b`
    pub type_b_combined: f64,

    /// Per-sample expanded uncertainty, aligned with the readings
    pub expanded: Vec<f64>,

    /// Expanded uncertainty of the run as a whole
    pub total: f64,
}

impl UncertaintyBudget {
    /// Evaluates the budget for `samples` measured against `spec`.
    ///
    /// The accuracy bounds are taken to be stated at the same coverage factor `k`
    /// used for the result.
    pub fn evaluate(samples: &[f64], spec: &AccuracySpec, k: f64) -> Result<Self, BenchError> {
        BenchError::check_coverage_factor(k)?;

        let non_finite = samples.iter().filter(|s| !s.is_finite()).count();
        if non_finite > 0 {
            tracing::warn!(
                non_finite,
                total = samples.len(),
                "non-finite samples will propagate into the budget"
            );
        }

        let type_a = gum::type_a_uncertainty(samples)?;
        let expanded_b = spec.expanded_uncertainties(samples);
        let type_b = gum::type_b_uncertainties(&expanded_b, k)?;
        let type_b_combined = gum::combined_type_b_uncertainty(&expanded_b, k)?;
        let expanded = gum::expanded_uncertainties(type_a, &type_b, k)?;
        let total = gum::total_uncertainty(type_a, &type_b, k)?;
        let mean = samples.mean();

        tracing::debug!(
            samples = samples.len(),
            mean,
            type_a,
            type_b_combined,
            total,
            k,
            "evaluated uncertainty budget"
        );

        Ok(Self {
            coverage_factor: k,
            sample_count: samples.len(),
            mean,
            type_a,
            type_b,
            type_b_combined,
            expanded,
            total,
        })
    }

    /// Share of the combined variance coming from the statistical scatter (0-1)
    pub fn type_a_fraction(&self) -> f64 {
        let variance = self.type_a.powi(2) + self.type_b_combined.powi(2);
        if variance == 0.0 {
            return 0.0;
        }
        self.type_a.powi(2) / variance
    }

    pub fn bands(&self, samples: &[f64]) -> Result<UncertaintyBands, BenchError> {
        UncertaintyBands::new(samples, &self.expanded)
    }
}

/// Upper and lower bounds `sample ± U` for plotting against time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UncertaintyBands {
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

impl UncertaintyBands {
    pub fn new(samples: &[f64], expanded: &[f64]) -> Result<Self, BenchError> {
        BenchError::check_same_length(samples.len(), expanded.len())?;

        let upper = samples.iter().zip(expanded).map(|(s, u)| s + u).collect();
        let lower = samples.iter().zip(expanded).map(|(s, u)| s - u).collect();

        Ok(Self { upper, lower })
    }

    pub fn len(&self) -> usize {
        self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }
}
