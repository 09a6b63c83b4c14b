use anyhow::{Context, Result};
use bench_core::{Reading, ReadingColumns};
use bench_utils::correct_temperature_coefficient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uncertainty_engine::UncertaintyBudget;

use crate::config::ReportConfig;

/// One plotted point: the reading with its `± U` bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPoint {
    pub timestamp: DateTime<Utc>,
    pub voltage: f64,
    pub temperature: f64,
    pub expanded_uncertainty: f64,
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UncertaintyReport {
    pub readings: usize,
    pub coverage_factor: f64,
    pub temperature_corrected_to: Option<f64>,
    pub mean_voltage: f64,
    pub type_a_uncertainty: f64,
    pub type_b_uncertainty: f64,
    /// Share of the combined variance from scatter between readings (0-1)
    pub type_a_fraction: f64,
    pub total_expanded_uncertainty: f64,
    pub points: Vec<ReportPoint>,
}

impl UncertaintyReport {
    pub fn build(readings: &[Reading], config: &ReportConfig) -> Result<Self> {
        let temperatures = readings.temperatures();
        let mut voltages = readings.voltages();

        if let Some(reference) = config.reference_temperature {
            voltages = correct_temperature_coefficient(
                &voltages,
                &temperatures,
                reference,
                config.tempco_degree,
            )
            .context("temperature correction failed")?;
            tracing::info!(reference, degree = config.tempco_degree, "corrected readings for temperature");
        }

        let spec = config.accuracy_spec()?;
        let budget = UncertaintyBudget::evaluate(&voltages, &spec, config.coverage_factor)
            .context("uncertainty evaluation failed")?;
        let bands = budget.bands(&voltages)?;

        let points = readings
            .iter()
            .enumerate()
            .map(|(i, reading)| ReportPoint {
                timestamp: reading.timestamp,
                voltage: voltages[i],
                temperature: reading.temperature,
                expanded_uncertainty: budget.expanded[i],
                lower: bands.lower[i],
                upper: bands.upper[i],
            })
            .collect();

        Ok(Self {
            readings: readings.len(),
            coverage_factor: budget.coverage_factor,
            temperature_corrected_to: config.reference_temperature,
            mean_voltage: budget.mean,
            type_a_uncertainty: budget.type_a,
            type_b_uncertainty: budget.type_b_combined,
            type_a_fraction: budget.type_a_fraction(),
            total_expanded_uncertainty: budget.total,
            points,
        })
    }
}
