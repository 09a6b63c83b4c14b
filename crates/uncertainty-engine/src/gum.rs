use bench_core::BenchError;
use rayon::prelude::*;
use statrs::statistics::Statistics;

/// Coverage factor for roughly 95% confidence under a normal distribution
pub const DEFAULT_COVERAGE_FACTOR: f64 = 2.0;

/// Type A standard uncertainty: the standard error of the mean.
///
/// Sample standard deviation (N-1 divisor) divided by √N. A single reading has
/// no defined sample standard deviation, so anything below two samples is an
/// error rather than a silent zero.
pub fn type_a_uncertainty(samples: &[f64]) -> Result<f64, BenchError> {
    if samples.len() < 2 {
        return Err(BenchError::InsufficientSamples {
            required: 2,
            actual: samples.len(),
        });
    }

    let std_dev = samples.std_dev();
    Ok(std_dev / (samples.len() as f64).sqrt())
}

/// Converts an expanded Type B uncertainty stated at coverage factor `k` into
/// a standard uncertainty.
pub fn type_b_uncertainty(expanded_b: f64, k: f64) -> Result<f64, BenchError> {
    BenchError::check_coverage_factor(k)?;
    Ok(expanded_b / k)
}

/// Element-wise [`type_b_uncertainty`] over a per-sample sequence
pub fn type_b_uncertainties(expanded_b: &[f64], k: f64) -> Result<Vec<f64>, BenchError> {
    BenchError::check_coverage_factor(k)?;
    Ok(expanded_b.par_iter().map(|b| b / k).collect())
}

/// Collapses a per-sample Type B sequence into one standard uncertainty: the
/// RMS of the standard values.
pub fn combined_type_b_uncertainty(expanded_b: &[f64], k: f64) -> Result<f64, BenchError> {
    let standard = type_b_uncertainties(expanded_b, k)?;
    root_mean_square(&standard)
}

/// Expanded uncertainty `k * sqrt(a² + b²)`.
///
/// Independent contributions add in quadrature, not linearly.
pub fn expanded_uncertainty(type_a: f64, type_b: f64, k: f64) -> Result<f64, BenchError> {
    BenchError::check_coverage_factor(k)?;
    Ok(combine(type_a, type_b, k))
}

/// [`expanded_uncertainty`] with the scalar Type A broadcast against every
/// element of `type_b`.
pub fn expanded_uncertainties(
    type_a: f64,
    type_b: &[f64],
    k: f64,
) -> Result<Vec<f64>, BenchError> {
    BenchError::check_coverage_factor(k)?;
    Ok(type_b.par_iter().map(|&b| combine(type_a, b, k)).collect())
}

/// Single expanded figure for a whole run: Type A combined with the RMS of a
/// standard Type B sequence.
pub fn total_uncertainty(type_a: f64, type_b: &[f64], k: f64) -> Result<f64, BenchError> {
    BenchError::check_coverage_factor(k)?;
    let type_b = root_mean_square(type_b)?;
    Ok(combine(type_a, type_b, k))
}

/// Root-sum-of-squares of independent standard uncertainties
pub fn propagate_uncertainties(contributions: &[f64]) -> f64 {
    contributions.iter().map(|u| u.powi(2)).sum::<f64>().sqrt()
}

fn combine(type_a: f64, type_b: f64, k: f64) -> f64 {
    k * (type_a.powi(2) + type_b.powi(2)).sqrt()
}

fn root_mean_square(values: &[f64]) -> Result<f64, BenchError> {
    if values.is_empty() {
        return Err(BenchError::InsufficientSamples {
            required: 1,
            actual: 0,
        });
    }

    let mean_square = values.iter().map(|v| v.powi(2)).sum::<f64>() / values.len() as f64;
    Ok(mean_square.sqrt())
}
