use bench_core::BenchError;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

const MAX_SVD_ITERATIONS: usize = 500;

/// Polynomial with coefficients in ascending order: `c0 + c1 x + c2 x² + ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Horner evaluation
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * x + c)
    }

    pub fn eval_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}

/// Least-squares polynomial fit of `y` against `x`.
///
/// Columns of the Vandermonde matrix are scaled to unit norm before the SVD solve
/// so that fits over e.g. 20-30 °C stay well conditioned. Non-finite `x` values,
/// or ones whose powers overflow, are rejected; non-finite `y` values propagate
/// into the coefficients.
pub fn polyfit(x: &[f64], y: &[f64], degree: usize) -> Result<Polynomial, BenchError> {
    BenchError::check_same_length(x.len(), y.len())?;
    if x.is_empty() {
        return Err(BenchError::InsufficientSamples {
            required: 1,
            actual: 0,
        });
    }
    if x.len() <= degree {
        tracing::warn!(
            points = x.len(),
            degree,
            "polynomial fit is under-determined, returning minimum-norm solution"
        );
    }

    if let Some(bad) = x.iter().find(|v| !v.is_finite()) {
        return Err(BenchError::InvalidData(format!(
            "polynomial fit needs finite x values, got {}",
            bad
        )));
    }

    let rows = x.len();
    let cols = degree + 1;
    let vandermonde = DMatrix::from_fn(rows, cols, |i, j| x[i].powi(j as i32));

    let scale: Vec<f64> = (0..cols)
        .map(|j| {
            let norm = vandermonde.column(j).norm();
            if norm > 0.0 { norm } else { 1.0 }
        })
        .collect();
    if scale.iter().any(|s| !s.is_finite()) {
        return Err(BenchError::InvalidData(format!(
            "x values overflow a degree {} fit",
            degree
        )));
    }

    let lhs = DMatrix::from_fn(rows, cols, |i, j| vandermonde[(i, j)] / scale[j]);
    if lhs.iter().any(|v| !v.is_finite()) {
        return Err(BenchError::InvalidData(format!(
            "x values overflow a degree {} fit",
            degree
        )));
    }
    let rhs = DVector::from_column_slice(y);

    let svd = lhs
        .try_svd(true, true, f64::EPSILON, MAX_SVD_ITERATIONS)
        .ok_or_else(|| {
            BenchError::CalculationError("polynomial fit did not converge".to_string())
        })?;
    let solution = svd
        .solve(&rhs, rows as f64 * f64::EPSILON)
        .map_err(|e| BenchError::CalculationError(format!("polynomial fit failed: {}", e)))?;

    let coefficients = solution
        .iter()
        .zip(&scale)
        .map(|(c, s)| c / s)
        .collect();

    Ok(Polynomial::new(coefficients))
}

/// Fits `y` against the logged temperatures and evaluates the fit at every `x`
pub fn temperature_fit(
    x: &[f64],
    y: &[f64],
    temperatures: &[f64],
    degree: usize,
) -> Result<Vec<f64>, BenchError> {
    let polynomial = polyfit(temperatures, y, degree)?;
    Ok(polynomial.eval_all(x))
}

/// Removes the temperature dependence of `y`, referring every reading to
/// `reference_temperature`.
///
/// The drift is modelled as a polynomial of `degree` in temperature; each reading
/// is shifted by `p(T) - p(T_ref)`.
pub fn correct_temperature_coefficient(
    y: &[f64],
    temperatures: &[f64],
    reference_temperature: f64,
    degree: usize,
) -> Result<Vec<f64>, BenchError> {
    let polynomial = polyfit(temperatures, y, degree)?;
    let at_reference = polynomial.eval(reference_temperature);

    Ok(y.iter()
        .zip(temperatures)
        .map(|(&value, &temperature)| value - (polynomial.eval(temperature) - at_reference))
        .collect())
}
