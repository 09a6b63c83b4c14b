//! Platinum resistance thermometers (PT100, PT1000) per IEC 60751
//!
//! Callendar-Van Dusen coefficients for α = 0.00385 Ω/Ω/K, valid from -200 °C
//! to 850 °C.

use bench_core::BenchError;

const A: f64 = 3.9083e-3;
const B: f64 = -5.775e-7;
const C: f64 = -4.183e-12;

pub const MIN_TEMPERATURE: f64 = -200.0;
pub const MAX_TEMPERATURE: f64 = 850.0;

/// Nominal resistance at 0 °C of a PT100
pub const PT100_R0: f64 = 100.0;
pub const PT1000_R0: f64 = 1000.0;

fn ratio_at(t: f64) -> f64 {
    if t >= 0.0 {
        1.0 + A * t + B * t * t
    } else {
        1.0 + A * t + B * t * t + C * (t - 100.0) * t.powi(3)
    }
}

/// Sensor resistance at `celsius` for a sensor with nominal resistance `r0`
pub fn celsius_to_resistance(celsius: f64, r0: f64) -> f64 {
    r0 * ratio_at(celsius)
}

/// Temperature in °C for a measured resistance `r` of a sensor with nominal
/// resistance `r0` (100 Ω for PT100, 1000 Ω for PT1000).
///
/// Resistances outside the -200 °C to 850 °C span clamp to its end points.
pub fn resistance_to_celsius(r: f64, r0: f64) -> Result<f64, BenchError> {
    if !(r0 > 0.0 && r0.is_finite()) {
        return Err(BenchError::InvalidData(format!(
            "nominal resistance must be positive, got {}",
            r0
        )));
    }

    let ratio = (r / r0).clamp(ratio_at(MIN_TEMPERATURE), ratio_at(MAX_TEMPERATURE));

    // Above 0 °C the curve is a plain quadratic
    let quadratic = (-A + (A * A - 4.0 * B * (1.0 - ratio)).sqrt()) / (2.0 * B);
    if ratio >= 1.0 {
        return Ok(quadratic);
    }

    // Below 0 °C the quartic C term kicks in; Newton from the quadratic estimate
    let mut t = quadratic;
    for _ in 0..20 {
        let f = ratio_at(t) - ratio;
        let slope = A + 2.0 * B * t + C * (4.0 * t.powi(3) - 300.0 * t * t);
        let step = f / slope;
        t -= step;
        if step.abs() < 1e-9 {
            break;
        }
    }

    Ok(t)
}

/// Converts a logged resistance column to °C, aligned with `resistances`
pub fn resistances_to_celsius(resistances: &[f64], r0: f64) -> Result<Vec<f64>, BenchError> {
    resistances
        .iter()
        .map(|&r| resistance_to_celsius(r, r0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const PT100_IEC_60751: [(f64, f64); 4] = [
        (80.31, -50.0),
        (100.00, 0.0),
        (138.51, 100.0),
        (175.86, 200.0),
    ];

    const PT1000_IEC_60751: [(f64, f64); 6] = [
        (803.10, -50.0),
        (1000.00, 0.0),
        (1193.97, 50.0),
        (1385.10, 100.0),
        (1758.56, 200.0),
        (2470.92, 400.0),
    ];

    #[test]
    fn test_pt100_reference_points() {
        for (r, t) in PT100_IEC_60751 {
            assert_abs_diff_eq!(resistance_to_celsius(r, PT100_R0).unwrap(), t, epsilon = 0.1);
        }
    }

    #[test]
    fn test_pt1000_reference_points() {
        for (r, t) in PT1000_IEC_60751 {
            assert_abs_diff_eq!(resistance_to_celsius(r, PT1000_R0).unwrap(), t, epsilon = 0.1);
        }
    }

    #[test]
    fn test_inverse_of_forward_curve() {
        for t in [-195.0, -120.0, -40.0, -0.5, 0.0, 21.7, 300.0, 800.0] {
            let r = celsius_to_resistance(t, PT100_R0);
            assert_abs_diff_eq!(resistance_to_celsius(r, PT100_R0).unwrap(), t, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_clamps_outside_range() {
        assert_abs_diff_eq!(resistance_to_celsius(1.0, PT100_R0).unwrap(), MIN_TEMPERATURE, epsilon = 1e-6);
        assert_abs_diff_eq!(resistance_to_celsius(1e6, PT100_R0).unwrap(), MAX_TEMPERATURE, epsilon = 1e-6);
    }

    #[test]
    fn test_converts_resistance_column() {
        let resistances: Vec<f64> = PT100_IEC_60751.iter().map(|(r, _)| *r).collect();
        let temperatures = resistances_to_celsius(&resistances, PT100_R0).unwrap();

        assert_eq!(temperatures.len(), PT100_IEC_60751.len());
        for (value, (_, t)) in temperatures.iter().zip(PT100_IEC_60751) {
            assert_abs_diff_eq!(*value, t, epsilon = 0.1);
        }
        assert!(resistances_to_celsius(&[], PT100_R0).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_bad_nominal_resistance() {
        assert!(resistance_to_celsius(100.0, 0.0).is_err());
        assert!(resistance_to_celsius(100.0, -100.0).is_err());
        assert!(resistances_to_celsius(&[100.0, 110.0], f64::NAN).is_err());
    }
}
