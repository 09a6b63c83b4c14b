//! Audio level conversions between dBu, RMS and peak-to-peak voltage
//!
//! 0 dBu is the voltage that dissipates 1 mW in 600 Ω, i.e. √0.6 ≈ 0.7746 Vrms.
//! Peak-to-peak conversions assume a sine wave.

use std::f64::consts::SQRT_2;

fn dbu_reference() -> f64 {
    (600.0 * 1e-3_f64).sqrt()
}

pub fn dbu_to_vrms(dbu: f64) -> f64 {
    10f64.powf(dbu / 20.0) * dbu_reference()
}

pub fn vrms_to_dbu(vrms: f64) -> f64 {
    20.0 * (vrms / dbu_reference()).log10()
}

pub fn vrms_to_vpp(vrms: f64) -> f64 {
    vrms * 2.0 * SQRT_2
}

pub fn vpp_to_vrms(vpp: f64) -> f64 {
    vpp / (2.0 * SQRT_2)
}

pub fn dbu_to_vpp(dbu: f64) -> f64 {
    vrms_to_vpp(dbu_to_vrms(dbu))
}

pub fn vpp_to_dbu(vpp: f64) -> f64 {
    vrms_to_dbu(vpp_to_vrms(vpp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_dbu() {
        assert_relative_eq!(dbu_to_vrms(0.0), 0.774_596_669, max_relative = 1e-9);
        assert_relative_eq!(dbu_to_vpp(0.0), 2.190_890_23, max_relative = 1e-8);
    }

    #[test]
    fn test_plus_four_dbu_line_level() {
        assert_relative_eq!(dbu_to_vrms(4.0), 1.227_652_988, max_relative = 1e-8);
    }

    #[test]
    fn test_sine_peak_to_peak() {
        assert_relative_eq!(vrms_to_vpp(1.0), 2.828_427_12, max_relative = 1e-8);
        assert_relative_eq!(vpp_to_vrms(2.0 * SQRT_2), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_conversions_invert() {
        for dbu in [-60.0, -10.0, 0.0, 4.0, 24.0] {
            assert_relative_eq!(vrms_to_dbu(dbu_to_vrms(dbu)), dbu, epsilon = 1e-9);
            assert_relative_eq!(vpp_to_dbu(dbu_to_vpp(dbu)), dbu, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_silence_is_minus_infinity() {
        assert_eq!(vrms_to_dbu(0.0), f64::NEG_INFINITY);
    }
}
