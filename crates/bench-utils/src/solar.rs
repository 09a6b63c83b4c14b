//! Clear-sky solar irradiance on a horizontal surface, for annotating how much
//! sun the bench was getting during a run.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// W/m²
pub const SOLAR_CONSTANT: f64 = 1361.0;

/// Solar declination in radians (Cooper's approximation)
fn declination(day_of_year: u32) -> f64 {
    (23.45 * (360.0 * (284.0 + day_of_year as f64) / 365.0).to_radians().sin()).to_radians()
}

/// Approximate irradiance in W/m² at `dt` (local clock time of `dt`'s zone)
/// and `latitude` in degrees. Zero while the sun is below the horizon.
pub fn solar_irradiance<Tz: TimeZone>(dt: &DateTime<Tz>, latitude: f64) -> f64 {
    let delta = declination(dt.ordinal());
    let phi = latitude.to_radians();

    let hours = dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;
    let hour_angle = (15.0 * (hours - 12.0)).to_radians();

    let cos_zenith = phi.sin() * delta.sin() + phi.cos() * delta.cos() * hour_angle.cos();
    SOLAR_CONSTANT * cos_zenith.max(0.0)
}

/// Solar-noon irradiance in W/m² for `latitude` on `day_of_year` (1-366).
///
/// Not clamped: a negative value means the sun never rises that day.
pub fn max_irradiance(latitude: f64, day_of_year: u32) -> f64 {
    let delta = declination(day_of_year);
    let phi = latitude.to_radians();
    SOLAR_CONSTANT * (phi.sin() * delta.sin() + phi.cos() * delta.cos())
}
