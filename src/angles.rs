use std::f64::consts::PI;

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DAYS_PER_YEAR: f64 = 365.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (2.0 * PI) / 360.0
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 360.0 / (2.0 * PI)
}

pub fn solar_declination(day: u32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 * (284.0 + day as f64) / DAYS_PER_YEAR).sin()
}

pub fn sunset_hour_cosine(latitude: f64, declination: f64) -> f64 {
    -deg_to_rad(latitude).tan() * deg_to_rad(declination).tan()
}

/// `None` during polar day or polar night.
pub fn sunset_hour_angle(latitude: f64, declination: f64) -> Option<f64> {
    let cos_hs = sunset_hour_cosine(latitude, declination);
    if (-1.0..=1.0).contains(&cos_hs) {
        Some(rad_to_deg(cos_hs.acos()))
    } else {
        None
    }
}

pub fn eccentricity_correction(day: u32) -> f64 {
    1.0 + 0.033 * (deg_to_rad(360.0 * day as f64) / DAYS_PER_YEAR).cos()
}

/// The second bracket term multiplies by the sunset hour angle in radians,
/// the trigonometric terms take it in degrees.
pub fn extraterrestrial_irradiance(
    day: u32,
    latitude: f64,
    declination: f64,
    sunset_hour_angle: f64,
    solar_constant: f64,
) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let hs_rad = deg_to_rad(sunset_hour_angle);
    (solar_constant / PI * 24.0)
        * eccentricity_correction(day)
        * (lat_rad.cos() * dec_rad.cos() * hs_rad.sin() + hs_rad * lat_rad.sin() * dec_rad.sin())
}

/// `longitude` enters as the hour-angle term of both numerator and
/// denominator, so the ratio is exactly 1 at zero tilt.
pub fn beam_tilt_factor(latitude: f64, declination: f64, longitude: f64, tilt: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let tilted_rad = deg_to_rad(latitude - tilt);
    let dec_rad = deg_to_rad(declination);
    let lon_rad = deg_to_rad(longitude);
    let tilted = tilted_rad.sin() * dec_rad.sin() + tilted_rad.cos() * dec_rad.cos() * lon_rad.cos();
    let horizontal = lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * lon_rad.cos() * dec_rad.cos();
    tilted / horizontal
}

pub fn sky_view_factor(tilt: f64) -> f64 {
    (1.0 + deg_to_rad(tilt).cos()) / 2.0
}

pub fn ground_view_factor(tilt: f64) -> f64 {
    (1.0 - deg_to_rad(tilt).cos()) / 2.0
}
