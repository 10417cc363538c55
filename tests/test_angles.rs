use solar_tilt::angles::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── Conversions ──

#[test]
fn test_deg_rad_known_values() {
    assert_approx!(deg_to_rad(180.0), std::f64::consts::PI, 1e-15);
    assert_approx!(deg_to_rad(90.0), std::f64::consts::FRAC_PI_2, 1e-15);
    assert_approx!(rad_to_deg(std::f64::consts::PI), 180.0, 1e-12);
    assert_eq!(rad_to_deg(std::f64::consts::FRAC_PI_2), 90.0);
}

#[test]
fn test_deg_to_rad_is_bit_exact() {
    // Values where θ·2π/360 and θ·π/180 round differently.
    assert_eq!(deg_to_rad(3.0), 0.05235987755982988);
    assert_eq!(deg_to_rad(23.45), 0.40927970959267024);
    assert_eq!(deg_to_rad(25.5), 0.445058959258554);
}

#[test]
fn test_deg_rad_roundtrip() {
    for deg in [-180.0, -45.5, 0.0, 23.45, 89.9, 360.0] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-12);
    }
}

// ── SolarDeclination ──

#[test]
fn test_solar_declination_solstices_equinoxes() {
    assert_approx!(solar_declination(172), 23.45, 0.5);
    assert_approx!(solar_declination(355), -23.45, 0.5);
    assert_approx!(solar_declination(80), 0.0, 1.0);
    assert_approx!(solar_declination(264), 0.0, 1.0);
}

#[test]
fn test_solar_declination_zero_on_day_81() {
    // 284 + 81 = 365, a full turn.
    assert_approx!(solar_declination(81), 0.0, 1e-12);
}

#[test]
fn test_solar_declination_bounded_all_days() {
    for n in 1..=365 {
        let decl = solar_declination(n);
        assert!(decl >= -EARTH_AXIAL_TILT && decl <= EARTH_AXIAL_TILT, "Day {}: {}", n, decl);
    }
}

#[test]
fn test_solar_declination_reference_march() {
    assert_approx!(solar_declination(75), -2.417734805142361, 1e-12);
}

// ── SunsetHourAngle ──

#[test]
fn test_sunset_hour_angle_equator_is_90() {
    for day in [1, 81, 172, 355] {
        let decl = solar_declination(day);
        assert_eq!(sunset_hour_angle(0.0, decl), Some(90.0), "day {}", day);
    }
}

#[test]
fn test_sunset_hour_angle_equinox_any_latitude() {
    for lat in [-60.0, -20.0, 0.0, 45.5, 70.0] {
        let hs = sunset_hour_angle(lat, 0.0).unwrap();
        assert_approx!(hs, 90.0, 1e-12);
    }
}

#[test]
fn test_sunset_hour_angle_longer_days_in_summer() {
    let summer = sunset_hour_angle(45.5, solar_declination(172)).unwrap();
    let winter = sunset_hour_angle(45.5, solar_declination(355)).unwrap();
    assert!(summer > 90.0 && winter < 90.0);
    assert_approx!(summer + winter, 180.0, 0.1);
}

#[test]
fn test_sunset_hour_angle_polar_is_none() {
    let summer = solar_declination(172);
    let winter = solar_declination(355);
    assert!(sunset_hour_cosine(89.9, summer) < -1.0);
    assert!(sunset_hour_cosine(89.9, winter) > 1.0);
    assert_eq!(sunset_hour_angle(89.9, summer), None);
    assert_eq!(sunset_hour_angle(89.9, winter), None);
}

// ── Extraterrestrial irradiance ──

#[test]
fn test_eccentricity_correction_range() {
    assert_approx!(eccentricity_correction(365), 1.033, 1e-12);
    for day in 1..=365 {
        let e = eccentricity_correction(day);
        assert!(e >= 0.967 - 1e-12 && e <= 1.033 + 1e-12, "day {}: {}", day, e);
    }
}

#[test]
fn test_extraterrestrial_reference_march() {
    let decl = solar_declination(75);
    let hs = sunset_hour_angle(45.5, decl).unwrap();
    assert_approx!(hs, 87.53747579284746, 1e-9);
    let h0 = extraterrestrial_irradiance(75, 45.5, decl, hs, 1.353);
    assert_approx!(h0, 6.817986231348375, 1e-9);
}

#[test]
fn test_extraterrestrial_scales_with_solar_constant() {
    let decl = solar_declination(172);
    let hs = sunset_hour_angle(45.5, decl).unwrap();
    let a = extraterrestrial_irradiance(172, 45.5, decl, hs, 1.353);
    let b = extraterrestrial_irradiance(172, 45.5, decl, hs, 2.0 * 1.353);
    assert_approx!(b, 2.0 * a, 1e-12);
    assert_eq!(extraterrestrial_irradiance(172, 45.5, decl, hs, 0.0), 0.0);
}

// ── Transposition factors ──

#[test]
fn test_view_factors_partition() {
    for tilt in 0..=90 {
        let t = tilt as f64;
        assert_approx!(sky_view_factor(t) + ground_view_factor(t), 1.0, 1e-15);
    }
}

#[test]
fn test_view_factors_horizontal_and_vertical() {
    assert_eq!(sky_view_factor(0.0), 1.0);
    assert_eq!(ground_view_factor(0.0), 0.0);
    assert_approx!(sky_view_factor(90.0), 0.5, 1e-15);
    assert_approx!(ground_view_factor(90.0), 0.5, 1e-15);
}

#[test]
fn test_beam_tilt_factor_is_one_when_flat() {
    for lat in [0.0, 20.0, 45.5, 60.0] {
        for day in [1, 80, 172, 264, 355] {
            let decl = solar_declination(day);
            assert_approx!(beam_tilt_factor(lat, decl, 25.5, 0.0), 1.0, 1e-12);
        }
    }
}

#[test]
fn test_beam_tilt_factor_reference_march() {
    let decl = solar_declination(75);
    assert_approx!(beam_tilt_factor(45.5, decl, 25.5, 30.0), 1.4248192140013862, 1e-9);
}
