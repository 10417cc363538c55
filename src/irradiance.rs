//! Decomposition of measured horizontal irradiance and transposition onto a
//! tilted plane (isotropic sky).

use tracing::warn;

use crate::angles;
use crate::config::ModelConfig;
use crate::error::{IrradianceError, ModelResult};
use crate::types::{IrradianceResult, Observation};

pub fn diffuse_fraction(sunset_hour_angle: f64, clearness_index: f64) -> f64 {
    let excess = sunset_hour_angle - 90.0;
    (0.775 + 0.00653 * excess)
        - (0.505 + 0.00455 * excess)
            * angles::deg_to_rad(115.0 * clearness_index - 103.0).cos()
}

fn finite(obs: &Observation, quantity: &'static str, value: f64) -> ModelResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IrradianceError::NonFinite {
            day: obs.day,
            tilt_deg: obs.tilt,
            quantity,
        })
    }
}

/// Evaluates the model for one observation at its own tilt.
pub fn evaluate_observation(obs: &Observation, config: &ModelConfig) -> ModelResult<IrradianceResult> {
    let dni = finite(obs, "dni", obs.dni)?;
    let ghi = finite(obs, "ghi", obs.ghi)?;
    let declination = angles::solar_declination(obs.day);

    let sunset_hour_angle = angles::sunset_hour_angle(obs.latitude, declination).ok_or_else(|| {
        IrradianceError::Domain {
            day: obs.day,
            tilt_deg: obs.tilt,
            argument: angles::sunset_hour_cosine(obs.latitude, declination),
        }
    })?;

    let h0 = angles::extraterrestrial_irradiance(
        obs.day,
        obs.latitude,
        declination,
        sunset_hour_angle,
        config.solar_constant,
    );
    // `!(h0 > 0.0)` also rejects NaN.
    if !(h0 > 0.0) {
        return Err(IrradianceError::DivisionDomain {
            day: obs.day,
            tilt_deg: obs.tilt,
            h0,
        });
    }

    let kt = dni / h0;
    if kt > 1.0 {
        warn!(day = obs.day, kt, "clearness index above 1");
    }

    let hd = ghi * diffuse_fraction(sunset_hour_angle, kt);
    let hb = ghi - hd;
    let hr = ghi * config.ground_reflectance;

    let rb = angles::beam_tilt_factor(obs.latitude, declination, obs.longitude, obs.tilt);
    let rd = angles::sky_view_factor(obs.tilt);
    let rr = angles::ground_view_factor(obs.tilt);
    let ht = finite(obs, "tilted irradiance", hr * rr + hb * rb + hd * rd)?;

    Ok(IrradianceResult {
        declination,
        sunset_hour_angle,
        extraterrestrial_irradiance: h0,
        clearness_index: kt,
        diffuse_horizontal: hd,
        direct_horizontal: hb,
        reflected_horizontal: hr,
        beam_tilt_factor: rb,
        sky_view_factor: rd,
        ground_view_factor: rr,
        tilted_irradiance: ht,
    })
}

pub fn evaluate_at_tilt(
    obs: &Observation,
    tilt: f64,
    config: &ModelConfig,
) -> ModelResult<IrradianceResult> {
    evaluate_observation(&obs.at_tilt(tilt), config)
}

/// Stops at the first observation the model cannot evaluate.
pub fn compute_irradiance(observations: &[Observation], config: &ModelConfig) -> ModelResult<Vec<f64>> {
    observations
        .iter()
        .map(|obs| evaluate_observation(obs, config).map(|r| r.tilted_irradiance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diffuse_fraction_at_equinox_geometry() {
        // h_s = 90 drops the hour-angle terms.
        let expected = 0.775 - 0.505 * angles::deg_to_rad(115.0 * 0.5 - 103.0).cos();
        assert!((diffuse_fraction(90.0, 0.5) - expected).abs() < 1e-15);
    }
}
