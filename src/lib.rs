pub mod angles;
pub mod config;
pub mod error;
pub mod irradiance;
pub mod loader;
pub mod nasa;
pub mod optimizer;
pub mod report;
pub mod types;

pub use angles::{
    beam_tilt_factor, deg_to_rad, eccentricity_correction, extraterrestrial_irradiance,
    ground_view_factor, rad_to_deg, sky_view_factor, solar_declination, sunset_hour_angle,
    sunset_hour_cosine, DAYS_PER_YEAR, EARTH_AXIAL_TILT,
};

pub use config::{default_sites, ModelConfig, RunConfig, SiteConfig, GROUND_REFLECTANCE, SOLAR_CONSTANT};

pub use error::{DataError, IrradianceError, OptimizeError};

pub use irradiance::{compute_irradiance, diffuse_fraction, evaluate_at_tilt, evaluate_observation};

pub use loader::{
    month_of_day, observations_from_flat, read_observations, read_observations_path,
    tag_months_by_position,
};

pub use optimizer::{calculate_monthly_irradiance, first_maximum, MonthlyReport, TiltRange};

pub use types::{CurvePoint, IrradianceResult, Month, MonthlyMean, MonthlyOptimum, Observation};
