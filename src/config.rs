use std::path::Path;

use serde::Deserialize;

use crate::error::DataResult;
use crate::optimizer::TiltRange;

/// Solar constant in kW/m², so daily H0 comes out in kWh/m²/day.
pub const SOLAR_CONSTANT: f64 = 1.353;

/// Assumed ground reflectance applied to GHI for the reflected component.
pub const GROUND_REFLECTANCE: f64 = 0.5;

fn default_solar_constant() -> f64 {
    SOLAR_CONSTANT
}

fn default_ground_reflectance() -> f64 {
    GROUND_REFLECTANCE
}

/// Empirical constants of the irradiance model.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_solar_constant")]
    pub solar_constant: f64,
    #[serde(default = "default_ground_reflectance")]
    pub ground_reflectance: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            solar_constant: SOLAR_CONSTANT,
            ground_reflectance: GROUND_REFLECTANCE,
        }
    }
}

impl ModelConfig {
    pub fn with_solar_constant(mut self, solar_constant: f64) -> Self {
        self.solar_constant = solar_constant;
        self
    }

    pub fn with_ground_reflectance(mut self, ground_reflectance: f64) -> Self {
        self.ground_reflectance = ground_reflectance;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub data_file: String,
}

impl SiteConfig {
    pub fn new(name: &str, data_file: &str) -> Self {
        Self {
            name: name.to_string(),
            data_file: data_file.to_string(),
        }
    }
}

/// The Romanian reservoirs surveyed for floating PV.
pub fn default_sites() -> Vec<SiteConfig> {
    vec![
        SiteConfig::new("LakeBicaz", "LaculBicaz.csv"),
        SiteConfig::new("LakeCerna", "LaculCerna.csv"),
        SiteConfig::new("LakeCincis", "LaculCincis.csv"),
        SiteConfig::new("LakeGuraApelor", "LaculGuraApelor.csv"),
        SiteConfig::new("LakePaltinu", "LaculPaltinu.csv"),
        SiteConfig::new("LakeSiriu", "LaculSiriu.csv"),
        SiteConfig::new("LakeStancaCostesti", "LaculStancaCostesti.csv"),
        SiteConfig::new("LakeSurduc", "LaculSurduc.csv"),
        SiteConfig::new("LakeVidraru", "LaculVidraru.csv"),
    ]
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub tilt_range: TiltRange,
    #[serde(default = "default_sites")]
    pub sites: Vec<SiteConfig>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            tilt_range: TiltRange::default(),
            sites: default_sites(),
        }
    }
}

impl RunConfig {
    pub fn load(path: impl AsRef<Path>) -> DataResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> DataResult<Self> {
        let config = serde_json::from_str(content)?;
        Ok(config)
    }

    pub fn site(&self, name: &str) -> Option<&SiteConfig> {
        self.sites.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = RunConfig::from_json("{}").unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.sites.len(), 9);
    }

    #[test]
    fn partial_model_section_keeps_other_defaults() {
        let config = RunConfig::from_json(
            r#"{ "model": { "ground_reflectance": 0.2 }, "tilt_range": { "min_deg": 10, "max_deg": 60 } }"#,
        )
        .unwrap();
        assert_eq!(config.model.solar_constant, SOLAR_CONSTANT);
        assert_eq!(config.model.ground_reflectance, 0.2);
        assert_eq!(config.tilt_range, TiltRange::new(10, 60));
    }

    #[test]
    fn site_lookup_by_name() {
        let config = RunConfig::default();
        assert_eq!(
            config.site("LakeVidraru").map(|s| s.data_file.as_str()),
            Some("LaculVidraru.csv")
        );
        assert!(config.site("LakeNowhere").is_none());
    }
}
