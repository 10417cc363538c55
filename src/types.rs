use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// 1 = January.
    pub fn from_number(number: u32) -> Option<Month> {
        Month::ALL.get(number.checked_sub(1)? as usize).copied()
    }

    pub fn number(self) -> u32 {
        self.index() as u32 + 1
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One day of measured irradiance at a fixed site.
///
/// `dni` and `ghi` share whatever unit the data source uses (daily totals in
/// kWh/m² for the NASA POWER data); the model never converts them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub month: Month,
    pub day: u32,
    pub longitude: f64,
    pub latitude: f64,
    pub tilt: f64,
    pub dni: f64,
    pub ghi: f64,
}

impl Observation {
    pub fn at_tilt(&self, tilt: f64) -> Observation {
        Observation { tilt, ..*self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrradianceResult {
    pub declination: f64,
    pub sunset_hour_angle: f64,
    pub extraterrestrial_irradiance: f64,
    pub clearness_index: f64,
    pub diffuse_horizontal: f64,
    pub direct_horizontal: f64,
    pub reflected_horizontal: f64,
    pub beam_tilt_factor: f64,
    pub sky_view_factor: f64,
    pub ground_view_factor: f64,
    pub tilted_irradiance: f64,
}

impl IrradianceResult {
    pub fn exceeds_clear_sky(&self) -> bool {
        self.clearness_index > 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub tilt_deg: u32,
    pub irradiance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyOptimum {
    pub month: Month,
    pub best_tilt_deg: u32,
    pub best_irradiance: f64,
    pub curve: Vec<CurvePoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyMean {
    pub year: i32,
    pub month: Month,
    pub ghi: f64,
    pub dni: f64,
    pub days: usize,
}
