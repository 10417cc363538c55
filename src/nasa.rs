//! NASA POWER daily point data: parsing, monthly averaging and conversion to
//! one representative observation per month.
//!
//! The `RE` community reports both parameters as daily totals in kWh/m²/day.

use std::collections::BTreeMap;
use std::io::Read;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use tracing::info;

use crate::error::{DataError, DataResult};
use crate::types::{Month, MonthlyMean, Observation};

pub const POWER_DAILY_POINT_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";
pub const GHI_PARAMETER: &str = "ALLSKY_SFC_SW_DWN";
pub const DNI_PARAMETER: &str = "ALLSKY_SFC_SW_DNI";

/// Marker POWER uses for days without data.
pub const FILL_VALUE: f64 = -999.0;

/// Klein's recommended average day for each month, as day-of-year.
pub const REPRESENTATIVE_DAYS: [u32; 12] = [17, 47, 75, 105, 135, 162, 198, 228, 258, 288, 318, 344];

#[derive(Debug, Clone, PartialEq)]
pub struct NasaRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl NasaRequest {
    pub fn for_year(latitude: f64, longitude: f64, year: i32) -> Option<Self> {
        Some(Self {
            latitude,
            longitude,
            start: NaiveDate::from_ymd_opt(year, 1, 1)?,
            end: NaiveDate::from_ymd_opt(year, 12, 31)?,
        })
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("parameters", format!("{GHI_PARAMETER},{DNI_PARAMETER}")),
            ("community", "RE".to_string()),
            ("longitude", self.longitude.to_string()),
            ("latitude", self.latitude.to_string()),
            ("format", "JSON".to_string()),
            ("start", self.start.format("%Y%m%d").to_string()),
            ("end", self.end.format("%Y%m%d").to_string()),
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PowerResponse {
    pub properties: PowerProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PowerProperties {
    pub parameter: BTreeMap<String, BTreeMap<String, f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub ghi: Option<f64>,
    pub dni: Option<f64>,
}

fn valid(value: f64) -> Option<f64> {
    (value.is_finite() && value > FILL_VALUE).then_some(value)
}

pub fn parse_response<R: Read>(reader: R) -> DataResult<PowerResponse> {
    Ok(serde_json::from_reader(reader)?)
}

/// Daily records keyed by the GHI series, in date order. DNI is looked up
/// per date and may be absent.
pub fn daily_records(response: &PowerResponse) -> DataResult<Vec<DailyRecord>> {
    let params = &response.properties.parameter;
    let ghi = params
        .get(GHI_PARAMETER)
        .ok_or(DataError::MissingParameter(GHI_PARAMETER))?;
    let dni = params
        .get(DNI_PARAMETER)
        .ok_or(DataError::MissingParameter(DNI_PARAMETER))?;

    ghi.iter()
        .map(|(key, &value)| -> DataResult<DailyRecord> {
            let date = NaiveDate::parse_from_str(key, "%Y%m%d")
                .map_err(|_| DataError::InvalidDateKey { key: key.clone() })?;
            Ok(DailyRecord {
                date,
                ghi: valid(value),
                dni: dni.get(key).copied().and_then(valid),
            })
        })
        .collect()
}

#[derive(Default)]
struct Accumulator {
    ghi_sum: f64,
    ghi_days: usize,
    dni_sum: f64,
    dni_days: usize,
}

/// Mean GHI and DNI per calendar month. Months lacking either series are
/// dropped.
pub fn monthly_means(records: &[DailyRecord]) -> Vec<MonthlyMean> {
    let mut buckets: BTreeMap<(i32, u32), Accumulator> = BTreeMap::new();
    for record in records {
        let acc = buckets
            .entry((record.date.year(), record.date.month()))
            .or_default();
        if let Some(ghi) = record.ghi {
            acc.ghi_sum += ghi;
            acc.ghi_days += 1;
        }
        if let Some(dni) = record.dni {
            acc.dni_sum += dni;
            acc.dni_days += 1;
        }
    }

    let means: Vec<MonthlyMean> = buckets
        .into_iter()
        .filter(|(_, acc)| acc.ghi_days > 0 && acc.dni_days > 0)
        .filter_map(|((year, month), acc)| {
            Some(MonthlyMean {
                year,
                month: Month::from_number(month)?,
                ghi: acc.ghi_sum / acc.ghi_days as f64,
                dni: acc.dni_sum / acc.dni_days as f64,
                days: acc.ghi_days,
            })
        })
        .collect();
    info!(months = means.len(), "aggregated monthly means");
    means
}

/// One horizontal observation per monthly mean, placed on the month's
/// representative day.
pub fn representative_observations(means: &[MonthlyMean], latitude: f64, longitude: f64) -> Vec<Observation> {
    means
        .iter()
        .map(|mean| Observation {
            month: mean.month,
            day: REPRESENTATIVE_DAYS[mean.month.index()],
            longitude,
            latitude,
            tilt: 0.0,
            dni: mean.dni,
            ghi: mean.ghi,
        })
        .collect()
}

/// Downloads the daily series for `request` with a single blocking GET.
#[cfg(feature = "fetch")]
pub fn fetch_daily(request: &NasaRequest) -> DataResult<Vec<DailyRecord>> {
    let response: PowerResponse = reqwest::blocking::Client::new()
        .get(POWER_DAILY_POINT_URL)
        .query(&request.query_pairs())
        .send()?
        .error_for_status()?
        .json()?;
    daily_records(&response)
}
