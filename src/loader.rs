use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use tracing::info;

use crate::error::{DataError, DataResult};
use crate::types::{Month, Observation};

/// Non-leap reference year for mapping day-of-year to a calendar month.
const REFERENCE_YEAR: i32 = 2023;

const FIELDS_PER_OBSERVATION: usize = 6;

pub fn month_of_day(day: u32) -> Option<Month> {
    if !(1..=365).contains(&day) {
        return None;
    }
    let date = NaiveDate::from_yo_opt(REFERENCE_YEAR, day)?;
    Month::from_number(date.month())
}

fn checked_day(row: usize, day: i64) -> DataResult<(u32, Month)> {
    u32::try_from(day)
        .ok()
        .and_then(|d| month_of_day(d).map(|m| (d, m)))
        .ok_or(DataError::InvalidDay { row, day })
}

fn checked_finite(row: usize, field: &'static str, value: f64) -> DataResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DataError::NonFiniteField { row, field })
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Days")]
    days: i64,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Tilt")]
    tilt: f64,
    #[serde(rename = "DNI")]
    dni: f64,
    #[serde(rename = "GHI")]
    ghi: f64,
}

/// Reads observations from CSV with a `Days,Longitude,Latitude,Tilt,DNI,GHI`
/// header. Other columns are ignored. Each row is tagged with the month its
/// day falls in.
pub fn read_observations<R: Read>(reader: R) -> DataResult<Vec<Observation>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut observations = Vec::new();
    for (row, record) in rdr.deserialize::<CsvRow>().enumerate() {
        let record = record?;
        let (day, month) = checked_day(row, record.days)?;
        observations.push(Observation {
            month,
            day,
            longitude: checked_finite(row, "Longitude", record.longitude)?,
            latitude: checked_finite(row, "Latitude", record.latitude)?,
            tilt: checked_finite(row, "Tilt", record.tilt)?,
            dni: checked_finite(row, "DNI", record.dni)?,
            ghi: checked_finite(row, "GHI", record.ghi)?,
        });
    }
    info!(rows = observations.len(), "loaded observations");
    Ok(observations)
}

pub fn read_observations_path(path: impl AsRef<Path>) -> DataResult<Vec<Observation>> {
    let file = File::open(path)?;
    read_observations(file)
}

/// Builds observations from `[day, longitude, latitude, tilt, dni, ghi, ...]`.
pub fn observations_from_flat(data: &[f64]) -> DataResult<Vec<Observation>> {
    if data.len() % FIELDS_PER_OBSERVATION != 0 {
        return Err(DataError::FlatLength { len: data.len() });
    }
    data.chunks_exact(FIELDS_PER_OBSERVATION)
        .enumerate()
        .map(|(row, chunk)| -> DataResult<Observation> {
            let raw_day = chunk[0];
            if raw_day.fract() != 0.0 {
                return Err(DataError::InvalidDay { row, day: raw_day as i64 });
            }
            let (day, month) = checked_day(row, raw_day as i64)?;
            Ok(Observation {
                month,
                day,
                longitude: checked_finite(row, "Longitude", chunk[1])?,
                latitude: checked_finite(row, "Latitude", chunk[2])?,
                tilt: checked_finite(row, "Tilt", chunk[3])?,
                dni: checked_finite(row, "DNI", chunk[4])?,
                ghi: checked_finite(row, "GHI", chunk[5])?,
            })
        })
        .collect()
}

/// Re-tags twelve rows as January through December by position, for data
/// whose day column does not identify the month.
pub fn tag_months_by_position(observations: Vec<Observation>) -> DataResult<Vec<Observation>> {
    if observations.len() != Month::ALL.len() {
        return Err(DataError::PositionalMonthCount {
            found: observations.len(),
        });
    }
    Ok(observations
        .into_iter()
        .zip(Month::ALL)
        .map(|(obs, month)| Observation { month, ..obs })
        .collect())
}
