use thiserror::Error;

use crate::types::Month;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IrradianceError {
    /// `-tan(lat)·tan(decl)` fell outside [-1, 1]: polar day or polar night.
    #[error("sunset hour angle undefined on day {day} at tilt {tilt_deg}°: acos argument {argument} outside [-1, 1]")]
    Domain { day: u32, tilt_deg: f64, argument: f64 },

    /// Extraterrestrial irradiance was not positive, so kt = dni / H0 is undefined.
    #[error("clearness index undefined on day {day} at tilt {tilt_deg}°: extraterrestrial irradiance {h0} is not positive")]
    DivisionDomain { day: u32, tilt_deg: f64, h0: f64 },

    #[error("{quantity} is not finite on day {day} at tilt {tilt_deg}°")]
    NonFinite { day: u32, tilt_deg: f64, quantity: &'static str },
}

pub type ModelResult<T> = Result<T, IrradianceError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizeError {
    #[error("evaluation failed for {month} at tilt {tilt_deg}°: {source}")]
    Evaluation {
        month: Month,
        tilt_deg: u32,
        #[source]
        source: IrradianceError,
    },

    #[error("invalid tilt range {min_deg}..={max_deg}: bounds must satisfy min <= max <= 90")]
    InvalidTiltRange { min_deg: u32, max_deg: u32 },

    #[error("no observations to optimize")]
    EmptyDataset,

    #[error("irradiance curve for {month} is not finite at tilt {tilt_deg}°")]
    NonFiniteCurve { month: Month, tilt_deg: u32 },
}

pub type OptimizeResult<T> = Result<T, OptimizeError>;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("row {row}: {field} is not a finite number")]
    NonFiniteField { row: usize, field: &'static str },

    #[error("row {row}: day {day} outside 1..=365")]
    InvalidDay { row: usize, day: i64 },

    #[error("flat data length {len} is not a multiple of 6")]
    FlatLength { len: usize },

    #[error("positional month tagging needs exactly 12 rows, found {found}")]
    PositionalMonthCount { found: usize },

    #[error("unparseable date key {key:?} in response")]
    InvalidDateKey { key: String },

    #[error("response is missing parameter {0}")]
    MissingParameter(&'static str),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type DataResult<T> = Result<T, DataError>;
