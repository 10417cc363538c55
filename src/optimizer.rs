//! Brute-force search over integer tilt angles for the tilt that maximizes
//! tilted irradiance in each calendar month.

use serde::Deserialize;
use tracing::debug;

use crate::config::ModelConfig;
use crate::error::{OptimizeError, OptimizeResult};
use crate::irradiance::evaluate_at_tilt;
use crate::types::{CurvePoint, Month, MonthlyOptimum, Observation};

fn default_min_deg() -> u32 {
    0
}

fn default_max_deg() -> u32 {
    89
}

/// Inclusive range of integer tilt angles to sweep, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TiltRange {
    #[serde(default = "default_min_deg")]
    pub min_deg: u32,
    #[serde(default = "default_max_deg")]
    pub max_deg: u32,
}

impl Default for TiltRange {
    fn default() -> Self {
        Self {
            min_deg: default_min_deg(),
            max_deg: default_max_deg(),
        }
    }
}

impl TiltRange {
    pub fn new(min_deg: u32, max_deg: u32) -> Self {
        Self { min_deg, max_deg }
    }

    pub fn validate(&self) -> OptimizeResult<()> {
        if self.min_deg > self.max_deg || self.max_deg > 90 {
            return Err(OptimizeError::InvalidTiltRange {
                min_deg: self.min_deg,
                max_deg: self.max_deg,
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        (self.max_deg + 1).saturating_sub(self.min_deg) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> {
        self.min_deg..=self.max_deg
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    /// One entry per month present in the data, January first.
    pub optima: Vec<MonthlyOptimum>,
}

impl MonthlyReport {
    pub fn get(&self, month: Month) -> Option<&MonthlyOptimum> {
        self.optima.iter().find(|o| o.month == month)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthlyOptimum> {
        self.optima.iter()
    }

    pub fn len(&self) -> usize {
        self.optima.len()
    }

    pub fn is_empty(&self) -> bool {
        self.optima.is_empty()
    }
}

/// Tilt and value of the first maximum on a curve ordered by ascending tilt.
/// `None` for an empty curve or one holding a non-finite value.
pub fn first_maximum(curve: &[CurvePoint]) -> Option<CurvePoint> {
    let mut best: Option<CurvePoint> = None;
    for point in curve {
        if !point.irradiance.is_finite() {
            return None;
        }
        if best.map_or(true, |b| point.irradiance > b.irradiance) {
            best = Some(*point);
        }
    }
    best
}

fn group_by_month(observations: &[Observation]) -> Vec<(Month, Vec<&Observation>)> {
    let mut groups: [Vec<&Observation>; 12] = Default::default();
    for obs in observations {
        groups[obs.month.index()].push(obs);
    }
    Month::ALL
        .into_iter()
        .zip(groups)
        .filter(|(_, group)| !group.is_empty())
        .collect()
}

/// Sweeps every tilt in `range` and records, for each month present in
/// `observations`, the irradiance curve and the tilt at its first maximum.
///
/// Observations are grouped by their `month` tag. A month with several
/// observations is scored by their mean tilted irradiance. Any model failure
/// aborts the whole sweep.
pub fn calculate_monthly_irradiance(
    observations: &[Observation],
    range: TiltRange,
    config: &ModelConfig,
) -> OptimizeResult<MonthlyReport> {
    range.validate()?;
    if observations.is_empty() {
        return Err(OptimizeError::EmptyDataset);
    }

    let groups = group_by_month(observations);
    let mut curves: Vec<Vec<CurvePoint>> = groups.iter().map(|_| Vec::with_capacity(range.len())).collect();

    for tilt in range.iter() {
        for ((month, group), curve) in groups.iter().zip(curves.iter_mut()) {
            let mut total = 0.0;
            for obs in group {
                let result = evaluate_at_tilt(obs, tilt as f64, config).map_err(|source| {
                    OptimizeError::Evaluation {
                        month: *month,
                        tilt_deg: tilt,
                        source,
                    }
                })?;
                total += result.tilted_irradiance;
            }
            let irradiance = total / group.len() as f64;
            if !irradiance.is_finite() {
                return Err(OptimizeError::NonFiniteCurve {
                    month: *month,
                    tilt_deg: tilt,
                });
            }
            curve.push(CurvePoint {
                tilt_deg: tilt,
                irradiance,
            });
        }
        debug!(tilt, "sweep step complete");
    }

    let mut optima = Vec::with_capacity(groups.len());
    for ((month, _), curve) in groups.into_iter().zip(curves) {
        let best = first_maximum(&curve).ok_or(OptimizeError::NonFiniteCurve {
            month,
            tilt_deg: range.min_deg,
        })?;
        debug!(
            month = month.name(),
            best_tilt_deg = best.tilt_deg,
            best_irradiance = best.irradiance,
            "monthly optimum"
        );
        optima.push(MonthlyOptimum {
            month,
            best_tilt_deg: best.tilt_deg,
            best_irradiance: best.irradiance,
            curve,
        });
    }

    Ok(MonthlyReport { optima })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(tilt_deg: u32, irradiance: f64) -> CurvePoint {
        CurvePoint { tilt_deg, irradiance }
    }

    #[test]
    fn first_maximum_prefers_smallest_tilt_on_ties() {
        let curve = [point(0, 1.0), point(1, 3.0), point(2, 3.0), point(3, 2.0)];
        assert_eq!(first_maximum(&curve), Some(point(1, 3.0)));
    }

    #[test]
    fn first_maximum_of_empty_curve() {
        assert_eq!(first_maximum(&[]), None);
    }

    #[test]
    fn non_finite_point_spoils_the_curve() {
        let curve = [point(0, 1.0), point(1, 2.0), point(2, f64::NAN), point(3, 1.0)];
        assert_eq!(first_maximum(&curve), None);
        let curve = [point(0, f64::INFINITY), point(1, 2.0)];
        assert_eq!(first_maximum(&curve), None);
    }

    #[test]
    fn tilt_range_bounds() {
        assert_eq!(TiltRange::default().len(), 90);
        assert_eq!(TiltRange::new(10, 10).len(), 1);
        assert!(TiltRange::new(0, 90).validate().is_ok());
        assert!(TiltRange::new(0, 91).validate().is_err());
        assert!(TiltRange::new(40, 30).validate().is_err());
    }
}
