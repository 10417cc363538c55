use std::io::Write;

use crate::error::DataResult;
use crate::optimizer::MonthlyReport;
use crate::types::{MonthlyMean, MonthlyOptimum};

pub fn format_optimum_line(site: &str, optimum: &MonthlyOptimum) -> String {
    format!(
        "The maximum value of tilted solar irradiance on {} for {} occurs at a tilt angle of {}° with irradiance {:.2} kWh/m²",
        site, optimum.month, optimum.best_tilt_deg, optimum.best_irradiance
    )
}

pub fn report_lines(site: &str, report: &MonthlyReport) -> Vec<String> {
    report.iter().map(|o| format_optimum_line(site, o)).collect()
}

/// Writes one row per swept tilt with a column per month, for plotting.
pub fn write_curves_csv<W: Write>(writer: W, report: &MonthlyReport) -> DataResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["tilt".to_string()];
    header.extend(report.iter().map(|o| o.month.to_string()));
    wtr.write_record(&header)?;

    let n_points = report.iter().map(|o| o.curve.len()).min().unwrap_or(0);
    for i in 0..n_points {
        let mut row = Vec::with_capacity(report.len() + 1);
        if let Some(first) = report.optima.first() {
            row.push(first.curve[i].tilt_deg.to_string());
        }
        row.extend(report.iter().map(|o| o.curve[i].irradiance.to_string()));
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_monthly_means_csv<W: Write>(writer: W, means: &[MonthlyMean]) -> DataResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Month", "GHI", "DNI"])?;
    for mean in means {
        wtr.write_record([
            format!("{}-{:02}", mean.year, mean.month.number()),
            mean.ghi.to_string(),
            mean.dni.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
