use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use solar_tilt::nasa::{self, DailyRecord};
use solar_tilt::{
    calculate_monthly_irradiance, read_observations_path, report, tag_months_by_position,
    ModelConfig, Observation, RunConfig, TiltRange,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSON run configuration (model constants, tilt range, site catalogue)
    #[arg(long, global = true, env = "SOLAR_TILT_CONFIG")]
    config: Option<PathBuf>,

    /// Solar constant in kW/m²
    #[arg(long, global = true)]
    solar_constant: Option<f64>,
    /// Ground reflectance applied to GHI
    #[arg(long, global = true)]
    ground_reflectance: Option<f64>,
    /// Smallest tilt to try, degrees
    #[arg(long, global = true)]
    min_tilt: Option<u32>,
    /// Largest tilt to try, degrees
    #[arg(long, global = true)]
    max_tilt: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the best tilt per month for a site's CSV data
    Optimize {
        /// CSV with Days,Longitude,Latitude,Tilt,DNI,GHI columns
        #[arg(long)]
        data: Option<PathBuf>,
        /// Site name used in the report and to look up its data file
        #[arg(long, default_value = "site")]
        site: String,
        /// Label the twelve rows January..December by position
        #[arg(long)]
        positional: bool,
        /// Write the per-month irradiance curves to this CSV
        #[arg(long)]
        curves: Option<PathBuf>,
    },
    /// Aggregate NASA POWER daily data into monthly means
    Nasa {
        /// Saved POWER daily point response (JSON)
        #[arg(long)]
        response: Option<PathBuf>,
        /// Download this year's data instead (needs the `fetch` feature)
        #[arg(long, conflicts_with = "response")]
        year: Option<i32>,
        #[arg(long, default_value_t = 45.5, allow_hyphen_values = true)]
        latitude: f64,
        #[arg(long, default_value_t = 25.5, allow_hyphen_values = true)]
        longitude: f64,
        /// Write the monthly means to this CSV
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also run the tilt optimizer on the monthly means
        #[arg(long)]
        optimize: bool,
    },
}

impl Args {
    fn run_config(&self) -> Result<RunConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if let Some(v) = self.solar_constant {
            config.model = config.model.with_solar_constant(v);
        }
        if let Some(v) = self.ground_reflectance {
            config.model = config.model.with_ground_reflectance(v);
        }
        config.tilt_range = TiltRange::new(
            self.min_tilt.unwrap_or(config.tilt_range.min_deg),
            self.max_tilt.unwrap_or(config.tilt_range.max_deg),
        );
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.run_config()?;

    match &args.command {
        Command::Optimize { data, site, positional, curves } => {
            let path = match data {
                Some(p) => p.clone(),
                None => config
                    .site(site)
                    .map(|s| PathBuf::from(&s.data_file))
                    .ok_or_else(|| format!("no --data given and no site named {site:?} in the catalogue"))?,
            };
            let mut observations = read_observations_path(&path)?;
            if *positional {
                observations = tag_months_by_position(observations)?;
            }
            optimize_and_print(site, &observations, config.tilt_range, &config.model, curves.as_deref())?;
        }
        Command::Nasa { response, year, latitude, longitude, out, optimize } => {
            let records = match (response, year) {
                (Some(path), _) => {
                    let parsed = nasa::parse_response(BufReader::new(File::open(path)?))?;
                    nasa::daily_records(&parsed)?
                }
                (None, Some(year)) => fetch_records(*latitude, *longitude, *year)?,
                (None, None) => return Err("either --response or --year is required".into()),
            };
            let means = nasa::monthly_means(&records);
            for mean in &means {
                println!(
                    "{}-{:02}  GHI {:.2}  DNI {:.2}  ({} days)",
                    mean.year,
                    mean.month.number(),
                    mean.ghi,
                    mean.dni,
                    mean.days
                );
            }
            if let Some(out) = out {
                report::write_monthly_means_csv(File::create(out)?, &means)?;
                info!(path = %out.display(), "wrote monthly means");
            }
            if *optimize {
                let observations = nasa::representative_observations(&means, *latitude, *longitude);
                let site = format!("({latitude}, {longitude})");
                optimize_and_print(&site, &observations, config.tilt_range, &config.model, None)?;
            }
        }
    }
    Ok(())
}

fn optimize_and_print(
    site: &str,
    observations: &[Observation],
    range: TiltRange,
    model: &ModelConfig,
    curves: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let monthly = calculate_monthly_irradiance(observations, range, model)?;
    for line in report::report_lines(site, &monthly) {
        println!("{line}");
    }
    if let Some(path) = curves {
        report::write_curves_csv(File::create(path)?, &monthly)?;
        info!(path = %path.display(), "wrote irradiance curves");
    }
    Ok(())
}

#[cfg(feature = "fetch")]
fn fetch_records(latitude: f64, longitude: f64, year: i32) -> Result<Vec<DailyRecord>, Box<dyn Error>> {
    let request = nasa::NasaRequest::for_year(latitude, longitude, year).ok_or("invalid year")?;
    info!(year, latitude, longitude, "fetching NASA POWER daily data");
    Ok(nasa::fetch_daily(&request)?)
}

#[cfg(not(feature = "fetch"))]
fn fetch_records(_latitude: f64, _longitude: f64, _year: i32) -> Result<Vec<DailyRecord>, Box<dyn Error>> {
    Err("built without the `fetch` feature; pass --response with a saved POWER response".into())
}
