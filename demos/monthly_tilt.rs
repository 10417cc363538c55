use solar_tilt::nasa::REPRESENTATIVE_DAYS;
use solar_tilt::report::format_optimum_line;
use solar_tilt::{calculate_monthly_irradiance, evaluate_at_tilt, ModelConfig, Month, Observation, TiltRange};

fn main() {
    let latitude = 45.5;
    let longitude = 25.5;

    // Monthly mean daily totals, kWh/m²/day.
    let ghi = [1.6, 2.5, 3.6, 4.8, 5.8, 6.3, 6.4, 5.7, 4.2, 2.8, 1.7, 1.3];
    let dni = [2.0, 2.8, 3.3, 4.0, 4.8, 5.3, 5.8, 5.6, 4.4, 3.2, 1.9, 1.5];

    let observations: Vec<Observation> = Month::ALL
        .iter()
        .map(|&month| Observation {
            month,
            day: REPRESENTATIVE_DAYS[month.index()],
            longitude,
            latitude,
            tilt: 0.0,
            dni: dni[month.index()],
            ghi: ghi[month.index()],
        })
        .collect();

    let config = ModelConfig::default();

    println!("=== Tilted Irradiance Example ===");
    println!("Location: ({:.1}°N, {:.1}°E)", latitude, longitude);
    println!();

    let march = &observations[Month::March.index()];
    match evaluate_at_tilt(march, 30.0, &config) {
        Ok(r) => {
            println!("--- March, day {} at 30° ---", march.day);
            println!("Declination: {:.2}°", r.declination);
            println!("Sunset hour angle: {:.2}°", r.sunset_hour_angle);
            println!("H0: {:.3} kWh/m²", r.extraterrestrial_irradiance);
            println!("Clearness index: {:.3}", r.clearness_index);
            println!(
                "Diffuse / direct / reflected: {:.3} / {:.3} / {:.3}",
                r.diffuse_horizontal, r.direct_horizontal, r.reflected_horizontal
            );
            println!("Tilted irradiance: {:.3} kWh/m²", r.tilted_irradiance);
            println!();
        }
        Err(e) => eprintln!("March evaluation failed: {e}"),
    }

    println!("--- Best tilt per month ---");
    match calculate_monthly_irradiance(&observations, TiltRange::default(), &config) {
        Ok(report) => {
            for optimum in report.iter() {
                println!("{}", format_optimum_line("the example site", optimum));
            }
        }
        Err(e) => eprintln!("Optimization failed: {e}"),
    }
}
