use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

/// Box-Muller draw from N(mean, std_dev).
fn gauss(rng: &mut impl Rng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

/// Seasonal swing around the annual mean, in °C. Peaks in July.
fn seasonal(month: u32) -> f64 {
    let phase = (month as f64 - 7.0) / 12.0 * 2.0 * std::f64::consts::PI;
    7.5 * phase.cos()
}

fn main() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    let base_temperature = 8.66;
    let (first_year, last_year) = (1753, 2015);

    let mut records = Vec::new();
    for year in first_year..=last_year {
        // Slow warming trend plus noisier early records.
        let trend = (year - first_year) as f64 / (last_year - first_year) as f64 * 1.4 - 0.7;
        let noise = if year < 1850 { 1.2 } else { 0.5 };
        for month in 1..=12u32 {
            let variance = seasonal(month) + trend + gauss(&mut rng, 0.0, noise);
            let variance = (variance * 1000.0).round() / 1000.0;
            records.push(json!({ "year": year, "month": month, "variance": variance }));
        }
    }

    let count = records.len();
    let document = json!({
        "baseTemperature": base_temperature,
        "monthlyVariance": records,
    });

    let output_path = "sample_temperature.json";
    std::fs::write(output_path, serde_json::to_string_pretty(&document)?)?;

    println!(
        "Wrote {count} observations ({first_year}–{last_year}) to {output_path}"
    );
    Ok(())
}
